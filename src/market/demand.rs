// src/market/demand.rs

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::model::params::SimulationParams;
use crate::simulation::config::EngineConfig;

/// Generates the stochastic daily demand for one run.
///
/// The effective baseline is fixed once at construction:
/// `max(base_demand, floor(initial_price * sensitivity) + demand_margin)`.
/// Without the floor, a high price/sensitivity combination could push the
/// linear demand curve below zero for every price the optimizer considers,
/// turning the whole run into a no-op.
#[derive(Debug, Clone)]
pub struct DemandModel {
    baseline: u32,
    weekday: Normal<f64>,
    weekend: Normal<f64>,
}

impl DemandModel {
    /// Panics if `config.demand_std_dev` is negative or non-finite; a bad
    /// configuration must surface here, before the daily loop starts.
    pub fn new(params: &SimulationParams, config: &EngineConfig) -> Self {
        // Computed in f64 and saturated so extreme price/sensitivity
        // combinations cap the baseline instead of overflowing u32.
        let curve_floor = (params.initial_price * params.sensitivity).floor()
            + config.demand_margin as f64;
        let curve_floor = curve_floor.min(u32::MAX as f64) as u32;
        let baseline = params.base_demand.max(curve_floor);

        let weekday_mean = baseline as f64;
        let weekend_mean = weekday_mean + config.weekend_boost as f64;

        Self {
            baseline,
            weekday: Normal::new(weekday_mean, config.demand_std_dev)
                .expect("demand std dev must be finite and non-negative"),
            weekend: Normal::new(weekend_mean, config.demand_std_dev)
                .expect("demand std dev must be finite and non-negative"),
        }
    }

    /// Effective baseline demand after the degenerate-configuration floor.
    pub fn baseline(&self) -> u32 {
        self.baseline
    }

    /// Days 6 and 7 of each 7-day cycle count as the weekend.
    pub fn is_weekend(day: usize) -> bool {
        matches!(day % 7, 6 | 0)
    }

    /// Samples one day's base demand: a Gaussian around the (weekend
    /// adjusted) baseline, floored to a non-negative integer.
    pub fn daily_demand<R: Rng>(&self, day: usize, rng: &mut R) -> u32 {
        let normal = if Self::is_weekend(day) {
            &self.weekend
        } else {
            &self.weekday
        };
        let draw: f64 = normal.sample(rng);

        if draw < 0.0 {
            0
        } else {
            draw.floor() as u32
        }
    }
}
