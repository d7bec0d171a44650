// src/simulation/config.rs

/// Tunable constants for one simulation run.
///
/// The defaults are the authoritative configuration; every value here is a
/// policy knob, not a law. The clamps and floors described below are
/// documented behavior that keeps degenerate parameter combinations
/// numerically sane.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Number of days to simulate.
    pub horizon_days: usize,
    /// Safety margin added on top of `initial_price * sensitivity` when
    /// deriving the effective baseline demand. Guards against configurations
    /// where the linear demand curve would be non-positive at every price
    /// the optimizer can reach.
    pub demand_margin: u32,
    /// Flat demand boost applied on weekend days before sampling.
    pub weekend_boost: u32,
    /// Standard deviation of the daily demand draw.
    pub demand_std_dev: f64,
    /// Chance per day that the competitor runs a flash sale instead of the
    /// standard undercut.
    pub flash_sale_probability: f64,
    /// Uniform range of the standard undercut factor applied to the
    /// previous day's realized price.
    pub undercut_range: (f64, f64),
    /// Uniform range of the flash-sale discount factor.
    pub flash_sale_range: (f64, f64),
    /// Minimum margin over cost any candidate price is clamped up to.
    pub min_margin: f64,
    /// Exponent of the `(competitor / candidate)^k` demand-loss penalty
    /// applied when we price above the competitor.
    pub penalty_exponent: f64,
    /// Markup over cost used as the safe fallback price when no candidate
    /// turns a profit.
    pub fallback_markup: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            horizon_days: 30,
            demand_margin: 80,
            weekend_boost: 100,
            demand_std_dev: 20.0,
            flash_sale_probability: 0.15,
            undercut_range: (0.85, 0.95),
            flash_sale_range: (0.70, 0.75),
            min_margin: 2.0,
            penalty_exponent: 5.0,
            fallback_markup: 5.0,
        }
    }
}
