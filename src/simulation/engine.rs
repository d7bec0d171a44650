// src/simulation/engine.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::market::competitor::{Competitor, CompetitorQuote};
use crate::market::demand::DemandModel;
use crate::model::params::{SimulationParams, ValidationError};
use crate::model::record::{round2, DayRecord, Insight, SimulationOutcome, Summary};
use crate::simulation::config::EngineConfig;
use crate::strategy::optimizer::PriceOptimizer;

/// Runs one full simulation with the default configuration and a
/// thread-local random source. This is the entry point a serving layer
/// calls once per request; every call owns its own state.
pub fn simulate(params: SimulationParams) -> Result<SimulationOutcome, ValidationError> {
    let mut sim = PricingSimulation::new(params, EngineConfig::default(), rand::thread_rng())?;
    Ok(sim.run())
}

/// One pricing run: a fixed horizon of daily steps, each sampling demand,
/// quoting the competitor, searching candidate prices, and applying the
/// winner to the run's inventory and profit.
///
/// The random source is injected so tests (and any caller that cares about
/// reproducibility) can seed it; see [`PricingSimulation::from_seed`].
pub struct PricingSimulation<R: Rng> {
    config: EngineConfig,
    rng: R,

    // The actors
    demand: DemandModel,
    competitor: Competitor,
    optimizer: PriceOptimizer,

    // Run state, owned exclusively by this instance
    inventory: u32,
    previous_price: f64,
    cumulative_profit: f64,
    total_units_sold: u32,
    current_day: usize,
    pub history: Vec<DayRecord>,
}

impl PricingSimulation<StdRng> {
    /// Deterministic construction over a seeded `StdRng`.
    pub fn from_seed(
        params: SimulationParams,
        config: EngineConfig,
        seed: u64,
    ) -> Result<Self, ValidationError> {
        Self::new(params, config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PricingSimulation<R> {
    /// Validates the parameters and sets up the run. The effective demand
    /// baseline is fixed here, once, not per day.
    pub fn new(
        params: SimulationParams,
        config: EngineConfig,
        rng: R,
    ) -> Result<Self, ValidationError> {
        params.validate()?;

        let demand = DemandModel::new(&params, &config);
        let competitor = Competitor::new(params.cost_price, &config);
        let optimizer = PriceOptimizer::new(&params, &config);
        let horizon = config.horizon_days;

        Ok(Self {
            config,
            rng,
            demand,
            competitor,
            optimizer,
            inventory: params.total_inventory,
            // Day 1's competitor anchors off the list price.
            previous_price: params.initial_price,
            cumulative_profit: 0.0,
            total_units_sold: 0,
            current_day: 1,
            history: Vec::with_capacity(horizon),
        })
    }

    /// Runs every remaining day and returns the full outcome.
    pub fn run(&mut self) -> SimulationOutcome {
        while self.current_day <= self.config.horizon_days {
            self.step();
        }
        SimulationOutcome {
            history: self.history.clone(),
            summary: self.summary(),
        }
    }

    fn step(&mut self) {
        let day = self.current_day;

        // Stockout short-circuit: no randomness is consumed, so the RNG
        // stream stays aligned whether or not stock ran out earlier.
        if self.inventory == 0 {
            self.history
                .push(DayRecord::stockout(day, self.cumulative_profit));
            self.current_day += 1;
            return;
        }

        let daily_base_demand = self.demand.daily_demand(day, &mut self.rng);
        let quote = self.competitor.quote(self.previous_price, &mut self.rng);
        let decision = self
            .optimizer
            .choose_price(daily_base_demand, quote.price, self.inventory);

        // The optimizer clamps units to the remaining inventory.
        self.inventory -= decision.units;
        self.cumulative_profit += decision.profit;
        self.total_units_sold += decision.units;

        // Only a strictly positive realized price may become tomorrow's
        // competitor anchor.
        if decision.price > 0.0 {
            self.previous_price = decision.price;
        }

        let market_share = if daily_base_demand > 0 {
            decision.units as f64 / daily_base_demand as f64 * 100.0
        } else {
            0.0
        };

        self.history.push(DayRecord {
            day,
            user_price: round2(decision.price),
            competitor_price: round2(quote.price),
            market_share: round2(market_share),
            items_sold: decision.units,
            stock_level: self.inventory,
            cumulative_profit: round2(self.cumulative_profit),
            insight: Self::classify(decision.price, &quote),
        });
        self.current_day += 1;
    }

    fn classify(price: f64, quote: &CompetitorQuote) -> Insight {
        if quote.flash_sale {
            Insight::FlashSaleResponse
        } else if (price - quote.price).abs() < 0.01 {
            Insight::MatchedCompetitor
        } else if price < quote.price {
            Insight::UndercutCompetitor
        } else {
            Insight::PremiumHold
        }
    }

    /// Aggregates the history into the run summary. Averages skip stockout
    /// days (their recorded prices are zero).
    pub fn summary(&self) -> Summary {
        Summary {
            total_profit: round2(self.cumulative_profit),
            total_units_sold: self.total_units_sold,
            avg_user_price: round2(mean_of_positive(
                self.history.iter().map(|r| r.user_price),
            )),
            avg_competitor_price: round2(mean_of_positive(
                self.history.iter().map(|r| r.competitor_price),
            )),
        }
    }
}

/// Mean over the strictly positive values, 0.0 if there are none.
fn mean_of_positive(values: impl Iterator<Item = f64>) -> f64 {
    let active: Vec<f64> = values.filter(|v| *v > 0.0).collect();
    if active.is_empty() {
        0.0
    } else {
        active.iter().sum::<f64>() / active.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> SimulationParams {
        SimulationParams {
            initial_price: 50.0,
            cost_price: 30.0,
            total_inventory: 1000,
            base_demand: 100,
            sensitivity: 2.0,
        }
    }

    fn run_seeded(params: SimulationParams, seed: u64) -> SimulationOutcome {
        PricingSimulation::from_seed(params, EngineConfig::default(), seed)
            .unwrap()
            .run()
    }

    #[test]
    fn test_history_length_matches_default_horizon() {
        let outcome = run_seeded(params(), 1);
        assert_eq!(outcome.history.len(), 30);
    }

    #[test]
    fn test_history_length_matches_custom_horizon() {
        let mut config = EngineConfig::default();
        config.horizon_days = 7;
        let outcome = PricingSimulation::from_seed(params(), config, 1)
            .unwrap()
            .run();
        assert_eq!(outcome.history.len(), 7);
    }

    #[test]
    fn test_stock_levels_stay_in_range_and_never_increase() {
        let outcome = run_seeded(params(), 2);
        let mut previous = 1000u32;
        for record in &outcome.history {
            assert!(record.stock_level <= 1000);
            assert!(record.stock_level <= previous);
            previous = record.stock_level;
        }
    }

    #[test]
    fn test_daily_sales_never_exceed_stock_at_day_start() {
        let outcome = run_seeded(params(), 3);
        let mut stock_at_start = 1000u32;
        for record in &outcome.history {
            assert!(record.items_sold <= stock_at_start);
            assert_eq!(record.stock_level, stock_at_start - record.items_sold);
            stock_at_start = record.stock_level;
        }
    }

    #[test]
    fn test_stockout_is_permanent_and_all_zero() {
        // Tiny inventory forces a stockout within a few days.
        let mut p = params();
        p.total_inventory = 150;
        let outcome = run_seeded(p, 4);

        let first_empty = outcome
            .history
            .iter()
            .position(|r| r.stock_level == 0)
            .expect("150 units against ~180 daily demand must run out");

        for record in &outcome.history[first_empty + 1..] {
            assert_eq!(record.stock_level, 0);
            assert_eq!(record.items_sold, 0);
            assert_eq!(record.user_price, 0.0);
            assert_eq!(record.competitor_price, 0.0);
            assert_eq!(record.market_share, 0.0);
            assert_eq!(record.insight, Insight::OutOfStock);
        }
    }

    #[test]
    fn test_zero_inventory_run_sells_nothing() {
        let mut p = params();
        p.total_inventory = 0;
        let outcome = run_seeded(p, 5);

        assert_eq!(outcome.history.len(), 30);
        for record in &outcome.history {
            assert_eq!(record.items_sold, 0);
            assert_eq!(record.stock_level, 0);
        }
        assert_eq!(outcome.summary.total_units_sold, 0);
        assert_eq!(outcome.summary.total_profit, 0.0);
        assert_eq!(outcome.summary.avg_user_price, 0.0);
    }

    #[test]
    fn test_summary_totals_match_the_history() {
        let outcome = run_seeded(params(), 6);

        let units: u32 = outcome.history.iter().map(|r| r.items_sold).sum();
        assert_eq!(outcome.summary.total_units_sold, units);

        // Cumulative profit on the last day is the run total.
        let last = outcome.history.last().unwrap();
        assert!((outcome.summary.total_profit - last.cumulative_profit).abs() < 0.011);
    }

    #[test]
    fn test_cumulative_profit_never_decreases() {
        let outcome = run_seeded(params(), 7);
        let mut previous = 0.0;
        for record in &outcome.history {
            assert!(record.cumulative_profit >= previous - 1e-9);
            previous = record.cumulative_profit;
        }
    }

    #[test]
    fn test_market_share_is_a_percentage() {
        let outcome = run_seeded(params(), 8);
        for record in &outcome.history {
            assert!(record.market_share >= 0.0);
            assert!(record.market_share <= 100.0);
        }
    }

    #[test]
    fn test_reference_scenario_moves_stock_and_turns_a_profit() {
        let outcome = run_seeded(params(), 9);
        assert_eq!(outcome.history.len(), 30);
        assert!(outcome.history.last().unwrap().stock_level < 1000);
        assert!(outcome.summary.total_profit > 0.0);
        assert!(outcome.summary.avg_user_price > 30.0);
    }

    #[test]
    fn test_equal_seeds_produce_identical_runs() {
        let a = run_seeded(params(), 10);
        let b = run_seeded(params(), 10);
        assert_eq!(a.history.len(), b.history.len());
        for (x, y) in a.history.iter().zip(&b.history) {
            assert_eq!(x.user_price, y.user_price);
            assert_eq!(x.competitor_price, y.competitor_price);
            assert_eq!(x.items_sold, y.items_sold);
            assert_eq!(x.stock_level, y.stock_level);
        }
        assert_eq!(a.summary.total_units_sold, b.summary.total_units_sold);
        assert_eq!(a.summary.total_profit, b.summary.total_profit);
    }

    #[test]
    fn test_extreme_price_parameters_run_to_completion() {
        // initial_price * sensitivity far beyond u32::MAX passes validation;
        // the run must still complete instead of overflowing the demand
        // baseline.
        let mut p = params();
        p.initial_price = 5.0e9;
        p.sensitivity = 1.0;
        let outcome = run_seeded(p, 21);
        assert_eq!(outcome.history.len(), 30);
        for record in &outcome.history {
            assert!(record.stock_level <= 1000);
        }
    }

    #[test]
    fn test_invalid_params_are_rejected_before_the_run() {
        let mut p = params();
        p.sensitivity = -1.0;
        let result = PricingSimulation::from_seed(p, EngineConfig::default(), 0);
        assert!(matches!(
            result.err(),
            Some(ValidationError::NegativeSensitivity(_))
        ));
    }

    #[test]
    fn test_simulate_entry_point_runs_with_defaults() {
        let outcome = simulate(params()).unwrap();
        assert_eq!(outcome.history.len(), 30);
    }
}
