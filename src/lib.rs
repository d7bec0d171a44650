//! A multi-day retail pricing simulator.
//!
//! Given a starting price, unit cost, inventory, baseline demand, and price
//! sensitivity, the engine simulates day-by-day stochastic demand, a
//! reactive competitor, and a profit-seeking price optimizer, producing a
//! daily history and summary statistics. Each call to [`simulate`] is a
//! self-contained computation; serving layers embed it one invocation per
//! request with no shared state.

pub mod io;
pub mod market;
pub mod model;
pub mod simulation;
pub mod strategy;

pub use model::params::{SimulationParams, ValidationError};
pub use model::record::{DayRecord, Insight, SimulationOutcome, Summary};
pub use simulation::config::EngineConfig;
pub use simulation::engine::{simulate, PricingSimulation};
