// src/market/competitor.rs

use rand::Rng;

use crate::simulation::config::EngineConfig;

/// The competitor's price for one day, plus whether it came out of a flash
/// sale. The flag feeds the per-day insight annotation.
#[derive(Debug, Clone, Copy)]
pub struct CompetitorQuote {
    pub price: f64,
    pub flash_sale: bool,
}

/// A reactive competitor that anchors off our previous realized price.
///
/// Each day a Bernoulli draw picks one of two moves:
/// - standard undercut: `previous_price * U(0.85, 0.95)`
/// - flash sale (with `flash_sale_probability`): a steeper
///   `previous_price * U(0.70, 0.75)` discount
///
/// Quotes are floored at `cost_price + 1` so a long undercut spiral cannot
/// drag the market below cost.
#[derive(Debug, Clone)]
pub struct Competitor {
    flash_sale_probability: f64,
    undercut_range: (f64, f64),
    flash_sale_range: (f64, f64),
    price_floor: f64,
}

impl Competitor {
    pub fn new(cost_price: f64, config: &EngineConfig) -> Self {
        Self {
            flash_sale_probability: config.flash_sale_probability,
            undercut_range: config.undercut_range,
            flash_sale_range: config.flash_sale_range,
            price_floor: cost_price + 1.0,
        }
    }

    pub fn quote<R: Rng>(&self, previous_price: f64, rng: &mut R) -> CompetitorQuote {
        let flash_sale = rng.gen_bool(self.flash_sale_probability);
        let (lo, hi) = if flash_sale {
            self.flash_sale_range
        } else {
            self.undercut_range
        };
        let price = previous_price * rng.gen_range(lo..hi);

        CompetitorQuote {
            price: price.max(self.price_floor),
            flash_sale,
        }
    }
}
