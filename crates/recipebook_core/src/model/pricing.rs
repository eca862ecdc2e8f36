//! Local price/quantity synthesis.
//!
//! Upstream recipes carry no price or stock data, so both are synthesized
//! when a recipe is decorated.
//!
//! # Invariants
//! - `price` is always in `[PRICE_MIN, PRICE_MAX)`.
//! - `quantity` is always in `[QUANTITY_MIN, QUANTITY_MAX]`.
//! - `SeededById` yields the same pair for the same id on every call.

use crate::model::recipe::RecipeId;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

pub const PRICE_MIN: u32 = 150;
pub const PRICE_MAX: u32 = 450;
pub const QUANTITY_MIN: u32 = 1;
pub const QUANTITY_MAX: u32 = 10;

/// Strategy used to synthesize price and quantity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSynthesis {
    /// Deterministic per recipe id; stable across refetches.
    #[default]
    SeededById,
    /// Fresh random values on every retrieval.
    PerFetch,
}

/// Synthesized commercial fields for one recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceTag {
    pub price: u32,
    pub quantity: u32,
}

impl PriceSynthesis {
    /// Produces the price tag for `id` under this strategy.
    pub fn price_tag(self, id: RecipeId) -> PriceTag {
        match self {
            Self::SeededById => draw(&mut ChaCha8Rng::seed_from_u64(id)),
            Self::PerFetch => draw(&mut rand::thread_rng()),
        }
    }
}

fn draw<G: Rng + ?Sized>(rng: &mut G) -> PriceTag {
    PriceTag {
        price: rng.gen_range(PRICE_MIN..PRICE_MAX),
        quantity: rng.gen_range(QUANTITY_MIN..=QUANTITY_MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::{PriceSynthesis, PRICE_MAX, PRICE_MIN, QUANTITY_MAX, QUANTITY_MIN};

    #[test]
    fn both_strategies_stay_in_range() {
        for strategy in [PriceSynthesis::SeededById, PriceSynthesis::PerFetch] {
            for id in 0..500 {
                let tag = strategy.price_tag(id);
                assert!((PRICE_MIN..PRICE_MAX).contains(&tag.price), "{tag:?}");
                assert!((QUANTITY_MIN..=QUANTITY_MAX).contains(&tag.quantity), "{tag:?}");
            }
        }
    }

    #[test]
    fn seeded_strategy_is_stable_per_id() {
        let first = PriceSynthesis::SeededById.price_tag(42);
        let second = PriceSynthesis::SeededById.price_tag(42);
        assert_eq!(first, second);
    }

    #[test]
    fn seeded_strategy_varies_across_ids() {
        let distinct = (1..=30)
            .map(|id| PriceSynthesis::SeededById.price_tag(id).price)
            .collect::<std::collections::BTreeSet<_>>();
        assert!(distinct.len() > 1);
    }
}
