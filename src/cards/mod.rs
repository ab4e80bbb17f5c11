//! Card data model and cost/power math.
//!
//! ## Key Types
//!
//! - `CardId`: Identity of a collectible card
//! - `Card`: Immutable card data (faction, rarity, power, foil, wear)
//! - `energy_cost` / `effective_power` / `can_afford`: pure per-card queries
//!
//! Foil affects cost only; faction affects power only.

pub mod card;
pub mod cost;

pub use card::{Card, CardId, Faction, FoilTier, Rarity, Wear};
pub use cost::{can_afford, effective_power, energy_cost, rarity_base_cost, rarity_weight};
