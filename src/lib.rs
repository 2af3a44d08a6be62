pub mod cli;
pub mod error;
pub mod interface;
pub mod lookup;
pub mod models;
pub mod recommender;
pub mod state;
pub mod targets;

pub use error::{NutriError, Result};
pub use models::{ConsumedTotals, FoodItem, NutrientTargets, ScoredFood};
pub use recommender::recommend;
