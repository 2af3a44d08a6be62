//! Food recommendation engine.
//!
//! Given the day's targets and what has already been eaten, ranks catalog
//! foods by how well they close the remaining macronutrient gap and sizes
//! a portion for each. Every function here is pure.

pub mod balance;
pub mod constants;
pub mod portion;
pub mod priority;
pub mod ranking;
pub mod scoring;

pub use balance::{NutrientBalance, calculate_balance};
pub use constants::*;
pub use portion::recommended_mass;
pub use priority::{Priority, calculate_priorities};
pub use ranking::{recommend, recommend_with_config, try_recommend};
pub use scoring::{match_score, score_food};
