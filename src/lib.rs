//! Nutri-Score calculation.
//!
//! Maps a per-100g/100ml nutrient profile to a signed nutritional score and
//! a letter grade from A (best) to E (worst).

pub mod config;
pub mod nutrition;
pub mod output;
pub mod scoring;

pub use nutrition::{Category, NutrientProfile};
pub use scoring::{grade_from_score, score_from_profile, Grade, ScoreResult};
