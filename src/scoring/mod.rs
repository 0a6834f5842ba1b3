pub mod engine;
pub mod grade;
pub mod points;
pub mod tables;
pub mod validation;

pub use engine::{score_from_profile, PointsBreakdown, ScoreResult};
pub use grade::{grade_from_score, Grade};
pub use points::{points_from_range, NutrientPoints};
pub use validation::validate_profile;
