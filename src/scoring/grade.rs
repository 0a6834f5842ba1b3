use serde::{Deserialize, Serialize};
use std::fmt;

use super::engine::ScoreResult;
use super::points::points_from_range;
use super::tables::{GRADE_LEVELS_BEVERAGE, GRADE_LEVELS_FOOD};
use crate::nutrition::Category;

/// Nutri-Score letter, A (best) to E (worst)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

const GRADES: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::E];

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
        }
    }

    /// Grade for a bucket index produced by `points_from_range` over a
    /// 4-entry grade table. Indices past the end clamp to E.
    fn from_index(index: usize) -> Self {
        GRADES.get(index).copied().unwrap_or(Grade::E)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a computed score to its letter grade.
///
/// Water is always A. Food uses cut-offs 18/10/2/-1, beverages and cheese
/// use 9/5/1/-2; a score equal to a cut-off gets the better grade.
pub fn grade_from_score(result: &ScoreResult) -> Grade {
    let steps: &[f64] = match result.category {
        Category::Water => return Grade::A,
        Category::Food => &GRADE_LEVELS_FOOD,
        Category::Beverage | Category::Cheese => &GRADE_LEVELS_BEVERAGE,
    };
    Grade::from_index(points_from_range(f64::from(result.value), steps))
}
