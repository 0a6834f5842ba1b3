use serde::Serialize;
use tracing::debug;

use super::grade::{grade_from_score, Grade};
use super::points::NutrientPoints;
use crate::nutrition::{Category, NutrientProfile};

/// Negative points at or above which fruit can no longer rescue a product
pub const EXEMPTION_NEGATIVE_THRESHOLD: i32 = 11;

/// Fruit points needed to keep the fruit bonus despite a poor negative score
pub const EXEMPTION_FRUIT_POINTS: i32 = 5;

/// Points awarded per nutrient. All zero for water.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub energy: i32,
    pub sugar: i32,
    pub saturated_fat: i32,
    pub sodium: i32,
    pub fruit: i32,
    pub fibre: i32,
    pub protein: i32,
}

impl PointsBreakdown {
    fn from_profile(profile: &NutrientProfile, category: Category) -> Self {
        Self {
            energy: profile.energy.points(category),
            sugar: profile.sugar.points(category),
            saturated_fat: profile.saturated_fat.points(category),
            sodium: profile.sodium.points(category),
            fruit: profile.fruit.points(category),
            fibre: profile.fibre.points(category),
            protein: profile.protein.points(category),
        }
    }

    /// Energy, sugar, saturated fat and sodium
    pub fn negative(&self) -> i32 {
        self.energy + self.sugar + self.saturated_fat + self.sodium
    }

    /// Fruit, fibre and protein
    pub fn positive(&self) -> i32 {
        self.fruit + self.fibre + self.protein
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    /// Final signed score; lower is better
    pub value: i32,
    pub positive: i32,
    pub negative: i32,
    pub category: Category,
    pub breakdown: PointsBreakdown,
    /// True when the fruit points were subtracted a second time
    pub exemption_applied: bool,
}

impl ScoreResult {
    pub fn grade(&self) -> Grade {
        grade_from_score(self)
    }
}

/// Score a nutrient profile under the given category.
///
/// Water short-circuits to an all-zero result. Cheese is `negative - positive`.
/// Food and beverages lose the fruit bonus a second time when
/// `negative >= 11` and fruit points are below 5.
pub fn score_from_profile(profile: &NutrientProfile, category: Category) -> ScoreResult {
    if category == Category::Water {
        return ScoreResult {
            value: 0,
            positive: 0,
            negative: 0,
            category,
            breakdown: PointsBreakdown::default(),
            exemption_applied: false,
        };
    }

    let breakdown = PointsBreakdown::from_profile(profile, category);
    let negative = breakdown.negative();
    let positive = breakdown.positive();

    debug!(%category, ?breakdown, negative, positive, "nutrient points");

    let exemption_applied = match category {
        Category::Cheese | Category::Water => false,
        Category::Food | Category::Beverage => {
            negative >= EXEMPTION_NEGATIVE_THRESHOLD && breakdown.fruit < EXEMPTION_FRUIT_POINTS
        }
    };

    let value = if exemption_applied {
        debug!(fruit = breakdown.fruit, "fruit exemption applied");
        negative - positive - breakdown.fruit
    } else {
        negative - positive
    };

    ScoreResult {
        value,
        positive,
        negative,
        category,
        breakdown,
        exemption_applied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::{
        energy_from_kilocalories, EnergyKj, FibreGram, FruitPercent, ProteinGram,
        SaturatedFatGram, SodiumMg, SugarGram,
    };

    fn reference_profile() -> NutrientProfile {
        NutrientProfile {
            energy: energy_from_kilocalories(100.0),
            sugar: SugarGram(10.0),
            saturated_fat: SaturatedFatGram(2.0),
            sodium: SodiumMg(500.0),
            fruit: FruitPercent(60.0),
            fibre: FibreGram(4.0),
            protein: ProteinGram(2.0),
        }
    }

    fn poor_profile(fruit: f64) -> NutrientProfile {
        NutrientProfile {
            energy: EnergyKj(3400.0),
            sugar: SugarGram(50.0),
            saturated_fat: SaturatedFatGram(11.0),
            sodium: SodiumMg(1000.0),
            fruit: FruitPercent(fruit),
            fibre: FibreGram(0.0),
            protein: ProteinGram(0.0),
        }
    }

    #[test]
    fn test_reference_food_example() {
        let result = score_from_profile(&reference_profile(), Category::Food);

        assert_eq!(
            result.breakdown,
            PointsBreakdown {
                energy: 1,
                sugar: 2,
                saturated_fat: 1,
                sodium: 5,
                fruit: 2,
                fibre: 4,
                protein: 1,
            }
        );
        assert_eq!(result.negative, 9);
        assert_eq!(result.positive, 7);
        assert_eq!(result.value, 2);
        assert!(!result.exemption_applied);
        assert_eq!(result.grade(), Grade::B);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let profile = reference_profile();
        for category in [Category::Food, Category::Beverage, Category::Water, Category::Cheese] {
            assert_eq!(
                score_from_profile(&profile, category),
                score_from_profile(&profile, category)
            );
        }
    }

    #[test]
    fn test_water_ignores_nutrients() {
        let result = score_from_profile(&poor_profile(0.0), Category::Water);
        assert_eq!(result.value, 0);
        assert_eq!(result.positive, 0);
        assert_eq!(result.negative, 0);
        assert_eq!(result.breakdown, PointsBreakdown::default());
        assert_eq!(result.grade(), Grade::A);

        let implausible = NutrientProfile {
            energy: EnergyKj(-1.0),
            fruit: FruitPercent(500.0),
            sodium: SodiumMg(f64::INFINITY),
            ..Default::default()
        };
        let result = score_from_profile(&implausible, Category::Water);
        assert_eq!(result.value, 0);
        assert_eq!(result.grade(), Grade::A);
    }

    #[test]
    fn test_exemption_without_fruit_matches_plain_formula() {
        let result = score_from_profile(&poor_profile(0.0), Category::Food);
        assert_eq!(result.negative, 40);
        assert_eq!(result.positive, 0);
        assert!(result.exemption_applied);
        assert_eq!(result.value, 40);
        assert_eq!(result.value, result.negative - result.positive);
        assert_eq!(result.grade(), Grade::E);
    }

    #[test]
    fn test_exemption_subtracts_fruit_again() {
        let result = score_from_profile(&poor_profile(60.0), Category::Food);
        assert_eq!(result.breakdown.fruit, 2);
        assert_eq!(result.positive, 2);
        assert!(result.exemption_applied);
        // 40 - 2 - 2, where the plain formula would give 38
        assert_eq!(result.value, 36);

        let result = score_from_profile(&poor_profile(45.0), Category::Food);
        assert_eq!(result.value, 40 - 1 - 1);
    }

    #[test]
    fn test_no_exemption_with_high_fruit() {
        let result = score_from_profile(&poor_profile(85.0), Category::Food);
        assert_eq!(result.breakdown.fruit, 5);
        assert!(!result.exemption_applied);
        assert_eq!(result.value, 35);
    }

    #[test]
    fn test_no_exemption_below_negative_threshold() {
        let profile = NutrientProfile {
            energy: EnergyKj(2100.0), // 6
            sodium: SodiumMg(400.0),  // 4
            fruit: FruitPercent(60.0),
            ..Default::default()
        };
        let result = score_from_profile(&profile, Category::Food);
        assert_eq!(result.negative, 10);
        assert!(!result.exemption_applied);
        assert_eq!(result.value, 8);
    }

    #[test]
    fn test_exemption_at_negative_threshold() {
        let profile = NutrientProfile {
            energy: EnergyKj(2100.0), // 6
            sodium: SodiumMg(500.0),  // 5
            fruit: FruitPercent(60.0),
            ..Default::default()
        };
        let result = score_from_profile(&profile, Category::Food);
        assert_eq!(result.negative, 11);
        assert!(result.exemption_applied);
        assert_eq!(result.value, 11 - 2 - 2);
    }

    #[test]
    fn test_cheese_has_no_exemption() {
        let result = score_from_profile(&poor_profile(60.0), Category::Cheese);
        assert!(!result.exemption_applied);
        assert_eq!(result.value, 38);
        assert_eq!(result.grade(), Grade::E);
    }

    #[test]
    fn test_beverage_uses_beverage_tables() {
        let profile = NutrientProfile {
            energy: EnergyKj(200.0),   // 7
            sugar: SugarGram(5.0),     // 4
            fruit: FruitPercent(45.0), // 2
            ..Default::default()
        };
        let result = score_from_profile(&profile, Category::Beverage);
        assert_eq!(result.breakdown.energy, 7);
        assert_eq!(result.breakdown.sugar, 4);
        assert_eq!(result.breakdown.fruit, 2);
        assert_eq!(result.negative, 11);
        assert!(result.exemption_applied);
        assert_eq!(result.value, 11 - 2 - 2);
        assert_eq!(result.grade(), Grade::D);
    }

    #[test]
    fn test_beverage_full_fruit_keeps_bonus() {
        let profile = NutrientProfile {
            energy: EnergyKj(200.0),
            sugar: SugarGram(11.0),
            fruit: FruitPercent(100.0),
            ..Default::default()
        };
        let result = score_from_profile(&profile, Category::Beverage);
        assert_eq!(result.breakdown.fruit, 10);
        assert!(!result.exemption_applied);
        assert_eq!(result.value, result.negative - result.positive);
    }

    #[test]
    fn test_healthy_food_scores_negative() {
        let profile = NutrientProfile {
            energy: EnergyKj(200.0),
            fruit: FruitPercent(90.0),
            fibre: FibreGram(5.0),
            protein: ProteinGram(9.0),
            ..Default::default()
        };
        let result = score_from_profile(&profile, Category::Food);
        assert_eq!(result.negative, 0);
        assert_eq!(result.positive, 15);
        assert_eq!(result.value, -15);
        assert_eq!(result.grade(), Grade::A);
    }
}
