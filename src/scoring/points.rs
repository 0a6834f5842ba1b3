use super::tables::{
    ENERGY_LEVELS, ENERGY_LEVELS_BEVERAGE, FIBRE_LEVELS, FRUIT_BEVERAGE_MULTIPLIER,
    PROTEIN_LEVELS, SATURATED_FAT_LEVELS, SODIUM_LEVELS, SUGAR_LEVELS, SUGAR_LEVELS_BEVERAGE,
};
use crate::nutrition::{
    Category, EnergyKj, FibreGram, FruitPercent, ProteinGram, SaturatedFatGram, SodiumMg,
    SugarGram,
};

/// Count how many breakpoints `value` exceeds, from the most severe end.
///
/// `steps` must be sorted descending. Returns `steps.len() - i` for the first
/// index `i` with `value > steps[i]`, or 0 when no breakpoint is exceeded.
/// A value equal to a breakpoint lands in the less severe bucket.
pub fn points_from_range(value: f64, steps: &[f64]) -> usize {
    steps
        .iter()
        .position(|&step| value > step)
        .map_or(0, |i| steps.len() - i)
}

/// Points contributed by a single nutrient measurement
pub trait NutrientPoints {
    fn points(self, category: Category) -> i32;
}

fn table_points(value: f64, steps: &[f64]) -> i32 {
    // tables are at most 10 entries long
    points_from_range(value, steps) as i32
}

impl NutrientPoints for EnergyKj {
    fn points(self, category: Category) -> i32 {
        match category {
            Category::Beverage => table_points(self.0, &ENERGY_LEVELS_BEVERAGE),
            Category::Food | Category::Water | Category::Cheese => {
                table_points(self.0, &ENERGY_LEVELS)
            }
        }
    }
}

impl NutrientPoints for SugarGram {
    fn points(self, category: Category) -> i32 {
        match category {
            Category::Beverage => table_points(self.0, &SUGAR_LEVELS_BEVERAGE),
            Category::Food | Category::Water | Category::Cheese => {
                table_points(self.0, &SUGAR_LEVELS)
            }
        }
    }
}

impl NutrientPoints for SaturatedFatGram {
    fn points(self, _category: Category) -> i32 {
        table_points(self.0, &SATURATED_FAT_LEVELS)
    }
}

impl NutrientPoints for SodiumMg {
    fn points(self, _category: Category) -> i32 {
        table_points(self.0, &SODIUM_LEVELS)
    }
}

impl NutrientPoints for FibreGram {
    fn points(self, _category: Category) -> i32 {
        table_points(self.0, &FIBRE_LEVELS)
    }
}

impl NutrientPoints for ProteinGram {
    fn points(self, _category: Category) -> i32 {
        table_points(self.0, &PROTEIN_LEVELS)
    }
}

impl NutrientPoints for FruitPercent {
    /// Band lookup with inclusive (`>=`) edges, unlike the table nutrients.
    fn points(self, category: Category) -> i32 {
        let multiplier = match category {
            Category::Beverage => FRUIT_BEVERAGE_MULTIPLIER,
            Category::Food | Category::Water | Category::Cheese => 1,
        };

        let band = if self.0 >= 80.0 {
            5
        } else if self.0 >= 60.0 {
            2
        } else if self.0 >= 40.0 {
            1
        } else {
            0
        };

        band * multiplier
    }
}
