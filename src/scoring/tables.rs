//! Breakpoint tables, most severe first.
//!
//! A value strictly above `TABLE[i]` scores `TABLE.len() - i` points.

pub const ENERGY_LEVELS: [f64; 10] = [
    3350.0, 3015.0, 2680.0, 2345.0, 2010.0, 1675.0, 1340.0, 1005.0, 670.0, 335.0,
];
pub const ENERGY_LEVELS_BEVERAGE: [f64; 10] = [
    270.0, 240.0, 210.0, 180.0, 150.0, 120.0, 90.0, 60.0, 30.0, 0.0,
];

/// Second entry is 40 (the published cut-off); some tables carry a stray 60
/// there, which breaks the descending order and makes (40, 45] score 8.
pub const SUGAR_LEVELS: [f64; 10] = [45.0, 40.0, 36.0, 31.0, 27.0, 22.5, 18.0, 13.5, 9.0, 4.5];
pub const SUGAR_LEVELS_BEVERAGE: [f64; 10] = [13.5, 12.0, 10.5, 9.0, 7.5, 6.0, 4.5, 3.0, 1.5, 0.0];

pub const SATURATED_FAT_LEVELS: [f64; 10] = [10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];

pub const SODIUM_LEVELS: [f64; 10] = [
    900.0, 810.0, 720.0, 630.0, 540.0, 450.0, 360.0, 270.0, 180.0, 90.0,
];

pub const FIBRE_LEVELS: [f64; 5] = [4.7, 3.7, 2.8, 1.9, 0.9];
pub const PROTEIN_LEVELS: [f64; 5] = [8.0, 6.4, 4.8, 3.2, 1.6];

/// Fruit points are multiplied by this for beverages
pub const FRUIT_BEVERAGE_MULTIPLIER: i32 = 2;

/// Grade cut-offs on the final score
pub const GRADE_LEVELS_FOOD: [f64; 4] = [18.0, 10.0, 2.0, -1.0];
pub const GRADE_LEVELS_BEVERAGE: [f64; 4] = [9.0, 5.0, 1.0, -2.0];
