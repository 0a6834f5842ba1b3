//! Unit conversions for label values
//!
//! Labels often give energy in kilocalories and salt instead of sodium.

use super::types::{EnergyKj, SodiumMg};

/// Kilojoules per kilocalorie
pub const KJ_PER_KCAL: f64 = 4.184;

/// Salt (mg) divided by this gives sodium (mg)
pub const SALT_TO_SODIUM_DIVISOR: f64 = 2.5;

/// Convert an energy value in kilocalories to kilojoules
pub fn energy_from_kilocalories(kcal: f64) -> EnergyKj {
    EnergyKj(kcal * KJ_PER_KCAL)
}

/// Derive sodium from a salt value, both in milligrams
pub fn sodium_from_salt(salt_mg: f64) -> SodiumMg {
    SodiumMg(salt_mg / SALT_TO_SODIUM_DIVISOR)
}
