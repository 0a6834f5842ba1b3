pub mod types;
pub mod units;

pub use types::{
    Category, EnergyKj, FibreGram, FruitPercent, NutrientProfile, ProteinGram, SaturatedFatGram,
    SodiumMg, SugarGram,
};
pub use units::{energy_from_kilocalories, sodium_from_salt, KJ_PER_KCAL, SALT_TO_SODIUM_DIVISOR};
