use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Product category. Selects the breakpoint tables and the aggregation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Food,
    Beverage,
    Water,
    Cheese,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Beverage => "beverage",
            Category::Water => "water",
            Category::Cheese => "cheese",
        }
    }

    /// Parse a category name, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food" => Some(Category::Food),
            "beverage" => Some(Category::Beverage),
            "water" => Some(Category::Water),
            "cheese" => Some(Category::Cheese),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Energy in kilojoules per 100g/100ml
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnergyKj(pub f64);

/// Sugars in grams per 100g/100ml
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SugarGram(pub f64);

/// Saturated fatty acids in grams per 100g/100ml
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaturatedFatGram(pub f64);

/// Sodium in milligrams per 100g/100ml
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SodiumMg(pub f64);

/// Fruit, vegetable and legume content as a percentage (0-100)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FruitPercent(pub f64);

/// Fibre in grams per 100g/100ml
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FibreGram(pub f64);

/// Protein in grams per 100g/100ml
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProteinGram(pub f64);

/// Nutrient measurements of one product, all per 100g/100ml.
///
/// Each field carries its unit in its type. Passing kilocalories as
/// kilojoules, or salt as sodium, still scores but gives a wrong result;
/// convert with [`energy_from_kilocalories`](super::energy_from_kilocalories)
/// and [`sodium_from_salt`](super::sodium_from_salt) first.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutrientProfile {
    pub energy: EnergyKj,
    pub sugar: SugarGram,
    pub saturated_fat: SaturatedFatGram,
    pub sodium: SodiumMg,
    pub fruit: FruitPercent,
    pub fibre: FibreGram,
    pub protein: ProteinGram,
}
