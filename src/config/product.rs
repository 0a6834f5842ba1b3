use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::nutrition::{
    energy_from_kilocalories, sodium_from_salt, Category, EnergyKj, FibreGram, FruitPercent,
    NutrientProfile, ProteinGram, SaturatedFatGram, SodiumMg, SugarGram,
};

/// Nutrient values of one product as written on a label, per 100g/100ml.
///
/// Energy may be given in kJ or kcal and sodium directly or as salt, but not
/// both forms at once. Missing nutrients count as zero.
///
/// Example YAML:
/// ```yaml
/// name: Apple juice
/// category: beverage
/// energy_kcal: 46
/// sugar: 10
/// salt_mg: 10
/// fruit_percent: 100
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProductInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub energy_kj: Option<f64>,
    #[serde(default)]
    pub energy_kcal: Option<f64>,
    #[serde(default)]
    pub sugar: Option<f64>,
    #[serde(default)]
    pub saturated_fat: Option<f64>,
    #[serde(default)]
    pub sodium_mg: Option<f64>,
    #[serde(default)]
    pub salt_mg: Option<f64>,
    #[serde(default)]
    pub fruit_percent: Option<f64>,
    #[serde(default)]
    pub fibre: Option<f64>,
    #[serde(default)]
    pub protein: Option<f64>,
}

impl ProductInput {
    /// Apply every value set in `other` on top of `self`.
    ///
    /// Setting one energy (or sodium) form clears the other, so a command
    /// line `--energy-kcal` replaces an `energy_kj` from a file.
    pub fn overlay(mut self, other: ProductInput) -> Self {
        if other.name.is_some() {
            self.name = other.name;
        }
        if other.category.is_some() {
            self.category = other.category;
        }
        if other.energy_kj.is_some() {
            self.energy_kj = other.energy_kj;
            self.energy_kcal = None;
        }
        if other.energy_kcal.is_some() {
            self.energy_kcal = other.energy_kcal;
            self.energy_kj = None;
        }
        if other.sodium_mg.is_some() {
            self.sodium_mg = other.sodium_mg;
            self.salt_mg = None;
        }
        if other.salt_mg.is_some() {
            self.salt_mg = other.salt_mg;
            self.sodium_mg = None;
        }
        self.sugar = other.sugar.or(self.sugar);
        self.saturated_fat = other.saturated_fat.or(self.saturated_fat);
        self.fruit_percent = other.fruit_percent.or(self.fruit_percent);
        self.fibre = other.fibre.or(self.fibre);
        self.protein = other.protein.or(self.protein);
        self
    }

    /// Build a profile with all values converted to the scoring units
    pub fn to_profile(&self) -> Result<NutrientProfile> {
        let energy = match (self.energy_kj, self.energy_kcal) {
            (Some(_), Some(_)) => bail!("Give energy either in kJ or in kcal, not both"),
            (Some(kj), None) => EnergyKj(kj),
            (None, Some(kcal)) => energy_from_kilocalories(kcal),
            (None, None) => EnergyKj::default(),
        };

        let sodium = match (self.sodium_mg, self.salt_mg) {
            (Some(_), Some(_)) => bail!("Give either sodium or salt, not both"),
            (Some(mg), None) => SodiumMg(mg),
            (None, Some(salt)) => sodium_from_salt(salt),
            (None, None) => SodiumMg::default(),
        };

        Ok(NutrientProfile {
            energy,
            sugar: SugarGram(self.sugar.unwrap_or_default()),
            saturated_fat: SaturatedFatGram(self.saturated_fat.unwrap_or_default()),
            sodium,
            fruit: FruitPercent(self.fruit_percent.unwrap_or_default()),
            fibre: FibreGram(self.fibre.unwrap_or_default()),
            protein: ProteinGram(self.protein.unwrap_or_default()),
        })
    }
}
