use serde::{Deserialize, Serialize};

use crate::nutrition::Category;

/// User settings (~/.config/nutriscore/config.yaml).
///
/// Example YAML:
/// ```yaml
/// default_category: beverage
/// strict: true
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Category used when none is given on the command line or in the product file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_category: Option<Category>,

    /// Validate nutrient values before scoring (default: false)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
}

impl Settings {
    pub fn default_category(&self) -> Category {
        self.default_category.unwrap_or_default()
    }

    pub fn is_strict(&self) -> bool {
        self.strict.unwrap_or(false)
    }
}
