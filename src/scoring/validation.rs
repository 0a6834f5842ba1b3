use crate::nutrition::NutrientProfile;

/// Validate a nutrient profile before scoring.
/// Returns all validation errors at once (not just the first).
///
/// Scoring itself accepts any value; this is an opt-in check for inputs
/// that cannot describe a real product.
pub fn validate_profile(profile: &NutrientProfile) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let fields = [
        ("energy", profile.energy.0),
        ("sugar", profile.sugar.0),
        ("saturated_fat", profile.saturated_fat.0),
        ("sodium", profile.sodium.0),
        ("fruit", profile.fruit.0),
        ("fibre", profile.fibre.0),
        ("protein", profile.protein.0),
    ];

    for (name, value) in fields {
        if !value.is_finite() {
            errors.push(format!("{}: must be a finite number, got {}", name, value));
        } else if value < 0.0 {
            errors.push(format!("{}: must be non-negative, got {}", name, value));
        }
    }

    let fruit = profile.fruit.0;
    if fruit.is_finite() && fruit > 100.0 {
        errors.push(format!("fruit: must be between 0 and 100 percent, got {}", fruit));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
