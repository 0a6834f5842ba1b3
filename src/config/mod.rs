pub mod init;
mod product;
mod schema;

pub use init::write_default_settings;
pub use product::ProductInput;
pub use schema::Settings;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/nutriscore/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("nutriscore"))
}

/// Get the default settings file path (~/.config/nutriscore/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load user settings from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to the settings file. If None, uses the default path
///   (~/.config/nutriscore/config.yaml) and falls back to defaults when it is absent.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given file does not exist
/// - The file cannot be read
/// - The YAML cannot be parsed
pub fn load_settings(path: Option<PathBuf>) -> Result<Settings> {
    let settings_path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p
        }
        None => match get_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(Settings::default()),
        },
    };

    let content = fs::read_to_string(&settings_path)
        .with_context(|| format!("Failed to read config file at {}", settings_path.display()))?;

    let settings: Settings = serde_saphyr::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            settings_path.display()
        )
    })?;

    Ok(settings)
}

/// Load a product description from a YAML file
pub fn load_product(path: &Path) -> Result<ProductInput> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read product file at {}", path.display()))?;

    serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse product: invalid YAML in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::Category;
    use std::env;

    #[test]
    fn test_explicit_missing_settings_file_errors() {
        let path = env::temp_dir().join("nutriscore_test_missing_config.yaml");
        let _ = fs::remove_file(&path);

        let err = load_settings(Some(path)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_settings_from_file() {
        let path = env::temp_dir().join("nutriscore_test_settings.yaml");
        fs::write(&path, "default_category: beverage\n").unwrap();

        let settings = load_settings(Some(path.clone())).unwrap();
        assert_eq!(settings.default_category(), Category::Beverage);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_settings_invalid_yaml() {
        let path = env::temp_dir().join("nutriscore_test_bad_settings.yaml");
        fs::write(&path, "strict: [not, a, bool]\n").unwrap();

        let err = load_settings(Some(path.clone())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_product_from_file() {
        let path = env::temp_dir().join("nutriscore_test_product.yaml");
        fs::write(&path, "category: cheese\nsaturated_fat: 20\nprotein: 25\n").unwrap();

        let product = load_product(&path).unwrap();
        assert_eq!(product.category, Some(Category::Cheese));
        assert_eq!(product.saturated_fat, Some(20.0));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_product_missing_file() {
        let path = env::temp_dir().join("nutriscore_test_missing_product.yaml");
        let _ = fs::remove_file(&path);
        assert!(load_product(&path).is_err());
    }
}
