use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::Path;

const SETTINGS_TEMPLATE: &str = "\
# nutriscore settings

# Category used when --category is not given and the product file has none.
# One of: food, beverage, water, cheese
default_category: food

# Reject negative, non-finite or out-of-range nutrient values before scoring.
strict: false
";

/// Write the commented default settings file.
///
/// Refuses to replace an existing file unless `force` is set. The file is
/// written atomically so an interrupted write never leaves a partial config.
pub fn write_default_settings(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(SETTINGS_TEMPLATE.as_bytes())
        .context("Failed to write settings")?;
    file.commit()
        .with_context(|| format!("Failed to save config to {}", path.display()))?;

    Ok(())
}
