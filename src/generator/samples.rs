//! Name sample files.

use crate::error::{AppError, Result};
use std::path::Path;

/// Names read from the three sample files.
#[derive(Debug, Clone, Default)]
pub struct NameSamples {
    pub last_names: Vec<String>,
    pub male_names: Vec<String>,
    pub female_names: Vec<String>,
}

impl NameSamples {
    /// Read all three sample files. Every file must contain at least one name.
    pub async fn load(last_names: &Path, male_names: &Path, female_names: &Path) -> Result<Self> {
        let samples = Self {
            last_names: load_names(last_names).await?,
            male_names: load_names(male_names).await?,
            female_names: load_names(female_names).await?,
        };
        tracing::info!(
            "Loaded samples: {} last names, {} male names, {} female names",
            samples.last_names.len(),
            samples.male_names.len(),
            samples.female_names.len()
        );
        Ok(samples)
    }
}

/// Read one sample file.
pub async fn load_names(path: &Path) -> Result<Vec<String>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::samples(format!("cannot read {}: {e}", path.display())))?;

    let names = parse_names(&content);
    if names.is_empty() {
        return Err(AppError::samples(format!("{} contains no names", path.display())));
    }
    Ok(names)
}

/// One name per line; blank lines and `#` comments are skipped.
pub fn parse_names(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
