use anyhow::{bail, Context, Result};
use ruleta_core::model::Wheel;
use std::path::Path;

/// Load one or more wheels from a JSON or YAML config file. A top-level
/// list and a single wheel object are both accepted.
pub fn load_wheels(path: &Path) -> Result<Vec<Wheel>> {
    if !path.exists() {
        bail!("wheel config not found: {}", path.display());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read wheel config: {}", path.display()))?;

    let wheels = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => parse_yaml(&content),
        _ => parse_json(&content),
    }
    .with_context(|| format!("failed to parse wheel config: {}", path.display()))?;

    if wheels.is_empty() {
        bail!("wheel config is empty: {}", path.display());
    }
    Ok(wheels)
}

fn parse_json(content: &str) -> Result<Vec<Wheel>> {
    if content.trim_start().starts_with('[') {
        Ok(serde_json::from_str(content)?)
    } else {
        Ok(vec![serde_json::from_str(content)?])
    }
}

fn parse_yaml(content: &str) -> Result<Vec<Wheel>> {
    match serde_yaml::from_str::<Vec<Wheel>>(content) {
        Ok(wheels) => Ok(wheels),
        Err(_) => Ok(vec![serde_yaml::from_str(content)?]),
    }
}
