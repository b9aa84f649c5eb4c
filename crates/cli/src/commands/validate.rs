use anyhow::Result;
use clap::Parser;
use ruleta_core::validate_wheel;
use std::path::PathBuf;

use crate::loader::load_wheels;

/// Validate wheel configuration files
#[derive(Debug, Parser)]
pub struct ValidateCommand {
    /// Paths to wheel config files (JSON or YAML)
    #[arg(value_name = "FILE", required = true)]
    pub config_paths: Vec<PathBuf>,
}

impl ValidateCommand {
    pub fn execute(&self) -> Result<i32> {
        let mut failures = 0;
        for path in &self.config_paths {
            let wheels = load_wheels(path)?;
            for wheel in &wheels {
                match validate_wheel(wheel) {
                    Ok(()) => println!("{}: {} ok", path.display(), wheel.id),
                    Err(error) => {
                        println!("{}: {} INVALID: {error}", path.display(), wheel.id);
                        failures += 1;
                    }
                }
            }
        }
        Ok(if failures == 0 { 0 } else { 1 })
    }
}
