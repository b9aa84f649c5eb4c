use anyhow::Result;
use clap::Parser;
use ruleta_core::{is_active, select_active_wheel};
use std::path::PathBuf;

use crate::commands::resolve_instant;
use crate::loader::load_wheels;

/// Evaluate which wheel a store would show at a given instant
#[derive(Debug, Parser)]
pub struct EvaluateCommand {
    /// Path to the wheel config file (JSON or YAML)
    #[arg(value_name = "FILE")]
    pub config_path: PathBuf,

    /// Instant to evaluate at (RFC 3339); defaults to now
    #[arg(long, value_name = "INSTANT")]
    pub at: Option<String>,
}

impl EvaluateCommand {
    pub fn execute(&self) -> Result<i32> {
        let wheels = load_wheels(&self.config_path)?;
        let now = resolve_instant(self.at.as_deref())?;

        for wheel in &wheels {
            let state = if is_active(wheel.schedule.as_ref(), now) {
                "active"
            } else {
                "inactive"
            };
            println!("{:<24} {:<32} {state}", wheel.id, wheel.name);
        }

        match select_active_wheel(&wheels, now) {
            Some(selected) => {
                println!("selected: {} ({})", selected.id, selected.name);
                Ok(0)
            }
            None => {
                println!("selected: none");
                Ok(1)
            }
        }
    }
}
