use anyhow::{bail, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ruleta_core::{
    calculate_final_rotation, draw_with_rng, select_active_wheel, select_winning_segment,
    CandidatePool, Draw,
};
use std::path::PathBuf;

use crate::commands::resolve_instant;
use crate::loader::load_wheels;

/// Simulate a spin against the active wheel
#[derive(Debug, Parser)]
pub struct SpinCommand {
    /// Path to the wheel config file (JSON or YAML)
    #[arg(value_name = "FILE")]
    pub config_path: PathBuf,

    /// Instant to evaluate eligibility at (RFC 3339); defaults to now
    #[arg(long, value_name = "INSTANT")]
    pub at: Option<String>,

    /// Spin a specific wheel instead of the schedule-selected one
    #[arg(long, value_name = "ID")]
    pub wheel: Option<String>,

    /// Fixed random value in [0, 1) for a reproducible draw
    #[arg(long, value_name = "VALUE")]
    pub random: Option<f64>,

    /// RNG seed for a reproducible draw (ignored with --random)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Full turns before the wheel settles
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub spins: u32,
}

impl SpinCommand {
    pub fn execute(&self) -> Result<i32> {
        let wheels = load_wheels(&self.config_path)?;
        let now = resolve_instant(self.at.as_deref())?;

        let wheel = match &self.wheel {
            Some(id) => match wheels.iter().find(|wheel| &wheel.id == id) {
                Some(wheel) => wheel,
                None => bail!("no wheel with id '{id}' in {}", self.config_path.display()),
            },
            None => match select_active_wheel(&wheels, now) {
                Some(wheel) => wheel,
                None => {
                    println!("no active wheel");
                    return Ok(1);
                }
            },
        };

        let Some(draw) = self.draw(wheel)? else {
            println!("wheel {} has no segments", wheel.id);
            return Ok(1);
        };

        let rotation =
            calculate_final_rotation(draw.segment_index, wheel.segments.len(), 0.0, self.spins)?;

        println!("wheel:    {} ({})", wheel.id, wheel.name);
        println!(
            "winner:   [{}] {} ({})",
            draw.segment_index, draw.segment.label, draw.segment.value
        );
        println!("rotation: {rotation:.1} degrees over {} spins", self.spins);
        match draw.pool {
            CandidatePool::Available => {}
            CandidatePool::InventoryExhausted => {
                println!("note: every enabled segment is out of inventory");
            }
            CandidatePool::AllDisabled => {
                println!("note: every segment is disabled; returned the first as a fallback");
            }
        }
        Ok(0)
    }

    fn draw<'a>(&self, wheel: &'a ruleta_core::model::Wheel) -> Result<Option<Draw<'a>>> {
        if let Some(random_value) = self.random {
            if !(0.0..1.0).contains(&random_value) {
                bail!("--random must be in [0, 1), got {random_value}");
            }
            return Ok(select_winning_segment(&wheel.segments, random_value));
        }
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(draw_with_rng(&wheel.segments, &mut rng))
    }
}
