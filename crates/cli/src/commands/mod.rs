mod evaluate;
mod spin;
mod validate;

pub use evaluate::EvaluateCommand;
pub use spin::SpinCommand;
pub use validate::ValidateCommand;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

/// Parse the shared `--at` flag; absent means "now".
pub(crate) fn resolve_instant(at: Option<&str>) -> Result<DateTime<Utc>> {
    match at {
        Some(raw) => {
            let parsed = DateTime::parse_from_rfc3339(raw)
                .with_context(|| format!("--at must be an RFC 3339 instant, got '{raw}'"))?;
            Ok(parsed.with_timezone(&Utc))
        }
        None => Ok(Utc::now()),
    }
}
