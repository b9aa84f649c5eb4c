use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{ScheduleConfig, Segment};

/// A wheel/campaign record as the engine consumes it. Read-only input on
/// every call; the engine holds no state and never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Wheel {
    pub id: String,
    pub name: String,
    /// Higher wins when several wheels are active at once.
    #[serde(default)]
    pub priority: Option<i32>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub schedule: Option<ScheduleConfig>,
    pub segments: Vec<Segment>,
}
