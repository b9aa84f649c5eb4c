use serde::{Deserialize, Serialize};

/// One wedge of the prize wheel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Segment {
    pub id: String,
    pub label: String,
    pub value: String,
    pub color: String,
    /// Relative probability mass; must be positive.
    pub weight: f64,
    /// Defaults to enabled when absent.
    #[serde(default)]
    pub enabled: Option<bool>,
    /// Remaining stock; absent means unlimited.
    #[serde(default)]
    pub inventory: Option<i64>,
}

impl Segment {
    /// Not explicitly disabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled != Some(false)
    }

    /// Unlimited inventory, or stock remaining.
    pub fn has_inventory(&self) -> bool {
        self.inventory.map_or(true, |remaining| remaining > 0)
    }

    /// Eligible for the primary prize draw.
    pub fn is_available(&self) -> bool {
        self.is_enabled() && self.has_inventory()
    }
}
