//! Cargo item model.

use serde::{Deserialize, Serialize};

/// An item that may be packed into the delivery bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoItem {
    /// Unique item identifier.
    pub id: String,
    /// Human-readable name.
    pub label: String,
    /// Volume in capacity units (> 0).
    pub volume: usize,
    /// Value gained by carrying the item (e.g. expected tip).
    pub value: i64,
}

impl CargoItem {
    /// Creates a cargo item.
    pub fn new(id: impl Into<String>, volume: usize, value: i64) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            volume,
            value,
        }
    }

    /// Sets the human-readable name.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}
