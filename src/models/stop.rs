//! Route stop model.

use serde::{Deserialize, Serialize};

/// A customer stop on a delivery route.
///
/// `leg_distance` is the distance from the previous stop in an implicit
/// chain, so the length of a route is the plain sum of its legs
/// regardless of order.
///
/// # Examples
///
/// ```
/// use u_delivery::models::Stop;
///
/// let stop = Stop::new("C1", "A", 5).with_label("Budi");
/// assert_eq!(stop.zone, "A");
/// assert_eq!(stop.leg_distance, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    /// Unique stop identifier.
    pub id: String,
    /// Human-readable name.
    pub label: String,
    /// Zone tag used by the zone-run and zone-diversity rules.
    pub zone: String,
    /// Distance from the previous stop (>= 0).
    pub leg_distance: i64,
}

impl Stop {
    /// Creates a stop in `zone` with the given leg distance.
    pub fn new(id: impl Into<String>, zone: impl Into<String>, leg_distance: i64) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            zone: zone.into(),
            leg_distance,
        }
    }

    /// Sets the human-readable name.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}
