//! Planar locations and fuel stations.

use serde::{Deserialize, Serialize};

/// A point on a flat plane (e.g. km from an origin).
///
/// # Examples
///
/// ```
/// use u_delivery::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A fuel station the driver may detour through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelStation {
    /// Unique station identifier.
    pub id: String,
    /// Human-readable name.
    pub label: String,
    /// Station position.
    pub location: Point,
    /// Fuel price per liter. Informational; not used for ranking.
    pub price_per_liter: i64,
}

impl FuelStation {
    /// Creates a station at `(x, y)`.
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            location: Point::new(x, y),
            price_per_liter: 0,
        }
    }

    /// Sets the human-readable name.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the fuel price.
    pub fn with_price(mut self, price_per_liter: i64) -> Self {
        self.price_per_liter = price_per_liter;
        self
    }
}
