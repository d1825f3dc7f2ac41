//! Fuel-stop selection by minimum detour.
//!
//! # Algorithm
//!
//! For each station `s` on the way from driver `D` to customer `C`:
//!
//! ```text
//! detour(s) = d(D, s) + d(s, C) - d(D, C)
//! ```
//!
//! Stations are ranked by detour ascending. By the triangle inequality
//! every detour is non-negative; a station on the straight segment has
//! detour zero.
//!
//! # Complexity
//! O(n log n) for n stations.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{FuelStation, Point};

/// A station with its via-distance and extra distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedStation {
    pub station: FuelStation,
    /// Driver to station to customer.
    pub total_distance: f64,
    /// `total_distance` minus the direct distance.
    pub detour: f64,
}

/// Stations ranked from smallest to largest detour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetourRanking {
    /// Straight-line distance from driver to customer.
    pub direct_distance: f64,
    pub ranked: Vec<RankedStation>,
}

impl DetourRanking {
    /// The station with the smallest detour.
    pub fn best(&self) -> Option<&RankedStation> {
        self.ranked.first()
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

/// Ranks `stations` by how far they take the driver off the direct line.
///
/// Ties keep input order.
///
/// # Examples
///
/// ```
/// use u_delivery::detour::rank_fuel_stops;
/// use u_delivery::models::{FuelStation, Point};
///
/// let stations = vec![
///     FuelStation::new("off", 0.0, 5.0),
///     FuelStation::new("on", 5.0, 0.0),
/// ];
/// let ranking = rank_fuel_stops(Point::new(0.0, 0.0), Point::new(10.0, 0.0), &stations);
/// let best = ranking.best().unwrap();
/// assert_eq!(best.station.id, "on");
/// assert!(best.detour.abs() < 1e-10);
/// ```
pub fn rank_fuel_stops(driver: Point, customer: Point, stations: &[FuelStation]) -> DetourRanking {
    let direct_distance = driver.distance_to(&customer);

    let mut ranked: Vec<RankedStation> = stations
        .iter()
        .map(|station| {
            let total_distance =
                driver.distance_to(&station.location) + station.location.distance_to(&customer);
            RankedStation {
                station: station.clone(),
                total_distance,
                detour: total_distance - direct_distance,
            }
        })
        .collect();

    ranked.sort_by(|a, b| a.detour.total_cmp(&b.detour));

    if let Some(best) = ranked.first() {
        debug!(
            stations = ranked.len(),
            best = %best.station.id,
            detour = best.detour,
            "fuel stops ranked"
        );
    }

    DetourRanking {
        direct_distance,
        ranked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo_data;

    #[test]
    fn test_demo_ranking() {
        let (driver, customer, stations) = demo_data::fuel_stations();
        let ranking = rank_fuel_stops(driver, customer, &stations);

        let ids: Vec<&str> = ranking
            .ranked
            .iter()
            .map(|r| r.station.id.as_str())
            .collect();
        assert_eq!(ids, vec!["SPBU2", "SPBU1", "SPBU4", "SPBU3", "SPBU5"]);

        assert!((ranking.direct_distance - 164f64.sqrt()).abs() < 1e-10);
        let best = ranking.best().unwrap();
        // sqrt(61) + 5
        assert!((best.total_distance - (61f64.sqrt() + 5.0)).abs() < 1e-10);
    }

    #[test]
    fn test_detours_non_negative_and_sorted() {
        let (driver, customer, stations) = demo_data::fuel_stations();
        let ranking = rank_fuel_stops(driver, customer, &stations);

        assert_eq!(ranking.len(), stations.len());
        for r in &ranking.ranked {
            assert!(r.detour >= -1e-10);
            assert!((r.total_distance - ranking.direct_distance - r.detour).abs() < 1e-10);
        }
        for pair in ranking.ranked.windows(2) {
            assert!(pair[0].detour <= pair[1].detour);
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        // Mirror images across the direct line have equal detours.
        let stations = vec![
            FuelStation::new("below", 5.0, -3.0),
            FuelStation::new("above", 5.0, 3.0),
        ];
        let ranking = rank_fuel_stops(Point::new(0.0, 0.0), Point::new(10.0, 0.0), &stations);
        assert_eq!(ranking.ranked[0].station.id, "below");
        assert_eq!(ranking.ranked[1].station.id, "above");
    }

    #[test]
    fn test_empty_stations() {
        let ranking = rank_fuel_stops(Point::new(0.0, 0.0), Point::new(3.0, 4.0), &[]);
        assert!(ranking.is_empty());
        assert!(ranking.best().is_none());
        assert!((ranking.direct_distance - 5.0).abs() < 1e-10);
    }
}
