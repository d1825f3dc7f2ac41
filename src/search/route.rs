//! Constrained route enumeration by backtracking.
//!
//! Enumerates every ordering of the given stops that satisfies:
//!
//! 1. The running sum of leg distances never exceeds the distance cap.
//! 2. No three consecutive stops share a zone.
//! 3. The complete route covers at least two distinct zones.
//!
//! Rules 1 and 2 are checked before a stop is appended, so only valid
//! prefixes are ever extended. Rule 3 is checked on completion.
//!
//! # Complexity
//! O(n!) in the worst case; pruning keeps realistic runs small.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::models::Stop;

/// Longest allowed run of consecutive stops in the same zone.
pub const MAX_ZONE_RUN: usize = 2;

/// Minimum number of distinct zones a complete route must cover.
pub const MIN_DISTINCT_ZONES: usize = 2;

/// A complete, accepted route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Stops in visiting order.
    pub stops: Vec<Stop>,
    /// Sum of leg distances.
    pub total_distance: i64,
}

impl Route {
    /// Stop IDs in visiting order.
    pub fn ids(&self) -> Vec<&str> {
        self.stops.iter().map(|s| s.id.as_str()).collect()
    }

    /// Zone tags in visiting order.
    pub fn zones(&self) -> Vec<&str> {
        self.stops.iter().map(|s| s.zone.as_str()).collect()
    }

    /// Number of distinct zones visited.
    pub fn distinct_zone_count(&self) -> usize {
        distinct_zones(self.stops.iter())
    }
}

/// Finds every route that visits all `stops` within `distance_cap`.
///
/// Routes are returned in discovery order: at each depth candidates are
/// tried in input order. An infeasible stop set yields an empty list.
///
/// # Example
///
/// ```
/// use u_delivery::models::Stop;
/// use u_delivery::search::find_routes;
///
/// let stops = vec![Stop::new("C1", "A", 5), Stop::new("C2", "B", 3)];
/// let routes = find_routes(&stops, 10);
/// assert_eq!(routes.len(), 2);
/// assert_eq!(routes[0].ids(), vec!["C1", "C2"]);
/// assert!(find_routes(&stops, 7).is_empty());
/// ```
pub fn find_routes(stops: &[Stop], distance_cap: i64) -> Vec<Route> {
    let mut search = RouteSearch {
        stops,
        distance_cap,
        path: Vec::with_capacity(stops.len()),
        used: vec![false; stops.len()],
        routes: Vec::new(),
    };
    search.extend(0);

    debug!(
        stops = stops.len(),
        distance_cap,
        routes = search.routes.len(),
        "route search finished"
    );
    search.routes
}

struct RouteSearch<'a> {
    stops: &'a [Stop],
    distance_cap: i64,
    /// Indices of the stops on the current prefix.
    path: Vec<usize>,
    used: Vec<bool>,
    routes: Vec<Route>,
}

impl RouteSearch<'_> {
    fn extend(&mut self, distance: i64) {
        if self.path.len() == self.stops.len() {
            self.accept(distance);
            return;
        }

        for i in 0..self.stops.len() {
            if self.used[i] || !self.can_append(i, distance) {
                continue;
            }

            self.path.push(i);
            self.used[i] = true;
            self.extend(distance + self.stops[i].leg_distance);
            self.used[i] = false;
            self.path.pop();
        }
    }

    /// Distance cap and zone-run check for appending stop `i`.
    fn can_append(&self, i: usize, distance: i64) -> bool {
        let candidate = &self.stops[i];
        if distance + candidate.leg_distance > self.distance_cap {
            return false;
        }

        if self.path.len() < MAX_ZONE_RUN {
            return true;
        }
        let tail = &self.path[self.path.len() - MAX_ZONE_RUN..];
        !tail.iter().all(|&p| self.stops[p].zone == candidate.zone)
    }

    fn accept(&mut self, distance: i64) {
        let stops = self.path.iter().map(|&i| &self.stops[i]);
        if distinct_zones(stops) < MIN_DISTINCT_ZONES {
            return;
        }

        self.routes.push(Route {
            stops: self.path.iter().map(|&i| self.stops[i].clone()).collect(),
            total_distance: distance,
        });
    }
}

fn distinct_zones<'a>(stops: impl Iterator<Item = &'a Stop>) -> usize {
    stops.map(|s| s.zone.as_str()).collect::<HashSet<_>>().len()
}
