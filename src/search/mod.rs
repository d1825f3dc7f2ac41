//! Backtracking searches over small candidate sets.
//!
//! - [`find_routes`]: all full orderings of the stops under a distance
//!   cap and zone rules.
//! - [`find_combinations`]: all stackable sets of at most two offers
//!   under a discount cap and condition-conflict rule.
//!
//! Both searches check constraints before descending and materialize a
//! fresh result only when a candidate is accepted, so recorded results
//! never alias the working path.
//!
//! # Reference
//! Knuth (2011), "The Art of Computer Programming", Vol. 4A, Ch. 7.2.2

mod offers;
mod route;

pub use offers::{
    discount_cap, find_combinations, is_applicable, OfferCombination, OfferSearch,
    MAX_STACKED_OFFERS,
};
pub use route::{find_routes, Route, MAX_ZONE_RUN, MIN_DISTINCT_ZONES};
