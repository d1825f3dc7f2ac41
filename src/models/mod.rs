//! Delivery planning domain models.
//!
//! Plain immutable records consumed by the engines. Every record is
//! serde-serializable and built with `new(..)` plus `with_*` setters.
//!
//! # Domain Mappings
//!
//! | u-delivery | Engine | Meaning |
//! |------------|--------|---------|
//! | Task | Scheduler (EDF) | Order with pickup window |
//! | CookTask | Scheduler (SPT) | Kitchen order |
//! | Stop | Route search | Customer on the run |
//! | Offer / Basket | Combination search | Promotion / checkout |
//! | CargoItem | Capacity optimizer | Item for the bag |
//! | FuelStation | Detour ranking | Refuelling option |

mod cargo;
mod location;
mod offer;
mod stop;
mod task;

pub use cargo::CargoItem;
pub use location::{FuelStation, Point};
pub use offer::{Basket, CategoryScope, DayType, Offer, OfferCondition, UserStatus};
pub use stop::Stop;
pub use task::{CookTask, Job, Task};
