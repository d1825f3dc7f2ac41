//! Planning toolkit for food-delivery drivers.
//!
//! Small, exact solvers for the everyday decisions of a delivery run:
//! which order to serve first, which route to drive, which offers to
//! stack, what fits in the bag and how to top up the wallet.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Task`, `CookTask`, `Stop`, `Offer`,
//!   `Basket`, `CargoItem`, `FuelStation`, `Point`
//! - **`dispatching`**: Priority rules (EDD, ERD, SPT) and a rule engine
//!   with tie-breakers
//! - **`scheduler`**: Earliest-deadline-first delivery schedule, SPT
//!   cooking plan, schedule KPIs
//! - **`search`**: Backtracking over routes and offer combinations
//! - **`optimize`**: Dynamic programming for bag packing (0/1 knapsack)
//!   and top-ups (change-making)
//! - **`detour`**: Fuel-stop ranking by extra distance
//! - **`demo_data`**: Sample instances
//!
//! Every engine is a pure function of its inputs. Results derive serde
//! traits so a host layer can ship them in any format.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Knuth (2011), "The Art of Computer Programming", Vol. 4A
//! - Cormen et al. (2009), "Introduction to Algorithms"

pub mod demo_data;
pub mod detour;
pub mod dispatching;
pub mod models;
pub mod optimize;
pub mod scheduler;
pub mod search;
