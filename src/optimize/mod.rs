//! Dynamic-programming optimizers.
//!
//! - [`optimize`]: 0/1 knapsack over the delivery bag.
//! - [`min_transactions`]: fewest denominations summing to a top-up target.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", 3rd ed., Ch. 15-16

mod change;
mod err;
mod knapsack;

pub use change::{min_transactions, Change};
pub use err::InfeasibleTarget;
pub use knapsack::{optimize, optimize_with_table, CargoSelection, KnapsackTable};
