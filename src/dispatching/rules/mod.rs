//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Due-date**: EDD
//! - **Release-date**: ERD
//! - **Time-based**: SPT
//!
//! # Score Convention
//! All rules return lower scores for higher priority jobs.
//!
//! # References
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Jackson (1955), Smith (1956)

use super::{DispatchingRule, RuleScore};
use crate::models::{CookTask, Task};

/// Earliest Due Date.
///
/// Prioritizes deliveries with earlier deadlines.
///
/// # Reference
/// Jackson (1955), optimal for minimizing maximum lateness on a single
/// machine.
#[derive(Debug, Clone, Copy)]
pub struct Edd;

impl DispatchingRule<Task> for Edd {
    fn name(&self) -> &'static str {
        "EDD"
    }

    fn evaluate(&self, task: &Task) -> RuleScore {
        task.deadline
    }

    fn description(&self) -> &'static str {
        "Earliest Due Date"
    }
}

/// Earliest Release Date.
///
/// Prioritizes deliveries that can be picked up sooner. Used as the
/// tie-breaker behind [`Edd`].
#[derive(Debug, Clone, Copy)]
pub struct Erd;

impl DispatchingRule<Task> for Erd {
    fn name(&self) -> &'static str {
        "ERD"
    }

    fn evaluate(&self, task: &Task) -> RuleScore {
        task.ready_time
    }

    fn description(&self) -> &'static str {
        "Earliest Release Date"
    }
}

/// Shortest Processing Time.
///
/// Prioritizes orders with shorter cooking time.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule<CookTask> for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, task: &CookTask) -> RuleScore {
        task.duration
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}
