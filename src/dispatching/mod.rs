//! Dispatching rules and rule engine for ordering jobs.
//!
//! Provides priority-based dispatching rules (EDD, ERD, SPT) and a
//! composable rule engine that applies them in sequence, falling through
//! to the next rule only on ties.
//!
//! # Usage
//!
//! ```
//! use u_delivery::dispatching::{rules, RuleEngine};
//! use u_delivery::models::Task;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Edd)
//!     .with_tie_breaker(rules::Erd);
//!
//! let tasks = vec![Task::new("late", 9), Task::new("early", 3)];
//! assert_eq!(engine.sort_indices(&tasks), vec![1, 0]);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod engine;
pub mod rules;

pub use engine::{RuleEngine, TieBreaker};

use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (scheduled first). Scores are integers
/// so that rule comparisons stay exact.
pub type RuleScore = i64;

/// A dispatching rule that evaluates the priority of a job of type `J`.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait DispatchingRule<J>: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "EDD").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a job. Lower = earlier.
    fn evaluate(&self, job: &J) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
