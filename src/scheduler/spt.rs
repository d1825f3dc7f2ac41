//! Cooking order by Shortest Processing Time.
//!
//! Orders kitchen tasks so that the sum of completion times (the total
//! time drivers spend waiting for food) is minimal.
//!
//! # Reference
//! Smith (1956), "Various optimizers for single-stage production"

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dispatching::{rules, RuleEngine};
use crate::models::CookTask;

/// Completion time of one cooking task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub task_id: String,
    pub completion_time: i64,
}

/// Result of [`schedule_by_duration`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookingPlan {
    /// Task IDs in cooking order.
    pub order: Vec<String>,
    /// Sum of all completion times.
    pub total_completion_time: i64,
    /// Per-task completion times, in cooking order.
    pub completions: Vec<Completion>,
}

impl CookingPlan {
    /// Mean completion time (0.0 for an empty plan).
    pub fn mean_completion_time(&self) -> f64 {
        if self.completions.is_empty() {
            0.0
        } else {
            self.total_completion_time as f64 / self.completions.len() as f64
        }
    }
}

/// Orders cooking tasks shortest-first and accumulates completion times.
///
/// Equal durations keep their input order.
///
/// # Example
///
/// ```
/// use u_delivery::models::CookTask;
/// use u_delivery::scheduler::schedule_by_duration;
///
/// let tasks = vec![CookTask::new("P1", 12), CookTask::new("P4", 3)];
/// let plan = schedule_by_duration(&tasks);
/// assert_eq!(plan.order, vec!["P4", "P1"]);
/// assert_eq!(plan.total_completion_time, 3 + 15);
/// ```
pub fn schedule_by_duration(tasks: &[CookTask]) -> CookingPlan {
    let engine = RuleEngine::new().with_rule(rules::Spt);
    let mut plan = CookingPlan::default();
    let mut clock: i64 = 0;

    for idx in engine.sort_indices(tasks) {
        let task = &tasks[idx];
        clock += task.duration;
        plan.total_completion_time += clock;
        plan.order.push(task.id.clone());
        plan.completions.push(Completion {
            task_id: task.id.clone(),
            completion_time: clock,
        });
    }

    debug!(
        tasks = tasks.len(),
        total_completion_time = plan.total_completion_time,
        "cooking plan built"
    );
    plan
}
