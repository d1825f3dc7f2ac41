//! Single-server delivery scheduler (Earliest Deadline First).
//!
//! # Algorithm
//!
//! 1. Sort tasks by deadline, breaking ties by ready time (stable).
//! 2. Simulate one driver: each delivery starts at
//!    `max(clock, ready_time)` and takes exactly one time unit.
//! 3. Record tardiness `max(0, finish - deadline)` per task.
//!
//! With unit service times and a common ready time EDF minimizes the
//! maximum lateness, and it meets every deadline whenever some order
//! does. It does not minimize the late count in general.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the simulation.
//!
//! # Reference
//! Jackson (1955); Pinedo (2016), "Scheduling", Ch. 3.2

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::dispatching::{rules, RuleEngine};
use crate::models::Task;

/// Fixed service time of a single delivery.
pub const UNIT_SERVICE_TIME: i64 = 1;

/// Outcome of a single delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    OnTime,
    Late,
}

/// Simulated timing of one delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledDelivery {
    /// Delivered task ID.
    pub task_id: String,
    /// Ready time copied from the task.
    pub ready_time: i64,
    /// Deadline copied from the task.
    pub deadline: i64,
    /// Time the driver starts the delivery.
    pub start: i64,
    /// Time the delivery completes.
    pub finish: i64,
    /// `max(0, finish - deadline)`.
    pub tardiness: i64,
    /// On time iff tardiness is zero.
    pub status: DeliveryStatus,
}

impl ScheduledDelivery {
    /// Whether the delivery met its deadline.
    pub fn is_on_time(&self) -> bool {
        self.status == DeliveryStatus::OnTime
    }
}

/// Result of the EDF scheduler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliverySchedule {
    /// Task IDs in delivery order.
    pub order: Vec<String>,
    /// Number of deliveries finishing by their deadline.
    pub on_time_count: usize,
    /// Number of deliveries finishing after their deadline.
    pub late_count: usize,
    /// Sum of tardiness across all deliveries.
    pub total_tardiness: i64,
    /// Per-task detail, in delivery order.
    pub entries: Vec<ScheduledDelivery>,
}

impl DeliverySchedule {
    /// Finds the entry for a given task.
    pub fn entry_for(&self, task_id: &str) -> Option<&ScheduledDelivery> {
        self.entries.iter().find(|e| e.task_id == task_id)
    }

    /// Completion time of the last delivery (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.entries.last().map(|e| e.finish).unwrap_or(0)
    }

    /// Number of scheduled deliveries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Single-driver delivery scheduler.
///
/// Uses EDD with an ERD tie-breaker by default; a different rule engine
/// can be supplied to compare policies under the same simulation.
///
/// # Example
///
/// ```
/// use u_delivery::models::Task;
/// use u_delivery::scheduler::DeliveryScheduler;
///
/// let tasks = vec![
///     Task::new("P1", 5),
///     Task::new("P3", 4).with_ready_time(1),
/// ];
/// let schedule = DeliveryScheduler::new().schedule(&tasks);
/// assert_eq!(schedule.order, vec!["P3", "P1"]);
/// assert_eq!(schedule.on_time_count, 2);
/// ```
#[derive(Debug, Clone)]
pub struct DeliveryScheduler {
    rule_engine: RuleEngine<Task>,
}

impl DeliveryScheduler {
    /// Creates an EDF scheduler (deadline, then ready time).
    pub fn new() -> Self {
        Self {
            rule_engine: RuleEngine::new()
                .with_rule(rules::Edd)
                .with_tie_breaker(rules::Erd),
        }
    }

    /// Replaces the ordering policy.
    pub fn with_rule_engine(mut self, engine: RuleEngine<Task>) -> Self {
        self.rule_engine = engine;
        self
    }

    /// Orders and simulates the deliveries.
    pub fn schedule(&self, tasks: &[Task]) -> DeliverySchedule {
        let order = self.rule_engine.sort_indices(tasks);
        let sequence: Vec<&Task> = order.iter().map(|&i| &tasks[i]).collect();
        let result = simulate(&sequence);

        debug!(
            tasks = tasks.len(),
            on_time = result.on_time_count,
            late = result.late_count,
            total_tardiness = result.total_tardiness,
            "delivery schedule built"
        );
        result
    }
}

impl Default for DeliveryScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Orders deliveries by Earliest Deadline First and simulates one driver.
///
/// Equal deadlines are resolved by ready time; full ties keep their
/// input order. Empty input yields an empty schedule.
pub fn schedule(tasks: &[Task]) -> DeliverySchedule {
    DeliveryScheduler::new().schedule(tasks)
}

/// Simulates a single driver serving `sequence` in the given order.
pub(crate) fn simulate(sequence: &[&Task]) -> DeliverySchedule {
    let mut result = DeliverySchedule::default();
    let mut clock: i64 = 0;

    for task in sequence {
        let start = clock.max(task.ready_time);
        let finish = start + UNIT_SERVICE_TIME;
        clock = finish;

        let tardiness = (finish - task.deadline).max(0);
        let status = if tardiness == 0 {
            result.on_time_count += 1;
            DeliveryStatus::OnTime
        } else {
            result.late_count += 1;
            DeliveryStatus::Late
        };
        result.total_tardiness += tardiness;

        trace!(task = %task.id, start, finish, tardiness, "delivery simulated");

        result.order.push(task.id.clone());
        result.entries.push(ScheduledDelivery {
            task_id: task.id.clone(),
            ready_time: task.ready_time,
            deadline: task.deadline,
            start,
            finish,
            tardiness,
            status,
        });
    }

    result
}
