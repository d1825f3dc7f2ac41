//! Delivery and cooking task models.
//!
//! A [`Task`] is a pending delivery with a time window: it can be picked
//! up from `ready_time` on and should arrive by `deadline`. A
//! [`CookTask`] is a kitchen order that occupies the stove for a fixed
//! `duration`.
//!
//! # Time Representation
//! All times are integer units relative to the start of the run (t=0).
//! The consumer defines the unit (minutes, slots, ...).

use serde::{Deserialize, Serialize};

/// Anything that can be ordered by the dispatching layer.
pub trait Job {
    /// Unique identifier within the input list.
    fn id(&self) -> &str;
}

/// A delivery order with a release (ready) time and a deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Earliest time the order can be picked up.
    pub ready_time: i64,
    /// Latest acceptable completion time.
    pub deadline: i64,
}

impl Task {
    /// Creates a task that is ready at t=0 with the given deadline.
    pub fn new(id: impl Into<String>, deadline: i64) -> Self {
        Self {
            id: id.into(),
            ready_time: 0,
            deadline,
        }
    }

    /// Sets the ready (release) time.
    pub fn with_ready_time(mut self, ready_time: i64) -> Self {
        self.ready_time = ready_time;
        self
    }

    /// Sets the deadline.
    pub fn with_deadline(mut self, deadline: i64) -> Self {
        self.deadline = deadline;
        self
    }

    /// Length of the window between ready time and deadline.
    pub fn window(&self) -> i64 {
        self.deadline - self.ready_time
    }
}

impl Job for Task {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A kitchen order with a fixed cooking duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookTask {
    /// Unique order identifier.
    pub id: String,
    /// Cooking time (> 0).
    pub duration: i64,
}

impl CookTask {
    /// Creates a cooking task.
    pub fn new(id: impl Into<String>, duration: i64) -> Self {
        Self {
            id: id.into(),
            duration,
        }
    }
}

impl Job for CookTask {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_builder() {
        let task = Task::new("P1", 8).with_ready_time(2);
        assert_eq!(task.id, "P1");
        assert_eq!(task.ready_time, 2);
        assert_eq!(task.deadline, 8);
        assert_eq!(task.window(), 6);
        assert_eq!(Job::id(&task), "P1");
    }

    #[test]
    fn test_task_with_deadline() {
        let task = Task::new("P1", 8).with_deadline(3);
        assert_eq!(task.deadline, 3);
        assert_eq!(task.ready_time, 0);
    }

    #[test]
    fn test_cook_task() {
        let task = CookTask::new("P4", 3);
        assert_eq!(task.duration, 3);
        assert_eq!(Job::id(&task), "P4");
    }

    #[test]
    fn test_task_serde_field_names() {
        let json = serde_json::to_value(Task::new("P3", 4).with_ready_time(1)).unwrap();
        assert_eq!(json["id"], "P3");
        assert_eq!(json["ready_time"], 1);
        assert_eq!(json["deadline"], 4);
    }
}
