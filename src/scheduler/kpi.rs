//! Delivery schedule quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Latest completion time |
//! | Total Tardiness | Sum of max(0, finish - deadline) |
//! | Maximum Tardiness | Largest single delay |
//! | On-Time Rate | Fraction meeting deadlines |
//! | Avg Flow Time | Mean time from ready to completion |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::{Deserialize, Serialize};

use super::DeliverySchedule;

/// Delivery schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Makespan: latest completion time.
    pub makespan: i64,
    /// Sum of tardiness across all deliveries.
    pub total_tardiness: i64,
    /// Maximum tardiness of any single delivery.
    pub max_tardiness: i64,
    /// Fraction of deliveries completing on time (0.0..1.0).
    pub on_time_rate: f64,
    /// Average flow time: mean(finish - ready_time).
    pub avg_flow_time: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a simulated delivery schedule.
    pub fn calculate(schedule: &DeliverySchedule) -> Self {
        let count = schedule.entries.len();
        let mut total_tardiness: i64 = 0;
        let mut max_tardiness: i64 = 0;
        let mut total_flow_time: i64 = 0;

        for entry in &schedule.entries {
            total_tardiness += entry.tardiness;
            max_tardiness = max_tardiness.max(entry.tardiness);
            total_flow_time += entry.finish - entry.ready_time;
        }

        let on_time_rate = if count == 0 {
            1.0
        } else {
            schedule.on_time_count as f64 / count as f64
        };

        let avg_flow_time = if count == 0 {
            0.0
        } else {
            total_flow_time as f64 / count as f64
        };

        Self {
            makespan: schedule.makespan(),
            total_tardiness,
            max_tardiness,
            on_time_rate,
            avg_flow_time,
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_tardiness: i64, min_on_time_rate: f64) -> bool {
        self.max_tardiness <= max_tardiness && self.on_time_rate >= min_on_time_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;
    use crate::scheduler::schedule;

    #[test]
    fn test_kpi_basic() {
        let result = schedule(&[Task::new("J1", 5), Task::new("J2", 5)]);

        let kpi = ScheduleKpi::calculate(&result);
        assert_eq!(kpi.makespan, 2);
        assert_eq!(kpi.total_tardiness, 0);
        assert_eq!(kpi.max_tardiness, 0);
        assert!((kpi.on_time_rate - 1.0).abs() < 1e-10);
        assert!((kpi.avg_flow_time - 1.5).abs() < 1e-10); // (1+2)/2
    }

    #[test]
    fn test_kpi_tardiness() {
        let result = schedule(&[
            Task::new("J1", 1),
            Task::new("J2", 1), // finishes at 2 → tardy 1
            Task::new("J3", 1), // finishes at 3 → tardy 2
        ]);

        let kpi = ScheduleKpi::calculate(&result);
        assert_eq!(kpi.total_tardiness, 3);
        assert_eq!(kpi.max_tardiness, 2);
        assert!((kpi.on_time_rate - 1.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_flow_time_uses_ready_time() {
        // Ready at 4, starts at 4, finishes at 5 → flow 1
        let result = schedule(&[Task::new("J1", 9).with_ready_time(4)]);
        let kpi = ScheduleKpi::calculate(&result);
        assert!((kpi.avg_flow_time - 1.0).abs() < 1e-10);
        assert_eq!(kpi.makespan, 5);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&DeliverySchedule::default());
        assert_eq!(kpi.makespan, 0);
        assert_eq!(kpi.total_tardiness, 0);
        assert!((kpi.on_time_rate - 1.0).abs() < 1e-10);
        assert!((kpi.avg_flow_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_meets_thresholds() {
        let result = schedule(&[Task::new("J1", 1), Task::new("J2", 1)]);
        let kpi = ScheduleKpi::calculate(&result);

        assert!(kpi.meets_thresholds(1, 0.5));
        assert!(!kpi.meets_thresholds(0, 0.5));
        assert!(!kpi.meets_thresholds(1, 0.75));
    }
}
