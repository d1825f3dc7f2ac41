//! Greedy delivery schedulers and KPI evaluation.
//!
//! # Algorithms
//!
//! - [`schedule`]: Earliest Deadline First over a single driver with
//!   unit service time; reports on-time/late classification per task.
//! - [`schedule_by_duration`]: Shortest Processing Time for the kitchen;
//!   minimizes total completion time. A different objective from EDF.
//!
//! # KPI
//!
//! `ScheduleKpi` computes makespan, tardiness, on-time rate and flow time.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4
//! - Baker & Trietsch (2019), "Principles of Sequencing and Scheduling"

mod edf;
mod kpi;
mod spt;

pub use edf::{
    schedule, DeliverySchedule, DeliveryScheduler, DeliveryStatus, ScheduledDelivery,
    UNIT_SERVICE_TIME,
};
pub use kpi::ScheduleKpi;
pub use spt::{schedule_by_duration, Completion, CookingPlan};
