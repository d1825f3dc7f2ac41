//! Rule engine for multi-criteria dispatching.
//!
//! Composes dispatching rules lexicographically: the first rule decides,
//! later rules only break its ties, and a final tie-breaker settles jobs
//! that every rule scores equally.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, RuleScore};
use crate::models::Job;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep the input order (stable sort).
    #[default]
    InputOrder,
    /// Deterministic by job ID (lexicographic).
    ById,
}

/// A composable rule engine for job prioritization.
///
/// # Example
/// ```
/// use u_delivery::dispatching::{rules, RuleEngine};
/// use u_delivery::models::CookTask;
///
/// let engine = RuleEngine::new().with_rule(rules::Spt);
/// let tasks = vec![CookTask::new("slow", 12), CookTask::new("quick", 3)];
/// assert_eq!(engine.select_best(&tasks), Some(1));
/// ```
pub struct RuleEngine<J> {
    rules: Vec<Arc<dyn DispatchingRule<J>>>,
    /// Consulted after every primary rule, regardless of insertion order.
    tie_breakers: Vec<Arc<dyn DispatchingRule<J>>>,
    tie_breaker: TieBreaker,
}

impl<J: Job> RuleEngine<J> {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breakers: Vec::new(),
            tie_breaker: TieBreaker::InputOrder,
        }
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule<J> + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted only when every primary rule
    /// and every earlier tie-breaker ties.
    pub fn with_tie_breaker<R: DispatchingRule<J> + 'static>(mut self, rule: R) -> Self {
        self.tie_breakers.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.ordered_rules().map(|r| r.name()).collect()
    }

    /// Sorts jobs by priority (highest priority first).
    ///
    /// Returns indices into the original slice. The sort is stable, so
    /// with [`TieBreaker::InputOrder`] fully tied jobs keep their input
    /// order.
    pub fn sort_indices(&self, jobs: &[J]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..jobs.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&jobs[a], &jobs[b]));
        indices
    }

    /// Returns the index of the highest-priority job.
    pub fn select_best(&self, jobs: &[J]) -> Option<usize> {
        self.sort_indices(jobs).first().copied()
    }

    /// Evaluates a single job and returns the score from each rule.
    pub fn evaluate(&self, job: &J) -> Vec<RuleScore> {
        self.ordered_rules().map(|r| r.evaluate(job)).collect()
    }

    fn ordered_rules(&self) -> impl Iterator<Item = &Arc<dyn DispatchingRule<J>>> {
        self.rules.iter().chain(self.tie_breakers.iter())
    }

    fn compare(&self, a: &J, b: &J) -> Ordering {
        for rule in self.ordered_rules() {
            let ord = rule.evaluate(a).cmp(&rule.evaluate(b));
            if ord != Ordering::Equal {
                return ord;
            }
        }

        match self.tie_breaker {
            TieBreaker::InputOrder => Ordering::Equal,
            TieBreaker::ById => a.id().cmp(b.id()),
        }
    }
}

impl<J: Job> Default for RuleEngine<J> {
    fn default() -> Self {
        Self::new()
    }
}

impl<J> Clone for RuleEngine<J> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
            tie_breakers: self.tie_breakers.clone(),
            tie_breaker: self.tie_breaker,
        }
    }
}

impl<J> std::fmt::Debug for RuleEngine<J> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .field(
                "tie_breakers",
                &self.tie_breakers.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
