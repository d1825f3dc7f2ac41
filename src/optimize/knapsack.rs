//! 0/1 knapsack for the delivery bag.
//!
//! Chooses the subset of items with the largest total value whose total
//! volume fits the bag. Each item is taken at most once.
//!
//! # Algorithm
//!
//! Bottom-up table `dp[i][w]`: best value using the first `i` items with
//! budget `w`.
//!
//! ```text
//! dp[0][w] = 0
//! dp[i][w] = dp[i-1][w]                                  if vol_i > w
//!          = max(dp[i-1][w], dp[i-1][w - vol_i] + val_i)  otherwise
//! ```
//!
//! The selection is recovered by walking `i` downwards at `w = capacity`:
//! a row that differs from the one above means item `i` was taken.
//!
//! # Complexity
//! O(n * capacity) time and space.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::CargoItem;

/// Best packing found by [`optimize`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoSelection {
    /// Total value of the chosen items.
    pub best_value: i64,
    /// Chosen items, in input order.
    pub chosen: Vec<CargoItem>,
    /// Total volume of the chosen items.
    pub total_volume: usize,
}

impl CargoSelection {
    /// Capacity left unused.
    pub fn remaining_capacity(&self, capacity: usize) -> usize {
        capacity.saturating_sub(self.total_volume)
    }

    /// IDs of the chosen items.
    pub fn ids(&self) -> Vec<&str> {
        self.chosen.iter().map(|i| i.id.as_str()).collect()
    }
}

/// The filled DP table, `(items + 1) x (capacity + 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnapsackTable {
    columns: usize,
    cells: Vec<i64>,
}

impl KnapsackTable {
    fn new(rows: usize, columns: usize) -> Self {
        Self {
            columns,
            cells: vec![0; rows * columns],
        }
    }

    /// Number of rows (items + 1).
    pub fn rows(&self) -> usize {
        self.cells.len() / self.columns
    }

    /// Number of columns (capacity + 1).
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Best value using the first `i` items with budget `w`.
    ///
    /// # Panics
    /// Panics if `i` or `w` is outside the table.
    pub fn value(&self, i: usize, w: usize) -> i64 {
        assert!(w < self.columns, "budget {w} outside table");
        self.cells[i * self.columns + w]
    }

    fn set(&mut self, i: usize, w: usize, value: i64) {
        self.cells[i * self.columns + w] = value;
    }
}

/// Selects the value-maximizing subset of `items` that fits `capacity`.
///
/// # Example
///
/// ```
/// use u_delivery::models::CargoItem;
/// use u_delivery::optimize::optimize;
///
/// let items = vec![
///     CargoItem::new("I1", 3, 30),
///     CargoItem::new("I2", 2, 25),
///     CargoItem::new("I3", 2, 20),
/// ];
/// let best = optimize(&items, 4);
/// assert_eq!(best.best_value, 45);
/// assert_eq!(best.ids(), vec!["I2", "I3"]);
/// ```
pub fn optimize(items: &[CargoItem], capacity: usize) -> CargoSelection {
    optimize_with_table(items, capacity).0
}

/// Like [`optimize`], but also returns the filled DP table.
pub fn optimize_with_table(items: &[CargoItem], capacity: usize) -> (CargoSelection, KnapsackTable) {
    let n = items.len();
    let mut dp = KnapsackTable::new(n + 1, capacity + 1);

    for (i, item) in items.iter().enumerate().map(|(i, item)| (i + 1, item)) {
        for w in 0..=capacity {
            let skip = dp.value(i - 1, w);
            let best = if item.volume > w {
                skip
            } else {
                skip.max(dp.value(i - 1, w - item.volume) + item.value)
            };
            dp.set(i, w, best);
        }
    }

    let best_value = dp.value(n, capacity);

    let mut chosen = Vec::new();
    let mut w = capacity;
    for i in (1..=n).rev() {
        if dp.value(i, w) != dp.value(i - 1, w) {
            let item = &items[i - 1];
            chosen.push(item.clone());
            w -= item.volume;
        }
    }
    chosen.reverse();

    let total_volume = chosen.iter().map(|i| i.volume).sum();

    debug!(
        items = n,
        capacity,
        best_value,
        chosen = chosen.len(),
        "knapsack solved"
    );

    (
        CargoSelection {
            best_value,
            chosen,
            total_volume,
        },
        dp,
    )
}
