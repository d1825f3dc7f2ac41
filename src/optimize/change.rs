//! Minimum-count exact top-up (unbounded change-making).
//!
//! Finds the fewest denominations, each usable any number of times, that
//! sum exactly to the target.
//!
//! # Algorithm
//!
//! 1. Divide target and denominations by their greatest common divisor.
//!    This only shrinks the table; it never changes the answer.
//! 2. `dp[s]` = fewest coins summing to `s`, `None` when unreachable.
//!    `dp[s] = min over d <= s of dp[s - d] + 1`, remembering the
//!    denomination that achieved it. Denominations are tried in input
//!    order and only a strictly smaller count replaces a cell.
//! 3. Walk back from the target through the remembered choices.
//!
//! # Complexity
//! O(target / g * k) time, O(target / g) space, with `g` the common
//! divisor and `k` the number of denominations.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::InfeasibleTarget;

/// A minimum-count decomposition of the target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    /// Number of denominations used.
    pub count: usize,
    /// Denominations used, in reconstruction order.
    pub denominations: Vec<u64>,
}

impl Change {
    /// Sum of the used denominations.
    pub fn total(&self) -> u64 {
        self.denominations.iter().sum()
    }
}

/// Finds the fewest `denominations` summing exactly to `target`.
///
/// A target of zero needs no transactions. Zero-valued denominations
/// are ignored.
///
/// # Errors
/// Returns [`InfeasibleTarget`] when no combination hits the target.
/// It is also returned when `target` divided by the common divisor of
/// the denominations does not fit in `usize` (only possible on 32-bit
/// platforms), since no table can be built for it there.
///
/// # Example
///
/// ```
/// use u_delivery::optimize::min_transactions;
///
/// let change = min_transactions(&[10_000, 25_000, 50_000], 75_000).unwrap();
/// assert_eq!(change.count, 2);
/// assert_eq!(change.total(), 75_000);
///
/// assert!(min_transactions(&[2, 4], 1).is_err());
/// ```
pub fn min_transactions(denominations: &[u64], target: u64) -> Result<Change, InfeasibleTarget> {
    let coins: Vec<u64> = denominations.iter().copied().filter(|&d| d > 0).collect();
    let factor = coins.iter().fold(target, |g, &d| gcd(g, d));
    if target == 0 || factor == 0 {
        return Ok(Change::default());
    }

    let scaled_target =
        usize::try_from(target / factor).map_err(|_| InfeasibleTarget::new(target))?;
    let scaled: Vec<usize> = coins
        .iter()
        .map(|&d| usize::try_from(d / factor).unwrap_or(usize::MAX))
        .collect();

    let mut dp: Vec<Option<usize>> = vec![None; scaled_target + 1];
    let mut choice: Vec<usize> = vec![0; scaled_target + 1];
    dp[0] = Some(0);

    for s in 1..=scaled_target {
        for &d in &scaled {
            if d > s {
                continue;
            }
            let Some(prev) = dp[s - d] else {
                continue;
            };
            match dp[s] {
                Some(current) if current <= prev + 1 => {}
                _ => {
                    dp[s] = Some(prev + 1);
                    choice[s] = d;
                }
            }
        }
    }

    let Some(count) = dp[scaled_target] else {
        debug!(target, factor, "top-up target unreachable");
        return Err(InfeasibleTarget::new(target));
    };

    let mut used = Vec::with_capacity(count);
    let mut s = scaled_target;
    while s > 0 {
        let d = choice[s];
        used.push(d as u64 * factor);
        s -= d;
    }

    debug!(target, factor, count, "top-up solved");
    Ok(Change {
        count,
        denominations: used,
    })
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}
