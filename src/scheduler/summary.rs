//! Generation summary.
//!
//! Reports how many candidate tuples the Cartesian product contained and
//! how many were accepted. Informational only: it never affects which
//! schedules are produced.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total considered | Product of per-course section counts |
//! | Accepted | Number of valid schedules |
//! | Acceptance | accepted / total × 100, or no data when total is 0 |

use serde::Serialize;
use std::fmt;

/// Counts reported alongside generated schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    /// Candidate tuples in the full product (saturates at `u64::MAX`).
    pub total_considered: u64,
    /// Schedules accepted.
    pub accepted: u64,
}

impl GenerationSummary {
    /// Computes the summary from per-course section counts and the accepted count.
    ///
    /// An empty `group_sizes` is the empty product, which has one (empty) tuple.
    pub fn calculate(group_sizes: &[usize], accepted: usize) -> Self {
        let total_considered = group_sizes
            .iter()
            .fold(1u64, |acc, &n| acc.saturating_mul(n as u64));
        Self {
            total_considered,
            accepted: accepted as u64,
        }
    }

    /// Accepted percentage of the product, `None` when nothing was considered.
    pub fn acceptance_percent(&self) -> Option<f64> {
        if self.total_considered == 0 {
            None
        } else {
            Some(self.accepted as f64 / self.total_considered as f64 * 100.0)
        }
    }

    /// Whether at least one schedule was accepted.
    pub fn has_valid_schedules(&self) -> bool {
        self.accepted > 0
    }
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.acceptance_percent() {
            Some(pct) => write!(
                f,
                "{}/{} ({pct:.2}%) valid semester schedules found out of all possible class combos.",
                self.accepted, self.total_considered
            ),
            None => write!(
                f,
                "{}/{} (no data) valid semester schedules found out of all possible class combos.",
                self.accepted, self.total_considered
            ),
        }
    }
}
