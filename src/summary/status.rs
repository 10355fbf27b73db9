use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::StatusRecord;

use super::Primary;

/// Aggregate view of a vocabulary-status collection (quotes or
/// purchase orders) attached to a repair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    /// Included records (deleted ones excluded).
    pub total: usize,
    /// Count per literal status string. Seeded with every vocabulary
    /// entry at zero; unknown statuses are appended in first-seen
    /// order rather than dropped or normalized.
    pub by_status: IndexMap<String, usize>,
    /// The chip payload: first vocabulary entry with a non-zero count.
    pub primary: Primary,
}

impl StatusSummary {
    pub fn empty(vocabulary: &[&str]) -> Self {
        summarize_status::<crate::models::Quote>(&[], vocabulary)
    }
}

/// Summarizes status-bearing records against an ordered vocabulary.
///
/// Vocabulary order is urgency order: the primary status is the first
/// vocabulary entry with a non-zero count. When every record carries
/// an unknown status the first bucket with a non-zero count wins
/// instead (insertion order, so first-seen among unknowns).
pub fn summarize_status<T: StatusRecord>(items: &[T], vocabulary: &[&str]) -> StatusSummary {
    let valid: Vec<&T> = items.iter().filter(|x| !x.is_deleted()).collect();
    let total = valid.len();

    let mut by_status: IndexMap<String, usize> =
        vocabulary.iter().map(|s| (s.to_string(), 0)).collect();

    for item in &valid {
        let status = item.status().trim().to_string();
        *by_status.entry(status).or_insert(0) += 1;
    }

    let primary = if total == 0 {
        Primary::not_created()
    } else {
        let picked = vocabulary
            .iter()
            .copied()
            .find(|s| by_status.get(*s).copied().unwrap_or(0) > 0)
            .or_else(|| {
                by_status
                    .iter()
                    .find(|(_, &count)| count > 0)
                    .map(|(label, _)| label.as_str())
            });
        match picked {
            Some(label) => {
                let count = by_status.get(label).copied().unwrap_or(total);
                Primary::new(label, count, total)
            }
            // Unreachable when total > 0, kept as the defensive default.
            None => Primary::new(super::NOT_CREATED_LABEL, total, total),
        }
    };

    StatusSummary {
        total,
        by_status,
        primary,
    }
}
