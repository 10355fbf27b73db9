use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::models::{PartRequest, PartStatus};
use crate::stages::{classify_part, PartStage};

use super::Primary;

/// Aggregate view of the part requests attached to a repair (or to
/// every repair on one machine serial).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartSummary {
    /// Included part requests (deleted and cancelled ones excluded).
    pub total: usize,
    /// Included requests not yet closed.
    pub open_total: usize,
    /// Count per stage; every stage key is present, zeros included.
    pub by_stage: BTreeMap<PartStage, usize>,
    /// The chip payload: most-urgent stage with a non-zero count.
    pub primary: Primary,
}

impl PartSummary {
    pub fn empty() -> Self {
        summarize_parts(&[])
    }
}

/// Summarizes a collection of part requests.
///
/// Deleted and cancelled requests are excluded before anything is
/// counted. Each remaining request is classified by the first matching
/// rule in [`crate::stages::PART_STAGE_RULES`]; the primary stage is
/// the earliest open stage with a non-zero count, falling back to
/// `closed` when everything is done.
pub fn summarize_parts(parts: &[PartRequest]) -> PartSummary {
    let valid: Vec<&PartRequest> = parts
        .iter()
        .filter(|p| !p.is_deleted && p.status != PartStatus::Cancelled)
        .collect();
    let total = valid.len();

    let mut by_stage: BTreeMap<PartStage, usize> =
        PartStage::iter().map(|stage| (stage, 0)).collect();

    for part in &valid {
        if let Some(stage) = classify_part(part) {
            *by_stage.entry(stage).or_insert(0) += 1;
        }
    }

    let closed = by_stage.get(&PartStage::Closed).copied().unwrap_or(0);
    let open_total = total - closed;

    let primary = if total == 0 {
        Primary::no_parts()
    } else {
        let open_stage = PartStage::iter()
            .filter(|stage| *stage != PartStage::Closed)
            .find(|stage| by_stage.get(stage).copied().unwrap_or(0) > 0);
        match open_stage {
            Some(stage) => Primary::new(stage.to_string(), by_stage[&stage], total),
            None => Primary::new(PartStage::Closed.to_string(), closed, total),
        }
    };

    PartSummary {
        total,
        open_total,
        by_stage,
        primary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(id: &str, status: PartStatus) -> PartRequest {
        PartRequest::new(id, "R1", status)
    }

    #[test]
    fn empty_input_yields_all_zero_summary() {
        let summary = summarize_parts(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.open_total, 0);
        assert_eq!(summary.by_stage.len(), 5);
        assert!(summary.by_stage.values().all(|&count| count == 0));
        assert_eq!(summary.primary, Primary::new("none", 0, 0));
    }

    #[test]
    fn quoted_with_order_counts_as_awaiting_arrival() {
        let parts = [
            part("P1", PartStatus::Quoted).with_order("O1"),
            part("P2", PartStatus::Quoted),
        ];
        let summary = summarize_parts(&parts);

        assert_eq!(summary.by_stage[&PartStage::AwaitingArrival], 1);
        assert_eq!(summary.by_stage[&PartStage::AwaitingOrder], 1);
        // awaiting-order precedes awaiting-arrival in the urgency scan
        assert_eq!(summary.primary, Primary::new("awaiting-order", 1, 2));
    }

    #[test]
    fn deleted_and_cancelled_requests_are_excluded() {
        let mut deleted = part("P3", PartStatus::Replaced);
        deleted.is_deleted = true;
        let parts = [
            part("P1", PartStatus::Requested),
            part("P2", PartStatus::Cancelled),
            deleted,
        ];
        let summary = summarize_parts(&parts);

        assert_eq!(summary.total, 1);
        assert_eq!(summary.open_total, 1);
        assert_eq!(summary.primary, Primary::new("awaiting-quote", 1, 1));
    }

    #[test]
    fn all_replaced_falls_back_to_closed_primary() {
        let parts = [part("P1", PartStatus::Replaced), part("P2", PartStatus::Replaced)];
        let summary = summarize_parts(&parts);

        assert_eq!(summary.total, 2);
        assert_eq!(summary.open_total, 0);
        assert_eq!(summary.primary, Primary::new("closed", 2, 2));
    }

    #[test]
    fn totals_reconcile_with_stage_counts() {
        let parts = [
            part("P1", PartStatus::Requested),
            part("P2", PartStatus::Quoted),
            part("P3", PartStatus::Ordered),
            part("P4", PartStatus::Arrived),
            part("P5", PartStatus::Replaced),
        ];
        let summary = summarize_parts(&parts);

        assert_eq!(summary.total, summary.by_stage.values().sum::<usize>());
        assert_eq!(
            summary.open_total,
            summary.total - summary.by_stage[&PartStage::Closed]
        );
    }

    #[test]
    fn summarizing_twice_is_idempotent() {
        let parts = [
            part("P1", PartStatus::Quoted).with_order("O1"),
            part("P2", PartStatus::Arrived),
        ];
        assert_eq!(summarize_parts(&parts), summarize_parts(&parts));
    }

    #[test]
    fn by_stage_serializes_with_kebab_case_keys() {
        let summary = summarize_parts(&[part("P1", PartStatus::Requested)]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["by_stage"]["awaiting-quote"], 1);
        assert_eq!(json["by_stage"]["closed"], 0);
        assert_eq!(json["primary"]["label"], "awaiting-quote");
    }
}
