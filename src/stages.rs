//! Static status configuration: the part stage rules and the quote /
//! purchase order status vocabularies.
//!
//! Both tables are ordered, and the order is load-bearing. Part stage
//! rules are evaluated top-to-bottom with first-match-wins; vocabulary
//! order defines urgency precedence when picking a primary status
//! (earlier entries represent states needing more attention).

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::models::{PartRequest, PartStatus};

/// Enum representing the derived stage of a part request.
///
/// Declaration order is the canonical progression and doubles as the
/// urgency scan order for primary-status selection.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PartStage {
    AwaitingQuote,
    AwaitingOrder,
    AwaitingArrival,
    AwaitingReplacement,
    Closed,
}

/// One row of the part classification table.
pub struct StageRule {
    pub stage: PartStage,
    matches: fn(&PartRequest) -> bool,
}

impl StageRule {
    pub fn matches(&self, part: &PartRequest) -> bool {
        (self.matches)(part)
    }
}

/// Ordered classification rules for part requests, first match wins.
///
/// A quoted part with an order reference attached deliberately lands in
/// `AwaitingArrival`, not `AwaitingOrder`: once a quote carries an
/// order reference the order is conceptually placed. Keep the rule
/// order intact; the predicates overlap and only the evaluation order
/// disambiguates them.
pub static PART_STAGE_RULES: Lazy<[StageRule; 5]> = Lazy::new(|| {
    [
        StageRule {
            stage: PartStage::AwaitingQuote,
            matches: |p| p.status == PartStatus::Requested,
        },
        StageRule {
            stage: PartStage::AwaitingOrder,
            matches: |p| p.status == PartStatus::Quoted && !p.has_order_ref(),
        },
        StageRule {
            stage: PartStage::AwaitingArrival,
            matches: |p| {
                p.status == PartStatus::Ordered
                    || (p.status == PartStatus::Quoted && p.has_order_ref())
            },
        },
        StageRule {
            stage: PartStage::AwaitingReplacement,
            matches: |p| p.status == PartStatus::Arrived,
        },
        StageRule {
            stage: PartStage::Closed,
            matches: |p| p.status == PartStatus::Replaced,
        },
    ]
});

/// Classifies one part request against the rule table.
///
/// Returns `None` only for statuses excluded upstream (cancelled);
/// every included status matches exactly one rule.
pub fn classify_part(part: &PartRequest) -> Option<PartStage> {
    PART_STAGE_RULES
        .iter()
        .find(|rule| rule.matches(part))
        .map(|rule| rule.stage)
}

// Valid quote statuses, in urgency order
pub const QUOTE_STATUS_ORDER: &[&str] = &["draft", "submitted", "approved", "cancelled"];

// Valid purchase order statuses, in urgency order
pub const ORDER_STATUS_ORDER: &[&str] = &["created", "ordered", "arrived", "closed", "cancelled"];
