// Data contracts consumed by the linkage engine. All of these are
// owned by external services; the engine reads them and derives
// summaries, it never creates or mutates them.
pub mod part_request;
pub mod purchase_order;
pub mod quote;
pub mod repair_ticket;

pub use part_request::{PartRequest, PartStatus};
pub use purchase_order::PurchaseOrder;
pub use quote::Quote;
pub use repair_ticket::RepairTicket;

/// A record linked back to its owning repair ticket.
///
/// The generic in-memory store and the scan fallbacks in the lookup
/// traits key on this seam.
pub trait Linked {
    fn id(&self) -> &str;
    fn repair_id(&self) -> &str;
}

/// A status-bearing record summarized against an ordered vocabulary.
pub trait StatusRecord {
    fn status(&self) -> &str;
    fn is_deleted(&self) -> bool;
}
