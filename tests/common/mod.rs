//! Shared fixtures for the integration suites.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use repairlink::logging::discard_logger;
use repairlink::{
    LinkageService, OrderStore, PartRequest, PartStatus, PartsStore, PurchaseOrder, Quote,
    QuoteStore, RepairTicket,
};

pub struct Fixture {
    pub parts: Arc<PartsStore>,
    pub quotes: Arc<QuoteStore>,
    pub orders: Arc<OrderStore>,
    pub service: LinkageService,
}

/// Empty stores wired into a service; tests populate what they need.
pub fn fixture() -> Fixture {
    let parts = Arc::new(PartsStore::new());
    let quotes = Arc::new(QuoteStore::new());
    let orders = Arc::new(OrderStore::new());
    let service = LinkageService::new(
        parts.clone(),
        quotes.clone(),
        orders.clone(),
        discard_logger(),
    );
    Fixture {
        parts,
        quotes,
        orders,
        service,
    }
}

pub fn part(id: &str, repair_id: &str, status: PartStatus) -> PartRequest {
    PartRequest::new(id, repair_id, status)
}

pub fn quote(id: &str, repair_id: &str, status: &str) -> Quote {
    Quote::new(id, repair_id, status)
}

pub fn order(id: &str, repair_id: &str, status: &str) -> PurchaseOrder {
    PurchaseOrder::new(id, repair_id, status)
}

pub fn ticket(id: &str, updated: Option<(i32, u32, u32)>) -> RepairTicket {
    let mut ticket = RepairTicket::new(id);
    ticket.updated_at = updated.map(|(y, m, d)| Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap());
    ticket
}
