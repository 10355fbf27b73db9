use std::sync::Arc;

use serde::{Deserialize, Serialize};
use slog::Logger;
use tracing::{debug, instrument};

use crate::errors::LookupError;
use crate::lookups::{OrderLookup, PartsLookup, QuoteLookup};
use crate::models::RepairTicket;
use crate::stages::{ORDER_STATUS_ORDER, QUOTE_STATUS_ORDER};
use crate::summary::{summarize_parts, summarize_status, PartSummary, StatusSummary};

/// Composite summary for a single repair ticket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairLinkageSummary {
    pub parts: PartSummary,
    pub quotes: StatusSummary,
    pub orders: StatusSummary,
}

/// Composite summary across every repair ticket on one machine serial.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SerialLinkageSummary {
    pub serial: String,
    /// The most recently touched ticket, None when the list is empty.
    pub latest: Option<RepairTicket>,
    /// The non-deleted tickets the summary was computed over.
    pub repairs: Vec<RepairTicket>,
    pub parts: PartSummary,
    pub quotes: StatusSummary,
    pub orders: StatusSummary,
}

/// Service deriving cross-entity status summaries for repair tickets.
///
/// Collaborators are injected at construction; there is no ambient
/// registry. Both entry points are synchronous, side-effect-free, and
/// infallible: a failing collaborator degrades that one source to an
/// empty collection while the others proceed, so partial backend
/// outages still produce a best-effort composite rather than an error.
#[derive(Clone)]
pub struct LinkageService {
    parts: Arc<dyn PartsLookup>,
    quotes: Arc<dyn QuoteLookup>,
    orders: Arc<dyn OrderLookup>,
    logger: Logger,
}

impl LinkageService {
    /// Creates a new linkage service instance
    pub fn new(
        parts: Arc<dyn PartsLookup>,
        quotes: Arc<dyn QuoteLookup>,
        orders: Arc<dyn OrderLookup>,
        logger: Logger,
    ) -> Self {
        Self {
            parts,
            quotes,
            orders,
            logger,
        }
    }

    /// Derives the status summary for a single repair ticket.
    ///
    /// The id is trimmed first; a blank id simply aggregates over empty
    /// result sets rather than failing.
    #[instrument(skip(self), fields(repair_id = %repair_id))]
    pub fn get_for_repair(&self, repair_id: &str) -> RepairLinkageSummary {
        let rid = repair_id.trim();

        let parts = self.degrade("parts", self.parts.get_for_repair(rid));
        let quotes = self.degrade("quotes", self.quotes.get_for_repair(rid));
        let orders = self.degrade("orders", self.orders.get_for_repair(rid));

        debug!(
            parts = parts.len(),
            quotes = quotes.len(),
            orders = orders.len(),
            "resolved linked records"
        );

        RepairLinkageSummary {
            parts: summarize_parts(&parts),
            quotes: summarize_status(&quotes, QUOTE_STATUS_ORDER),
            orders: summarize_status(&orders, ORDER_STATUS_ORDER),
        }
    }

    /// Derives the status summary across every ticket for one machine
    /// serial, unioning related records over all ticket ids.
    #[instrument(skip(self, repairs), fields(serial = %serial, tickets = repairs.len()))]
    pub fn get_for_serial(&self, serial: &str, repairs: &[RepairTicket]) -> SerialLinkageSummary {
        let tickets: Vec<RepairTicket> = repairs
            .iter()
            .filter(|ticket| !ticket.is_deleted)
            .cloned()
            .collect();

        let latest = latest_ticket(&tickets).cloned();

        let ids: Vec<String> = tickets
            .iter()
            .map(|ticket| ticket.id.clone())
            .filter(|id| !id.is_empty())
            .collect();

        let parts = self.degrade("parts", self.parts.get_for_repairs(&ids));
        let quotes = self.degrade("quotes", self.quotes.get_for_repairs(&ids));
        let orders = self.degrade("orders", self.orders.get_for_repairs(&ids));

        SerialLinkageSummary {
            serial: serial.to_string(),
            latest,
            repairs: tickets,
            parts: summarize_parts(&parts),
            quotes: summarize_status(&quotes, QUOTE_STATUS_ORDER),
            orders: summarize_status(&orders, ORDER_STATUS_ORDER),
        }
    }

    /// Collapses a lookup failure into "no data from this source".
    fn degrade<T>(&self, source: &str, result: Result<Vec<T>, LookupError>) -> Vec<T> {
        match result {
            Ok(records) => records,
            Err(err) => {
                slog::warn!(self.logger, "lookup failed, continuing without source";
                    "source" => source, "error" => %err);
                Vec::new()
            }
        }
    }
}

/// Linear scan for the ticket with the greatest effective timestamp.
/// Strictly-greater comparison, so the first seen wins on ties.
fn latest_ticket(tickets: &[RepairTicket]) -> Option<&RepairTicket> {
    let mut latest = None;
    let mut latest_ts = -1i64;
    for ticket in tickets {
        let ts = ticket.effective_timestamp();
        if ts > latest_ts {
            latest_ts = ts;
            latest = Some(ticket);
        }
    }
    latest
}
