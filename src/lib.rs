//! Repairlink Library
//!
//! This crate provides the status-linkage aggregation core for repair
//! ticket tracking: given a repair ticket id (or a machine serial plus
//! its tickets), it gathers the related part requests, quotes, and
//! purchase orders through injected lookup collaborators and derives a
//! normalized summary per entity type plus a single "primary" status
//! suitable for at-a-glance UI chips.
//!
//! The crate owns no data and performs no writes; it is a pure
//! read/derive layer over whatever stores the host application wires in.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod errors;
pub mod logging;
pub mod lookups;
pub mod models;
pub mod services;
pub mod stages;
pub mod summary;

pub use errors::{LinkageError, LookupError};
pub use lookups::{
    MemoryStore, OrderLookup, OrderStore, PartsLookup, PartsStore, QuoteLookup, QuoteStore,
};
pub use models::{PartRequest, PartStatus, PurchaseOrder, Quote, RepairTicket};
pub use services::linkage::{LinkageService, RepairLinkageSummary, SerialLinkageSummary};
pub use stages::{PartStage, ORDER_STATUS_ORDER, QUOTE_STATUS_ORDER};
pub use summary::{summarize_parts, summarize_status, PartSummary, Primary, StatusSummary};
