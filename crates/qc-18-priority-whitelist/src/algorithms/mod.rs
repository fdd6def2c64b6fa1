//! Algorithms module for the priority whitelist
//!
//! Contains:
//! - Configuration record parsing
//! - Priority resolution over the hint index
//! - Reserve quota calculation

pub mod priority_resolver;
pub mod record_parser;
pub mod reserve;

pub use priority_resolver::{is_whitelisted, resolve_priority};
pub use record_parser::{parse_records, ParsedBatch, RejectedRecord};
pub use reserve::reserved_slots;
