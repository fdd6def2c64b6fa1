//! Configuration Record Parser
//!
//! Turns the holder's raw data entries into whitelist facts.
//!
//! Value layout (big-endian):
//!
//! ```text
//! [ primary: i32 ]                      4 bytes, priority = PRIORITY_MAX
//! [ primary: i32 ][ priority: i32 ]     8 bytes
//! ```
//!
//! For the `"reserve"` entry `primary` is the reserve percentage; for any
//! other entry the name is a signer account and `primary` is the hint the
//! signer is filed under. The hint is taken as given, never re-derived from
//! the key.

use crate::domain::{
    ConfigRecord, Hint, MalformedRecord, Priority, PublicKey, ReservePercentage, SignerFact,
    PRIORITY_MAX, RESERVE_RECORD_NAME,
};
use shared_crypto::decode_account_id;
use tracing::warn;

/// A record that was dropped, with the reason.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectedRecord {
    /// Record name as found in the data.
    pub name: String,
    /// Why it was dropped.
    pub reason: MalformedRecord,
}

/// Output of one parse pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedBatch {
    /// Reserve from the last `"reserve"` record, or the default.
    pub reserve: ReservePercentage,
    /// Accepted signers with their hints, in record order.
    pub facts: Vec<(Hint, SignerFact)>,
    /// Dropped records, in record order.
    pub rejected: Vec<RejectedRecord>,
}

/// Decoded value of a record: `(primary, priority)`.
pub fn decode_record_value(value: &[u8]) -> Result<(i32, Priority), MalformedRecord> {
    let read_i32 =
        |bytes: &[u8]| i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);

    match value.len() {
        4 => Ok((read_i32(&value[..4]), PRIORITY_MAX)),
        8 => Ok((read_i32(&value[..4]), read_i32(&value[4..8]))),
        len => Err(MalformedRecord::BadValueLength { len }),
    }
}

/// Decode a record name as a signer key.
pub fn decode_signer_key(name: &str) -> Result<PublicKey, MalformedRecord> {
    decode_account_id(name).map_err(|_| MalformedRecord::InvalidPublicKey)
}

/// Parse a batch of records.
///
/// Malformed records are logged and collected in `rejected`; they never stop
/// the rest of the batch from being parsed.
pub fn parse_records(records: &[ConfigRecord], default_reserve: ReservePercentage) -> ParsedBatch {
    let mut batch = ParsedBatch {
        reserve: default_reserve,
        facts: Vec::with_capacity(records.len()),
        rejected: Vec::new(),
    };

    for record in records {
        match parse_record(record) {
            Ok(Parsed::Reserve(reserve)) => batch.reserve = reserve,
            Ok(Parsed::Signer(hint, fact)) => batch.facts.push((hint, fact)),
            Err(reason) => {
                warn!(name = %record.name, %reason, "[qc-18] Dropping whitelist record");
                batch.rejected.push(RejectedRecord {
                    name: record.name.clone(),
                    reason,
                });
            }
        }
    }

    batch
}

enum Parsed {
    Reserve(ReservePercentage),
    Signer(Hint, SignerFact),
}

fn parse_record(record: &ConfigRecord) -> Result<Parsed, MalformedRecord> {
    let (primary, priority) = decode_record_value(&record.value)?;

    // Reserved keyword: never a signer, even if it decoded as one
    if record.name == RESERVE_RECORD_NAME {
        return Ok(Parsed::Reserve(ReservePercentage::from_raw(primary)));
    }

    let public_key = decode_signer_key(&record.name)?;

    if priority <= 0 {
        return Err(MalformedRecord::NonPositivePriority { priority });
    }

    Ok(Parsed::Signer(
        Hint(primary),
        SignerFact::new(public_key, priority),
    ))
}
