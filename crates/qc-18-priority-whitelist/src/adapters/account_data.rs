//! In-Memory Account Data Adapter
//!
//! Implements `AccountDataProvider` over an in-memory table of account data
//! entries. In production this is backed by ledger storage.

use crate::domain::{ConfigRecord, PublicKey};
use crate::ports::{AccountDataProvider, DataSourceError};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

/// In-memory account data for tests and local wiring.
#[derive(Default)]
pub struct InMemoryAccountData {
    /// Data entries per account, in insertion order.
    entries: RwLock<HashMap<PublicKey, Vec<ConfigRecord>>>,
}

impl InMemoryAccountData {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every data entry of `account`.
    pub fn set_entries(&self, account: PublicKey, records: Vec<ConfigRecord>) {
        self.entries.write().insert(account, records);
    }

    /// Append or overwrite a single entry by name.
    pub fn put_entry(&self, account: PublicKey, record: ConfigRecord) {
        let mut entries = self.entries.write();
        let records = entries.entry(account).or_default();

        match records.iter_mut().find(|r| r.name == record.name) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
    }

    /// Remove an entry by name. Returns whether it existed.
    pub fn remove_entry(&self, account: &PublicKey, name: &str) -> bool {
        let mut entries = self.entries.write();
        let Some(records) = entries.get_mut(account) else {
            return false;
        };

        let before = records.len();
        records.retain(|r| r.name != name);
        records.len() != before
    }
}

#[async_trait]
impl AccountDataProvider for InMemoryAccountData {
    async fn load_account_data(
        &self,
        account: &PublicKey,
    ) -> Result<Vec<ConfigRecord>, DataSourceError> {
        // An account without data entries is an empty batch, not an error
        let records = self
            .entries
            .read()
            .get(account)
            .cloned()
            .unwrap_or_default();

        debug!(
            "[qc-18] Loaded {} data entries for account {:02x}{:02x}...",
            records.len(),
            account.as_bytes()[0],
            account.as_bytes()[1]
        );

        Ok(records)
    }
}
