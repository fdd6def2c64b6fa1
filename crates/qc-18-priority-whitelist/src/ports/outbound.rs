//! # Outbound Ports (Driven Ports / SPI)
//!
//! Collaborators the whitelist depends on: the verification capability, the
//! holder account's data entries and the ledger position.

use crate::domain::{ConfigRecord, Hash, PublicKey};
use async_trait::async_trait;
use shared_crypto::CryptoError;
use thiserror::Error;

/// Error from the account data source.
#[derive(Debug, Error)]
pub enum DataSourceError {
    /// Backend failure
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Trusted signature verification capability.
pub trait SignatureVerifier: Send + Sync {
    /// Check whether `signature` was made by `public_key` over `message`.
    ///
    /// # Errors
    /// Returns `Err` only for malformed material (e.g. wrong signature
    /// length). A well-formed signature from another key is `Ok(false)`.
    fn verify(
        &self,
        public_key: &PublicKey,
        signature: &[u8],
        message: &Hash,
    ) -> Result<bool, CryptoError>;
}

/// Source of the holder account's name/value data entries.
#[async_trait]
pub trait AccountDataProvider: Send + Sync {
    /// Load every data entry attached to `account`, wholesale.
    async fn load_account_data(
        &self,
        account: &PublicKey,
    ) -> Result<Vec<ConfigRecord>, DataSourceError>;
}

/// Ledger position, used to rebuild at most once per ledger.
pub trait LedgerInfoProvider: Send + Sync {
    /// Sequence number of the ledger currently being built.
    fn current_ledger_num(&self) -> u32;
}
