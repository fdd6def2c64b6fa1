//! # Domain Layer - Priority Whitelist
//!
//! ## Components
//!
//! - `entities`: Hint, SignerFact, DecoratedSignature, ConfigRecord, priority sentinels
//! - `index`: HintIndex (hint -> ordered signer facts)
//! - `snapshot`: WhitelistSnapshot, the unit that refreshes swap in
//! - `value_objects`: ReservePercentage and record-name constants
//! - `errors`: WhitelistError, MalformedRecord

pub mod entities;
pub mod errors;
pub mod index;
pub mod snapshot;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use index::*;
pub use snapshot::*;
pub use value_objects::*;
