//! Value objects for the priority whitelist.

use serde::{Deserialize, Serialize};

/// Reserve percentage used until a `"reserve"` record says otherwise.
pub const DEFAULT_RESERVE_PERCENT: u8 = 5;

/// Name of the data entry carrying the reserve percentage.
pub const RESERVE_RECORD_NAME: &str = "reserve";

/// Lowest accepted reserve percentage.
pub const MIN_RESERVE_PERCENT: u8 = 1;

/// Highest accepted reserve percentage.
pub const MAX_RESERVE_PERCENT: u8 = 100;

/// Share of a transaction set reserved for non-whitelisted transactions.
///
/// Always within [1, 100] percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32")]
pub struct ReservePercentage(u8);

impl ReservePercentage {
    /// Clamp a raw configured value into [1, 100].
    pub fn from_raw(raw: i32) -> Self {
        let clamped = raw.clamp(MIN_RESERVE_PERCENT as i32, MAX_RESERVE_PERCENT as i32);
        Self(clamped as u8)
    }

    /// Clamp a percentage into [1, 100].
    pub fn from_percent(percent: u8) -> Self {
        Self::from_raw(percent as i32)
    }

    /// Whole percentage in [1, 100].
    pub fn percent(&self) -> u8 {
        self.0
    }

    /// Fraction in [0.01, 1.00].
    pub fn fraction(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl From<i32> for ReservePercentage {
    fn from(raw: i32) -> Self {
        Self::from_raw(raw)
    }
}

impl Default for ReservePercentage {
    fn default() -> Self {
        Self(DEFAULT_RESERVE_PERCENT)
    }
}
