//! Configuration for the Priority Whitelist Subsystem

use crate::domain::{ReservePercentage, DEFAULT_RESERVE_PERCENT};
use serde::Deserialize;
use tracing::{info, warn};

/// Environment variable overriding `holder_account`.
pub const ENV_HOLDER_ACCOUNT: &str = "QC_WHITELIST_HOLDER";

/// Environment variable overriding `default_reserve_percent`.
pub const ENV_RESERVE_PERCENT: &str = "QC_WHITELIST_RESERVE_PERCENT";

/// Whitelist configuration
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct WhitelistConfig {
    /// `G...` account whose data entries define the whitelist.
    /// Empty disables the whitelist.
    pub holder_account: String,
    /// Reserve percentage used until the holder sets a `"reserve"` entry
    pub default_reserve_percent: u8,
}

impl Default for WhitelistConfig {
    fn default() -> Self {
        Self {
            holder_account: String::new(),
            default_reserve_percent: DEFAULT_RESERVE_PERCENT,
        }
    }
}

impl WhitelistConfig {
    /// Whether a holder account is configured.
    pub fn has_holder(&self) -> bool {
        !self.holder_account.trim().is_empty()
    }

    /// Baseline reserve, clamped to [1, 100].
    pub fn default_reserve(&self) -> ReservePercentage {
        ReservePercentage::from_percent(self.default_reserve_percent)
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(holder) = lookup(ENV_HOLDER_ACCOUNT) {
            info!("[qc-18] Whitelist holder set from {}", ENV_HOLDER_ACCOUNT);
            self.holder_account = holder.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_RESERVE_PERCENT) {
            match raw.trim().parse::<u8>() {
                Ok(percent) => self.default_reserve_percent = percent,
                Err(_) => warn!(
                    "[qc-18] {} must be an integer in 1..=100, got {:?}",
                    ENV_RESERVE_PERCENT, raw
                ),
            }
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = WhitelistConfig::default();
        assert!(!config.has_holder());
        assert_eq!(config.default_reserve_percent, DEFAULT_RESERVE_PERCENT);
    }

    #[test]
    fn test_default_reserve_is_clamped() {
        let config = WhitelistConfig {
            default_reserve_percent: 0,
            ..Default::default()
        };
        assert_eq!(config.default_reserve().percent(), 1);
    }

    #[test]
    fn test_overrides_applied() {
        let config = WhitelistConfig::default().with_overrides(lookup(&[
            (ENV_HOLDER_ACCOUNT, " GABC "),
            (ENV_RESERVE_PERCENT, "25"),
        ]));

        assert_eq!(config.holder_account, "GABC");
        assert_eq!(config.default_reserve_percent, 25);
    }

    #[test]
    fn test_env_overrides_applied() {
        // Only test touching these variables
        std::env::set_var(ENV_HOLDER_ACCOUNT, "GENV");
        std::env::set_var(ENV_RESERVE_PERCENT, "33");

        let config = WhitelistConfig::default().with_env_overrides();

        std::env::remove_var(ENV_HOLDER_ACCOUNT);
        std::env::remove_var(ENV_RESERVE_PERCENT);

        assert_eq!(config.holder_account, "GENV");
        assert_eq!(config.default_reserve_percent, 33);
    }

    #[test]
    fn test_bad_reserve_override_ignored() {
        let config = WhitelistConfig::default()
            .with_overrides(lookup(&[(ENV_RESERVE_PERCENT, "lots")]));

        assert_eq!(config.default_reserve_percent, DEFAULT_RESERVE_PERCENT);
    }

    #[test]
    fn test_whitespace_holder_is_no_holder() {
        let config = WhitelistConfig {
            holder_account: "   ".into(),
            ..Default::default()
        };
        assert!(!config.has_holder());
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let config: WhitelistConfig =
            serde_json::from_str(r#"{"holder_account":"GXYZ"}"#).unwrap();

        assert_eq!(config.holder_account, "GXYZ");
        assert_eq!(config.default_reserve_percent, DEFAULT_RESERVE_PERCENT);
    }
}
