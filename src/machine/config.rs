//! Machine configuration.

use serde::{Deserialize, Serialize};

/// Default number of transitions kept in a machine's history.
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

/// Tunables for a [`StateMachine`](crate::machine::StateMachine).
///
/// Deserializable so embedders can carry it inside their own configuration
/// files; missing fields fall back to their defaults.
///
/// # Example
///
/// ```rust
/// use actionfsm::machine::MachineConfig;
///
/// let config: MachineConfig = serde_json::from_str(r#"{ "history_limit": 8 }"#).unwrap();
/// assert_eq!(config.history_limit, 8);
///
/// let config: MachineConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(config, MachineConfig::default());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Maximum number of transitions retained; zero disables history.
    pub history_limit: usize,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}
