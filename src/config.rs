//! Runtime configuration for opening a task store.

use crate::task::{
    adapters::file::DEFAULT_DATA_FILE, domain::TaskPolicy, services::CorruptStatePolicy,
};
use camino::Utf8PathBuf;

/// Where task state lives between invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persistence {
    /// State lives only for the lifetime of the process.
    InMemory,
    /// State is snapshotted to a JSON file after every mutation.
    File(Utf8PathBuf),
}

impl Default for Persistence {
    fn default() -> Self {
        Self::File(Utf8PathBuf::from(DEFAULT_DATA_FILE))
    }
}

/// Settings used to open a task store.
///
/// # Examples
///
/// ```
/// use tasklist::config::{Persistence, StoreConfig};
/// use tasklist::task::services::CorruptStatePolicy;
///
/// let config = StoreConfig::default();
/// assert_eq!(config.on_corrupt, CorruptStatePolicy::StartFresh);
/// assert!(matches!(config.persistence, Persistence::File(_)));
///
/// let ephemeral = StoreConfig::in_memory();
/// assert_eq!(ephemeral.persistence, Persistence::InMemory);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// Persistence posture.
    pub persistence: Persistence,
    /// Field validation policy.
    pub policy: TaskPolicy,
    /// Handling of corrupt saved state.
    pub on_corrupt: CorruptStatePolicy,
}

impl StoreConfig {
    /// Creates a configuration for the in-memory posture with default
    /// validation.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            persistence: Persistence::InMemory,
            ..Self::default()
        }
    }

    /// Creates a configuration persisting to the file at `path`.
    #[must_use]
    pub fn file(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            persistence: Persistence::File(path.into()),
            ..Self::default()
        }
    }

    /// Sets the validation policy.
    #[must_use]
    pub fn with_policy(mut self, policy: TaskPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the corrupt-state policy.
    #[must_use]
    pub fn with_corrupt_state_policy(mut self, on_corrupt: CorruptStatePolicy) -> Self {
        self.on_corrupt = on_corrupt;
        self
    }
}
