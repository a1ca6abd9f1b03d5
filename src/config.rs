//! Storage configuration for a form draft.

use serde::Deserialize;

/// Where and how a draft is persisted.
///
/// The full storage key is `namespace_prefix + key`. Giving each session its
/// own key keeps independent forms (and tests) isolated in a shared storage.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DraftConfig {
    /// Prefix prepended to every key written by this crate.
    pub namespace_prefix: String,

    /// Name of the draft entry.
    pub key: String,

    /// Also mirror the current step so navigation survives a reload.
    pub persist_step: bool,
}

impl DraftConfig {
    /// Default namespace prefix.
    pub const DEFAULT_NAMESPACE: &'static str = "_x_";

    /// Default draft key.
    pub const DEFAULT_KEY: &'static str = "nhsConversationDraft";

    /// Create a config with the default namespace and the given key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_namespace(mut self, prefix: impl Into<String>) -> Self {
        self.namespace_prefix = prefix.into();
        self
    }

    pub fn with_persist_step(mut self, persist_step: bool) -> Self {
        self.persist_step = persist_step;
        self
    }

    /// Full key holding the serialized form record.
    pub fn storage_key(&self) -> String {
        format!("{}{}", self.namespace_prefix, self.key)
    }

    /// Full key holding the current step, used only when `persist_step` is set.
    pub fn step_storage_key(&self) -> String {
        format!("{}Step", self.storage_key())
    }
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            namespace_prefix: Self::DEFAULT_NAMESPACE.to_string(),
            key: Self::DEFAULT_KEY.to_string(),
            persist_step: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_storage_key() {
        let config = DraftConfig::default();
        assert_eq!(config.storage_key(), "_x_nhsConversationDraft");
        assert_eq!(config.step_storage_key(), "_x_nhsConversationDraftStep");
        assert!(!config.persist_step);
    }

    #[test]
    fn builder_overrides() {
        let config = DraftConfig::new("signup")
            .with_namespace("app:")
            .with_persist_step(true);
        assert_eq!(config.storage_key(), "app:signup");
        assert!(config.persist_step);
    }

    #[test]
    fn deserialize_fills_missing_fields() {
        let config: DraftConfig = serde_json::from_str(r#"{"key": "other"}"#).unwrap();
        assert_eq!(config.namespace_prefix, "_x_");
        assert_eq!(config.key, "other");
        assert!(!config.persist_step);
    }
}
