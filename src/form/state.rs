use std::sync::Arc;

use tracing::{debug, warn};

use super::record::FormRecord;
use super::session::{initialize, FormSession};
use crate::config::DraftConfig;
use crate::error::Result;
use crate::storage::DraftStorage;
use crate::store::{persist, rehydrate};

/// Creates form sessions bound to a storage backend.
///
/// Each session opened here is rehydrated from the draft stored under
/// [`DraftConfig::storage_key`] and writes every later change back to it.
#[derive(Clone)]
pub struct FormStateStore {
    config: DraftConfig,
    storage: Arc<dyn DraftStorage>,
}

impl FormStateStore {
    pub fn new(config: DraftConfig, storage: impl DraftStorage + 'static) -> Self {
        Self {
            config,
            storage: Arc::new(storage),
        }
    }

    pub fn config(&self) -> &DraftConfig {
        &self.config
    }

    /// Open the session for a new page load.
    ///
    /// A missing, empty or unreadable draft yields a default record; read
    /// failures are logged, never returned. The token is taken only from
    /// `csrf_token` and is never written to storage.
    pub fn open_session(&self, csrf_token: impl Into<String>) -> FormSession {
        let key = self.config.storage_key();
        let record = self.load::<FormRecord>(&key);
        debug!(
            key = %key,
            rehydrated = record.is_some(),
            pristine = record.as_ref().map_or(true, FormRecord::is_pristine),
            "opening form session"
        );

        let session = initialize(csrf_token, record);

        if self.config.persist_step {
            let step_key = self.config.step_storage_key();
            if let Some(step) = self.load::<usize>(&step_key) {
                session.go_to_step(step);
            }
            persist(session.step_store(), Arc::clone(&self.storage), step_key);
        }
        persist(session.form_store(), Arc::clone(&self.storage), key);

        session
    }

    /// Remove the persisted draft. Open sessions are not touched.
    pub fn clear_persisted_draft(&self) -> Result<()> {
        clear_persisted_draft(&*self.storage, &self.config)
    }

    fn load<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        match rehydrate(&*self.storage, key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key = %key, error = %e, "discarding unreadable draft");
                None
            }
        }
    }
}

impl std::fmt::Debug for FormStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormStateStore")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Remove the persisted draft described by `config` from `storage`.
///
/// Needs no live session, so a confirmation page can call it after a
/// successful submission. The next session opened against the same storage
/// starts from defaults.
pub fn clear_persisted_draft<S>(storage: &S, config: &DraftConfig) -> Result<()>
where
    S: DraftStorage + ?Sized,
{
    let key = config.storage_key();
    storage.remove(&key)?;
    storage.remove(&config.step_storage_key())?;
    debug!(key = %key, "cleared persisted draft");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DraftError;
    use crate::form::default_record;
    use crate::storage::MemoryStorage;

    struct UnavailableStorage;

    impl DraftStorage for UnavailableStorage {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Err(DraftError::Storage {
                key: key.to_string(),
                message: "storage disabled".to_string(),
            })
        }

        fn set(&self, key: &str, _value: &str) -> Result<()> {
            Err(DraftError::Storage {
                key: key.to_string(),
                message: "storage disabled".to_string(),
            })
        }

        fn remove(&self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    fn store_with(storage: &MemoryStorage) -> FormStateStore {
        FormStateStore::new(DraftConfig::default(), storage.clone())
    }

    #[test]
    fn open_session_without_draft() {
        let storage = MemoryStorage::new();
        let session = store_with(&storage).open_session("abc123");

        assert_eq!(session.csrf_token(), "abc123");
        assert_eq!(session.form_data(), default_record());
        assert_eq!(session.current_step(), 1);
        assert!(storage.keys().is_empty());
    }

    #[test]
    fn updates_are_written_through() {
        let storage = MemoryStorage::new();
        let session = store_with(&storage).open_session("t");

        session.update_form(|r| r.first_name = "Jo".to_string());

        let raw = storage.get("_x_nhsConversationDraft").unwrap().unwrap();
        let stored: FormRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored.first_name, "Jo");
        assert!(!raw.contains("csrf"));
        assert!(!raw.contains("Consent & Submit"));
    }

    #[test]
    fn step_is_not_persisted_by_default() {
        let storage = MemoryStorage::new();
        let store = store_with(&storage);
        let session = store.open_session("t");
        session.go_to_step(3);

        assert_eq!(storage.keys(), Vec::<String>::new());
        assert_eq!(store.open_session("t").current_step(), 1);
    }

    #[test]
    fn step_persisted_when_enabled() {
        let storage = MemoryStorage::new();
        let store = FormStateStore::new(
            DraftConfig::default().with_persist_step(true),
            storage.clone(),
        );

        store.open_session("t").go_to_step(3);
        assert_eq!(
            storage.get("_x_nhsConversationDraftStep").unwrap().as_deref(),
            Some("3")
        );
        assert_eq!(store.open_session("t").current_step(), 3);
    }

    #[test]
    fn corrupt_draft_falls_back_to_defaults() {
        let storage = MemoryStorage::new();
        storage
            .set("_x_nhsConversationDraft", r#"{"firstName": 42}"#)
            .unwrap();

        let session = store_with(&storage).open_session("t");
        assert_eq!(session.form_data(), default_record());
    }

    #[test]
    fn clear_persisted_draft_leaves_session_alone() {
        let storage = MemoryStorage::new();
        let store = store_with(&storage);
        let session = store.open_session("t");
        session.update_form(|r| r.city = "Leeds".to_string());

        store.clear_persisted_draft().unwrap();

        assert!(!storage.contains("_x_nhsConversationDraft"));
        assert_eq!(session.form_data().city, "Leeds");
        assert_eq!(store.open_session("t").form_data(), default_record());
    }

    #[test]
    fn unavailable_storage_still_yields_usable_session() {
        let store = FormStateStore::new(
            DraftConfig::default().with_persist_step(true),
            UnavailableStorage,
        );
        let session = store.open_session("t");

        assert_eq!(session.form_data(), default_record());
        assert_eq!(session.current_step(), 1);

        session.update_form(|r| r.first_name = "Jo".to_string());
        session.next_step();
        assert_eq!(session.form_data().first_name, "Jo");
        assert_eq!(session.current_step(), 2);
    }
}
