//! # Formdraft
//!
//! Client-side state for a multi-step registration form, with the
//! in-progress draft persisted so a user can resume later.
//!
//! ## Form state
//!
//! - [`FormRecord`] - every field of the form, defaulted
//! - [`FormSession`] - fields, current step and the per-load CSRF token
//! - [`FormStateStore`] - opens sessions rehydrated from storage and
//!   mirrors every change back to it
//!
//! ## Building blocks
//!
//! - [`Store<T>`] - observable state container with subscriptions
//! - [`persist`] / [`rehydrate`] - write-through JSON persistence of a store
//! - [`DraftStorage`] - key/value backend ([`MemoryStorage`], [`FileStorage`])
//!
//! ```
//! use formdraft::{DraftConfig, FormStateStore, MemoryStorage};
//!
//! let storage = MemoryStorage::new();
//! let forms = FormStateStore::new(DraftConfig::default(), storage.clone());
//!
//! let session = forms.open_session("token-1");
//! session.update_form(|r| r.first_name = "Jo".to_string());
//!
//! // Next page load picks the draft back up, with a fresh token.
//! let resumed = forms.open_session("token-2");
//! assert_eq!(resumed.form_data().first_name, "Jo");
//! assert_eq!(resumed.csrf_token(), "token-2");
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod storage;
pub mod store;

// Re-export main types for convenience
pub use config::DraftConfig;
pub use error::{DraftError, Result};
pub use form::{
    clear_draft, clear_persisted_draft, default_record, initialize, FormRecord, FormSession,
    FormStateStore, STEP_NAMES, TOTAL_STEPS,
};
pub use storage::{DraftStorage, FileStorage, MemoryStorage};
pub use store::{persist, rehydrate, Store, SubscriptionId};
