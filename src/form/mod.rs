//! Multi-step registration form state.
//!
//! - [`FormRecord`] - the field values, always complete
//! - [`FormSession`] - one page load: fields, step pointer and CSRF token
//! - [`FormStateStore`] - opens sessions against a storage backend and
//!   wires the write-through persistence

mod record;
mod session;
mod state;

pub use record::{default_record, FormRecord};
pub use session::{clear_draft, initialize, FormSession, STEP_NAMES, TOTAL_STEPS};
pub use state::{clear_persisted_draft, FormStateStore};
