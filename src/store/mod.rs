//! Observable state with write-through persistence.
//!
//! A [`Store`] notifies its subscribers on every mutation. [`persist`]
//! registers one such subscriber that mirrors the state into a
//! [`DraftStorage`](crate::storage::DraftStorage), and [`rehydrate`] reads
//! it back on the next load.

mod persist;
mod store;

pub use persist::{persist, rehydrate};
pub use store::{Store, SubscriptionId};
