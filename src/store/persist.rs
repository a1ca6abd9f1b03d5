use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::{Store, SubscriptionId};
use crate::error::Result;
use crate::storage::DraftStorage;

/// Mirror every future change of `store` into `storage` under `key`.
///
/// Each notification serializes the whole state as JSON and writes it
/// immediately. Write failures are logged and otherwise ignored; the store
/// keeps the new state either way. The current state is not written until
/// the first mutation.
pub fn persist<T, S>(store: &Store<T>, storage: S, key: impl Into<String>) -> SubscriptionId
where
    T: Clone + Serialize + 'static,
    S: DraftStorage + 'static,
{
    let key = key.into();
    store.subscribe(move |state: &T| match write(&storage, &key, state) {
        Ok(()) => debug!(key = %key, "persisted state"),
        Err(e) => warn!(key = %key, error = %e, "failed to persist state"),
    })
}

/// Load a previously persisted value.
///
/// Returns `Ok(None)` when nothing is stored, or when the stored value is
/// `null` or an empty object.
pub fn rehydrate<T, S>(storage: &S, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: DraftStorage + ?Sized,
{
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };

    let value: Value = serde_json::from_str(&raw)?;
    match &value {
        Value::Null => return Ok(None),
        Value::Object(map) if map.is_empty() => return Ok(None),
        _ => {}
    }

    Ok(Some(serde_json::from_value(value)?))
}

fn write<T, S>(storage: &S, key: &str, state: &T) -> Result<()>
where
    T: Serialize,
    S: DraftStorage + ?Sized,
{
    let json = serde_json::to_string(state)?;
    storage.set(key, &json)
}
