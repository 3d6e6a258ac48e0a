use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::objects;

/// Load a JSON object.
pub fn load_state<T: DeserializeOwned>(root: &Path, key: &str) -> Result<T, StorageError> {
    let body = objects::get_object(root, key)?;
    Ok(serde_json::from_slice(&body)?)
}

/// Load a JSON object, or `None` when it does not exist yet.
pub fn load_state_opt<T: DeserializeOwned>(
    root: &Path,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match load_state(root, key) {
        Ok(value) => Ok(Some(value)),
        Err(StorageError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Save a JSON object, pretty-printed.
pub fn save_state<T: Serialize>(root: &Path, key: &str, value: &T) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_object(root, key, &body)
}
