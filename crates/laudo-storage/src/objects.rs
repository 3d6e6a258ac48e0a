use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// Full path of the object `key` under `root`.
pub fn object_path(root: &Path, key: &str) -> PathBuf {
    root.join(key)
}

/// Read an object's bytes.
pub fn get_object(root: &Path, key: &str) -> Result<Vec<u8>, StorageError> {
    std::fs::read(object_path(root, key)).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            StorageError::NotFound {
                key: key.to_string(),
            }
        } else {
            StorageError::io(key, e)
        }
    })
}

/// Write an object. The bytes land in a temporary sibling first and are
/// renamed into place, so readers never observe a partial file.
pub fn put_object(root: &Path, key: &str, body: &[u8]) -> Result<(), StorageError> {
    let path = object_path(root, key);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| StorageError::io(key, e))?;
    }

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    std::fs::write(&tmp_path, body).map_err(|e| StorageError::io(key, e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))
            .map_err(|e| StorageError::io(key, e))?;
    }

    std::fs::rename(&tmp_path, &path).map_err(|e| StorageError::io(key, e))?;
    tracing::debug!(key, bytes = body.len(), "object written");
    Ok(())
}

/// Delete an object. Deleting a missing object is not an error.
pub fn delete_object(root: &Path, key: &str) -> Result<(), StorageError> {
    match std::fs::remove_file(object_path(root, key)) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(StorageError::io(key, e)),
    }
}

/// Keys of the `.json` objects directly inside `prefix`, e.g. `reports`.
pub fn list_objects(root: &Path, prefix: &str) -> Result<Vec<String>, StorageError> {
    let dir = object_path(root, prefix);
    let entries = match std::fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(StorageError::io(prefix, e)),
    };

    let mut keys = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| StorageError::io(prefix, e))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if name.ends_with(".json") {
            keys.push(format!("{prefix}/{name}"));
        }
    }
    keys.sort();
    Ok(keys)
}
