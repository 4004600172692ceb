// src/store/fs.rs
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use mime::Mime;
use tracing::debug;

use crate::store::{ObjectStore, StoreError};

/// Directory-backed object store: one subdirectory per container, one file
/// per key. Keys may contain `/` and map to nested paths.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn object_path(&self, container: &str, key: &str) -> Result<PathBuf, StoreError> {
        validate_segment(container)?;
        validate_segment(key)?;
        Ok(self.root.join(container).join(key))
    }
}

/// Containers and keys arrive in an external payload; anything that could
/// resolve outside the store root is rejected.
fn validate_segment(segment: &str) -> Result<(), StoreError> {
    if segment.is_empty() {
        return Err(StoreError::InvalidKey("empty segment".to_string()));
    }
    let escapes = Path::new(segment)
        .components()
        .any(|component| !matches!(component, Component::Normal(_)));
    if escapes {
        return Err(StoreError::InvalidKey(format!(
            "segment {segment:?} escapes the store root"
        )));
    }
    Ok(())
}

fn staging_path(path: &Path) -> Result<PathBuf, StoreError> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| StoreError::InvalidKey(format!("{} has no file name", path.display())))?;
    Ok(path.with_file_name(format!(".{file_name}.tmp")))
}

impl ObjectStore for FsStore {
    fn get_object(&self, container: &str, key: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.object_path(container, key)?;
        fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::NotFound {
                container: container.to_string(),
                key: key.to_string(),
            },
            _ => StoreError::Io(format!("read {}: {e}", path.display())),
        })
    }

    fn put_object(
        &self,
        container: &str,
        key: &str,
        body: &[u8],
        _content_type: &Mime, // plain directories carry no media type
    ) -> Result<(), StoreError> {
        let path = self.object_path(container, key)?;
        let dir = path
            .parent()
            .ok_or_else(|| StoreError::InvalidKey(format!("key {key:?} has no parent")))?;
        fs::create_dir_all(dir)
            .map_err(|e| StoreError::Io(format!("create {}: {e}", dir.display())))?;

        // Stage next to the destination, then rename: the final key holds
        // either the whole object or nothing.
        let staged = staging_path(&path)?;
        fs::write(&staged, body)
            .map_err(|e| StoreError::Io(format!("write {}: {e}", staged.display())))?;
        fs::rename(&staged, &path)
            .map_err(|e| StoreError::Io(format!("rename {}: {e}", path.display())))?;

        debug!(container, key, bytes = body.len(), "object stored");
        Ok(())
    }
}
