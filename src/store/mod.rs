mod fs;
#[cfg(test)]
mod memory;

pub use fs::FsStore;
#[cfg(test)]
pub use memory::MemStore;

use std::fmt;

use mime::Mime;

/// Storage collaborator for opaque objects addressed by container and key.
///
/// Built once per process and passed by reference into the handlers. Every
/// method is synchronous and makes exactly one attempt; this pipeline does
/// not retry.
pub trait ObjectStore {
    /// Fetch a whole object.
    fn get_object(&self, container: &str, key: &str) -> Result<Vec<u8>, StoreError>;

    /// Create or replace a whole object. Implementations must never leave a
    /// partially written object visible under `key`.
    fn put_object(
        &self,
        container: &str,
        key: &str,
        body: &[u8],
        content_type: &Mime,
    ) -> Result<(), StoreError>;
}

#[derive(Debug)]
pub enum StoreError {
    NotFound { container: String, key: String },
    InvalidKey(String),
    Io(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound { container, key } => {
                write!(f, "object not found: {container}/{key}")
            }
            StoreError::InvalidKey(msg) => write!(f, "invalid object key: {msg}"),
            StoreError::Io(msg) => write!(f, "storage I/O error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}
