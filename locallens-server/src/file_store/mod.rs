//! File store for uploaded photo bytes.
//!
//! The store only writes. Reading a stored photo back is left to the static
//! file service mounted at [`UPLOADS_ROUTE`], which resolves a stored name to
//! the file written here.

pub mod error;
pub mod local;

pub use error::StorageError;
pub use local::LocalFileStore;

use async_trait::async_trait;

/// URL prefix the stored files are served under.
pub const UPLOADS_ROUTE: &str = "/uploads";

/// Persistence for uploaded bytes.
///
/// Implementations must hand out a stored name that is unique across all past
/// and concurrent calls, and must not return before the bytes are durable.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Write `bytes` under a freshly generated name derived from `original_name`
    /// and return that name.
    async fn put(&self, bytes: &[u8], original_name: &str) -> Result<String, StorageError>;
}

/// Public URL path for a stored name.
pub fn public_path(stored_name: &str) -> String {
    format!("{}/{}", UPLOADS_ROUTE, stored_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_path() {
        assert_eq!(public_path("1-abc-menu.png"), "/uploads/1-abc-menu.png");
    }
}
