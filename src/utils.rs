//! File system helpers.

use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then probes it with a create-and-delete
/// of a throwaway file. Batch writes are silently lost on an unwritable
/// directory, so this runs once before any network traffic.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the probe write
/// fails (permission denied, read-only filesystem, etc.).
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    if let Err(e) = fs::create_dir_all(path).await {
        return Err(Box::new(e));
    }
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_writable_dir_passes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_str().unwrap().to_string();
        assert!(ensure_writable_dir(&path).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_dir_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let path = nested.to_str().unwrap().to_string();

        assert!(ensure_writable_dir(&path).await.is_ok());
        assert!(nested.is_dir());
    }
}
