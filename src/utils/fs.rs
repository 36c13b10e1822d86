use std::io::ErrorKind;
use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::error::{CardError, Result};

/// Creates `dir` if it does not exist yet. Parents are not created.
///
/// Safe to call from many tasks at once: losing the creation race to
/// another task counts as success.
pub async fn ensure_dir(dir: &Path) -> Result<()> {
    match fs::metadata(dir).await {
        Ok(meta) if meta.is_dir() => return Ok(()),
        Ok(_) => return Err(CardError::NotADirectory { path: dir.to_path_buf() }),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(CardError::io(dir, e)),
    }

    match fs::create_dir(dir).await {
        Ok(()) => {
            debug!("created output directory {}", dir.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            let meta = fs::metadata(dir).await.map_err(|e| CardError::io(dir, e))?;
            if meta.is_dir() {
                Ok(())
            } else {
                Err(CardError::NotADirectory { path: dir.to_path_buf() })
            }
        }
        Err(e) => Err(CardError::io(dir, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn second_call_is_a_no_op() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("cards");

        ensure_dir(&out).await.unwrap();
        ensure_dir(&out).await.unwrap();
        assert!(out.is_dir());
    }

    #[tokio::test]
    async fn concurrent_calls_all_succeed() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("cards");

        let results = futures::future::join_all((0..8).map(|_| ensure_dir(&out))).await;
        assert!(results.iter().all(|r| r.is_ok()));
        assert!(out.is_dir());
    }

    #[tokio::test]
    async fn refuses_an_existing_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("cards");
        std::fs::write(&file, b"not a dir").unwrap();

        let err = ensure_dir(&file).await.unwrap_err();
        assert!(matches!(err, CardError::NotADirectory { .. }));
    }

    #[tokio::test]
    async fn does_not_create_parents() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("missing").join("cards");

        let err = ensure_dir(&nested).await.unwrap_err();
        assert!(matches!(err, CardError::Io { .. }));
        assert!(!nested.exists());
    }
}
