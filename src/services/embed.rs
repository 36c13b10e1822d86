use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{CardError, Result};

const DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// Reads an image and returns it as a `data:` URI.
///
/// The headless page has no access to local files, so every image is inlined.
/// The MIME type is always `image/jpeg`; the browser sniffs the real format.
pub async fn image_data_uri(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| CardError::io(path, e))?;

    let mut uri = String::with_capacity(DATA_URI_PREFIX.len() + bytes.len().div_ceil(3) * 4);
    uri.push_str(DATA_URI_PREFIX);
    STANDARD.encode_string(&bytes, &mut uri);
    Ok(uri)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn encodes_file_bytes() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pixel.png");
        let bytes: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0xff];
        std::fs::write(&path, bytes).unwrap();

        let uri = image_data_uri(&path).await.unwrap();
        let encoded = uri.strip_prefix("data:image/jpeg;base64,").unwrap();
        assert_eq!(encoded, "iVBORw0KGgoA/w==");
        assert_eq!(STANDARD.decode(encoded).unwrap(), bytes);
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = image_data_uri(&tmp.path().join("absent.jpg")).await.unwrap_err();
        assert!(matches!(err, CardError::Io { .. }));
    }
}
