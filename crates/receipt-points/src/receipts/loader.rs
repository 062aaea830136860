use std::fs;
use std::path::{Path, PathBuf};

use super::domain::Receipt;

/// Failure loading a receipt from a JSON file.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptLoadError {
    #[error("unable to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to decode receipt JSON in {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read a receipt from disk. The receipt is not validated.
pub fn load_receipt(path: impl AsRef<Path>) -> Result<Receipt, ReceiptLoadError> {
    let path = path.as_ref();
    let raw = fs::read(path).map_err(|source| ReceiptLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&raw).map_err(|source| ReceiptLoadError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
