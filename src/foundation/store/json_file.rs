//! JSON persistence shared by the path registry and the catalog store.

use crate::error::{LibraryError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;
use std::path::Path;
use tokio::fs;
use tracing::{error, warn};

/// Read and deserialize `path`. A missing file yields `Ok(None)`.
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let data = match fs::read_to_string(path).await {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to read store file");
            return Err(LibraryError::io(path, e));
        }
    };

    serde_json::from_str(&data).map(Some).map_err(|e| {
        error!(path = %path.display(), error = %e, "Store file holds invalid JSON");
        LibraryError::json(path, e)
    })
}

/// Serialize `value` pretty-printed and replace `path` with it.
///
/// The content goes to a sibling temp file first and is renamed over the
/// target, so readers never see a half-written store.
pub async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let data = serde_json::to_string_pretty(value).map_err(|e| {
        error!(path = %path.display(), error = %e, "Failed to serialize store content");
        LibraryError::json(path, e)
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(|e| {
            error!(path = %parent.display(), error = %e, "Failed to create store directory");
            LibraryError::io(parent, e)
        })?;
    }

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = Path::new(&tmp_name);

    if let Err(e) = fs::write(tmp_path, data).await {
        error!(path = %tmp_path.display(), error = %e, "Failed to write store file");
        discard(tmp_path).await;
        return Err(LibraryError::io(tmp_path, e));
    }

    if let Err(e) = fs::rename(tmp_path, path).await {
        error!(path = %path.display(), error = %e, "Failed to replace store file");
        discard(tmp_path).await;
        return Err(LibraryError::io(path, e));
    }

    Ok(())
}

/// Best-effort removal of a leftover temp file.
async fn discard(tmp_path: &Path) {
    if let Err(e) = fs::remove_file(tmp_path).await {
        if e.kind() != io::ErrorKind::NotFound {
            warn!(path = %tmp_path.display(), error = %e, "Failed to remove temp store file");
        }
    }
}
