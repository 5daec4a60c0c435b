//! JSON file handling for the batch steps.
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::domain::{CuratorError, PostRecord};

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CuratorError> {
    let content = fs::read_to_string(path).map_err(|e| CuratorError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| CuratorError::json(path, e))
}

/// Like [`read_json`], but a missing file yields `T::default()`.
pub fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T, CuratorError> {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).map_err(|e| CuratorError::json(path, e)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "optional input missing, using empty default");
            Ok(T::default())
        }
        Err(e) => Err(CuratorError::io(path, e)),
    }
}

/// Pretty-printed with a trailing newline. Non-ASCII text is written as is.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), CuratorError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CuratorError::io(parent, e))?;
    }

    let mut content = serde_json::to_string_pretty(value).map_err(|e| CuratorError::json(path, e))?;
    content.push('\n');
    fs::write(path, content).map_err(|e| CuratorError::io(path, e))?;

    debug!(path = %path.display(), "wrote file");
    Ok(())
}

/// Reads the scraped posts. Records without an identifier cannot be tracked
/// through the later steps and are dropped here.
pub fn load_posts(path: &Path) -> Result<Vec<PostRecord>, CuratorError> {
    let records: Vec<PostRecord> = read_json(path)?;
    let total = records.len();
    let posts: Vec<PostRecord> = records
        .into_iter()
        .filter(PostRecord::has_identifier)
        .collect();

    let skipped = total - posts.len();
    if skipped > 0 {
        warn!(
            path = %path.display(),
            skipped,
            "skipped posts without local_filename or shortcode"
        );
    }
    info!(path = %path.display(), posts = posts.len(), "loaded posts");
    Ok(posts)
}
