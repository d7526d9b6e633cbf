//! On-disk persistence of conversion results.

use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

/// Filesystem failures of the persistence stage, split so each keeps its
/// own user-facing message at the request boundary.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to create output file: {0}")]
    Create(#[source] std::io::Error),
    #[error("failed to write output file: {0}")]
    Write(#[source] std::io::Error),
}

/// Output filename for a conversion finished at `when`: a UTC
/// `yyyyMMdd_HHmmss` stamp carrying over the uploaded file's extension.
///
/// Second resolution means two requests inside the same second collide on
/// the name and the later write wins. Accepted edge case.
pub fn timestamped_name(original: &str, when: DateTime<Utc>) -> String {
    let stamp = when.format("%Y%m%d_%H%M%S");
    match Path::new(original).extension().and_then(OsStr::to_str) {
        Some(ext) => format!("{stamp}.{ext}"),
        None => stamp.to_string(),
    }
}

/// Write `contents` into `dir` under a timestamp-derived name and return
/// the path written.
pub fn write_result(dir: &Path, original: &str, contents: &str) -> Result<PathBuf, StoreError> {
    let path = dir.join(timestamped_name(original, Utc::now()));
    let mut file = std::fs::File::create(&path).map_err(StoreError::Create)?;
    file.write_all(contents.as_bytes()).map_err(StoreError::Write)?;
    Ok(path)
}
