use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes `data` as JSON indented with two spaces, replacing `path` atomically.
///
/// The document is serialized in full before the target is touched, then written to a
/// temp file in the same directory and renamed over `path`.
pub fn save_pretty_json<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<()> {
    let content = serde_json::to_vec_pretty(data).context("failed to serialize JSON")?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(directory)
        .with_context(|| format!("failed to create temp file in {}", directory.display()))?;
    file.write_all(&content)?;
    file.flush()?;
    file.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}
