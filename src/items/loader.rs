//! Tolerant directory loader for item record files

use std::path::Path;

use serde::de::DeserializeOwned;

/// Load every record with the given extension from one directory.
///
/// Entries are read in sorted filename order so load order is reproducible
/// across runs and platforms. A missing directory yields no records; an
/// unreadable or malformed file is logged and skipped without failing the
/// rest of the load.
pub fn load_records<T: DeserializeOwned>(dir: &Path, extension: &str) -> Vec<T> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        tracing::debug!("no record directory at {}", dir.display());
        return Vec::new();
    };

    let mut paths: Vec<_> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        })
        .collect();
    paths.sort();

    let mut records = Vec::new();
    for path in paths {
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!("skipping unreadable record {}: {err}", path.display());
                continue;
            }
        };
        match serde_json::from_str(&text) {
            Ok(record) => records.push(record),
            Err(err) => tracing::warn!("skipping malformed record {}: {err}", path.display()),
        }
    }
    records
}
