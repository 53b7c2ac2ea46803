//! Blueprint file I/O

use std::path::Path;

use super::types::BlueprintFile;
use crate::error::{Error, Result};

/// Read a blueprint file.
pub fn read_blueprint<P: AsRef<Path>>(path: P) -> Result<BlueprintFile> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::BlueprintNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Write a blueprint file.
///
/// Output is compact JSON, matching the game's own save format.
pub fn write_blueprint<P: AsRef<Path>>(path: P, blueprint: &BlueprintFile) -> Result<()> {
    let json = serde_json::to_string(blueprint)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_blueprint_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.blueprint");
        let err = read_blueprint(&path).unwrap_err();
        assert!(matches!(err, Error::BlueprintNotFound { .. }));
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.blueprint");

        let mut blueprint = BlueprintFile::default();
        blueprint
            .item_dictionary
            .insert("1".to_string(), "aa11".to_string());
        blueprint.blueprint.block_ids = vec![1];
        blueprint.blueprint.block_color_indices = vec![0];

        write_blueprint(&path, &blueprint).unwrap();
        let back = read_blueprint(&path).unwrap();
        assert_eq!(back.item_dictionary.get("1").map(String::as_str), Some("aa11"));
        assert_eq!(back.blueprint.block_ids, [1]);
    }
}
