use crate::collection::Collection;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::{ShelfConfig, CONFIG_FILENAME};
use crate::error::Result;
use crate::store::fs::FileStore;
use crate::store::SnapshotStore;
use std::fs;
use std::path::Path;

/// Create the catalog directory with an empty snapshot and default config.
/// Existing files are left alone.
pub fn run(dir: &Path) -> Result<CmdResult> {
    fs::create_dir_all(dir)?;

    if !dir.join(CONFIG_FILENAME).exists() {
        ShelfConfig::default().save(dir)?;
    }

    let config = ShelfConfig::load(dir)?;
    let mut store = FileStore::new(dir.to_path_buf()).with_snapshot_file(&config.snapshot_file);
    let mut result = CmdResult::default();

    if store.snapshot_path().exists() {
        result.add_message(CmdMessage::info(format!(
            "Catalog already exists at {}",
            store.snapshot_path().display()
        )));
    } else {
        store.save(&Collection::new())?;
        result.add_message(CmdMessage::success(format!(
            "Initialized shelf catalog at {}",
            dir.display()
        )));
    }

    Ok(result.with_paths(vec![store.snapshot_path()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_snapshot_and_config() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".shelf");
        run(&dir).unwrap();

        assert!(dir.join("items.json").exists());
        assert!(dir.join("config.json").exists());
        assert_eq!(fs::read_to_string(dir.join("items.json")).unwrap().trim(), "[]");
    }

    #[test]
    fn keeps_existing_snapshot() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".shelf");
        fs::create_dir_all(&dir).unwrap();
        let existing = r#"[{"title":"Dune","author":"Herbert","publisher":"Ace"}]"#;
        fs::write(dir.join("items.json"), existing).unwrap();

        let result = run(&dir).unwrap();
        assert_eq!(fs::read_to_string(dir.join("items.json")).unwrap(), existing);
        assert!(result.messages[0].content.contains("already exists"));
    }
}
