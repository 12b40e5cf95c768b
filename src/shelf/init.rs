use crate::api::ShelfApi;
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::model::Scope;
use crate::store::fs::FileStore;
use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};

pub const CATALOG_DIR_NAME: &str = ".shelf";
pub const GLOBAL_DATA_ENV: &str = "SHELF_GLOBAL_DATA";

pub struct ShelfContext {
    pub api: ShelfApi<FileStore>,
    pub scope: Scope,
}

/// Walk up from `cwd` looking for a directory that has both `.git` and
/// `.shelf`. A repo without a catalog does not stop the search, so nested
/// repos share their parent's catalog. Stops at the home dir or the root.
pub fn find_project_root(cwd: &Path) -> Option<PathBuf> {
    let home_dir = BaseDirs::new().map(|bd| bd.home_dir().to_path_buf());
    let mut current = cwd.to_path_buf();

    loop {
        if current.join(".git").exists() && current.join(CATALOG_DIR_NAME).exists() {
            return Some(current);
        }

        if home_dir.as_ref() == Some(&current) {
            return None;
        }

        match current.parent() {
            Some(parent) if parent != current => current = parent.to_path_buf(),
            _ => return None,
        }
    }
}

/// The user-wide catalog directory. `SHELF_GLOBAL_DATA` wins over the
/// platform data dir.
pub fn global_data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(GLOBAL_DATA_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "shelf", "shelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShelfError::Config("Could not determine data directory".to_string()))
}

pub fn catalog_dir(cwd: &Path, scope: Scope) -> Result<PathBuf> {
    match scope {
        Scope::Project => Ok(find_project_root(cwd)
            .unwrap_or_else(|| cwd.to_path_buf())
            .join(CATALOG_DIR_NAME)),
        Scope::Global => global_data_dir(),
    }
}

pub fn initialize(cwd: &Path, use_global: bool) -> Result<ShelfContext> {
    let scope = if use_global {
        Scope::Global
    } else {
        Scope::Project
    };

    let dir = catalog_dir(cwd, scope)?;
    let config = ShelfConfig::load(&dir)?;
    tracing::debug!(dir = %dir.display(), ?scope, "resolved catalog");

    let store = FileStore::new(dir.clone()).with_snapshot_file(&config.snapshot_file);
    let api = ShelfApi::new(store, dir).with_policy(config.on_malformed);

    Ok(ShelfContext { api, scope })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_project_root_with_git_and_shelf() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir(root.join(".git")).unwrap();
        fs::create_dir(root.join(".shelf")).unwrap();

        assert_eq!(find_project_root(root), Some(root.to_path_buf()));
    }

    #[test]
    fn test_find_project_root_git_only_continues_up() {
        let temp = TempDir::new().unwrap();
        let parent = temp.path();
        let child = parent.join("child-repo");

        fs::create_dir(&child).unwrap();
        fs::create_dir(parent.join(".git")).unwrap();
        fs::create_dir(parent.join(".shelf")).unwrap();
        fs::create_dir(child.join(".git")).unwrap();

        assert_eq!(find_project_root(&child), Some(parent.to_path_buf()));
    }

    #[test]
    fn test_find_project_root_shelf_only_no_git() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir(root.join(".shelf")).unwrap();

        assert_eq!(find_project_root(root), None);
    }

    #[test]
    fn test_project_catalog_defaults_to_cwd() {
        let temp = TempDir::new().unwrap();
        let dir = catalog_dir(temp.path(), Scope::Project).unwrap();
        assert_eq!(dir, temp.path().join(".shelf"));
    }

    #[test]
    fn test_initialize_reads_config() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".shelf");
        let mut config = ShelfConfig::default();
        config.set("snapshot-file", "books.json").unwrap();
        config.save(&dir).unwrap();

        let ctx = initialize(temp.path(), false).unwrap();
        assert_eq!(ctx.scope, Scope::Project);
        assert_eq!(ctx.api.catalog_dir(), dir.as_path());
        assert_eq!(ctx.api.store().snapshot_path(), dir.join("books.json"));
    }
}
