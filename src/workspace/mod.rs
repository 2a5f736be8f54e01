//! Workspace management for Dreamz
//!
//! This module handles:
//! - Workspace detection and initialization
//! - Loading and saving the configuration and composer state
//!
//! ## Workspace Structure
//!
//! ```text
//! .dreamz/
//! ├── dreamz.yaml   # Limits and channel directory
//! └── state.yaml    # Catalog, bundles and wizard step
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::catalog::VideoCatalog;
use crate::composer::Composer;
use crate::config::DreamzConfig;
use crate::config::utils::add_blank_lines_between_entries;
use crate::error::{
    DreamzError, Result, config_parse_failed, file_read_failed, file_write_failed,
    workspace_exists, workspace_not_found,
};

/// Dreamz workspace directory name
pub const WORKSPACE_DIR: &str = ".dreamz";

/// Configuration filename
pub const CONFIG_FILE: &str = "dreamz.yaml";

/// Composer state filename
pub const STATE_FILE: &str = "state.yaml";

/// Represents a Dreamz workspace
#[derive(Debug)]
pub struct Workspace {
    /// Root directory of the workspace (where .dreamz is located)
    pub root: PathBuf,

    /// Path to the .dreamz directory
    pub dreamz_dir: PathBuf,

    /// Configuration (dreamz.yaml)
    pub config: DreamzConfig,

    /// Composer state (state.yaml)
    pub composer: Composer,
}

impl Workspace {
    /// Detect if a workspace exists at the given path
    pub fn exists(root: &Path) -> bool {
        root.join(WORKSPACE_DIR).is_dir()
    }

    /// Find a workspace by searching upward from the given path
    pub fn find_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if Self::exists(&current) {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Resolve the start directory from the CLI argument or current directory
    pub fn start_dir(workspace: Option<PathBuf>) -> Result<PathBuf> {
        match workspace {
            Some(path) => Ok(path),
            None => std::env::current_dir().map_err(|e| DreamzError::IoError {
                message: format!("Failed to get current directory: {e}"),
            }),
        }
    }

    /// Locate and open the workspace containing `workspace` (or the current directory)
    pub fn locate(workspace: Option<PathBuf>) -> Result<Self> {
        let start = Self::start_dir(workspace)?;
        let root = Self::find_from(&start)
            .ok_or_else(|| workspace_not_found(start.display().to_string()))?;
        Self::open(&root)
    }

    /// Open an existing workspace
    pub fn open(root: &Path) -> Result<Self> {
        let dreamz_dir = root.join(WORKSPACE_DIR);

        if !dreamz_dir.is_dir() {
            return Err(workspace_not_found(root.display().to_string()));
        }

        let config_path = dreamz_dir.join(CONFIG_FILE);
        let config = if config_path.exists() {
            DreamzConfig::load(&config_path)?
        } else {
            DreamzConfig::default()
        };
        let composer = Self::load_state(&dreamz_dir)?;

        debug!(root = %root.display(), bundles = composer.store.len(), "opened workspace");

        Ok(Self {
            root: root.to_path_buf(),
            dreamz_dir,
            config,
            composer,
        })
    }

    /// Initialize a new workspace at the given path
    ///
    /// An existing workspace is only replaced when `force` is set.
    pub fn init(root: &Path, catalog: VideoCatalog, force: bool) -> Result<Self> {
        if Self::exists(root) && !force {
            return Err(workspace_exists(root.display().to_string()));
        }

        let dreamz_dir = root.join(WORKSPACE_DIR);
        fs::create_dir_all(&dreamz_dir)
            .map_err(|e| file_write_failed(dreamz_dir.display().to_string(), e.to_string()))?;

        let workspace = Self {
            root: root.to_path_buf(),
            dreamz_dir,
            config: DreamzConfig::new(Self::infer_name(root)),
            composer: Composer::new(catalog),
        };

        write_atomic(&workspace.config_path(), &workspace.config.to_yaml()?)?;
        workspace.save()?;

        debug!(root = %root.display(), "initialized workspace");
        Ok(workspace)
    }

    /// Workspace name from the root directory name
    fn infer_name(root: &Path) -> String {
        root.file_name()
            .and_then(|n| n.to_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("dreamz")
            .to_string()
    }

    pub fn config_path(&self) -> PathBuf {
        self.dreamz_dir.join(CONFIG_FILE)
    }

    pub fn state_path(&self) -> PathBuf {
        self.dreamz_dir.join(STATE_FILE)
    }

    /// Load composer state; a missing state file means a fresh, empty composer
    fn load_state(dreamz_dir: &Path) -> Result<Composer> {
        let path = dreamz_dir.join(STATE_FILE);

        if !path.exists() {
            return Ok(Composer::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| file_read_failed(path.display().to_string(), e.to_string()))?;

        serde_yaml::from_str(&content)
            .map_err(|e| config_parse_failed(path.display().to_string(), e.to_string()))
    }

    /// Save composer state
    pub fn save(&self) -> Result<()> {
        let yaml = serde_yaml::to_string(&self.composer)?;
        let yaml = add_blank_lines_between_entries(&yaml, "bundles", "- id:");
        write_atomic(&self.state_path(), &yaml)?;
        debug!(path = %self.state_path().display(), "saved state");
        Ok(())
    }
}

/// Write `content` to `path` through a temporary file in the same directory
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let to_err = |e: std::io::Error| file_write_failed(path.display().to_string(), e.to_string());

    let mut temp = NamedTempFile::new_in(dir).map_err(to_err)?;
    temp.write_all(content.as_bytes()).map_err(to_err)?;
    temp.persist(path).map_err(|e| to_err(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::demo_catalog;
    use crate::selection::Limits;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_workspace_exists() {
        let temp = TempDir::new().unwrap();
        assert!(!Workspace::exists(temp.path()));

        fs::create_dir(temp.path().join(WORKSPACE_DIR)).unwrap();
        assert!(Workspace::exists(temp.path()));
    }

    #[test]
    fn test_workspace_find_from_nested() {
        let temp = TempDir::new().unwrap();
        Workspace::init(temp.path(), demo_catalog(), false).unwrap();

        let nested = temp.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();

        let found = Workspace::find_from(&nested).unwrap();
        assert_eq!(found, temp.path());
    }

    #[test]
    fn test_workspace_init_writes_files() {
        let temp = TempDir::new().unwrap();
        let workspace = Workspace::init(temp.path(), demo_catalog(), false).unwrap();

        assert!(workspace.config_path().is_file());
        assert!(workspace.state_path().is_file());
        assert_eq!(workspace.composer.catalog.len(), 10);
    }

    #[test]
    fn test_workspace_init_refuses_existing() {
        let temp = TempDir::new().unwrap();
        Workspace::init(temp.path(), demo_catalog(), false).unwrap();

        let err = Workspace::init(temp.path(), VideoCatalog::default(), false).unwrap_err();
        assert!(matches!(err, DreamzError::WorkspaceExists { .. }));

        let workspace = Workspace::init(temp.path(), VideoCatalog::default(), true).unwrap();
        assert!(workspace.composer.catalog.is_empty());
    }

    #[test]
    fn test_workspace_state_roundtrip() {
        let temp = TempDir::new().unwrap();
        let mut workspace = Workspace::init(temp.path(), demo_catalog(), false).unwrap();

        workspace.composer.catalog.toggle("1").unwrap();
        workspace.composer.catalog.toggle("2").unwrap();
        let id = workspace
            .composer
            .create_bundle("Part 1", Limits::default())
            .unwrap();
        workspace.save().unwrap();

        let reopened = Workspace::open(temp.path()).unwrap();
        assert_eq!(reopened.composer, workspace.composer);
        assert_eq!(reopened.composer.store.get(id).unwrap().videos().len(), 2);
    }

    #[test]
    fn test_workspace_open_missing() {
        let temp = TempDir::new().unwrap();
        let err = Workspace::open(temp.path()).unwrap_err();
        assert!(matches!(err, DreamzError::WorkspaceNotFound { .. }));
    }

    #[test]
    fn test_workspace_open_without_state_file() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(WORKSPACE_DIR)).unwrap();

        let workspace = Workspace::open(temp.path()).unwrap();
        assert!(workspace.composer.catalog.is_empty());
        assert_eq!(workspace.config, DreamzConfig::default());
    }

    #[test]
    fn test_workspace_corrupt_state() {
        let temp = TempDir::new().unwrap();
        let workspace = Workspace::init(temp.path(), demo_catalog(), false).unwrap();
        fs::write(workspace.state_path(), "catalog: {{{").unwrap();

        let err = Workspace::open(temp.path()).unwrap_err();
        assert!(err.to_string().contains(STATE_FILE));
    }

    #[test]
    #[serial]
    fn test_locate_from_current_dir() {
        let temp = TempDir::new().unwrap();
        Workspace::init(temp.path(), demo_catalog(), false).unwrap();
        let nested = temp.path().join("clips");
        fs::create_dir(&nested).unwrap();

        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(&nested).unwrap();
        let located = Workspace::locate(None);
        std::env::set_current_dir(previous).unwrap();

        let workspace = located.unwrap();
        assert_eq!(
            workspace.root.canonicalize().unwrap(),
            temp.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_locate_explicit_path_without_workspace() {
        let temp = TempDir::new().unwrap();
        let err = Workspace::locate(Some(temp.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, DreamzError::WorkspaceNotFound { .. }));
    }

    #[test]
    fn test_infer_name() {
        assert_eq!(Workspace::infer_name(Path::new("/srv/my-server")), "my-server");
    }
}
