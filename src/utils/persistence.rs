//! Profile storage for the host.
//!
//! The engine never touches storage. A `HunterSession` loads a snapshot
//! through a `ProfileStore` at startup and saves after each change.

use crate::core::constants::{DATA_DIR_ENV, DATA_DIR_NAME, PROFILE_FILENAME};
use crate::core::error::ProgressionError;
use crate::core::profile::HunterProfile;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Profile storage I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Profile file is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Stored profile rejected: {0}")]
    Corrupt(#[from] ProgressionError),
}

pub trait ProfileStore {
    /// Reads the stored snapshot, or `None` if nothing has been saved yet.
    fn load(&self) -> Result<Option<HunterProfile>, StoreError>;

    fn save(&mut self, profile: &HunterProfile) -> Result<(), StoreError>;
}

/// Resolves the data directory, creating it if needed.
///
/// Order: `explicit` path, then `$HUNTER_HOME`, then `~/.hunter`.
pub fn hunter_dir(explicit: Option<&Path>) -> io::Result<PathBuf> {
    let dir = match explicit {
        Some(path) => path.to_path_buf(),
        None => match std::env::var_os(DATA_DIR_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => {
                let home_dir = dirs::home_dir().ok_or_else(|| {
                    io::Error::new(
                        io::ErrorKind::NotFound,
                        "Could not determine home directory",
                    )
                })?;
                home_dir.join(DATA_DIR_NAME)
            }
        },
    };
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Stores the profile as pretty-printed JSON in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store at `<dir>/profile.json`, with `dir` resolved by [`hunter_dir`].
    pub fn in_dir(explicit: Option<&Path>) -> io::Result<Self> {
        Ok(Self {
            path: hunter_dir(explicit)?.join(PROFILE_FILENAME),
        })
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ProfileStore for JsonFileStore {
    fn load(&self) -> Result<Option<HunterProfile>, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let profile: HunterProfile = serde_json::from_str(&json)?;
        profile.validate()?;
        tracing::debug!("Loaded profile from {}", self.path.display());
        Ok(Some(profile))
    }

    /// Writes to a sibling temp file and renames it over the target.
    fn save(&mut self, profile: &HunterProfile) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(profile)?;
        let temp = self.temp_path();
        fs::write(&temp, json)?;
        fs::rename(&temp, &self.path)?;
        tracing::debug!("Saved profile to {}", self.path.display());
        Ok(())
    }
}

/// In-process store, used by tests and by hosts that persist elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    profile: Option<HunterProfile>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: HunterProfile) -> Self {
        Self {
            profile: Some(profile),
            saves: 0,
        }
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn stored(&self) -> Option<&HunterProfile> {
        self.profile.as_ref()
    }
}

impl ProfileStore for MemoryStore {
    fn load(&self) -> Result<Option<HunterProfile>, StoreError> {
        match &self.profile {
            Some(profile) => {
                profile.validate()?;
                Ok(Some(profile.clone()))
            }
            None => Ok(None),
        }
    }

    fn save(&mut self, profile: &HunterProfile) -> Result<(), StoreError> {
        self.profile = Some(profile.clone());
        self.saves += 1;
        Ok(())
    }
}
