//! Profile persistence
//!
//! Handles saving and loading heading settings and named profiles to/from disk.

use super::Profile;
use crate::config::{categorize_io_error, profiles_file_path, DiskErrorKind};
use crate::heading::HeadingSettings;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Serializable format for the profile store
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreData {
    #[serde(default)]
    current: HeadingSettings,
    #[serde(default)]
    profiles: Vec<Profile>,
}

/// Backup a corrupted file by renaming it with a .backup extension
fn backup_corrupted_file(path: &Path) {
    let backup_path = path.with_extension("json.backup");
    if let Err(e) = std::fs::rename(path, &backup_path) {
        tracing::warn!(
            "Failed to backup corrupted file {} to {}: {}",
            path.display(),
            backup_path.display(),
            e
        );
    } else {
        tracing::info!("Corrupted profiles file backed up to {}", backup_path.display());
    }
}

/// Store for the active heading settings and named profiles
#[derive(Debug)]
pub struct ProfileStore {
    /// Settings used for rendering
    current: HeadingSettings,
    /// Saved profiles indexed by name
    profiles: HashMap<String, Profile>,
    /// Path to the profiles.json file
    store_path: PathBuf,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::with_path(profiles_file_path())
    }
}

impl ProfileStore {
    /// Create a new store holding default settings and no profiles
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with a custom path (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            current: HeadingSettings::default(),
            profiles: HashMap::new(),
            store_path: path,
        }
    }

    /// Path this store saves to
    pub fn path(&self) -> &Path {
        &self.store_path
    }

    /// Settings used for rendering
    pub fn current(&self) -> &HeadingSettings {
        &self.current
    }

    /// Mutable access to the settings used for rendering
    pub fn current_mut(&mut self) -> &mut HeadingSettings {
        &mut self.current
    }

    /// Replace the current settings
    pub fn set_current(&mut self, settings: HeadingSettings) {
        self.current = settings;
    }

    /// Restore the default layout
    pub fn reset_current(&mut self) {
        self.current = HeadingSettings::default();
    }

    /// Snapshot the current settings under `name`, replacing any profile with that name
    ///
    /// Returns the stored name (trimmed).
    pub fn save_profile(&mut self, name: &str) -> Result<String> {
        let name = validate_name(name)?;
        let profile = Profile::new(name.clone(), self.current.clone());
        self.profiles.insert(name.clone(), profile);
        Ok(name)
    }

    /// Make the profile called `name` the current settings
    pub fn load_profile(&mut self, name: &str) -> Result<&HeadingSettings> {
        let name = validate_name(name)?;
        let profile = self
            .profiles
            .get(&name)
            .with_context(|| format!("No profile named '{}'", name))?;
        self.current = profile.settings.clone();
        Ok(&self.current)
    }

    /// Remove a profile
    pub fn remove(&mut self, name: &str) -> Option<Profile> {
        self.profiles.remove(name.trim())
    }

    /// Get a profile by name
    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name.trim())
    }

    /// Get all profiles as a sorted vector (by name)
    pub fn profiles_sorted(&self) -> Vec<&Profile> {
        let mut profiles: Vec<_> = self.profiles.values().collect();
        profiles.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        profiles
    }

    /// Get the number of profiles
    pub fn count(&self) -> usize {
        self.profiles.len()
    }

    /// Check if there are any profiles
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Load store from disk
    pub fn load() -> Result<Self> {
        Self::load_from(&profiles_file_path())
    }

    /// Load store from a specific path
    ///
    /// If the file is corrupted, this will create a backup and return an error.
    /// Callers fall back to a default store.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::with_path(path.to_path_buf()));
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!("Failed to read profiles file: {}", e);
                backup_corrupted_file(path);
                return Err(anyhow::anyhow!(
                    "Could not read profiles file ({}). Starting with default settings.",
                    e
                ));
            }
        };

        let data: StoreData = match serde_json::from_str(&content) {
            Ok(d) => d,
            Err(e) => {
                tracing::error!("Profiles file is corrupted: {}", e);
                backup_corrupted_file(path);
                return Err(anyhow::anyhow!(
                    "Profiles file is corrupted and could not be parsed ({}). \
                     A backup has been created at {}.backup. \
                     Starting with default settings.",
                    e,
                    path.display()
                ));
            }
        };

        let profiles = data
            .profiles
            .into_iter()
            .map(|mut p| {
                p.settings = p.settings.sanitized();
                (p.name.clone(), p)
            })
            .collect();

        Ok(Self {
            current: data.current.sanitized(),
            profiles,
            store_path: path.to_path_buf(),
        })
    }

    /// Save store to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&self.store_path)
    }

    /// Save store to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                match categorize_io_error(&e) {
                    DiskErrorKind::PermissionDenied => {
                        anyhow::bail!(
                            "Permission denied creating directory {:?}. Check file permissions.",
                            parent
                        );
                    }
                    DiskErrorKind::DiskFull => {
                        anyhow::bail!("Disk full - cannot create directory {:?}", parent);
                    }
                    _ => {
                        return Err(e).context("Failed to create directory for profiles file");
                    }
                }
            }
        }

        let data = StoreData {
            current: self.current.clone(),
            profiles: self.profiles_sorted().into_iter().cloned().collect(),
        };

        let content = serde_json::to_string_pretty(&data).context("Failed to serialize profiles")?;

        if let Err(e) = std::fs::write(path, &content) {
            match categorize_io_error(&e) {
                DiskErrorKind::DiskFull => {
                    anyhow::bail!(
                        "Disk full - free space needed to save profiles. Your changes may not be saved."
                    );
                }
                DiskErrorKind::PermissionDenied => {
                    anyhow::bail!(
                        "Permission denied writing to {:?}. Check file permissions.",
                        path
                    );
                }
                _ => {
                    return Err(e).context("Failed to write profiles file");
                }
            }
        }

        tracing::info!("Saved {} profile(s) to {}", self.count(), path.display());
        Ok(())
    }
}

/// Trim a profile name, rejecting blank ones
fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Profile name cannot be empty");
    }
    Ok(name.to_string())
}
