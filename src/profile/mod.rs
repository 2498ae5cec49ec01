//! Named heading profiles
//!
//! A profile is a saved snapshot of [`HeadingSettings`] the user can switch back
//! to by name. The store also remembers the settings currently in use so they
//! survive a restart.

pub mod store;

pub use store::ProfileStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::heading::HeadingSettings;

/// A saved set of heading settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    /// Display name, unique within a store
    pub name: String,
    /// Layout captured when the profile was saved
    pub settings: HeadingSettings,
    /// When the profile was last written
    pub saved_at: DateTime<Utc>,
}

impl Profile {
    /// Create a new profile stamped with the current time
    pub fn new(name: String, settings: HeadingSettings) -> Self {
        Self {
            name,
            settings,
            saved_at: Utc::now(),
        }
    }

    /// One-line description for listings
    pub fn summary(&self) -> String {
        format!(
            "{} (boundary {:?}, fill {:?}, saved {})",
            self.name,
            self.settings.boundary_sequence(),
            self.settings.fill_sequence(),
            self.saved_at.format("%Y-%m-%d %H:%M")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_creation() {
        let profile = Profile::new("banner".to_string(), HeadingSettings::default());
        assert_eq!(profile.name, "banner");
        assert_eq!(profile.settings, HeadingSettings::default());
    }

    #[test]
    fn test_profile_summary() {
        let mut settings = HeadingSettings::default();
        settings.set_boundary_sequence("<=>");
        let profile = Profile::new("arrows".to_string(), settings);
        let summary = profile.summary();
        assert!(summary.starts_with("arrows (boundary \"<=>\", fill \"-\""));
    }

    #[test]
    fn test_profile_serialization() {
        let profile = Profile::new("Test".to_string(), HeadingSettings::default());
        let json = serde_json::to_string(&profile).unwrap();
        let parsed: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, parsed);
    }
}
