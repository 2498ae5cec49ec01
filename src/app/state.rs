//! Workspace shared by every command
//!
//! Holds the profile store (and with it the settings used for rendering), the
//! application config and the clipboard. Command handlers receive it as
//! `&mut Workspace`; the heading engine only ever sees `&HeadingSettings`.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::clipboard::TextClipboard;
use crate::command::Outcome;
use crate::config::Config;
use crate::heading::{self, HeadingSettings};
use crate::profile::ProfileStore;

/// Everything a command can read or change
pub struct Workspace {
    /// Current settings and saved profiles
    pub store: ProfileStore,
    /// Delivery options
    pub config: Config,
    /// Where `config` is written when it changes
    config_path: PathBuf,
    /// Destination for rendered headings, source for `clip`
    pub clipboard: Box<dyn TextClipboard>,
}

impl std::fmt::Debug for Workspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workspace")
            .field("store", &self.store)
            .field("config", &self.config)
            .field("config_path", &self.config_path)
            .field("clipboard", &self.clipboard.name())
            .finish()
    }
}

impl Workspace {
    pub fn new(
        store: ProfileStore,
        config: Config,
        config_path: PathBuf,
        clipboard: Box<dyn TextClipboard>,
    ) -> Self {
        Self {
            store,
            config,
            config_path,
            clipboard,
        }
    }

    /// Settings used for rendering
    pub fn settings(&self) -> &HeadingSettings {
        self.store.current()
    }

    /// Change the current settings and persist the store
    ///
    /// The in-memory change is kept even if saving fails.
    pub fn update_settings<F>(&mut self, apply: F) -> Result<()>
    where
        F: FnOnce(&mut HeadingSettings),
    {
        apply(self.store.current_mut());
        self.save_store()
    }

    /// Persist the profile store
    pub fn save_store(&self) -> Result<()> {
        self.store.save().context("Settings changed but could not be saved")
    }

    /// Persist the application config
    pub fn save_config(&self) -> Result<()> {
        self.config.save_to(&self.config_path)
    }

    /// Render `text` with the current settings
    ///
    /// Windows line endings are normalized first so they never count as text.
    pub fn render(&self, text: &str) -> String {
        let normalized = text.replace("\r\n", "\n");
        heading::render(self.settings(), &normalized)
    }

    /// Render `text` and copy it to the clipboard when enabled
    pub fn render_and_deliver(&mut self, text: &str) -> Outcome {
        let rendered = self.render(text);
        let copied = self.config.copy_to_clipboard && self.copy(&rendered);
        Outcome::Heading {
            text: rendered,
            copied,
        }
    }

    fn copy(&mut self, text: &str) -> bool {
        match self.clipboard.set_text(text) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    "Failed to copy heading to {} clipboard: {}",
                    self.clipboard.name(),
                    e
                );
                false
            }
        }
    }

    /// Workspace writing into `dir`, with an in-memory clipboard
    ///
    /// Callers own `dir` (usually a `tempfile::TempDir`) and keep it alive for
    /// as long as the workspace.
    #[cfg(test)]
    pub(crate) fn for_tests(dir: &std::path::Path) -> Self {
        Self::new(
            ProfileStore::with_path(dir.join("profiles.json")),
            Config::default(),
            dir.join("config.toml"),
            Box::new(crate::clipboard::MemoryClipboard::new()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;

    /// Clipboard that refuses every write
    struct BrokenClipboard;

    impl TextClipboard for BrokenClipboard {
        fn name(&self) -> &str {
            "broken"
        }

        fn get_text(&mut self) -> Result<String> {
            anyhow::bail!("no clipboard")
        }

        fn set_text(&mut self, _text: &str) -> Result<()> {
            anyhow::bail!("no clipboard")
        }
    }

    #[test]
    fn test_render_normalizes_crlf() {
        let dir = tempfile::TempDir::new().unwrap();
        let ws = Workspace::for_tests(dir.path());
        assert_eq!(ws.render("a\r\nb"), ws.render("a\nb"));
    }

    #[test]
    fn test_render_and_deliver_copies() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut ws = Workspace::for_tests(dir.path());
        let outcome = ws.render_and_deliver("Hi");
        let expected = ws.render("Hi");
        assert_eq!(
            outcome,
            Outcome::Heading {
                text: expected.clone(),
                copied: true
            }
        );
        assert_eq!(ws.clipboard.get_text().unwrap(), expected);
    }

    #[test]
    fn test_render_and_deliver_respects_copy_setting() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut ws = Workspace::for_tests(dir.path());
        ws.config.copy_to_clipboard = false;
        let outcome = ws.render_and_deliver("Hi");
        assert!(matches!(outcome, Outcome::Heading { copied: false, .. }));
        assert!(ws.clipboard.get_text().is_err());
    }

    #[test]
    fn test_clipboard_failure_is_not_fatal() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut ws = Workspace::for_tests(dir.path());
        ws.clipboard = Box::new(BrokenClipboard);
        let outcome = ws.render_and_deliver("Hi");
        assert!(matches!(outcome, Outcome::Heading { copied: false, .. }));
    }

    #[test]
    fn test_update_settings_persists_store() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("profiles.json");
        let mut ws = Workspace::new(
            ProfileStore::with_path(path.clone()),
            Config::default(),
            temp_dir.path().join("config.toml"),
            Box::new(MemoryClipboard::new()),
        );

        ws.update_settings(|s| s.set_fixed_size(33)).unwrap();

        let reloaded = ProfileStore::load_from(&path).unwrap();
        assert_eq!(reloaded.current().fixed_size(), 33);
    }

    #[test]
    fn test_test_workspace_writes_inside_its_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut ws = Workspace::for_tests(dir.path());
        ws.update_settings(|s| s.set_fixed_size(12)).unwrap();
        ws.save_config().unwrap();

        assert_eq!(ws.store.path(), dir.path().join("profiles.json").as_path());
        assert!(dir.path().join("profiles.json").exists());
        assert!(dir.path().join("config.toml").exists());
    }

    #[test]
    fn test_save_config() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let mut ws = Workspace::new(
            ProfileStore::with_path(temp_dir.path().join("profiles.json")),
            Config::default(),
            config_path.clone(),
            Box::new(MemoryClipboard::new()),
        );

        ws.config.print_heading = false;
        ws.save_config().unwrap();
        assert!(!Config::load_from(&config_path).unwrap().print_heading);
    }
}
