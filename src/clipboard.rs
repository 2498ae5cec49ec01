//! Clipboard access for rendered headings
//!
//! The system clipboard is not always available (headless sessions, SSH), so
//! callers work against the [`TextClipboard`] trait and fall back to an
//! in-memory clipboard when the system one cannot be opened.

use anyhow::Result;

/// Something that can hold a piece of text
pub trait TextClipboard {
    /// Short name shown in diagnostics
    fn name(&self) -> &str;

    /// Get clipboard text content
    fn get_text(&mut self) -> Result<String>;

    /// Set clipboard text content
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Platform clipboard backed by arboard
pub struct SystemClipboard {
    ctx: arboard::Clipboard,
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard").finish_non_exhaustive()
    }
}

impl SystemClipboard {
    /// Open the system clipboard
    pub fn new() -> Result<Self> {
        let ctx = arboard::Clipboard::new()?;
        Ok(Self { ctx })
    }
}

impl TextClipboard for SystemClipboard {
    fn name(&self) -> &str {
        "system"
    }

    fn get_text(&mut self) -> Result<String> {
        let text = self.ctx.get_text()?;
        Ok(text)
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        self.ctx.set_text(text)?;
        Ok(())
    }
}

/// Clipboard that only lives as long as the process
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `text` already on the clipboard
    pub fn with_text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
        }
    }
}

impl TextClipboard for MemoryClipboard {
    fn name(&self) -> &str {
        "memory"
    }

    fn get_text(&mut self) -> Result<String> {
        self.text
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Clipboard is empty"))
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

/// Open the system clipboard, or an in-memory one if that fails
pub fn open() -> Box<dyn TextClipboard> {
    match SystemClipboard::new() {
        Ok(clipboard) => Box::new(clipboard),
        Err(e) => {
            tracing::warn!("System clipboard unavailable, using in-memory clipboard: {}", e);
            Box::new(MemoryClipboard::new())
        }
    }
}
