//! Clipboard Proxy
//!
//! The shared state reads and writes the system clipboard through this trait.

use tracing::debug;

use super::{StateError, StateResult};

pub trait Clipboard {
    /// Current clipboard text, or `StateError::ClipboardEmpty` when it holds none.
    fn get_text(&mut self) -> StateResult<String>;
    fn set_text(&mut self, text: &str) -> StateResult<()>;
    fn clear(&mut self) -> StateResult<()>;
}

/// System clipboard backed by `arboard`. The handle is opened on first use
/// and kept for the process lifetime so X11 selections stay owned.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> StateResult<&mut arboard::Clipboard> {
        if self.handle.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| StateError::Clipboard(e.to_string()))?;
            debug!("system clipboard opened");
            self.handle = Some(clipboard);
        }
        self.handle
            .as_mut()
            .ok_or_else(|| StateError::Clipboard("clipboard unavailable".to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> StateResult<String> {
        match self.handle()?.get_text() {
            Ok(text) => Ok(text),
            Err(arboard::Error::ContentNotAvailable) => Err(StateError::ClipboardEmpty),
            Err(e) => Err(StateError::Clipboard(e.to_string())),
        }
    }

    fn set_text(&mut self, text: &str) -> StateResult<()> {
        self.handle()?
            .set_text(text)
            .map_err(|e| StateError::Clipboard(e.to_string()))
    }

    fn clear(&mut self) -> StateResult<()> {
        self.handle()?
            .clear()
            .map_err(|e| StateError::Clipboard(e.to_string()))
    }
}

/// In-process clipboard for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

#[cfg(test)]
impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> StateResult<String> {
        self.text.clone().ok_or(StateError::ClipboardEmpty)
    }

    fn set_text(&mut self, text: &str) -> StateResult<()> {
        self.text = Some(text.to_string());
        Ok(())
    }

    fn clear(&mut self) -> StateResult<()> {
        self.text = None;
        Ok(())
    }
}
