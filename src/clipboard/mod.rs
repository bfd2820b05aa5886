//! Clipboard sink with timed auto-clear.
//!
//! After a password is written out, a background thread clears the sink
//! once the delay elapses. The schedule call itself never blocks; callers
//! that want the clear to actually land before the process exits hold on to
//! the returned handle and `wait` on it. If the process exits earlier the
//! sink is simply left as-is — the clear is best-effort, not a guarantee.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crate::errors::{PassVaultError, Result};

/// Seconds a copied password stays on the clipboard by default.
pub const DEFAULT_CLEAR_SECS: u64 = 10;

/// Somewhere plaintext can be exposed and later wiped.
pub trait ClipboardSink: Send {
    fn write(&mut self, text: &str) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}

/// The OS clipboard. A fresh connection is made per call, so the value
/// itself carries no platform handles and stays `Send`.
#[derive(Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardSink for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().map_err(clip_err)?;
        clipboard.set_text(text.to_string()).map_err(clip_err)
    }

    fn clear(&mut self) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().map_err(clip_err)?;
        clipboard.clear().map_err(clip_err)
    }
}

fn clip_err(err: arboard::Error) -> PassVaultError {
    PassVaultError::Clipboard(err.to_string())
}

/// In-memory sink for tests. Clones share contents.
#[derive(Clone, Default)]
pub struct MemClipboard {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok()?.clone()
    }
}

impl ClipboardSink for MemClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        *self
            .contents
            .lock()
            .map_err(|_| PassVaultError::Clipboard("clipboard lock poisoned".to_string()))? =
            Some(text.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        *self
            .contents
            .lock()
            .map_err(|_| PassVaultError::Clipboard("clipboard lock poisoned".to_string()))? = None;
        Ok(())
    }
}

/// Handle to a scheduled clear. Dropping it detaches the clear thread.
pub struct ClearHandle {
    handle: thread::JoinHandle<Result<()>>,
}

impl ClearHandle {
    /// Blocks until the clear has run and reports its outcome.
    pub fn wait(self) -> Result<()> {
        self.handle
            .join()
            .map_err(|_| PassVaultError::Clipboard("clear thread panicked".to_string()))?
    }
}

/// Spawns a thread that clears `sink` after `delay` and returns immediately.
pub fn schedule_clear<S: ClipboardSink + 'static>(mut sink: S, delay: Duration) -> ClearHandle {
    let handle = thread::spawn(move || {
        thread::sleep(delay);
        sink.clear()
    });
    ClearHandle { handle }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
