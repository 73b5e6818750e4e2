use super::{HostAdapter, HostError};
use async_trait::async_trait;
use std::io::Write;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Writes each part to a stream, for piping into another tool or a terminal.
///
/// After a submission it reports busy exactly once, which is how the driver
/// learns that the part was taken.
pub struct TerminalHost<W: Write + Send> {
    out: Mutex<W>,
    busy: AtomicBool,
    separator: String,
}

impl<W: Write + Send> TerminalHost<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            busy: AtomicBool::new(false),
            separator: "\n".to_string(),
        }
    }

    /// Text written after every part
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl<W: Write + Send> HostAdapter for TerminalHost<W> {
    fn name(&self) -> &str {
        "terminal"
    }

    fn domain(&self) -> &str {
        "localhost"
    }

    fn can_accept_input(&self) -> bool {
        !self.busy.swap(false, Ordering::SeqCst)
    }

    async fn submit(&self, text: &str) -> Result<(), HostError> {
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        out.write_all(text.as_bytes())?;
        out.write_all(self.separator.as_bytes())?;
        out.flush()?;
        self.busy.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn cancel(&self) {
        self.busy.store(false, Ordering::SeqCst);
    }
}
