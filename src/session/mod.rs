mod copied;
mod error;

#[cfg(test)]
mod tests;

pub use copied::CopyTracker;
pub use error::SessionError;

use crate::chunker::Separators;
use crate::parts::{FormatError, Part, PartFormatter, PartSequence};
use tracing::debug;

/// Text and limit being edited, with the parts derived from them.
///
/// Parts are recomputed in full on every input change. Copied flags are the
/// only state not derived from the inputs; they survive a recompute that
/// produces the same sequence and are cleared otherwise.
pub struct Session {
    text: String,
    limit: usize,
    separators: Separators,
    parts: Result<PartSequence, FormatError>,
    copied: CopyTracker,
}

impl Session {
    pub fn new(limit: usize) -> Self {
        Self::with_separators(limit, Separators::prose())
    }

    pub fn with_separators(limit: usize, separators: Separators) -> Self {
        let mut session = Self {
            text: String::new(),
            limit,
            separators,
            parts: Ok(PartSequence {
                parts: Vec::new(),
                limit,
                fingerprint: String::new(),
            }),
            copied: CopyTracker::new(),
        };
        session.recompute();
        session
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.recompute();
    }

    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
        self.recompute();
    }

    /// Current parts, or the reason none could be produced
    pub fn parts(&self) -> Result<&PartSequence, &FormatError> {
        self.parts.as_ref()
    }

    pub fn error(&self) -> Option<&FormatError> {
        self.parts.as_ref().err()
    }

    /// Number of parts on offer; zero when formatting failed
    pub fn part_count(&self) -> usize {
        self.parts.as_ref().map(PartSequence::len).unwrap_or(0)
    }

    /// Number of content chunks, leaving out the instruction part
    pub fn chunk_count(&self) -> usize {
        self.parts
            .as_ref()
            .map(|parts| parts.content_chunks().count())
            .unwrap_or(0)
    }

    /// Record that the user copied a part and hand it back for the clipboard
    pub fn mark_copied(&mut self, index: usize) -> Result<&Part, SessionError> {
        let parts = match &self.parts {
            Ok(parts) => parts,
            Err(err) => return Err(SessionError::Unavailable(err.clone())),
        };

        let part = parts.get(index).ok_or(SessionError::NoSuchPart {
            index,
            total: parts.len(),
        })?;

        self.copied.mark(index);
        Ok(part)
    }

    pub fn is_copied(&self, index: usize) -> bool {
        self.copied.is_copied(index)
    }

    pub fn copied_count(&self) -> usize {
        self.copied.count()
    }

    fn recompute(&mut self) {
        let next = PartFormatter::new(self.limit)
            .with_separators(self.separators.clone())
            .format(&self.text);

        if fingerprint_of(&self.parts) != fingerprint_of(&next) {
            self.copied.clear();
        }

        debug!(
            limit = self.limit,
            parts = next.as_ref().map(PartSequence::len).unwrap_or(0),
            failed = next.is_err(),
            "recomputed parts"
        );
        self.parts = next;
    }
}

fn fingerprint_of(parts: &Result<PartSequence, FormatError>) -> Option<&str> {
    parts.as_ref().ok().map(|p| p.fingerprint.as_str())
}
