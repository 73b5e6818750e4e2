use super::{FormatError, Part, PartSequence, max_overhead};
use crate::chunker::{Separators, TextSplitter};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

/// Turns text into framed parts that each fit within `limit` characters
#[derive(Debug, Clone)]
pub struct PartFormatter {
    limit: usize,
    separators: Separators,
}

impl PartFormatter {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            separators: Separators::prose(),
        }
    }

    pub fn with_separators(mut self, separators: Separators) -> Self {
        self.separators = separators;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Split and frame `text`.
    ///
    /// The marker budget is estimated once from a first split at the full
    /// limit, the text is re-split at the reduced limit, and every resulting
    /// part is then checked against the full limit. There is no further
    /// convergence loop: a part that still overflows is reported, never
    /// truncated.
    ///
    /// Blank text or a zero limit produce an empty sequence rather than an error.
    pub fn format(&self, text: &str) -> Result<PartSequence, FormatError> {
        let fingerprint = fingerprint(text, self.limit);
        if self.limit == 0 || text.trim().is_empty() {
            return Ok(PartSequence::empty(self.limit, fingerprint));
        }

        let estimate = self.splitter(self.limit).split(text).len();
        let provisional_total = if estimate > 1 { estimate + 1 } else { estimate };
        let overhead = max_overhead(provisional_total);

        let adjusted = self.limit.saturating_sub(overhead);
        if adjusted == 0 {
            warn!(limit = self.limit, overhead, "limit too small for part markers");
            return Err(FormatError::LimitTooSmall {
                limit: self.limit,
                overhead,
            });
        }

        let chunks = self.splitter(adjusted).split(text);
        // Decided on the final count: a one-chunk estimate can still re-split
        // into several chunks at the reduced size.
        let needs_instructions = chunks.len() > 1;
        let offset = usize::from(needs_instructions);
        let total = chunks.len() + offset;

        debug!(limit = self.limit, adjusted, estimate, total, "formatting parts");

        let mut parts = Vec::with_capacity(total);
        for (i, chunk) in chunks.into_iter().enumerate() {
            parts.push(Part::content(i + 1 + offset, total, chunk));
        }

        self.validate(&parts)?;

        if needs_instructions {
            let instruction = Part::instruction(total);
            self.validate(std::slice::from_ref(&instruction))?;
            parts.insert(0, instruction);
        }

        Ok(PartSequence {
            parts,
            limit: self.limit,
            fingerprint,
        })
    }

    fn validate(&self, parts: &[Part]) -> Result<(), FormatError> {
        match parts.iter().find(|p| p.len() > self.limit) {
            Some(part) => {
                warn!(
                    index = part.index,
                    length = part.len(),
                    limit = self.limit,
                    "part overflows limit after framing"
                );
                Err(FormatError::OverflowAfterFraming {
                    index: part.index,
                    length: part.len(),
                    limit: self.limit,
                })
            }
            None => Ok(()),
        }
    }

    fn splitter(&self, size: usize) -> TextSplitter {
        TextSplitter::new(size).with_separators(self.separators.clone())
    }
}

/// Format with the prose separator profile
pub fn format_parts(text: &str, limit: usize) -> Result<PartSequence, FormatError> {
    PartFormatter::new(limit).format(text)
}

/// Normalize user input for the limit: anything that is not a positive
/// integer becomes 0, which formats to an empty sequence.
pub fn parse_limit(raw: &str) -> usize {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0)
}

fn fingerprint(text: &str, limit: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update((limit as u64).to_le_bytes());
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}
