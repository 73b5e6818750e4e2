use super::template::{COMPLETION_SUFFIX, frame, instruction_text};
use crate::chunker::char_len;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PartKind {
    /// Synthesized protocol explanation, always at index 1
    Instruction,
    /// A framed chunk of the source text
    Content,
}

/// One message ready to paste or submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Part {
    /// 1-based position in the sequence
    pub index: usize,
    /// Number of parts in the sequence, instruction included
    pub total: usize,
    pub kind: PartKind,
    /// Unframed chunk (or the instruction text)
    pub body: String,
    /// Exactly what gets sent
    pub text: String,
}

impl Part {
    pub(crate) fn instruction(total: usize) -> Self {
        let text = instruction_text(total);
        Self {
            index: 1,
            total,
            kind: PartKind::Instruction,
            body: text.clone(),
            text,
        }
    }

    pub(crate) fn content(index: usize, total: usize, chunk: String) -> Self {
        let mut text = frame(index, total, &chunk);
        if index == total {
            text.push_str(COMPLETION_SUFFIX);
        }
        Self {
            index,
            total,
            kind: PartKind::Content,
            body: chunk,
            text,
        }
    }

    /// Length in characters of the text that gets sent
    pub fn len(&self) -> usize {
        char_len(&self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_last(&self) -> bool {
        self.index == self.total
    }

    pub fn is_instruction(&self) -> bool {
        self.kind == PartKind::Instruction
    }
}

/// Ordered parts derived from one (text, limit) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartSequence {
    pub parts: Vec<Part>,
    pub limit: usize,
    /// SHA-256 of the inputs, hex encoded
    pub fingerprint: String,
}

impl PartSequence {
    pub(crate) fn empty(limit: usize, fingerprint: String) -> Self {
        Self {
            parts: Vec::new(),
            limit,
            fingerprint,
        }
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Part> {
        self.parts.iter()
    }

    /// Look up a part by its 1-based index
    pub fn get(&self, index: usize) -> Option<&Part> {
        index.checked_sub(1).and_then(|i| self.parts.get(i))
    }

    pub fn has_instructions(&self) -> bool {
        self.parts.first().is_some_and(Part::is_instruction)
    }

    /// Unframed source chunks in order, instruction excluded
    pub fn content_chunks(&self) -> impl Iterator<Item = &str> {
        self.parts
            .iter()
            .filter(|p| p.kind == PartKind::Content)
            .map(|p| p.body.as_str())
    }
}

impl<'a> IntoIterator for &'a PartSequence {
    type Item = &'a Part;
    type IntoIter = std::slice::Iter<'a, Part>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}
