use super::{Attach, Separator, Separators};
use tracing::debug;

/// Recursive boundary splitter with zero overlap
#[derive(Debug, Clone)]
pub struct TextSplitter {
    /// Maximum characters per chunk
    chunk_size: usize,
    /// Boundaries to try, most preferred first
    separators: Separators,
}

impl TextSplitter {
    /// Create a splitter using the prose separator profile
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size,
            separators: Separators::prose(),
        }
    }

    pub fn with_separators(mut self, separators: Separators) -> Self {
        self.separators = separators;
        self
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    /// Split text into ordered chunks of at most `chunk_size` characters.
    ///
    /// Chunks are trimmed at their edges and empty chunks are dropped, so
    /// whitespace-only input yields nothing. A size of zero also yields nothing.
    pub fn split(&self, text: &str) -> Vec<String> {
        if self.chunk_size == 0 || text.trim().is_empty() {
            return vec![];
        }

        let chunks = self.split_recursive(text, self.separators.as_slice());
        debug!(
            chunk_size = self.chunk_size,
            input_chars = char_len(text),
            chunks = chunks.len(),
            "split text"
        );
        chunks
    }

    fn split_recursive(&self, text: &str, separators: &[Separator]) -> Vec<String> {
        let fallback;
        let (separator, remaining) = match pick_separator(text, separators) {
            Some(found) => found,
            None => {
                fallback = Separator::trailing("");
                (&fallback, &[][..])
            }
        };

        let mut chunks = Vec::new();
        let mut pending: Vec<&str> = Vec::new();

        for piece in split_keeping(text, separator) {
            if char_len(piece) < self.chunk_size {
                pending.push(piece);
                continue;
            }

            // Piece is too big to merge: flush what we have, then go finer
            if !pending.is_empty() {
                chunks.extend(self.merge(&pending));
                pending.clear();
            }

            if remaining.is_empty() {
                push_trimmed(&mut chunks, piece);
            } else {
                chunks.extend(self.split_recursive(piece, remaining));
            }
        }

        if !pending.is_empty() {
            chunks.extend(self.merge(&pending));
        }

        chunks
    }

    /// Greedily pack small pieces into chunks no longer than `chunk_size`.
    /// Pieces already carry their separator, so they are joined as-is.
    fn merge(&self, pieces: &[&str]) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut current_len = 0;

        for piece in pieces {
            let piece_len = char_len(piece);

            if current_len + piece_len > self.chunk_size && !current.is_empty() {
                push_trimmed(&mut chunks, &current);
                current.clear();
                current_len = 0;
            }

            current.push_str(piece);
            current_len += piece_len;
        }

        if !current.is_empty() {
            push_trimmed(&mut chunks, &current);
        }

        chunks
    }
}

/// Split with the prose profile
pub fn split_text(text: &str, chunk_size: usize) -> Vec<String> {
    TextSplitter::new(chunk_size).split(text)
}

/// Length in characters, the unit every limit is expressed in
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// First separator that occurs in `text`, plus the finer ones after it.
/// The fallback matches anything and leaves nothing finer to try.
fn pick_separator<'a>(
    text: &str,
    separators: &'a [Separator],
) -> Option<(&'a Separator, &'a [Separator])> {
    for (i, separator) in separators.iter().enumerate() {
        if separator.is_fallback() {
            return Some((separator, &[]));
        }
        if text.contains(separator.pattern()) {
            return Some((separator, &separators[i + 1..]));
        }
    }

    None
}

/// Split on a separator, keeping the separator text inside the pieces.
/// The fallback separator yields one piece per character.
fn split_keeping<'t>(text: &'t str, separator: &Separator) -> Vec<&'t str> {
    if separator.is_fallback() {
        return text
            .char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect();
    }

    let pattern = separator.pattern();
    let mut pieces = Vec::new();
    let mut start = 0;

    for (at, _) in text.match_indices(pattern) {
        let end = match separator.attach() {
            Attach::Trailing => at + pattern.len(),
            Attach::Leading => at,
        };
        if end > start {
            pieces.push(&text[start..end]);
            start = end;
        }
    }

    if start < text.len() {
        pieces.push(&text[start..]);
    }

    pieces
}

fn push_trimmed(chunks: &mut Vec<String>, text: &str) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}
