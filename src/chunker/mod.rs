mod separators;
mod splitter;


pub use separators::{Attach, Separator, Separators};
pub use splitter::{TextSplitter, char_len, split_text};

/// Chunk size used when no preference is stored (characters)
pub const DEFAULT_CHUNK_SIZE: usize = 8000;
