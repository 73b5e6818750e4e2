// Public API exports
pub mod chunker;
pub mod config;
pub mod driver;
pub mod host;
pub mod parts;
pub mod session;

// Re-export main types for convenience
pub use chunker::{DEFAULT_CHUNK_SIZE, Separators, TextSplitter, char_len, split_text};

pub use parts::{
    COMPLETION_SUFFIX, FormatError, Part, PartFormatter, PartKind, PartSequence, format_parts,
    parse_limit,
};

pub use session::{CopyTracker, Session, SessionError};

pub use host::{HostAdapter, HostError, HostRegistry, Page, SiteAdapter, SiteProfile, TerminalHost};

pub use driver::{AutoSubmitter, CancelHandle, DriverConfig, DriverError, Progress, RunOutcome};

pub use config::{ConfigError, DEFAULT_LIMIT, Preferences};
