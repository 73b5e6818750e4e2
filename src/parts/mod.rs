mod error;
mod formatter;
mod part;
mod template;

#[cfg(test)]
mod tests;

pub use error::FormatError;
pub use formatter::{PartFormatter, format_parts, parse_limit};
pub use part::{Part, PartKind, PartSequence};
pub use template::{
    COMPLETION_SUFFIX, END_MARKER, INSTRUCTION_TEMPLATE, START_MARKER, TOTAL_PARTS_PLACEHOLDER,
    frame, framing_overhead, instruction_text, max_overhead,
};
