use crate::parts::FormatError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("No parts available: {0}")]
    Unavailable(FormatError),

    #[error("Part {index} does not exist (total: {total})")]
    NoSuchPart { index: usize, total: usize },
}
