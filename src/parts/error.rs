use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error(
        "Limit of {limit} characters is too small: part markers alone need {overhead} characters"
    )]
    LimitTooSmall { limit: usize, overhead: usize },

    #[error("Part {index} is {length} characters after framing (limit: {limit})")]
    OverflowAfterFraming {
        index: usize,
        length: usize,
        limit: usize,
    },
}
