use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("Control not found on page: {0}")]
    ControlMissing(String),

    #[error("No adapter registered for host: {0}")]
    UnknownHost(String),

    #[error("Failed to write part: {0}")]
    Io(#[from] std::io::Error),
}
