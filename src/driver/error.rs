use crate::host::HostError;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("Nothing to send")]
    NothingToSend,

    #[error("Destination not ready for part {index} after {waited:?}")]
    HostUnavailable { index: usize, waited: Duration },

    #[error("Host error: {0}")]
    Host(#[from] HostError),
}
