mod cancel;
mod error;
mod progress;
mod submitter;


pub use cancel::CancelHandle;
pub use error::DriverError;
pub use progress::{Progress, RunOutcome, Status};
pub use submitter::{AutoSubmitter, DriverConfig};
