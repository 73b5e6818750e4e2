mod error;
mod page;
mod registry;
mod site;
mod terminal;


pub use error::HostError;
pub use page::{Page, Target};
pub use registry::HostRegistry;
pub use site::{SiteAdapter, SiteProfile};
pub use terminal::TerminalHost;

use async_trait::async_trait;

/// A destination that parts are submitted into, one per chat product
#[async_trait]
pub trait HostAdapter: Send + Sync {
    /// Short identifier, e.g. "chatgpt"
    fn name(&self) -> &str;

    /// Hostname this adapter serves
    fn domain(&self) -> &str;

    /// Whether a new part can be submitted right now
    ///
    /// False while the destination is still generating or when its input
    /// controls are missing.
    fn can_accept_input(&self) -> bool;

    /// Put `text` into the input and submit it.
    ///
    /// Does nothing when the destination is not ready.
    async fn submit(&self, text: &str) -> Result<(), HostError>;

    /// Ask the destination to stop generating. Best effort.
    fn cancel(&self);
}
