use super::HostError;

/// Element locator, optionally inside an embedded frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target<'a> {
    pub frame: Option<&'a str>,
    pub selector: &'a str,
}

impl<'a> Target<'a> {
    pub fn new(frame: Option<&'a str>, selector: &'a str) -> Self {
        Self { frame, selector }
    }
}

/// The handful of page operations a site adapter relies on.
///
/// This crate ships no implementation: it is the seam for a browser or
/// webdriver binding supplied by the embedder, which then drives a
/// [`SiteAdapter`](super::SiteAdapter) over one of the built-in profiles.
pub trait Page: Send + Sync {
    fn exists(&self, target: Target<'_>) -> bool;

    fn is_disabled(&self, target: Target<'_>) -> bool;

    /// Replace the value of an input and fire its input event
    fn set_input(&self, target: Target<'_>, text: &str) -> Result<(), HostError>;

    fn click(&self, target: Target<'_>) -> Result<(), HostError>;
}
