use super::{HostAdapter, HostError, Page, Target};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Where a chat product keeps its controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteProfile {
    pub name: &'static str,
    pub domain: &'static str,
    /// Frame hosting the chat UI, if it is embedded
    pub frame: Option<&'static str>,
    pub input: &'static str,
    pub send: &'static str,
    /// Present only while a reply is being generated
    pub stop: Option<&'static str>,
    /// Clicked before each submission to start a fresh context
    pub clear: Option<&'static str>,
}

const POE_SEND: &str = "button:has(> svg > [d^=\"M4 13h14.09l-6.79 6.79\"])";

impl SiteProfile {
    pub const CHATGPT: SiteProfile = SiteProfile {
        name: "chatgpt",
        domain: "chat.openai.com",
        frame: None,
        input: "#prompt-textarea",
        send: "[data-testid=\"send-button\"]",
        stop: Some("button[aria-label=\"Stop generating\"]"),
        clear: None,
    };

    pub const POE: SiteProfile = SiteProfile {
        name: "poe",
        domain: "poe.com",
        frame: None,
        input: "[class^=\"GrowingTextArea_textArea\"]",
        send: POE_SEND,
        stop: Some("[aria-label=\"Stop message\"]"),
        clear: Some("[class*=\"ChatBreakButton_button\"]"),
    };

    pub const MS_COPILOT: SiteProfile = SiteProfile {
        name: "ms_copilot",
        domain: "m365.cloud.microsoft",
        frame: Some("[data-tid=\"app-host-iframe\"]"),
        input: "#searchbox.text-area",
        send: "[is=\"cib-button\"]",
        stop: None,
        clear: None,
    };

    pub fn builtin() -> [SiteProfile; 3] {
        [Self::CHATGPT, Self::POE, Self::MS_COPILOT]
    }

    fn target(&self, selector: &'static str) -> Target<'static> {
        Target::new(self.frame, selector)
    }
}

/// Adapter for a chat site, driven through a [`Page`]
pub struct SiteAdapter<P: Page> {
    profile: SiteProfile,
    page: P,
}

impl<P: Page> SiteAdapter<P> {
    pub fn new(profile: SiteProfile, page: P) -> Self {
        Self { profile, page }
    }

    pub fn profile(&self) -> &SiteProfile {
        &self.profile
    }

    pub fn page(&self) -> &P {
        &self.page
    }
}

#[async_trait]
impl<P: Page> HostAdapter for SiteAdapter<P> {
    fn name(&self) -> &str {
        self.profile.name
    }

    fn domain(&self) -> &str {
        self.profile.domain
    }

    fn can_accept_input(&self) -> bool {
        let profile = &self.profile;
        if let Some(stop) = profile.stop {
            if self.page.exists(profile.target(stop)) {
                return false;
            }
        }

        let send = profile.target(profile.send);
        self.page.exists(profile.target(profile.input))
            && self.page.exists(send)
            && !self.page.is_disabled(send)
    }

    async fn submit(&self, text: &str) -> Result<(), HostError> {
        if !self.can_accept_input() {
            debug!(site = self.profile.name, "not ready, skipping submit");
            return Ok(());
        }

        let profile = &self.profile;
        if let Some(clear) = profile.clear {
            self.page.click(profile.target(clear))?;
        }
        self.page.set_input(profile.target(profile.input), text)?;
        self.page.click(profile.target(profile.send))?;

        debug!(site = profile.name, chars = text.chars().count(), "submitted part");
        Ok(())
    }

    fn cancel(&self) {
        let Some(stop) = self.profile.stop else {
            return;
        };
        let target = self.profile.target(stop);
        if !self.page.exists(target) {
            return;
        }
        if let Err(e) = self.page.click(target) {
            warn!(site = self.profile.name, "failed to click stop: {}", e);
        }
    }
}
