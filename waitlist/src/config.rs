//! Webhook endpoint and default copy for the waitlist.

/// Production Apps Script deployment that appends rows to the waitlist sheet.
pub const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbwr4TcU4li2QyRYtwKt6l5ayRzGysG24-qqtZxrgoplfc2e0TsYiT_h8_M7lr_I4O4/exec";

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Successfully joined the waitlist!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistConfig {
    pub endpoint: String,
    /// Shown when the webhook gives no message of its own
    pub success_message: String,
}

impl Default for WaitlistConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
        }
    }
}

impl WaitlistConfig {
    /// Defaults, with the endpoint taken from `DHARALINK_WAITLIST_URL` if it
    /// was set (and non-empty) at compile time. A CSR bundle has no runtime env.
    pub fn from_build_env() -> Self {
        Self::default().with_override(option_env!("DHARALINK_WAITLIST_URL"))
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn with_override(self, endpoint: Option<&str>) -> Self {
        match endpoint.map(str::trim) {
            Some(url) if !url.is_empty() => self.with_endpoint(url),
            _ => self,
        }
    }
}
