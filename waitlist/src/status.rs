//! The single status flag behind the waitlist form.

use crate::config::DEFAULT_SUCCESS_MESSAGE;
use crate::error::SubmitError;
use crate::submission::SubmitOutcome;

pub const CORRECT_ERRORS_MESSAGE: &str = "Please correct the errors in the form";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    /// A request is in flight; the submit button is disabled.
    Loading,
    Success(String),
    Error(String),
}

impl SubmitStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmitStatus::Loading)
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_loading() {
            "Submitting..."
        } else {
            "Join Waitlist"
        }
    }

    /// Banner text, if the status has one.
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmitStatus::Success(msg) | SubmitStatus::Error(msg) => Some(msg),
            SubmitStatus::Idle | SubmitStatus::Loading => None,
        }
    }

    pub fn after_validation_failure() -> Self {
        SubmitStatus::Error(CORRECT_ERRORS_MESSAGE.to_string())
    }

    /// Status to show once a submit attempt settles.
    ///
    /// The banner always uses the fixed success copy, whatever the webhook
    /// replied.
    pub fn from_result(result: &Result<SubmitOutcome, SubmitError>) -> Self {
        match result {
            Ok(_) => SubmitStatus::Success(DEFAULT_SUCCESS_MESSAGE.to_string()),
            Err(err) => SubmitStatus::Error(err.user_message()),
        }
    }
}
