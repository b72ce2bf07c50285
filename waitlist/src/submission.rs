//! The payload sent to the spreadsheet webhook.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::ValidationError;
use crate::form::WaitlistForm;
use crate::validate::{check_submission, js_trim};

/// Where and when the submission happened, read from the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientContext {
    /// Page URL the form was submitted from
    pub source: String,
    pub user_agent: String,
    pub timestamp: DateTime<Utc>,
}

/// Normalized waitlist record, serialized with the spreadsheet's column keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub full_name: String,
    pub email: String,
    pub state: String,
    pub district: String,
    pub farm_size: String,
    pub crops: String,
    pub source: String,
    pub user_agent: String,
    #[serde(serialize_with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
}

impl Submission {
    /// Apply the submission rules, then trim everything and lower-case the email.
    pub fn prepare(form: &WaitlistForm, ctx: ClientContext) -> Result<Self, ValidationError> {
        check_submission(form)?;

        Ok(Self {
            full_name: js_trim(&form.full_name).to_string(),
            email: js_trim(&form.email).to_lowercase(),
            state: js_trim(&form.state).to_string(),
            district: js_trim(&form.district).to_string(),
            farm_size: js_trim(&form.farm_size).to_string(),
            crops: js_trim(&form.crops).to_string(),
            source: ctx.source,
            user_agent: ctx.user_agent,
            timestamp: ctx.timestamp,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Domain part of the email, for logs that must not carry the address.
    pub fn email_domain(&self) -> &str {
        self.email.rsplit_once('@').map_or("", |(_, domain)| domain)
    }
}

// `2025-03-01T09:15:42.123Z`, same shape as `Date.prototype.toISOString`.
fn iso_millis<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Body of a readable (CORS) webhook response.
///
/// Any JSON value other than `null` is a reply. Fields that are missing or
/// not strings read as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookReply {
    pub result: Option<String>,
    pub message: Option<String>,
}

impl WebhookReply {
    /// `None` when `body` is not JSON or is JSON `null`.
    pub fn parse(body: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(body).ok()?;
        if value.is_null() {
            return None;
        }
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_owned);
        Some(Self {
            result: text("result"),
            message: text("message"),
        })
    }

    /// The server's message if it sent a non-empty one, else `fallback`.
    pub fn success_message(&self, fallback: &str) -> String {
        match self.message.as_deref() {
            Some(msg) if !msg.is_empty() => msg.to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// A submission the webhook accepted (or is assumed to have accepted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub message: String,
}
