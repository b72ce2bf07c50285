//! Sending a waitlist submission.
//!
//! Apps Script web apps answer cross-origin POSTs inconsistently, so the
//! flow tries a readable CORS request first and, if that goes wrong in any
//! way, repeats the POST in `no-cors` mode. An opaque no-cors response
//! cannot be inspected; getting one back at all counts as success.

use tracing::{debug, info, warn};

use crate::config::WaitlistConfig;
use crate::error::{SubmitError, TransportError};
use crate::form::WaitlistForm;
use crate::submission::{ClientContext, Submission, SubmitOutcome, WebhookReply};

/// Fetch `mode` for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    Cors,
    NoCors,
}

/// What came back from a POST that did not throw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportReply {
    /// `Response.ok`. Always false for an opaque (no-cors) response.
    pub ok: bool,
    pub status: u16,
    /// Response text, when readable.
    pub body: Option<String>,
}

/// Something that can POST a JSON body to a URL.
///
/// The landing page implements this over `fetch`; tests use a recording fake.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(
        &self,
        url: &str,
        body: &str,
        mode: FetchMode,
    ) -> Result<TransportReply, TransportError>;
}

/// Validate, normalize and send one submission.
///
/// Exactly one CORS attempt and at most one no-cors attempt are made; nothing
/// is sent if the form fails the submission rules.
pub async fn submit<T: Transport>(
    transport: &T,
    config: &WaitlistConfig,
    form: &WaitlistForm,
    ctx: ClientContext,
) -> Result<SubmitOutcome, SubmitError> {
    let submission = Submission::prepare(form, ctx)?;
    let body = submission
        .to_json()
        .map_err(|e| SubmitError::Encode(e.to_string()))?;

    match transport
        .post_json(&config.endpoint, &body, FetchMode::Cors)
        .await
    {
        Ok(reply) if reply.ok => match readable_reply(&reply) {
            Some(parsed) => {
                info!(
                    domain = submission.email_domain(),
                    status = reply.status,
                    "waitlist submission accepted"
                );
                return Ok(SubmitOutcome {
                    message: parsed.success_message(&config.success_message),
                });
            }
            None => debug!("CORS response unreadable, falling back to no-cors mode"),
        },
        Ok(reply) => debug!(
            status = reply.status,
            "CORS request rejected, falling back to no-cors mode"
        ),
        Err(err) => debug!(error = %err, "CORS request failed, falling back to no-cors mode"),
    }

    if let Err(err) = transport
        .post_json(&config.endpoint, &body, FetchMode::NoCors)
        .await
    {
        warn!(error = %err, "waitlist submission failed");
        return Err(SubmitError::Transport(err));
    }

    info!(
        domain = submission.email_domain(),
        "waitlist submission sent (opaque response)"
    );
    Ok(SubmitOutcome {
        message: config.success_message.clone(),
    })
}

fn readable_reply(reply: &TransportReply) -> Option<WebhookReply> {
    reply.body.as_deref().and_then(WebhookReply::parse)
}
