use std::cell::RefCell;
use std::collections::VecDeque;

use chrono::{TimeZone, Utc};
use dharalink_waitlist::error::{NETWORK_MESSAGE, TIMEOUT_MESSAGE};
use dharalink_waitlist::{
    ClientContext, FetchMode, SubmitError, SubmitStatus, Transport, TransportError,
    TransportReply, WaitlistConfig, WaitlistForm, submit,
};
use futures::executor::block_on;
use pretty_assertions::assert_eq;

/// Records every request and answers from a script, in order.
#[derive(Default)]
struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<TransportReply, TransportError>>>,
    sent: RefCell<Vec<(String, String, FetchMode)>>,
}

impl ScriptedTransport {
    fn with(replies: Vec<Result<TransportReply, TransportError>>) -> Self {
        Self {
            replies: RefCell::new(replies.into()),
            sent: RefCell::default(),
        }
    }

    fn modes(&self) -> Vec<FetchMode> {
        self.sent.borrow().iter().map(|(_, _, m)| *m).collect()
    }
}

impl Transport for ScriptedTransport {
    async fn post_json(
        &self,
        url: &str,
        body: &str,
        mode: FetchMode,
    ) -> Result<TransportReply, TransportError> {
        self.sent
            .borrow_mut()
            .push((url.to_string(), body.to_string(), mode));
        self.replies
            .borrow_mut()
            .pop_front()
            .expect("transport called more times than scripted")
    }
}

fn ok_json(body: &str) -> Result<TransportReply, TransportError> {
    Ok(TransportReply {
        ok: true,
        status: 200,
        body: Some(body.to_string()),
    })
}

fn opaque() -> Result<TransportReply, TransportError> {
    Ok(TransportReply {
        ok: false,
        status: 0,
        body: None,
    })
}

fn thrown(message: &str) -> Result<TransportReply, TransportError> {
    Err(TransportError::new(message))
}

fn form() -> WaitlistForm {
    WaitlistForm {
        full_name: " Ravi Kumar ".into(),
        email: "Ravi@Farm.Example".into(),
        state: "Andhra Pradesh".into(),
        district: "Guntur".into(),
        farm_size: "12".into(),
        crops: "Chilli, Cotton".into(),
    }
}

fn ctx() -> ClientContext {
    ClientContext {
        source: "https://dharalink.com/".into(),
        user_agent: "test-agent".into(),
        timestamp: Utc.with_ymd_and_hms(2025, 1, 15, 6, 30, 0).unwrap(),
    }
}

fn config() -> WaitlistConfig {
    WaitlistConfig::default().with_endpoint("https://hooks.test/waitlist")
}

#[test]
fn cors_success_uses_server_message_and_sends_once() {
    let transport = ScriptedTransport::with(vec![ok_json(
        r#"{"result":"success","message":"You're on the list"}"#,
    )]);

    let outcome = block_on(submit(&transport, &config(), &form(), ctx())).unwrap();

    assert_eq!(outcome.message, "You're on the list");
    assert_eq!(transport.modes(), vec![FetchMode::Cors]);

    let sent = transport.sent.borrow();
    let (url, body, _) = &sent[0];
    assert_eq!(url, "https://hooks.test/waitlist");
    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(json["fullName"], "Ravi Kumar");
    assert_eq!(json["email"], "ravi@farm.example");
    assert_eq!(json["farmSize"], "12");
    assert_eq!(json["userAgent"], "test-agent");
    assert_eq!(json["timestamp"], "2025-01-15T06:30:00.000Z");
}

#[test]
fn cors_success_without_message_uses_default_copy() {
    let transport = ScriptedTransport::with(vec![ok_json(r#"{"result":"success"}"#)]);
    let outcome = block_on(submit(&transport, &config(), &form(), ctx())).unwrap();
    assert_eq!(outcome.message, "Successfully joined the waitlist!");
}

#[test]
fn thrown_cors_request_falls_back_to_no_cors() {
    let transport = ScriptedTransport::with(vec![thrown("TypeError: Failed to fetch"), opaque()]);

    let outcome = block_on(submit(&transport, &config(), &form(), ctx())).unwrap();

    assert_eq!(outcome.message, "Successfully joined the waitlist!");
    assert_eq!(transport.modes(), vec![FetchMode::Cors, FetchMode::NoCors]);
    let sent = transport.sent.borrow();
    assert_eq!(sent[0].1, sent[1].1, "fallback must resend the same payload");
}

#[test]
fn non_ok_or_unreadable_cors_reply_also_falls_back() {
    let rejected = Ok(TransportReply {
        ok: false,
        status: 500,
        body: Some("boom".into()),
    });
    let transport = ScriptedTransport::with(vec![rejected, opaque()]);
    assert!(block_on(submit(&transport, &config(), &form(), ctx())).is_ok());
    assert_eq!(transport.modes(), vec![FetchMode::Cors, FetchMode::NoCors]);

    let transport = ScriptedTransport::with(vec![ok_json("<html>redirect</html>"), opaque()]);
    assert!(block_on(submit(&transport, &config(), &form(), ctx())).is_ok());
    assert_eq!(transport.modes(), vec![FetchMode::Cors, FetchMode::NoCors]);
}

#[test]
fn any_readable_json_reply_is_sent_once() {
    for body in [
        r#"{"result":"success","message":5}"#,
        r#"{"result":1}"#,
        r#""ok""#,
        "123",
        "[]",
    ] {
        let transport = ScriptedTransport::with(vec![ok_json(body)]);

        let outcome = block_on(submit(&transport, &config(), &form(), ctx())).unwrap();

        assert_eq!(transport.modes(), vec![FetchMode::Cors], "{body}");
        assert_eq!(outcome.message, "Successfully joined the waitlist!", "{body}");
    }
}

#[test]
fn empty_or_null_cors_body_falls_back() {
    for body in ["", "null"] {
        let transport = ScriptedTransport::with(vec![ok_json(body), opaque()]);
        assert!(block_on(submit(&transport, &config(), &form(), ctx())).is_ok());
        assert_eq!(
            transport.modes(),
            vec![FetchMode::Cors, FetchMode::NoCors],
            "{body:?}"
        );
    }

    let transport = ScriptedTransport::with(vec![
        Ok(TransportReply {
            ok: true,
            status: 200,
            body: None,
        }),
        opaque(),
    ]);
    assert!(block_on(submit(&transport, &config(), &form(), ctx())).is_ok());
    assert_eq!(transport.modes(), vec![FetchMode::Cors, FetchMode::NoCors]);
}

#[test]
fn no_cors_failure_is_classified() {
    let transport = ScriptedTransport::with(vec![
        thrown("TypeError: Failed to fetch"),
        thrown("NetworkError when attempting to fetch resource."),
    ]);

    let err = block_on(submit(&transport, &config(), &form(), ctx())).unwrap_err();

    assert!(matches!(err, SubmitError::Transport(_)));
    assert_eq!(err.user_message(), NETWORK_MESSAGE);
    assert_eq!(transport.modes().len(), 2, "no retry beyond the fallback");
}

#[test]
fn no_cors_timeout_and_empty_messages() {
    let transport = ScriptedTransport::with(vec![thrown(""), thrown("signal timeout")]);
    let err = block_on(submit(&transport, &config(), &form(), ctx())).unwrap_err();
    assert_eq!(err.user_message(), TIMEOUT_MESSAGE);

    let transport = ScriptedTransport::with(vec![thrown(""), thrown("")]);
    let err = block_on(submit(&transport, &config(), &form(), ctx())).unwrap_err();
    assert_eq!(
        err.user_message(),
        "An error occurred while submitting the form. Please try again later."
    );
}

#[test]
fn invalid_email_sends_nothing() {
    let transport = ScriptedTransport::default();
    let mut bad = form();
    bad.email = "ravi at farm".into();

    let err = block_on(submit(&transport, &config(), &bad, ctx())).unwrap_err();

    assert_eq!(err.user_message(), "Please enter a valid email address");
    assert!(transport.sent.borrow().is_empty());
}

#[test]
fn successful_submit_clears_form_and_shows_success() {
    // Mirrors what the waitlist view does once the future settles.
    let transport = ScriptedTransport::with(vec![thrown("Failed to fetch"), opaque()]);
    let mut current = form();

    let result = block_on(submit(&transport, &config(), &current, ctx()));
    let status = SubmitStatus::from_result(&result);
    if result.is_ok() {
        current.clear();
    }

    assert!(current.is_blank());
    assert_eq!(
        status,
        SubmitStatus::Success("Successfully joined the waitlist!".into())
    );
}
