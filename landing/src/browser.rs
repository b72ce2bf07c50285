//! Browser side of the waitlist: `fetch`, page context, smooth scrolling.

use chrono::Utc;
use dharalink_waitlist::{ClientContext, FetchMode, Transport, TransportError, TransportReply};
use gloo_net::http::Request;
use web_sys::{RequestMode, ScrollBehavior, ScrollIntoViewOptions};

/// [`Transport`] over the browser's `fetch`.
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn post_json(
        &self,
        url: &str,
        body: &str,
        mode: FetchMode,
    ) -> Result<TransportReply, TransportError> {
        let request_mode = match mode {
            FetchMode::Cors => RequestMode::Cors,
            FetchMode::NoCors => RequestMode::NoCors,
        };

        let response = Request::post(url)
            .mode(request_mode)
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .map_err(to_transport_error)?
            .send()
            .await
            .map_err(to_transport_error)?;

        // Opaque responses have no readable body
        let text = match mode {
            FetchMode::Cors => response.text().await.ok(),
            FetchMode::NoCors => None,
        };

        Ok(TransportReply {
            ok: response.ok(),
            status: response.status(),
            body: text,
        })
    }
}

// gloo's JsError displays as "TypeError: Failed to fetch", which is what
// the message classifier matches on.
fn to_transport_error(err: gloo_net::Error) -> TransportError {
    TransportError::new(err.to_string())
}

/// Page URL, user agent and the current instant.
pub fn client_context() -> ClientContext {
    let window = web_sys::window();
    let source = window
        .as_ref()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    let user_agent = window
        .as_ref()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default();

    ClientContext {
        source,
        user_agent,
        timestamp: Utc::now(),
    }
}

/// Smooth-scroll the element with `id` into view, if there is one.
pub fn scroll_to_section(id: &str) {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));

    let Some(element) = target else {
        tracing::debug!(id, "scroll target not found");
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
