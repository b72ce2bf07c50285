//! Reveal-on-scroll for page sections.

use leptos::html::Section;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of the section that must be on screen before it animates in.
const REVEAL_THRESHOLD: f64 = 0.1;

/// Signal that turns `true` the first time `target` scrolls into view and
/// stays `true`. Without IntersectionObserver it is `true` as soon as the
/// section mounts.
pub fn use_reveal(target: NodeRef<Section>) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);

    Effect::new(move || {
        let Some(element) = target.get() else {
            return;
        };
        if revealed.get_untracked() {
            return;
        }
        if let Err(err) = observe_once(&element, move || set_revealed.set(true)) {
            tracing::debug!(?err, "IntersectionObserver unavailable, revealing immediately");
            set_revealed.set(true);
        }
    });

    revealed
}

fn observe_once(element: &web_sys::Element, on_visible: impl Fn() + 'static) -> Result<(), JsValue> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());

            if intersecting {
                on_visible();
                observer.disconnect();
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    callback.forget(); // Owned by the observer from here on
    Ok(())
}

/// CSS transition delay for the `index`-th item of a staggered group.
pub fn stagger_delay(index: usize, step_ms: u32) -> String {
    let delay = u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms);
    format!("transition-delay: {delay}ms;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0, 100), "transition-delay: 0ms;");
        assert_eq!(stagger_delay(5, 100), "transition-delay: 500ms;");
        assert_eq!(
            stagger_delay(usize::MAX, 100),
            format!("transition-delay: {}ms;", u32::MAX)
        );
    }
}
