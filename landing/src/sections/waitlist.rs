//! Waitlist signup form.
//!
//! Inline validation runs first and marks individual inputs; only a clean
//! form goes through `submit`, which applies the stricter submission rules
//! and handles the CORS → no-cors fallback.

use dharalink_waitlist::{
    Field, FieldErrors, SubmitStatus, WaitlistConfig, WaitlistForm, submit, validate_form,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::WAITLIST_ID;
use crate::browser::{BrowserTransport, client_context};
use crate::icons::{ICON_ALERT_CIRCLE, ICON_CHECK_CIRCLE, Icon};

#[component]
pub fn Waitlist() -> impl IntoView {
    let form = RwSignal::new(WaitlistForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let status = RwSignal::new(SubmitStatus::Idle);
    let config = StoredValue::new(WaitlistConfig::from_build_env());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if status.with_untracked(SubmitStatus::is_loading) {
            return;
        }

        let current = form.get_untracked();
        let found = validate_form(&current);
        if !found.is_empty() {
            tracing::debug!(fields = found.len(), "waitlist form has errors");
            errors.set(found);
            status.set(SubmitStatus::after_validation_failure());
            return;
        }
        errors.set(found);
        status.set(SubmitStatus::Loading);

        let config = config.get_value();
        leptos::task::spawn_local(async move {
            let result = submit(&BrowserTransport, &config, &current, client_context()).await;
            if result.is_ok() {
                form.update(WaitlistForm::clear);
            }
            status.set(SubmitStatus::from_result(&result));
        });
    };

    view! {
        <section id=WAITLIST_ID class="waitlist">
            <div class="container container-narrow">
                <div class="waitlist-card fade-up">
                    <h2 class="section-title">"Join the Waitlist"</h2>

                    <form class="waitlist-form" on:submit=on_submit novalidate=true>
                        <div class="form-grid">
                            {Field::ALL
                                .into_iter()
                                .map(|field| view! { <FormField field=field form=form errors=errors /> })
                                .collect_view()}
                        </div>

                        <div class="form-actions">
                            <button
                                type="submit"
                                class=move || submit_class(status.with(SubmitStatus::is_loading))
                                disabled=move || status.with(SubmitStatus::is_loading)
                            >
                                {move || status.with(SubmitStatus::button_label)}
                            </button>
                        </div>

                        {move || match status.get() {
                            SubmitStatus::Success(message) => Some(view! {
                                <div class="form-status form-status-success fade-in" role="status">
                                    <Icon path=ICON_CHECK_CIRCLE />
                                    <span>{message}</span>
                                </div>
                            }.into_any()),
                            SubmitStatus::Error(message) => Some(view! {
                                <div class="form-status form-status-error fade-in" role="alert">
                                    <Icon path=ICON_ALERT_CIRCLE />
                                    <span>{message}</span>
                                </div>
                            }.into_any()),
                            SubmitStatus::Idle | SubmitStatus::Loading => None,
                        }}

                        <p class="form-terms">
                            "By joining the waitlist, you agree to our Terms of Service and Privacy Policy. "
                            "We'll keep you updated about our launch."
                        </p>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FormField(
    field: Field,
    form: RwSignal<WaitlistForm>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    let error = move || errors.with(|e| e.get(field));

    view! {
        <div class="form-field">
            <label class="form-label" for=field.key()>{field.label()}</label>
            <input
                id=field.key()
                name=field.key()
                type=field.input_type()
                placeholder=field.placeholder()
                class=move || input_class(error().is_some())
                prop:value=move || form.with(|f| f.get(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.set(field, value));
                    // Editing a field clears its error
                    if errors.with_untracked(|e| e.get(field).is_some()) {
                        errors.update(|e| {
                            e.clear(field);
                        });
                    }
                }
            />
            {move || error().map(|message| view! { <p class="form-error">{message}</p> })}
        </div>
    }
}

fn input_class(has_error: bool) -> &'static str {
    if has_error { "form-input form-input-error" } else { "form-input" }
}

fn submit_class(loading: bool) -> &'static str {
    if loading { "btn btn-submit btn-loading" } else { "btn btn-primary btn-submit" }
}
