use leptos::prelude::*;

use super::{BRAND, CONTACT_ID, VERSION};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id=CONTACT_ID class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-title">{BRAND}</span>
                    <span class="footer-tagline">"Smart agriculture for every farm"</span>
                </div>
                <div class="footer-links">
                    <a href="mailto:hello@dharalink.com" class="footer-link">"hello@dharalink.com"</a>
                    <a href="https://www.linkedin.com/company/dharalink" target="_blank" rel="noopener noreferrer" class="footer-link">"LinkedIn"</a>
                    <a href="#waitlist-form" class="footer-link">"Join the Waitlist"</a>
                </div>
                <p class="footer-copyright">
                    {format!("© 2025 {BRAND}. All rights reserved. {VERSION}")}
                </p>
            </div>
        </footer>
    }
}
