// DharaLink Landing Page — Leptos 0.8 Edition
// Developed by The DharaLink Team (c)2025

mod browser;
mod icons;
mod logging;
mod reveal;
mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    tracing::info!("DharaLink landing {}", sections::VERSION);
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <div class="page">
            <Header />
            <main class="page-main">
                <Hero />
                <Features />
                <About />
                <Waitlist />
            </main>
            <Footer />
        </div>
    }
}
