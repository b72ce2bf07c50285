use leptos::prelude::*;

use super::{BRAND, FEATURES_ID, WAITLIST_ID};
use crate::browser::scroll_to_section;
use crate::icons::{ICON_DROPLETS, ICON_SPROUT, ICON_TRENDING_UP, Icon};

#[component]
pub fn Hero() -> impl IntoView {
    let description = format!(
        "Join thousands of farmers using {BRAND} to increase yields, save water, \
         and maximize profits through smart agriculture technology."
    );

    view! {
        <section class="hero">
            <div class="container hero-inner">
                <h1 class="hero-title fade-up">
                    "Transform Your Farm with "
                    <span class="hero-title-accent">"AI-Powered"</span>
                    " Insights"
                </h1>
                <p class="hero-description fade-up delay-1">{description}</p>
                <div class="hero-actions fade-up delay-2">
                    <button class="btn btn-primary btn-lg" on:click=move |_| scroll_to_section(WAITLIST_ID)>
                        "Join the Waitlist"
                    </button>
                    <button class="btn btn-secondary btn-lg" on:click=move |_| scroll_to_section(FEATURES_ID)>
                        "Learn More"
                    </button>
                </div>

                <div class="hero-highlights">
                    <Highlight
                        icon=ICON_SPROUT
                        tone="tone-green"
                        title="Smart Farming"
                        description="AI-powered insights for optimal crop management"
                    />
                    <Highlight
                        icon=ICON_DROPLETS
                        tone="tone-blue"
                        title="Water Savings"
                        description="Reduce water usage by up to 30% with IoT sensors"
                    />
                    <Highlight
                        icon=ICON_TRENDING_UP
                        tone="tone-brown"
                        title="Better Profits"
                        description="Maximize your returns with market insights"
                    />
                </div>
            </div>
            <div class="hero-fade"></div>
        </section>
    }
}

#[component]
fn Highlight(
    icon: &'static str,
    /// Icon colour class
    tone: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="highlight-card">
            <span class=tone>
                <Icon path=icon class="icon-lg" />
            </span>
            <h3 class="highlight-title">{title}</h3>
            <p class="highlight-description">{description}</p>
        </div>
    }
}
