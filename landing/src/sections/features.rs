use leptos::html::Section;
use leptos::prelude::*;

use super::{BRAND, FEATURES_ID};
use crate::icons::*;
use crate::reveal::{stagger_delay, use_reveal};

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

static FEATURES: [Feature; 6] = [
    Feature {
        icon: ICON_SMARTPHONE,
        title: "Smart Farming App",
        description: "Access farm insights and controls right from your smartphone",
    },
    Feature {
        icon: ICON_CLOUD,
        title: "Weather Integration",
        description: "Real-time weather updates and forecasting for better planning",
    },
    Feature {
        icon: ICON_BAR_CHART,
        title: "Yield Analytics",
        description: "Track and optimize your crop yields with AI-powered insights",
    },
    Feature {
        icon: ICON_DROPLETS,
        title: "Water Management",
        description: "Smart irrigation control and water usage optimization",
    },
    Feature {
        icon: ICON_SPROUT,
        title: "Crop Health",
        description: "Early detection of crop diseases and nutrient deficiencies",
    },
    Feature {
        icon: ICON_TRENDING_UP,
        title: "Market Connect",
        description: "Direct access to better market prices and buyers",
    },
];

/// Per-card reveal stagger
const STAGGER_MS: u32 = 100;

#[component]
pub fn Features() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let revealed = use_reveal(section_ref);
    let reveal_class = move |base: &'static str| {
        if revealed.get() { format!("{base} reveal is-visible") } else { format!("{base} reveal") }
    };

    let description = format!(
        "{BRAND} brings modern technology to traditional farming practices, \
         helping you achieve better yields with less effort"
    );

    view! {
        <section id=FEATURES_ID class="features" node_ref=section_ref>
            <div class="container">
                <div class="section-header">
                    <h2 class=move || reveal_class("section-title")>"Transform Your Farming"</h2>
                    <p class=move || reveal_class("section-description") style=stagger_delay(2, STAGGER_MS)>
                        {description}
                    </p>
                </div>
                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| {
                            view! {
                                <article
                                    class=move || reveal_class("feature-card")
                                    style=stagger_delay(index, STAGGER_MS)
                                >
                                    <Icon path=feature.icon class="icon-lg tone-green" />
                                    <h3 class="feature-title">{feature.title}</h3>
                                    <p class="feature-description">{feature.description}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_features_with_unique_titles() {
        let mut titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), 6);
    }
}
