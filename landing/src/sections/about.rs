use leptos::html::Section;
use leptos::prelude::*;

use super::{ABOUT_ID, BRAND};
use crate::icons::{ICON_LINKEDIN, ICON_MAIL, Icon};
use crate::reveal::use_reveal;

const FOUNDER_NAME: &str = "Pavan Kumar Dubasi";
const FOUNDER_ROLE: &str = "Founder & CEO";
const FOUNDER_PHOTO: &str = "assets/founder.svg";
const FOUNDER_LINKEDIN: &str = "https://www.linkedin.com/in/im-pavankumar";
const FOUNDER_EMAIL: &str = "mailto:pavan@dharalink.com";

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let revealed = use_reveal(section_ref);
    let visible = move || if revealed.get() { " is-visible" } else { "" };

    view! {
        <section id=ABOUT_ID class="about" node_ref=section_ref>
            <div class="container">
                <div class=move || format!("section-header reveal{}", visible())>
                    <h2 class="section-title">"Meet Our Founder"</h2>
                    <p class="section-description">
                        "Leading the agricultural revolution through technology and innovation"
                    </p>
                </div>

                <div class=move || format!("founder-card reveal delay-2{}", visible())>
                    <img class="founder-photo" src=FOUNDER_PHOTO alt=FOUNDER_NAME />
                    <div class="founder-body">
                        <div class="founder-heading">
                            <div>
                                <h3 class="founder-name">{FOUNDER_NAME}</h3>
                                <p class="founder-role">{FOUNDER_ROLE}</p>
                            </div>
                            <div class="founder-links">
                                <a
                                    href=FOUNDER_LINKEDIN
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="founder-link tone-blue"
                                    aria-label="LinkedIn Profile"
                                >
                                    <Icon path=ICON_LINKEDIN />
                                </a>
                                <a href=FOUNDER_EMAIL class="founder-link" aria-label="Email">
                                    <Icon path=ICON_MAIL />
                                </a>
                            </div>
                        </div>
                        <p class="founder-bio">
                            {format!(
                                "Pavan brings extensive expertise in AI/ML and a deep understanding of \
                                 agricultural challenges to {BRAND}'s mission of transforming Indian farming."
                            )}
                        </p>
                        <p class="founder-bio">
                            "His vision combines cutting-edge technology with practical farming solutions, "
                            "making advanced agricultural practices accessible to farmers across India."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
