use leptos::prelude::*;

use super::{ABOUT_ID, BRAND, CONTACT_ID, FEATURES_ID, WAITLIST_ID};
use crate::browser::scroll_to_section;
use crate::icons::{ICON_MENU, ICON_X, Icon};

/// Plain nav links, in order. The waitlist CTA is rendered separately.
const NAV_LINKS: [(&str, &str); 3] = [
    ("Features", FEATURES_ID),
    ("About", ABOUT_ID),
    ("Contact", CONTACT_ID),
];

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    // Every nav target scrolls and closes the mobile menu
    let go_to = move |id: &'static str| {
        scroll_to_section(id);
        set_menu_open.set(false);
    };

    view! {
        <header class="header">
            <div class="container">
                <div class="header-inner">
                    <a href="/" class="header-brand">{BRAND}</a>

                    // Desktop navigation
                    <nav class="header-nav">
                        {NAV_LINKS
                            .into_iter()
                            .map(|(label, id)| {
                                view! {
                                    <button class="header-link" on:click=move |_| go_to(id)>
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <button class="btn btn-primary btn-sm" on:click=move |_| go_to(WAITLIST_ID)>
                            "Join Waitlist"
                        </button>
                    </nav>

                    <button
                        class="header-toggle"
                        aria-label=move || menu_label(menu_open.get())
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || {
                            let path = if menu_open.get() { ICON_X } else { ICON_MENU };
                            view! { <Icon path=path /> }
                        }}
                    </button>
                </div>

                // Mobile navigation
                <Show when=move || menu_open.get()>
                    <nav class="header-mobile">
                        {NAV_LINKS
                            .into_iter()
                            .map(|(label, id)| {
                                view! {
                                    <button class="header-mobile-link" on:click=move |_| go_to(id)>
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <button class="btn btn-primary btn-block" on:click=move |_| go_to(WAITLIST_ID)>
                            "Join Waitlist"
                        </button>
                    </nav>
                </Show>
            </div>
        </header>
    }
}

fn menu_label(open: bool) -> &'static str {
    if open { "Close menu" } else { "Open menu" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_label_tracks_state() {
        assert_eq!(menu_label(false), "Open menu");
        assert_eq!(menu_label(true), "Close menu");
    }

    #[test]
    fn nav_links_point_at_page_sections() {
        let ids: Vec<_> = NAV_LINKS.iter().map(|(_, id)| *id).collect();
        assert_eq!(ids, vec!["features", "about", "contact"]);
    }
}
