//! Fixed top navigation that turns solid once the page scrolls.

use leptos::prelude::*;

use crate::content::{BRAND_SHORT, NAV_LINKS, QUOTE_CTA};
use crate::util::scroll;

#[component]
pub fn SiteHeader(on_quote: Callback<()>) -> impl IntoView {
    let sticky = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| sticky.set(scroll::is_sticky(scroll::current_offset())));
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            sticky.set(scroll::is_sticky(scroll::current_offset()));
        });
        on_cleanup(move || handle.remove());
    }

    let class = move || if sticky.get() { "site-header site-header--sticky" } else { "site-header" };

    view! {
        <header class=class>
            <div class="site-header__inner">
                <span class="site-header__brand">{BRAND_SHORT}</span>
                <nav class="site-header__nav">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let target = link.section_id;
                            view! {
                                <button class="site-header__link" on:click=move |_| scroll::scroll_to_section(target)>
                                    {link.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <button class="btn btn--primary" on:click=move |_| on_quote.run(())>
                    {QUOTE_CTA}
                </button>
            </div>
        </header>
    }
}
