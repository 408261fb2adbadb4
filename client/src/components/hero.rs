//! Full-height hero banner with the primary call to action.

use leptos::prelude::*;

use crate::content::{HERO_CTA, HERO_SUBTITLE, HERO_TITLE};
use crate::util::scroll;

#[component]
pub fn Hero(on_quote: Callback<()>) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__backdrop"></div>
            <div class="hero__content">
                <h1>{HERO_TITLE}</h1>
                <p>{HERO_SUBTITLE}</p>
                <button class="btn btn--primary btn--large" on:click=move |_| on_quote.run(())>
                    {HERO_CTA}
                </button>
            </div>
            <button class="hero__scroll" title="Scroll down" on:click=move |_| scroll::scroll_to_section("about")>
                <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path d="M12 5V19M12 19L5 12M12 19L19 12"/>
                </svg>
            </button>
        </section>
    }
}
