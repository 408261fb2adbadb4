//! Page footer: company blurb, quick links, contact, back-to-top.

use leptos::prelude::*;

use crate::content::{COMPANY_NAME, CONTACT_EMAIL, NAV_LINKS, TAGLINE};
use crate::util::scroll;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__columns">
                <div>
                    <h3>{COMPANY_NAME}</h3>
                    <p>{TAGLINE}</p>
                </div>
                <div>
                    <h4>"Quick Links"</h4>
                    <ul>
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                let target = link.section_id;
                                view! {
                                    <li>
                                        <button class="site-footer__link" on:click=move |_| scroll::scroll_to_section(target)>
                                            {link.label}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h4>"Contact"</h4>
                    <p>{CONTACT_EMAIL}</p>
                </div>
            </div>
            <div class="site-footer__bottom">
                <p>{format!("© {COMPANY_NAME} All rights reserved.")}</p>
                <button class="site-footer__top" title="Back to top" on:click=move |_| scroll::scroll_to_top()>
                    "↑"
                </button>
            </div>
        </footer>
    }
}
