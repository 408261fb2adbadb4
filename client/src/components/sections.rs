//! Static content sections between the hero and the footer.

use leptos::prelude::*;

use crate::components::location_map::LocationMap;
use crate::content::{
    ABOUT_BODY, ABOUT_PILLARS, ABOUT_TITLE, CONTACT_ITEMS, MAP_BODY, MAP_TITLE, PARTNERS, QUOTE_CTA,
    SERVICE_CARDS,
};

#[component]
fn SectionHeading(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="section__heading">
            <h2>{title}</h2>
            <p>{body}</p>
        </div>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="section section--about">
            <SectionHeading title=ABOUT_TITLE body=ABOUT_BODY/>
            <div class="section__panel">
                {ABOUT_PILLARS
                    .iter()
                    .map(|p| {
                        view! {
                            <h3>{p.title}</h3>
                            <p>{p.body}</p>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section id="services" class="section section--services">
            <SectionHeading
                title="Carbon Solutions"
                body="From feedstock to finished media, one partner for the whole activated carbon chain."
            />
            <div class="service-grid">
                {SERVICE_CARDS
                    .iter()
                    .map(|card| {
                        view! {
                            <article class="service-card">
                                <h3>{card.title}</h3>
                                <p>{card.description}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn LocationsSection() -> impl IntoView {
    view! {
        <section id="map" class="section section--map">
            <SectionHeading title=MAP_TITLE body=MAP_BODY/>
            <LocationMap/>
        </section>
    }
}

#[component]
pub fn ContactSection(on_quote: Callback<()>) -> impl IntoView {
    view! {
        <section id="contact" class="section section--contact">
            <SectionHeading
                title="Contact Us"
                body="Have questions about our services or want to learn more? Get in touch with our team."
            />
            <div class="contact-grid">
                <dl class="contact-list">
                    {CONTACT_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <dt>{item.label}</dt>
                                <dd>{item.value}</dd>
                            }
                        })
                        .collect_view()}
                </dl>
                <div class="contact-cta">
                    <h3>"Ready to Get Started?"</h3>
                    <p>"Contact us today for a free consultation and quote on your carbon activation needs."</p>
                    <button class="btn btn--primary btn--large" on:click=move |_| on_quote.run(())>
                        {QUOTE_CTA}
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn PartnersSection() -> impl IntoView {
    view! {
        <section class="section section--partners">
            <SectionHeading title="Our Partners" body="Proud to work with industry leaders"/>
            <ul class="partner-list">
                {PARTNERS.iter().map(|name| view! { <li>{*name}</li> }).collect_view()}
            </ul>
        </section>
    }
}
