//! The single marketing page.
//!
//! Owns the inquiry form state and hands every call-to-action a callback that
//! opens it. The location map manages its own state.

use leptos::prelude::*;

use crate::components::hero::Hero;
use crate::components::inquiry_dialog::InquiryDialog;
use crate::components::sections::{AboutSection, ContactSection, LocationsSection, PartnersSection, ServicesSection};
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::state::inquiry::{InquiryForm, SERVICE_OPTIONS};

#[component]
pub fn HomePage() -> impl IntoView {
    let (form, config_error) = match InquiryForm::new(SERVICE_OPTIONS) {
        Ok(form) => (Some(RwSignal::new(form)), None),
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::error!("inquiry form disabled: {e}");
            (None, Some(e.to_string()))
        }
    };

    let open_inquiry = Callback::new(move |()| {
        if let Some(form) = form {
            form.update(|f| {
                f.open(None);
            });
        }
    });

    view! {
        <div class="page">
            <SiteHeader on_quote=open_inquiry/>
            <Hero on_quote=open_inquiry/>
            <AboutSection/>
            <ServicesSection/>
            <LocationsSection/>
            <ContactSection on_quote=open_inquiry/>
            <PartnersSection/>
            <SiteFooter/>
            {form.map(|form| view! { <InquiryDialog form=form/> })}
            {config_error.map(|msg| view! { <p class="inquiry-unavailable" role="status">{msg}</p> })}
        </div>
    }
}
