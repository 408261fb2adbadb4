//! Illustrative location map with clickable pins and a detail panel.

use leptos::prelude::*;

use crate::state::map::{InfoPanel, Location, MapState, PinView, default_locations};
use crate::util::pin_style::icon_path;

const DEFAULT_BACKGROUND: &str = "/images/region-map.svg";

/// Pins over a static background image, positioned in percent.
///
/// A malformed `locations` list renders a local notice instead of the map.
#[component]
pub fn LocationMap(
    #[prop(optional)] locations: Option<Vec<Location>>,
    #[prop(default = DEFAULT_BACKGROUND)] background: &'static str,
) -> impl IntoView {
    let map = match MapState::new(locations.unwrap_or_else(default_locations)) {
        Ok(map) => RwSignal::new(map),
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::error!("location map disabled: {e}");
            return view! {
                <div class="location-map location-map--unavailable">
                    <p>{format!("Map unavailable: {e}")}</p>
                </div>
            }
            .into_any();
        }
    };

    let pins = move || map.with(MapState::pins);
    let panel = move || map.with(MapState::info_panel);

    view! {
        <div class="location-map">
            <img class="location-map__backdrop" src=background alt="Map of our facilities"/>
            {move || pins().into_iter().map(|pin| view! { <MapPin map=map pin=pin/> }).collect_view()}
            {move || panel().map(|info| view! { <MapInfoPanel map=map info=info/> })}
        </div>
    }
    .into_any()
}

#[component]
fn MapPin(map: RwSignal<MapState>, pin: PinView) -> impl IntoView {
    let id = pin.id.clone();
    let on_click = move |_| {
        map.update(|m| {
            m.select_location(&id);
        });
    };
    let class = if pin.selected { "map-pin map-pin--selected" } else { "map-pin" };
    let style = format!(
        "left: {}%; top: {}%; --pin-color: {};",
        pin.left_pct, pin.top_pct, pin.style.color
    );

    view! {
        <button class=class style=style title=pin.name.clone() aria-label=pin.name on:click=on_click>
            <svg class="map-pin__icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <path d=icon_path(pin.style.icon)/>
            </svg>
            {pin.style.badge.map(|badge| view! { <span class="map-pin__badge">{badge}</span> })}
        </button>
    }
}

#[component]
fn MapInfoPanel(map: RwSignal<MapState>, info: InfoPanel) -> impl IntoView {
    let on_close = move |_| map.update(MapState::close_info);

    view! {
        <div class="map-info" data-location=info.id>
            <button class="map-info__close" on:click=on_close title="Close">"✕"</button>
            <h3>{info.title}</h3>
            <p class="map-info__status">{info.status_line}</p>
            <p>{info.description}</p>
        </div>
    }
}
