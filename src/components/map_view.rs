// ============================================================================
// MAP VIEW - Leaflet a través de window.safeTravelMap
// ============================================================================

use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_theme;
use crate::models::{Coordinates, MapMarker};
use crate::utils::{
    bridge_available, mount_map, set_map_center, set_map_markers, set_map_theme, unmount_map,
    MAP_CONTAINER_PREFIX,
};

#[derive(Properties, PartialEq)]
pub struct MapViewProps {
    /// Falls back to the configured default centre
    #[prop_or_default]
    pub center: Option<Coordinates>,
    #[prop_or_default]
    pub markers: Vec<MapMarker>,
    #[prop_or(AttrValue::from("300px"))]
    pub height: AttrValue,
}

#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let container_id = use_memo((), |_| format!("{}-{}", MAP_CONTAINER_PREFIX, uuid::Uuid::new_v4()));
    let theme = use_theme();
    let center = props.center.unwrap_or_else(|| {
        Coordinates::new(CONFIG.map_config.default_center_lat, CONFIG.map_config.default_center_lng)
    });

    {
        let id = (*container_id).clone();
        let is_dark = theme.is_dark;
        use_effect_with((), move |_| {
            let mounted = bridge_available();
            if mounted {
                log::debug!("🗺️ Montando mapa {}", id);
                mount_map(&id, center.latitude, center.longitude, CONFIG.map_config.default_zoom, is_dark);
            } else {
                log::warn!("⚠️ Leaflet bridge no cargado; mapa omitido");
            }
            move || {
                if mounted {
                    unmount_map(&id);
                }
            }
        });
    }

    {
        let id = (*container_id).clone();
        use_effect_with(props.markers.clone(), move |markers| {
            if bridge_available() {
                match serde_wasm_bindgen::to_value(markers) {
                    Ok(js_markers) => set_map_markers(&id, js_markers),
                    Err(e) => log::error!("❌ Error serializando marcadores: {}", e),
                }
            }
            || ()
        });
    }

    {
        let id = (*container_id).clone();
        use_effect_with(center, move |center| {
            if bridge_available() {
                set_map_center(&id, center.latitude, center.longitude);
            }
            || ()
        });
    }

    {
        let id = (*container_id).clone();
        use_effect_with(theme.is_dark, move |is_dark| {
            if bridge_available() {
                set_map_theme(&id, *is_dark);
            }
            || ()
        });
    }

    html! {
        <div
            id={(*container_id).clone()}
            class="map-container"
            style={format!("height: {}; width: 100%;", props.height)}
        ></div>
    }
}
