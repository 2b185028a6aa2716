// ============================================================================
// LEAFLET FFI - wrappers over window.safeTravelMap (static/leaflet_bridge.js)
// ============================================================================
// No state and no logic here; marker selection lives in models::location
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = safeTravelMap, js_name = mount)]
    pub fn mount_map(container_id: &str, latitude: f64, longitude: f64, zoom: f64, is_dark: bool);

    #[wasm_bindgen(js_namespace = safeTravelMap, js_name = setMarkers)]
    pub fn set_map_markers(container_id: &str, markers: JsValue);

    #[wasm_bindgen(js_namespace = safeTravelMap, js_name = setCenter)]
    pub fn set_map_center(container_id: &str, latitude: f64, longitude: f64);

    #[wasm_bindgen(js_namespace = safeTravelMap, js_name = setTheme)]
    pub fn set_map_theme(container_id: &str, is_dark: bool);

    #[wasm_bindgen(js_namespace = safeTravelMap, js_name = unmount)]
    pub fn unmount_map(container_id: &str);
}

/// True once the bridge script has loaded, so calls above will not throw
pub fn bridge_available() -> bool {
    web_sys::window()
        .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str("safeTravelMap")).ok())
        .map(|bridge| !bridge.is_undefined())
        .unwrap_or(false)
}
