use wasm_bindgen::JsValue;

use queryquill_core::Route;

pub(crate) fn current_fragment() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

/// Pushes `route` onto the location; the page reacts through `hashchange`.
pub(crate) fn navigate(route: Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let _ = window.location().set_hash(route.fragment());
}

/// Rewrites the fragment in place after a guard redirect. Unlike
/// [`navigate`] this adds no history entry and fires no `hashchange`.
pub(crate) fn replace_fragment(route: Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let path = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    let new_url = format!("{path}{search}{}", route.fragment());
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&new_url));
    } else {
        let _ = location.set_hash(route.fragment());
    }
}
