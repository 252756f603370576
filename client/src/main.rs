mod app;
mod asset_loader;
mod config;
mod map_view;
mod modal;
mod panels;
mod tooltip;
mod viewport;

use leptos::mount::mount_to;
use wasm_bindgen::JsCast;

/// `#app` when the page provides it, otherwise the document body.
fn mount_target() -> Option<web_sys::HtmlElement> {
    let document = web_sys::window()?.document()?;
    document
        .get_element_by_id("app")
        .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .or_else(|| document.body())
}

fn main() {
    console_error_panic_hook::set_once();
    match mount_target() {
        // The app lives as long as the page.
        Some(target) => std::mem::forget(mount_to(target, app::App)),
        None => web_sys::console::warn_1(&"filing map: no element to mount into".into()),
    }
}
