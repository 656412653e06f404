pub mod app;
pub mod notify;
#[cfg(feature = "ssr")]
pub mod server;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a logger may already be installed when hydrating twice in dev
    _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating");
    leptos::mount::hydrate_body(App);
}
