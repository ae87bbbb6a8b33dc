//! # wortschatz
//!
//! Leptos + WASM frontend for the Wortschatz vocabulary trainer.
//! All scheduling, scoring, and persistence live behind the REST API;
//! this crate owns the session lifecycle, route gating, and the screens.
//!
//! The crate is split the same way on both render targets: `net` talks to
//! the backend (real HTTP on hydrate, stubs on the server), `state` holds
//! plain testable models provided via context, `pages` and `components`
//! render them.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point invoked by the generated JS glue after page load.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
