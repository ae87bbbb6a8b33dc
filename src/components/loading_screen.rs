//! Full-screen spinner shown while the session resolves.

use leptos::prelude::*;

/// Neutral waiting state rendered by the route gates before the startup
/// session resolution has finished, so no redirect fires prematurely.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__spinner"></div>
            <p class="loading-screen__label">"Loading..."</p>
        </div>
    }
}
