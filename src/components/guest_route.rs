//! Route gate for screens only signed-out visitors may see.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::loading_screen::LoadingScreen;
use crate::state::auth::{AuthState, Gate};

/// Renders its children for guests; signed-in users are sent to their
/// landing page instead. While the session is still resolving the shared
/// loading screen renders and no redirect decision is made.
#[component]
pub fn GuestRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        {move || match auth.get().guest_gate() {
            Gate::Pending => view! { <LoadingScreen/> }.into_any(),
            Gate::Allow => children().into_any(),
            Gate::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
        }}
    }
}
