//! Route gate for screens requiring a signed-in session.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::components::loading_screen::LoadingScreen;
use crate::state::auth::{AuthState, Gate};

/// Renders its children for signed-in users; guests are sent to the login
/// flow with the attempted destination carried along so a successful
/// sign-in can return here. With `require_superadmin`, users without the
/// elevated role are sent to the default landing page instead.
#[component]
pub fn ProtectedRoute(
    #[prop(optional)] require_superadmin: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;

    view! {
        {move || {
            let attempted = pathname.get();
            match auth.get().protected_gate(require_superadmin, &attempted) {
                Gate::Pending => view! { <LoadingScreen/> }.into_any(),
                Gate::Allow => children().into_any(),
                Gate::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
            }
        }}
    }
}
