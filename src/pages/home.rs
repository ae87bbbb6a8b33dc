//! Landing page: sign-in entry points for guests, a greeting for users.

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let signed_in = move || auth.with(|a| a.user.is_some());
    let greeting = move || {
        auth.with(|a| a.user.as_ref().map(|u| format!("Welcome, {}", u.display_name())).unwrap_or_default())
    };
    let is_superadmin = move || auth.with(|a| a.user.as_ref().is_some_and(User::is_superadmin));

    view! {
        <div class="home-page">
            <h1 class="home-page__title">"Wortschatz"</h1>
            <p class="home-page__tagline">"Learn German vocabulary"</p>

            <Show
                when=signed_in
                fallback=|| {
                    view! {
                        <div class="home-page__actions">
                            <a class="btn btn--primary" href="/login">"Login"</a>
                            <a class="btn" href="/register">"Register"</a>
                        </div>
                    }
                }
            >
                <div class="home-page__welcome">
                    <p class="home-page__greeting">{greeting}</p>
                    <div class="home-page__actions">
                        <a class="btn btn--primary" href="/learn">"Start learning"</a>
                        <Show when=is_superadmin>
                            <a class="btn" href="/dashboard">"Admin console"</a>
                        </Show>
                    </div>
                </div>
            </Show>
        </div>
    }
}
