//! Signed-in application chrome: top navigation and the XP progress bar.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::types::User;
use crate::net::user::Progress;
use crate::state::auth::{AuthState, LOGIN_PATH};

const NAV_ITEMS: &[(&str, &str)] = &[
    ("/learn", "Learn"),
    ("/exercises", "Exercises"),
    ("/courses", "Courses"),
    ("/my-dashboard", "My Stats"),
    ("/interview", "Interview"),
    ("/dialogue", "Dialogue"),
];

/// Page chrome for the learning screens.
///
/// The level/XP bar refreshes best-effort on every route change; a failed
/// fetch keeps the last value without surfacing an error.
#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let pathname = use_location().pathname;
    let progress = RwSignal::new(Progress::default());

    Effect::new(move || {
        let _route = pathname.get();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Ok(fresh) = crate::net::user::fetch_progress().await {
                progress.set(fresh);
            }
        });
    });

    let on_logout = move |_| {
        auth.update(AuthState::logout);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    let display_name =
        move || auth.with(|a| a.user.as_ref().map(|u| u.display_name().to_owned()).unwrap_or_default());
    let is_superadmin = move || auth.with(|a| a.user.as_ref().is_some_and(User::is_superadmin));

    view! {
        <div class="app-shell">
            <header class="app-header">
                <a class="app-header__brand" href="/">"Wortschatz"</a>

                <nav class="app-nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|(path, label)| {
                            view! {
                                <a
                                    href=*path
                                    class=move || {
                                        if pathname.get() == *path {
                                            "app-nav__link app-nav__link--active"
                                        } else {
                                            "app-nav__link"
                                        }
                                    }
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                <div class="app-header__session">
                    <div class="xp-bar" title="Progress to next level">
                        <span class="xp-bar__level">
                            {move || format!("Lv {}", progress.get().level)}
                        </span>
                        <div class="xp-bar__track">
                            <div
                                class="xp-bar__fill"
                                style:width=move || {
                                    format!("{:.0}%", progress.get().percent_to_next_level())
                                }
                            ></div>
                        </div>
                        <span class="xp-bar__xp">{move || format!("{} XP", progress.get().xp)}</span>
                    </div>
                    <span class="app-header__user">{display_name}</span>
                    <Show when=is_superadmin>
                        <a class="app-header__admin" href="/dashboard">"Admin"</a>
                    </Show>
                    <button class="app-header__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </header>

            <main class="app-main">{children()}</main>
        </div>
    }
}
