//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::guest_route::GuestRoute;
use crate::components::protected_route::ProtectedRoute;
use crate::pages::{
    courses::CoursesPage, dashboard::DashboardPage, dialogue::DialoguePage,
    exercises::ExercisesPage, home::HomePage, interview::InterviewPage, learn::LearnPage,
    login::LoginPage, my_stats::MyStatsPage, register::RegisterPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, kicks off the one-shot startup session
/// resolution, and sets up client-side routing. Session state starts in
/// `loading` and only the resolver clears it, so route gates render the
/// waiting state until the stored token has been checked.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::net::auth::resolve_session(auth).await;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/wortschatz.css"/>
        <Title text="Wortschatz"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <GuestRoute><LoginPage/></GuestRoute> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <GuestRoute><RegisterPage/></GuestRoute> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <ProtectedRoute require_superadmin=true><DashboardPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("learn")
                    view=|| view! { <ProtectedRoute><LearnPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("exercises")
                    view=|| view! { <ProtectedRoute><ExercisesPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("courses")
                    view=|| view! { <ProtectedRoute><CoursesPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("my-dashboard")
                    view=|| view! { <ProtectedRoute><MyStatsPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("interview")
                    view=|| view! { <ProtectedRoute><InterviewPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("dialogue")
                    view=|| view! { <ProtectedRoute><DialoguePage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
    }
}
