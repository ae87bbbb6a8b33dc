//! Login screen: credential form, switching to code entry for accounts
//! that have not verified their email yet.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::auth_layout::{AuthLayout, AuthNotices};
use crate::state::auth::{AuthState, post_login_destination};
use crate::state::login::LoginFlow;
use crate::state::verify::Step;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let query = use_query_map();
    let flow = RwSignal::new(LoginFlow::default());
    let step = Memo::new(move |_| flow.with(|f| f.step));

    let on_login = Callback::new({
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let mut started = false;
            flow.update(|f| started = f.start_login());
            if !started {
                return;
            }
            let (email, password) = flow.with(|f| (f.email.clone(), f.password.clone()));

            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::auth::login(&email, &password).await {
                        Ok(granted) => {
                            let from = query.with_untracked(|q| q.get("from"));
                            let dest = post_login_destination(&granted.user, from.as_deref());
                            auth.update(|a| a.login(&granted.token, granted.user));
                            navigate(&dest, NavigateOptions { replace: true, ..Default::default() });
                        }
                        Err(failure) => flow.update(|f| f.apply_login_failure(failure)),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&navigate, email, password);
            }
        }
    });

    let on_verify = Callback::new({
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let mut started = false;
            flow.update(|f| started = f.start_verify());
            if !started {
                return;
            }
            let (email, code) = flow.with(|f| (f.email.clone(), f.code.clone()));

            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::auth::verify(&email, &code).await {
                        Ok(granted) => {
                            let from = query.with_untracked(|q| q.get("from"));
                            let dest = post_login_destination(&granted.user, from.as_deref());
                            auth.update(|a| a.login(&granted.token, granted.user));
                            navigate(&dest, NavigateOptions { replace: true, ..Default::default() });
                        }
                        Err(err) => flow.update(|f| f.fail_verify(err.to_string())),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&navigate, email, code);
            }
        }
    });

    let on_resend = Callback::new(move |()| {
        let mut started = false;
        flow.update(|f| started = f.start_resend());
        if !started {
            return;
        }
        let email = flow.with(|f| f.email.clone());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::auth::resend_code(&email).await;
            flow.update(|f| f.apply_resend_result(result));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email;
        }
    });

    view! {
        {move || match step.get() {
            Step::Form => {
                view! {
                    <AuthLayout title="Welcome back" subtitle="Sign in to your account">
                        <form class="auth-form" on:submit=move |ev| on_login.run(ev)>
                            <Show when=move || flow.with(|f| f.error.is_some())>
                                <div class="auth-form__error">
                                    {move || flow.with(|f| f.error.clone().unwrap_or_default())}
                                </div>
                            </Show>
                            <label class="auth-form__label">
                                "Email"
                                <input
                                    class="auth-form__input"
                                    type="email"
                                    placeholder="you@example.com"
                                    prop:value=move || flow.with(|f| f.email.clone())
                                    on:input=move |ev| {
                                        flow.update(|f| f.email = event_target_value(&ev));
                                    }
                                />
                            </label>
                            <label class="auth-form__label">
                                "Password"
                                <input
                                    class="auth-form__input"
                                    type="password"
                                    placeholder="password"
                                    prop:value=move || flow.with(|f| f.password.clone())
                                    on:input=move |ev| {
                                        flow.update(|f| f.password = event_target_value(&ev));
                                    }
                                />
                            </label>
                            <button
                                class="btn btn--primary auth-form__submit"
                                type="submit"
                                disabled=move || flow.with(|f| f.submitting)
                            >
                                {move || if flow.with(|f| f.submitting) { "Signing in..." } else { "Login" }}
                            </button>
                        </form>
                        <p class="auth-form__alt">
                            "Don't have an account? " <a href="/register">"Register"</a>
                        </p>
                    </AuthLayout>
                }
                    .into_any()
            }
            Step::Verify => {
                let email = flow.with_untracked(|f| f.email.clone());
                view! {
                    <AuthLayout
                        title="Almost there"
                        subtitle=format!("Enter the 6-digit code we sent to {email}")
                    >
                        <AuthNotices
                            dev_code=Signal::derive(move || flow.with(|f| f.dev_code.clone()))
                            notice=Signal::derive(move || flow.with(|f| f.notice.clone()))
                            error=Signal::derive(move || flow.with(|f| f.error.clone()))
                        />
                        <form class="auth-form" on:submit=move |ev| on_verify.run(ev)>
                            <label class="auth-form__label">
                                "Verification code"
                                <input
                                    class="auth-form__input auth-form__input--code"
                                    type="text"
                                    inputmode="numeric"
                                    maxlength="6"
                                    placeholder="000000"
                                    prop:value=move || flow.with(|f| f.code.clone())
                                    on:input=move |ev| {
                                        flow.update(|f| f.set_code(&event_target_value(&ev)));
                                    }
                                />
                            </label>
                            <button
                                class="btn btn--primary auth-form__submit"
                                type="submit"
                                disabled=move || flow.with(|f| !f.can_submit_code())
                            >
                                {move || {
                                    if flow.with(|f| f.submitting) {
                                        "Verifying..."
                                    } else {
                                        "Verify & Continue"
                                    }
                                }}
                            </button>
                        </form>
                        <p class="auth-form__alt">
                            "Didn't receive it? "
                            <button
                                class="auth-form__link"
                                type="button"
                                disabled=move || flow.with(|f| f.resending)
                                on:click=move |_| on_resend.run(())
                            >
                                {move || {
                                    if flow.with(|f| f.resending) { "Sending..." } else { "Resend code" }
                                }}
                            </button>
                        </p>
                        <p class="auth-form__alt">
                            <button
                                class="auth-form__link auth-form__link--muted"
                                type="button"
                                on:click=move |_| flow.update(|f| f.back_to_form())
                            >
                                "Back to sign in"
                            </button>
                        </p>
                    </AuthLayout>
                }
                    .into_any()
            }
        }}
    }
}
