//! Shared card chrome for the login and registration screens.

use leptos::prelude::*;

/// Centered auth card with a brand link back to the home page.
#[component]
pub fn AuthLayout(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="auth-layout">
            <a class="auth-layout__brand" href="/">"Wortschatz"</a>
            <div class="auth-layout__card">
                <h1 class="auth-layout__title">{title}</h1>
                <p class="auth-layout__subtitle">{subtitle}</p>
                {children()}
            </div>
            <p class="auth-layout__footer">"Wortschatz · Learn German vocabulary"</p>
        </div>
    }
}

/// Dev-code, notice, and error banners shared by the code-entry steps of
/// the login and registration screens.
#[component]
pub fn AuthNotices(
    dev_code: Signal<Option<String>>,
    notice: Signal<Option<String>>,
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || dev_code.get().is_some()>
            <div class="auth-form__dev-code">
                <p>"Your code (email not sent):"</p>
                <p class="auth-form__dev-code-value">
                    {move || dev_code.get().unwrap_or_default()}
                </p>
            </div>
        </Show>
        <Show when=move || notice.get().is_some()>
            <div class="auth-form__notice">{move || notice.get().unwrap_or_default()}</div>
        </Show>
        <Show when=move || error.get().is_some()>
            <div class="auth-form__error">{move || error.get().unwrap_or_default()}</div>
        </Show>
    }
}
