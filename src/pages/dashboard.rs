//! Admin console: aggregate stats, add-word form, and the word list.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::words::NewWord;
use crate::net::words::Word;
use crate::state::auth::{AuthState, LOGIN_PATH};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let stats = RwSignal::new(crate::net::admin::DashboardStats::default());
    let words = RwSignal::new(Vec::<Word>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let new_german = RwSignal::new(String::new());
    let new_english = RwSignal::new(String::new());
    let new_category = RwSignal::new(String::new());
    let adding = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Ok(fresh) = crate::net::admin::fetch_stats().await {
            stats.set(fresh);
        }
        if let Ok(list) = crate::net::words::list_words().await {
            words.set(list);
        }
        loading.set(false);
    });

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if adding.get() {
            return;
        }
        let german = new_german.with(|s| s.trim().to_owned());
        let english = new_english.with(|s| s.trim().to_owned());
        if german.is_empty() || english.is_empty() {
            return;
        }
        let category = new_category.with(|s| {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        });
        adding.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::words::create_word(&NewWord { german, english, category }).await {
                Ok(word) => {
                    words.update(|list| list.insert(0, word));
                    stats.update(|s| s.word_count += 1);
                    new_german.set(String::new());
                    new_english.set(String::new());
                    new_category.set(String::new());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            adding.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (german, english, category);
        }
    };

    let on_delete = move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Delete this word?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            leptos::task::spawn_local(async move {
                match crate::net::words::delete_word(id).await {
                    Ok(()) => {
                        words.update(|list| list.retain(|w| w.id != id));
                        stats.update(|s| s.word_count = (s.word_count - 1).max(0));
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    let on_logout = move |_| {
        auth.update(AuthState::logout);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    let display_name =
        move || auth.with(|a| a.user.as_ref().map(|u| u.display_name().to_owned()).unwrap_or_default());

    view! {
        <div class="admin-page">
            <header class="admin-header">
                <a class="admin-header__brand" href="/">"Wortschatz · Admin"</a>
                <div class="admin-header__session">
                    <span class="admin-header__user">{display_name}</span>
                    <button class="admin-header__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </header>

            <main class="admin-main">
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="admin-main__loading">"Loading dashboard..."</p> }
                >
                    <div class="admin-stats">
                        <div class="admin-stats__card">
                            <p class="admin-stats__label">"Words"</p>
                            <p class="admin-stats__value">{move || stats.get().word_count}</p>
                        </div>
                        <div class="admin-stats__card">
                            <p class="admin-stats__label">"Users"</p>
                            <p class="admin-stats__value">{move || stats.get().user_count}</p>
                        </div>
                    </div>

                    <section class="admin-card">
                        <h2 class="admin-card__title">"Add new word"</h2>
                        <Show when=move || error.get().is_some()>
                            <div class="admin-card__error">
                                {move || error.get().unwrap_or_default()}
                            </div>
                        </Show>
                        <form class="word-form" on:submit=on_add>
                            <input
                                class="word-form__input"
                                type="text"
                                placeholder="German"
                                prop:value=move || new_german.get()
                                on:input=move |ev| new_german.set(event_target_value(&ev))
                            />
                            <input
                                class="word-form__input"
                                type="text"
                                placeholder="English"
                                prop:value=move || new_english.get()
                                on:input=move |ev| new_english.set(event_target_value(&ev))
                            />
                            <input
                                class="word-form__input"
                                type="text"
                                placeholder="Category (optional)"
                                prop:value=move || new_category.get()
                                on:input=move |ev| new_category.set(event_target_value(&ev))
                            />
                            <button
                                class="btn btn--primary"
                                type="submit"
                                disabled=move || adding.get()
                            >
                                {move || if adding.get() { "Adding..." } else { "Add" }}
                            </button>
                        </form>
                    </section>

                    <section class="admin-card">
                        <div class="admin-card__header">
                            <h2 class="admin-card__title">"Vocabulary"</h2>
                            <span class="admin-card__count">
                                {move || format!("{} words", words.with(Vec::len))}
                            </span>
                        </div>
                        <Show
                            when=move || !words.with(Vec::is_empty)
                            fallback=|| {
                                view! {
                                    <p class="word-list__empty">
                                        "No words yet. Add your first word above."
                                    </p>
                                }
                            }
                        >
                            <ul class="word-list">
                                {move || {
                                    words
                                        .get()
                                        .into_iter()
                                        .map(|word| {
                                            let id = word.id;
                                            view! {
                                                <li class="word-list__row">
                                                    <span class="word-list__german">{word.german}</span>
                                                    <span class="word-list__arrow">"→"</span>
                                                    <span class="word-list__english">{word.english}</span>
                                                    {word
                                                        .category
                                                        .map(|cat| {
                                                            view! { <span class="word-list__category">{cat}</span> }
                                                        })}
                                                    <button
                                                        class="word-list__delete"
                                                        on:click=move |_| on_delete(id)
                                                    >
                                                        "Delete"
                                                    </button>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </ul>
                        </Show>
                    </section>
                </Show>
            </main>
        </div>
    }
}
