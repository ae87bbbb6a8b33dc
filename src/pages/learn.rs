//! Spaced-repetition review: flip cards, self-grade, earn XP.

use leptos::prelude::*;

use crate::components::app_layout::AppLayout;
#[cfg(feature = "hydrate")]
use crate::net::learn::CardAnswer;
use crate::net::learn::{AnswerOutcome, ReviewWord};

/// How long the grading result stays on screen before the next card.
#[cfg(feature = "hydrate")]
const RESULT_FLASH_MS: u32 = 800;

#[component]
pub fn LearnPage() -> impl IntoView {
    let words = RwSignal::new(Vec::<ReviewWord>::new());
    let loading = RwSignal::new(true);
    let index = RwSignal::new(0_usize);
    let flipped = RwSignal::new(false);
    let result = RwSignal::new(None::<(bool, AnswerOutcome)>);
    let submitting = RwSignal::new(false);
    // Card display time, used to report response_time_ms with each grade.
    let started_at = RwSignal::new(0.0_f64);

    let load_words = move || {
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let fetched = crate::net::learn::fetch_today_words().await.unwrap_or_default();
            words.set(fetched);
            index.set(0);
            flipped.set(false);
            result.set(None);
            started_at.set(js_sys::Date::now());
            loading.set(false);
        });
    };
    load_words();

    let on_grade = move |is_correct: bool| {
        if submitting.get() || result.with(Option::is_some) {
            return;
        }
        let Some(word) = words.with(|list| list.get(index.get()).cloned()) else {
            return;
        };
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            #[allow(clippy::cast_possible_truncation)]
            let response_time_ms =
                (js_sys::Date::now() - started_at.get_untracked()).max(0.0) as i64;
            let answer = CardAnswer {
                word_id: word.id,
                user_word_id: word.user_word_id,
                is_correct,
                response_time_ms,
            };
            match crate::net::learn::submit_answer(&answer).await {
                Ok(outcome) => {
                    result.set(Some((is_correct, outcome)));
                    gloo_timers::future::TimeoutFuture::new(RESULT_FLASH_MS).await;
                    result.set(None);
                    flipped.set(false);
                    submitting.set(false);
                    if index.get_untracked() + 1 < words.with_untracked(Vec::len) {
                        index.update(|i| *i += 1);
                        started_at.set(js_sys::Date::now());
                    } else {
                        load_words();
                    }
                }
                // Keep the card up so the grade can be retried.
                Err(_) => submitting.set(false),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = word;
        }
    };

    let current = move || words.with(|list| list.get(index.get()).cloned());
    let position = move || format!("{} / {}", index.get() + 1, words.with(Vec::len));

    view! {
        <AppLayout>
            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="learn-page__loading">
                            <div class="loading-screen__spinner"></div>
                        </div>
                    }
                }
            >
                <Show
                    when=move || !words.with(Vec::is_empty)
                    fallback=move || {
                        view! {
                            <div class="learn-page__done">
                                <h2>"All caught up!"</h2>
                                <p>
                                    "No words due for review today. Check back tomorrow or add new words."
                                </p>
                                <button class="btn btn--primary" on:click=move |_| load_words()>
                                    "Refresh"
                                </button>
                            </div>
                        }
                    }
                >
                    <div class="learn-page">
                        <div class="learn-page__header">
                            <h1>"Learn"</h1>
                            <span class="learn-page__position">{position}</span>
                        </div>

                        <Show when=move || result.with(Option::is_some)>
                            {move || {
                                result
                                    .get()
                                    .map(|(correct, outcome)| {
                                        let badge_hint =
                                            if outcome.awarded_badges.is_empty() { "" } else { " · New badge!" };
                                        if correct {
                                            view! {
                                                <div class="learn-result learn-result--correct">
                                                    {format!("Correct! +{} XP{badge_hint}", outcome.xp_gained)}
                                                </div>
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <div class="learn-result learn-result--incorrect">
                                                    "Incorrect. Try again next time!"
                                                </div>
                                            }
                                                .into_any()
                                        }
                                    })
                            }}
                        </Show>

                        <div
                            class="flashcard"
                            on:click=move |_| {
                                if !flipped.get() {
                                    flipped.set(true);
                                }
                            }
                        >
                            {move || {
                                current()
                                    .map(|word| {
                                        if flipped.get() {
                                            view! {
                                                <div class="flashcard__back">
                                                    <p class="flashcard__german">{word.german}</p>
                                                    <p class="flashcard__english">{word.english}</p>
                                                    {word
                                                        .category
                                                        .map(|cat| {
                                                            view! { <span class="flashcard__category">{cat}</span> }
                                                        })}
                                                </div>
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <p class="flashcard__german">{word.german}</p>
                                            }
                                                .into_any()
                                        }
                                    })
                            }}
                        </div>

                        <Show
                            when=move || flipped.get() && result.with(Option::is_none)
                            fallback=move || {
                                view! {
                                    <Show when=move || !flipped.get()>
                                        <p class="learn-page__hint">
                                            "Click the card to reveal the answer"
                                        </p>
                                    </Show>
                                }
                            }
                        >
                            <div class="learn-page__grade">
                                <button
                                    class="btn btn--incorrect"
                                    disabled=move || submitting.get()
                                    on:click=move |_| on_grade(false)
                                >
                                    "Incorrect"
                                </button>
                                <button
                                    class="btn btn--correct"
                                    disabled=move || submitting.get()
                                    on:click=move |_| on_grade(true)
                                >
                                    "Correct"
                                </button>
                            </div>
                        </Show>
                    </div>
                </Show>
            </Show>
        </AppLayout>
    }
}
