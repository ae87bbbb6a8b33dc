//! Micro-dialogue practice: fill the blank, check, auto-advance.

use leptos::prelude::*;

use crate::components::app_layout::AppLayout;
use crate::net::dialogue::{Dialogue, DialogueResult};

/// How long the result stays on screen before the next dialogue loads.
#[cfg(feature = "hydrate")]
const NEXT_DIALOGUE_MS: u32 = 2000;

#[component]
pub fn DialoguePage() -> impl IntoView {
    let dialogue = RwSignal::new(None::<Dialogue>);
    let answer = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let result = RwSignal::new(None::<DialogueResult>);
    let submitting = RwSignal::new(false);

    let load_dialogue = move || {
        loading.set(true);
        dialogue.set(None);
        answer.set(String::new());
        result.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            dialogue.set(crate::net::dialogue::fetch_dialogue().await.ok());
            loading.set(false);
        });
    };
    load_dialogue();

    let on_submit = move || {
        if submitting.get() || result.with(Option::is_some) {
            return;
        }
        let Some(current) = dialogue.get_untracked() else {
            return;
        };
        let typed = answer.get_untracked();
        if typed.trim().is_empty() {
            return;
        }
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::dialogue::submit_dialogue(current.id, &typed).await {
                Ok(graded) => {
                    result.set(Some(graded));
                    submitting.set(false);
                    gloo_timers::future::TimeoutFuture::new(NEXT_DIALOGUE_MS).await;
                    load_dialogue();
                }
                Err(_) => {
                    // Grading failed; show the expected phrase when we have it.
                    result.set(Some(DialogueResult {
                        correct: false,
                        score: None,
                        correct_answer: current.correct_answer.clone(),
                    }));
                    submitting.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (current, typed);
        }
    };

    view! {
        <AppLayout>
            <h1 class="dialogue-page__title">"Micro Dialogue Practice"</h1>
            <p class="dialogue-page__subtitle">"Fill in the blank with the correct phrase"</p>

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="dialogue-page__loading">
                            <div class="loading-screen__spinner"></div>
                        </div>
                    }
                }
            >
                <Show
                    when=move || dialogue.with(Option::is_some)
                    fallback=|| {
                        view! {
                            <div class="dialogue-page__empty">
                                <p>"No dialogues available."</p>
                            </div>
                        }
                    }
                >
                    <div class="dialogue-card">
                        <h2 class="dialogue-card__title">
                            {move || {
                                dialogue.with(|d| d.as_ref().map(|x| x.title.clone()).unwrap_or_default())
                            }}
                        </h2>
                        <p class="dialogue-card__text">
                            {move || {
                                dialogue
                                    .with(|d| d.as_ref().map(|x| x.display_text.clone()).unwrap_or_default())
                            }}
                        </p>

                        <Show when=move || result.with(Option::is_some)>
                            {move || {
                                result
                                    .get()
                                    .map(|graded| {
                                        if graded.correct {
                                            view! {
                                                <div class="dialogue-result dialogue-result--correct">
                                                    {format!(
                                                        "Correct! Score: {}",
                                                        graded.score.unwrap_or_default(),
                                                    )}
                                                </div>
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <div class="dialogue-result dialogue-result--incorrect">
                                                    {format!(
                                                        "The correct phrase was: \"{}\"",
                                                        graded.correct_answer.unwrap_or_default(),
                                                    )}
                                                </div>
                                            }
                                                .into_any()
                                        }
                                    })
                            }}
                        </Show>

                        <label class="dialogue-card__label">
                            "Your answer"
                            <input
                                class="dialogue-card__input"
                                type="text"
                                placeholder="Type the missing phrase..."
                                prop:value=move || answer.get()
                                on:input=move |ev| answer.set(event_target_value(&ev))
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        on_submit();
                                    }
                                }
                            />
                        </label>
                        <button
                            class="btn btn--primary dialogue-card__submit"
                            disabled=move || {
                                submitting.get() || answer.with(|a| a.trim().is_empty())
                            }
                            on:click=move |_| on_submit()
                        >
                            "Check"
                        </button>
                        <button
                            class="dialogue-card__next"
                            on:click=move |_| load_dialogue()
                        >
                            "Next dialogue →"
                        </button>
                    </div>
                </Show>
            </Show>
        </AppLayout>
    }
}
