//! Exercise screen: multiple choice, fill in the blank, and match pairs.

use leptos::prelude::*;

use crate::components::app_layout::AppLayout;
use crate::net::exercise::{Exercise, ExerciseKind, ExerciseResult, ExerciseSubmission, MatchedPair};

/// How long the grading result stays on screen before the next exercise.
#[cfg(feature = "hydrate")]
const RESULT_FLASH_MS: u32 = 1500;

const KINDS: &[(ExerciseKind, &str)] = &[
    (ExerciseKind::Multiple, "Multiple Choice"),
    (ExerciseKind::Fill, "Fill in Blank"),
    (ExerciseKind::Match, "Match Pairs"),
];

#[component]
pub fn ExercisesPage() -> impl IntoView {
    let kind = RwSignal::new(ExerciseKind::Multiple);
    let exercise = RwSignal::new(None::<Exercise>);
    let loading = RwSignal::new(true);
    let answer = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<i64>);
    let matches = RwSignal::new(Vec::<MatchedPair>::new());
    let result = RwSignal::new(None::<ExerciseResult>);
    let submitting = RwSignal::new(false);

    let load_exercise = move || {
        loading.set(true);
        exercise.set(None);
        answer.set(String::new());
        selected.set(None);
        matches.set(Vec::new());
        result.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            exercise.set(crate::net::exercise::fetch_exercise(kind.get_untracked()).await.ok());
            loading.set(false);
        });
    };

    // Fetch on mount and again whenever the kind tab changes.
    Effect::new(move || {
        let _kind = kind.get();
        load_exercise();
    });

    let can_submit = move || {
        if submitting.get() || result.with(Option::is_some) {
            return false;
        }
        match kind.get() {
            ExerciseKind::Multiple => selected.with(Option::is_some),
            ExerciseKind::Fill => !answer.with(|a| a.trim().is_empty()),
            ExerciseKind::Match => {
                let total = exercise.with(|e| e.as_ref().map_or(0, |ex| ex.pairs.len()));
                total > 0 && matches.with(Vec::len) == total
            }
        }
    };

    let on_submit = move || {
        if !can_submit() {
            return;
        }
        let Some(current) = exercise.get_untracked() else {
            return;
        };
        let submission = match kind.get_untracked() {
            ExerciseKind::Multiple => {
                let (Some(word_id), Some(correct_id)) = (selected.get_untracked(), current.correct_id)
                else {
                    return;
                };
                ExerciseSubmission::Multiple { word_id, correct_id }
            }
            ExerciseKind::Fill => {
                let Some(word_id) = current.question.as_ref().and_then(|q| q.word_id) else {
                    return;
                };
                ExerciseSubmission::Fill { word_id, answer: answer.get_untracked() }
            }
            ExerciseKind::Match => ExerciseSubmission::Match { pairs: matches.get_untracked() },
        };
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::exercise::submit_exercise(&submission).await {
                Ok(graded) => {
                    result.set(Some(graded));
                    submitting.set(false);
                    gloo_timers::future::TimeoutFuture::new(RESULT_FLASH_MS).await;
                    result.set(None);
                    load_exercise();
                }
                Err(_) => {
                    result.set(Some(ExerciseResult { correct: false, xp_gained: None }));
                    submitting.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = submission;
        }
    };

    view! {
        <AppLayout>
            <h1 class="exercises-page__title">"Exercises"</h1>

            <div class="exercises-page__tabs">
                {KINDS
                    .iter()
                    .map(|(tab_kind, label)| {
                        let tab_kind = *tab_kind;
                        view! {
                            <button
                                class=move || {
                                    if kind.get() == tab_kind {
                                        "exercise-tab exercise-tab--active"
                                    } else {
                                        "exercise-tab"
                                    }
                                }
                                on:click=move |_| kind.set(tab_kind)
                            >
                                {*label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="exercises-page__loading">
                            <div class="loading-screen__spinner"></div>
                        </div>
                    }
                }
            >
                <Show
                    when=move || exercise.with(Option::is_some)
                    fallback=|| {
                        view! {
                            <div class="exercises-page__empty">
                                <p>"Not enough words. Add words in the admin dashboard."</p>
                            </div>
                        }
                    }
                >
                    <div class="exercise-card">
                        <Show when=move || result.with(Option::is_some)>
                            {move || {
                                result
                                    .get()
                                    .map(|graded| {
                                        if graded.correct {
                                            view! {
                                                <div class="exercise-result exercise-result--correct">
                                                    {format!("Correct! +{} XP", graded.xp_gained.unwrap_or(10))}
                                                </div>
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <div class="exercise-result exercise-result--incorrect">
                                                    "Incorrect"
                                                </div>
                                            }
                                                .into_any()
                                        }
                                    })
                            }}
                        </Show>

                        {move || match kind.get() {
                            ExerciseKind::Multiple => {
                                view! { <MultipleChoice exercise=exercise selected=selected/> }
                                    .into_any()
                            }
                            ExerciseKind::Fill => {
                                view! { <FillInBlank exercise=exercise answer=answer on_submit=on_submit/> }
                                    .into_any()
                            }
                            ExerciseKind::Match => {
                                view! { <MatchPairs exercise=exercise matches=matches/> }.into_any()
                            }
                        }}

                        <button
                            class="btn btn--primary exercise-card__submit"
                            disabled=move || !can_submit()
                            on:click=move |_| on_submit()
                        >
                            {move || if submitting.get() { "Checking..." } else { "Check Answer" }}
                        </button>
                    </div>
                </Show>
            </Show>
        </AppLayout>
    }
}

#[component]
fn MultipleChoice(
    exercise: RwSignal<Option<Exercise>>,
    selected: RwSignal<Option<i64>>,
) -> impl IntoView {
    let prompt = move || {
        exercise.with(|e| {
            e.as_ref()
                .and_then(|ex| ex.question.as_ref().and_then(|q| q.german.clone()))
                .unwrap_or_default()
        })
    };

    view! {
        <p class="exercise-card__prompt">
            {move || format!("What does \"{}\" mean?", prompt())}
        </p>
        <div class="exercise-card__options">
            {move || {
                exercise.with(|e| {
                    e.as_ref()
                        .map(|ex| {
                            ex.options
                                .iter()
                                .map(|option| {
                                    let id = option.id;
                                    let text = option.text.clone();
                                    view! {
                                        <button
                                            class=move || {
                                                if selected.get() == Some(id) {
                                                    "exercise-option exercise-option--selected"
                                                } else {
                                                    "exercise-option"
                                                }
                                            }
                                            on:click=move |_| selected.set(Some(id))
                                        >
                                            {text}
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()
                        })
                })
            }}
        </div>
    }
}

#[component]
fn FillInBlank(
    exercise: RwSignal<Option<Exercise>>,
    answer: RwSignal<String>,
    on_submit: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let prompt = move || {
        exercise.with(|e| {
            e.as_ref()
                .and_then(|ex| ex.question.as_ref().and_then(|q| q.english.clone()))
                .unwrap_or_default()
        })
    };

    view! {
        <p class="exercise-card__prompt">"Type the German word for:"</p>
        <p class="exercise-card__hint">{move || format!("\"{}\"", prompt())}</p>
        <input
            class="exercise-card__input"
            type="text"
            placeholder="German word..."
            prop:value=move || answer.get()
            on:input=move |ev| answer.set(event_target_value(&ev))
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() == "Enter" {
                    ev.prevent_default();
                    on_submit();
                }
            }
        />
    }
}

#[component]
fn MatchPairs(
    exercise: RwSignal<Option<Exercise>>,
    matches: RwSignal<Vec<MatchedPair>>,
) -> impl IntoView {
    view! {
        <p class="exercise-card__prompt">
            "Match each German word to its English translation"
        </p>
        <div class="exercise-card__pairs">
            {move || {
                exercise.with(|e| {
                    e.as_ref()
                        .map(|ex| {
                            let english_options = ex.english_options.clone();
                            ex.pairs
                                .iter()
                                .map(|pair| {
                                    let word_id = pair.word_id;
                                    let german = pair.german.clone();
                                    let german_for_update = pair.german.clone();
                                    let options = english_options.clone();
                                    view! {
                                        <div class="exercise-pair">
                                            <span class="exercise-pair__german">{german}</span>
                                            <span class="exercise-pair__arrow">"→"</span>
                                            <select
                                                class="exercise-pair__select"
                                                prop:value=move || {
                                                    matches.with(|m| {
                                                        m.iter()
                                                            .find(|p| p.word_id == word_id)
                                                            .map(|p| p.english.clone())
                                                            .unwrap_or_default()
                                                    })
                                                }
                                                on:change=move |ev| {
                                                    let english = event_target_value(&ev);
                                                    matches.update(|m| {
                                                        m.retain(|p| p.word_id != word_id);
                                                        if !english.is_empty() {
                                                            m.push(MatchedPair {
                                                                german: german_for_update.clone(),
                                                                english,
                                                                word_id,
                                                            });
                                                        }
                                                    });
                                                }
                                            >
                                                <option value="">"Select..."</option>
                                                {options
                                                    .iter()
                                                    .map(|english| {
                                                        let english = english.clone();
                                                        view! {
                                                            <option value=english.clone()>{english.clone()}</option>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </select>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        })
                })
            }}
        </div>
    }
}
