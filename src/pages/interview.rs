//! Interview simulator: scenario questions, free-text answers, one score.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::components::app_layout::AppLayout;
use crate::net::interview::{InterviewAnswer, InterviewQuestion, InterviewResult};

#[component]
pub fn InterviewPage() -> impl IntoView {
    let questions = RwSignal::new(Vec::<InterviewQuestion>::new());
    let answers = RwSignal::new(HashMap::<i64, String>::new());
    let loading = RwSignal::new(true);
    let submitting = RwSignal::new(false);
    let submitted = RwSignal::new(None::<InterviewResult>);

    let load_round = move || {
        loading.set(true);
        submitted.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            questions.set(crate::net::interview::start_interview().await.unwrap_or_default());
            answers.set(HashMap::new());
            loading.set(false);
        });
    };
    load_round();

    let on_submit = move |_| {
        if submitting.get() {
            return;
        }
        let payload: Vec<InterviewAnswer> = questions.with(|list| {
            list.iter()
                .map(|question| InterviewAnswer {
                    question_id: question.id,
                    answer: answers.with(|a| a.get(&question.id).cloned().unwrap_or_default()),
                })
                .collect()
        });
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            #[allow(clippy::cast_possible_wrap)]
            let total = payload.len() as i64;
            let scored = crate::net::interview::submit_interview(&payload)
                .await
                .unwrap_or(InterviewResult { score: 0, total, percentage: 0.0 });
            submitted.set(Some(scored));
            submitting.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    };

    view! {
        <AppLayout>
            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="interview-page__loading">
                            <div class="loading-screen__spinner"></div>
                        </div>
                    }
                }
            >
                <Show
                    when=move || submitted.with(Option::is_none)
                    fallback=move || {
                        view! {
                            <div class="interview-score">
                                <h2 class="interview-score__title">"Interview Complete"</h2>
                                <p class="interview-score__percentage">
                                    {move || {
                                        submitted
                                            .get()
                                            .map(|r| format!("{:.0}%", r.percentage))
                                            .unwrap_or_default()
                                    }}
                                </p>
                                <p class="interview-score__detail">
                                    {move || {
                                        submitted
                                            .get()
                                            .map(|r| format!("Score: {} / {}", r.score, r.total))
                                            .unwrap_or_default()
                                    }}
                                </p>
                                <button class="btn btn--primary" on:click=move |_| load_round()>
                                    "Try Again"
                                </button>
                            </div>
                        }
                    }
                >
                    <Show
                        when=move || !questions.with(Vec::is_empty)
                        fallback=|| {
                            view! {
                                <div class="interview-page__empty">
                                    <p>"No interview questions available."</p>
                                </div>
                            }
                        }
                    >
                        <h1 class="interview-page__title">"Interview Simulation"</h1>
                        <p class="interview-page__subtitle">
                            "Answer these call center scenario questions (German context)"
                        </p>

                        <div class="interview-form">
                            {move || {
                                questions
                                    .get()
                                    .into_iter()
                                    .map(|question| {
                                        let id = question.id;
                                        view! {
                                            <div class="interview-question">
                                                <span class="interview-question__kind">{question.kind}</span>
                                                <p class="interview-question__text">
                                                    {question.question_text}
                                                </p>
                                                <textarea
                                                    class="interview-question__answer"
                                                    rows="3"
                                                    placeholder="Your answer..."
                                                    prop:value=move || {
                                                        answers.with(|a| a.get(&id).cloned().unwrap_or_default())
                                                    }
                                                    on:input=move |ev| {
                                                        answers.update(|a| {
                                                            a.insert(id, event_target_value(&ev));
                                                        });
                                                    }
                                                ></textarea>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                            <button
                                class="btn btn--primary interview-form__submit"
                                disabled=move || submitting.get()
                                on:click=on_submit
                            >
                                {move || {
                                    if submitting.get() { "Scoring..." } else { "Submit Interview" }
                                }}
                            </button>
                        </div>
                    </Show>
                </Show>
            </Show>
        </AppLayout>
    }
}
