//! Course tracks: modules and lessons with unlock/completion state.

use leptos::prelude::*;

use crate::components::app_layout::AppLayout;
use crate::net::tracks::Track;

#[component]
pub fn CoursesPage() -> impl IntoView {
    let tracks = RwSignal::new(Vec::<Track>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        tracks.set(crate::net::tracks::fetch_tracks_with_progress().await.unwrap_or_default());
        loading.set(false);
    });

    let on_complete = move |lesson_id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::tracks::complete_lesson(lesson_id).await {
                Ok(()) => {
                    if let Ok(fresh) = crate::net::tracks::fetch_tracks_with_progress().await {
                        tracks.set(fresh);
                    }
                }
                Err(err) => leptos::logging::warn!("lesson completion failed: {err}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = lesson_id;
        }
    };

    view! {
        <AppLayout>
            <h1 class="courses-page__title">"Courses"</h1>

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="courses-page__loading">
                            <div class="loading-screen__spinner"></div>
                        </div>
                    }
                }
            >
                <Show
                    when=move || !tracks.with(Vec::is_empty)
                    fallback=|| {
                        view! {
                            <div class="courses-page__empty">
                                <p>"No tracks yet. Check back later."</p>
                            </div>
                        }
                    }
                >
                    <div class="track-list">
                        {move || {
                            tracks
                                .get()
                                .into_iter()
                                .map(|track| {
                                    view! {
                                        <section class="track">
                                            <h2 class="track__name">{track.name}</h2>
                                            {track
                                                .modules
                                                .into_iter()
                                                .map(|module| {
                                                    view! {
                                                        <div class="track__module">
                                                            <h3 class="track__module-title">{module.title}</h3>
                                                            {module
                                                                .lessons
                                                                .into_iter()
                                                                .map(|lesson| {
                                                                    let id = lesson.id;
                                                                    let status = if lesson.completed {
                                                                        "lesson lesson--completed"
                                                                    } else if lesson.unlocked {
                                                                        "lesson lesson--unlocked"
                                                                    } else {
                                                                        "lesson lesson--locked"
                                                                    };
                                                                    let marker = if lesson.completed {
                                                                        "✓"
                                                                    } else if lesson.unlocked {
                                                                        "○"
                                                                    } else {
                                                                        "🔒"
                                                                    };
                                                                    let word_count = lesson.words.len();
                                                                    let actionable = lesson.unlocked && !lesson.completed;
                                                                    view! {
                                                                        <div class=status>
                                                                            <span class="lesson__marker">{marker}</span>
                                                                            <div class="lesson__body">
                                                                                <p class="lesson__title">{lesson.title}</p>
                                                                                <Show when=move || { word_count > 0 }>
                                                                                    <p class="lesson__words">
                                                                                        {format!("{word_count} words")}
                                                                                    </p>
                                                                                </Show>
                                                                            </div>
                                                                            <Show when=move || actionable>
                                                                                <button
                                                                                    class="btn btn--primary lesson__complete"
                                                                                    on:click=move |_| on_complete(id)
                                                                                >
                                                                                    "Complete"
                                                                                </button>
                                                                            </Show>
                                                                        </div>
                                                                    }
                                                                })
                                                                .collect::<Vec<_>>()}
                                                        </div>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </section>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </AppLayout>
    }
}
