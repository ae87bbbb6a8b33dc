//! Personal stats: headline numbers, level, badges, and analytics.

use leptos::prelude::*;

use crate::components::app_layout::AppLayout;
use crate::net::user::{Analytics, Badge, UserDashboard};

#[component]
pub fn MyStatsPage() -> impl IntoView {
    let dashboard = RwSignal::new(UserDashboard::default());
    let badges = RwSignal::new(Vec::<Badge>::new());
    let analytics = RwSignal::new(Analytics::default());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Ok(fresh) = crate::net::user::fetch_dashboard().await {
            dashboard.set(fresh);
        }
        if let Ok(earned) = crate::net::user::fetch_badges().await {
            badges.set(earned);
        }
        if let Ok(fresh) = crate::net::user::fetch_analytics().await {
            analytics.set(fresh);
        }
        loading.set(false);
    });

    view! {
        <AppLayout>
            <h1 class="stats-page__title">"My Stats"</h1>

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="stats-page__loading">
                            <div class="loading-screen__spinner"></div>
                        </div>
                    }
                }
            >
                <div class="stats-grid">
                    <div class="stats-grid__card">
                        <p class="stats-grid__label">"Words Learned"</p>
                        <p class="stats-grid__value">
                            {move || dashboard.get().total_words_learned}
                        </p>
                    </div>
                    <div class="stats-grid__card">
                        <p class="stats-grid__label">"Accuracy"</p>
                        <p class="stats-grid__value">
                            {move || format!("{}%", dashboard.get().accuracy_percentage)}
                        </p>
                    </div>
                    <div class="stats-grid__card">
                        <p class="stats-grid__label">"Streak"</p>
                        <p class="stats-grid__value">
                            {move || format!("{} days", dashboard.get().current_streak)}
                        </p>
                    </div>
                    <div class="stats-grid__card">
                        <p class="stats-grid__label">"Due Today"</p>
                        <p class="stats-grid__value">{move || dashboard.get().words_due_today}</p>
                    </div>
                </div>

                <div class="stats-row">
                    <div class="stats-card">
                        <h2 class="stats-card__title">"Level & XP"</h2>
                        <p class="stats-card__level">
                            {move || format!("Lv {}", dashboard.get().level)}
                        </p>
                        <p class="stats-card__xp">{move || format!("{} XP", dashboard.get().xp)}</p>
                        <p class="stats-card__hint">"Keep practicing to level up!"</p>
                    </div>
                    <div class="stats-card">
                        <h2 class="stats-card__title">"Weakest Category"</h2>
                        <p class="stats-card__value">
                            {move || dashboard.get().weakest_category.unwrap_or_else(|| "N/A".to_owned())}
                        </p>
                        <p class="stats-card__hint">"Focus here to improve accuracy"</p>
                    </div>
                </div>

                <div class="stats-card">
                    <h2 class="stats-card__title">"Badges"</h2>
                    <Show
                        when=move || !badges.with(Vec::is_empty)
                        fallback=|| {
                            view! {
                                <p class="stats-card__hint">
                                    "No badges yet. Complete exercises to earn badges!"
                                </p>
                            }
                        }
                    >
                        <div class="badge-list">
                            {move || {
                                badges
                                    .get()
                                    .into_iter()
                                    .map(|badge| {
                                        view! {
                                            <div class="badge">
                                                <span class="badge__icon">
                                                    {badge.icon.unwrap_or_else(|| "🏆".to_owned())}
                                                </span>
                                                <div class="badge__body">
                                                    <p class="badge__name">{badge.name}</p>
                                                    <p class="badge__description">{badge.description}</p>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </div>

                <div class="stats-card">
                    <h2 class="stats-card__title">"Analytics"</h2>
                    <p class="stats-card__label">"Avg Response Time"</p>
                    <p class="stats-card__value">
                        {move || {
                            analytics
                                .get()
                                .average_response_time_ms
                                .map_or_else(|| "N/A".to_owned(), |ms| format!("{ms}ms"))
                        }}
                    </p>
                    <p class="stats-card__label">"Category Difficulty"</p>
                    <div class="category-list">
                        {move || {
                            analytics
                                .get()
                                .category_difficulty
                                .into_iter()
                                .take(5)
                                .map(|entry| {
                                    view! {
                                        <div class="category-list__row">
                                            <span>{entry.category}</span>
                                            <span>{format!("{:.0}%", entry.accuracy)}</span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </div>
            </Show>
        </AppLayout>
    }
}
