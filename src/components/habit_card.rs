//! Card for a single habit on the dashboard.
//!
//! DESIGN
//! ======
//! The card is pure presentation: it renders the backend record and reports
//! completion clicks through `on_complete`. The dashboard owns the request.

use leptos::prelude::*;

use crate::net::types::Habit;
use crate::state::habits::streak_progress;

#[component]
pub fn HabitCard(habit: Habit, on_complete: Callback<String>) -> impl IntoView {
    let progress = streak_progress(habit.streak);
    let Habit { id, name, description, streak } = habit;

    view! {
        <article class="habit-card">
            <div class="habit-card__body">
                <h3 class="habit-card__name">{name}</h3>
                <p class="habit-card__description">{description}</p>
                <p class="habit-card__streak">
                    "Streak: "
                    <span class="habit-card__streak-value">{streak.to_string()}</span>
                </p>
                <div
                    class="habit-card__progress"
                    role="progressbar"
                    aria-valuemin="0"
                    aria-valuemax="100"
                    aria-valuenow=format!("{progress:.0}")
                >
                    <div class="habit-card__progress-fill" style=format!("width: {progress:.1}%;")></div>
                </div>
            </div>
            <div class="habit-card__action">
                <button
                    class="habit-card__complete"
                    title="Mark as Completed"
                    aria-label="Mark as Completed"
                    on:click=move |_| on_complete.run(id.clone())
                >
                    <svg viewBox="0 0 24 24" width="24" height="24" aria-hidden="true">
                        <polyline points="20 6 9 17 4 12"></polyline>
                    </svg>
                </button>
                <span class="habit-card__complete-label">"Mark as Completed"</span>
            </div>
        </article>
    }
}
