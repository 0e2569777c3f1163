//! Dashboard: the authenticated home at `/dashboard`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads habits, then points and badges, whenever the session token changes.
//! Every request captures a `SessionTicket` first; a response that lands
//! after a logout or re-login is dropped instead of painting another
//! session's data.
//!
//! ERROR HANDLING
//! ==============
//! A failed initial load replaces the page with a generic message. Failed
//! create/complete calls raise a toast. A 401 is treated like any other
//! failure; the session is not cleared here.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::celebration::Celebration;
use crate::components::completion_chart::{CompletionChart, weekly_trend};
use crate::components::habit_card::HabitCard;
use crate::net::api::ApiClient;
use crate::net::types::{Habit, NewHabit};
use crate::state::habits::HabitsState;
use crate::state::session::Session;
use crate::state::toast::ToastState;

#[cfg(feature = "csr")]
const ADD_FAILED_MESSAGE: &str = "Failed to add habit.";
#[cfg(feature = "csr")]
const COMPLETE_FAILED_MESSAGE: &str = "Failed to mark habit as completed.";
const NAME_REQUIRED_MESSAGE: &str = "Enter a habit name.";

fn validate_new_habit(draft: &NewHabit) -> Result<NewHabit, &'static str> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(NAME_REQUIRED_MESSAGE);
    }
    Ok(NewHabit { name: name.to_owned(), description: draft.description.trim().to_owned() })
}

#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn completion_message(points: i64) -> String {
    format!("Habit marked as completed! Points: {points}")
}

#[cfg(feature = "csr")]
async fn load_dashboard(
    api: &ApiClient,
    token: &str,
) -> Result<(Vec<Habit>, crate::net::types::CurrentUser), crate::net::api::ApiError> {
    let habits = api.list_habits(token).await?;
    let user = api.current_user(token).await?;
    Ok((habits, user))
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = expect_context::<ApiClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let data = RwSignal::new(HabitsState::default());
    let draft = RwSignal::new(NewHabit::default());

    let load_api = api.clone();
    Effect::new(move || {
        let Some(token) = session.token() else {
            return;
        };
        let ticket = session.ticket();
        data.set(HabitsState::default());

        #[cfg(feature = "csr")]
        {
            let api = load_api.clone();
            leptos::task::spawn_local(async move {
                let Some(result) = session.admit(ticket, load_dashboard(&api, &token).await) else {
                    leptos::logging::log!("dashboard: dropping load for an ended session");
                    return;
                };
                match result {
                    Ok((habits, user)) => {
                        let _ = data.try_update(|d| d.loaded(habits, user));
                    }
                    Err(e) => {
                        leptos::logging::warn!("dashboard: load failed: {e}");
                        let _ = data.try_update(HabitsState::load_failed);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&load_api, token, ticket);
        }
    });

    let add_api = api.clone();
    let add_habit = Callback::new(move |()| {
        let Some(token) = session.token_untracked() else {
            return;
        };
        let habit = match validate_new_habit(&draft.get_untracked()) {
            Ok(habit) => habit,
            Err(msg) => {
                toasts.update(|t| {
                    t.error(msg);
                });
                return;
            }
        };
        let ticket = session.ticket();

        #[cfg(feature = "csr")]
        {
            let api = add_api.clone();
            leptos::task::spawn_local(async move {
                let Some(result) = session.admit(ticket, api.create_habit(&token, &habit).await) else {
                    leptos::logging::log!("dashboard: dropping create for an ended session");
                    return;
                };
                match result {
                    Ok(created) => {
                        let _ = data.try_update(|d| d.add(created));
                        let _ = draft.try_set(NewHabit::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("dashboard: create habit failed: {e}");
                        toasts.update(|t| {
                            t.error(ADD_FAILED_MESSAGE);
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&add_api, token, habit, ticket);
        }
    });

    let complete_api = api;
    let complete_habit = Callback::new(move |habit_id: String| {
        let Some(token) = session.token_untracked() else {
            return;
        };
        let ticket = session.ticket();

        #[cfg(feature = "csr")]
        {
            let api = complete_api.clone();
            leptos::task::spawn_local(async move {
                let Some(result) = session.admit(ticket, api.complete_habit(&token, &habit_id).await) else {
                    leptos::logging::log!("dashboard: dropping completion for an ended session");
                    return;
                };
                match result {
                    Ok(completion) => {
                        let points = completion.points;
                        let _ = data.try_update(|d| d.apply_completion(completion));
                        toasts.update(|t| {
                            t.success(completion_message(points));
                        });
                        gloo_timers::future::sleep(std::time::Duration::from_millis(
                            crate::components::celebration::CELEBRATION_MS,
                        ))
                        .await;
                        let _ = data.try_update(|d| d.celebrating = false);
                    }
                    Err(e) => {
                        leptos::logging::warn!("dashboard: complete habit {habit_id} failed: {e}");
                        toasts.update(|t| {
                            t.error(COMPLETE_FAILED_MESSAGE);
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&complete_api, token, habit_id, ticket);
        }
    });

    view! {
        <Show when=move || session.is_authenticated()>
            <Show
                when=move || !data.with(|d| d.loading)
                fallback=|| view! { <p class="dashboard-page__status">"Loading habits..."</p> }
            >
                <Show
                    when=move || data.with(|d| d.error.is_none())
                    fallback=move || {
                        view! {
                            <p class="dashboard-page__status dashboard-page__status--error">
                                {move || data.with(|d| d.error.clone().unwrap_or_default())}
                            </p>
                        }
                    }
                >
                    <div class="dashboard-page">
                        <Show when=move || data.with(|d| d.celebrating)>
                            <Celebration/>
                        </Show>

                        <header class="dashboard-page__header">
                            <h1 class="dashboard-page__title">"Your Habits"</h1>
                            <span class="dashboard-page__points">
                                {move || format!("Points: {}", data.with(|d| d.points))}
                            </span>
                            <button class="btn btn--danger" on:click=move |_| session.logout()>
                                "Logout"
                            </button>
                        </header>

                        <section class="badges">
                            <h2 class="badges__title">"Badges"</h2>
                            <Show
                                when=move || data.with(|d| !d.badges.is_empty())
                                fallback=|| view! { <p class="badges__empty">"No badges yet. Keep going!"</p> }
                            >
                                <div class="badges__list">
                                    {move || {
                                        data.with(|d| d.badges.clone())
                                            .into_iter()
                                            .map(|badge| view! { <span class="badge-chip">{badge}</span> })
                                            .collect::<Vec<_>>()
                                    }}
                                </div>
                            </Show>
                        </section>

                        <section class="habit-form">
                            <h2 class="habit-form__title">"Add a New Habit"</h2>
                            <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                                ev.prevent_default();
                                add_habit.run(());
                            }>
                                <label class="habit-form__label">
                                    "Habit Name"
                                    <input
                                        class="habit-form__input"
                                        type="text"
                                        prop:value=move || draft.with(|d| d.name.clone())
                                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                                    />
                                </label>
                                <label class="habit-form__label">
                                    "Description"
                                    <textarea
                                        class="habit-form__input"
                                        rows="3"
                                        prop:value=move || draft.with(|d| d.description.clone())
                                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                                    ></textarea>
                                </label>
                                <button class="btn btn--primary" type="submit">"Add Habit"</button>
                            </form>
                        </section>

                        <section class="habit-grid">
                            <Show
                                when=move || data.with(|d| !d.habits.is_empty())
                                fallback=|| view! { <p class="habit-grid__empty">"No habits found. Add a new habit!"</p> }
                            >
                                <For
                                    each=move || data.with(|d| d.habits.clone())
                                    key=|habit: &Habit| (habit.id.clone(), habit.streak)
                                    children=move |habit| view! { <HabitCard habit=habit on_complete=complete_habit/> }
                                />
                            </Show>
                        </section>

                        <section class="trends">
                            <h2 class="trends__title">"Habit Completion Trends"</h2>
                            <div class="trends__card">
                                <CompletionChart points=weekly_trend()/>
                            </div>
                        </section>
                    </div>
                </Show>
            </Show>
        </Show>
    }
}
