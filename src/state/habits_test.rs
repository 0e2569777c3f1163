use super::*;

// =============================================================
// Helpers
// =============================================================

fn habit(id: &str, streak: u32) -> Habit {
    Habit {
        id: id.to_owned(),
        name: format!("habit {id}"),
        description: String::new(),
        streak,
    }
}

fn loaded_state() -> HabitsState {
    let mut state = HabitsState::default();
    state.loaded(
        vec![habit("a", 1), habit("b", 6)],
        CurrentUser { points: 20, badges: vec!["Starter".to_owned()] },
    );
    state
}

// =============================================================
// Loading
// =============================================================

#[test]
fn default_state_is_loading_and_empty() {
    let state = HabitsState::default();
    assert!(state.loading);
    assert!(state.habits.is_empty());
    assert_eq!(state.points, 0);
    assert_eq!(state.error, None);
    assert!(!state.celebrating);
}

#[test]
fn loaded_takes_habits_and_scores() {
    let state = loaded_state();
    assert!(!state.loading);
    assert_eq!(state.habits.len(), 2);
    assert_eq!(state.points, 20);
    assert_eq!(state.badges, vec!["Starter".to_owned()]);
}

#[test]
fn load_failed_sets_generic_error() {
    let mut state = HabitsState::default();
    state.load_failed();
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(LOAD_FAILED_MESSAGE));
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn add_appends_habit() {
    let mut state = loaded_state();
    state.add(habit("c", 0));
    assert_eq!(state.habits.last().map(|h| h.id.as_str()), Some("c"));
}

#[test]
fn completion_replaces_matching_habit_only() {
    let mut state = loaded_state();
    state.apply_completion(Completion {
        habit: habit("b", 7),
        points: 30,
        badges: vec!["Starter".to_owned(), "Week Warrior".to_owned()],
    });
    assert_eq!(state.habits[0], habit("a", 1));
    assert_eq!(state.habits[1].streak, 7);
    assert_eq!(state.points, 30);
    assert_eq!(state.badges.len(), 2);
    assert!(state.celebrating);
}

#[test]
fn completion_for_unknown_habit_keeps_list() {
    let mut state = loaded_state();
    let before = state.habits.clone();
    state.apply_completion(Completion { habit: habit("zzz", 3), points: 25, badges: Vec::new() });
    assert_eq!(state.habits, before);
    assert_eq!(state.points, 25);
}

// =============================================================
// Streak progress
// =============================================================

#[test]
fn streak_progress_wraps_every_goal() {
    assert!(streak_progress(0).abs() < f64::EPSILON);
    assert!(streak_progress(7).abs() < f64::EPSILON);
    assert!((streak_progress(14)).abs() < f64::EPSILON);
}

#[test]
fn streak_progress_is_proportional() {
    assert!((streak_progress(1) - 100.0 / 7.0).abs() < 1e-9);
    assert!((streak_progress(6) - 600.0 / 7.0).abs() < 1e-9);
    assert!((streak_progress(10) - 300.0 / 7.0).abs() < 1e-9);
}
