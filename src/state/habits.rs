//! Dashboard data: habits, points and badges for the signed-in user.
//!
//! DESIGN
//! ======
//! The dashboard owns one instance per mount, so signing out and back in
//! always starts from a fresh load. Mutations mirror backend responses
//! verbatim; scoring and streaks are computed server-side.

#[cfg(test)]
#[path = "habits_test.rs"]
mod habits_test;

use crate::net::types::{Completion, CurrentUser, Habit};

/// Shown in place of the dashboard when the initial load fails.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to fetch data. Please try again.";

/// Streak length the progress bar counts toward before wrapping.
pub const STREAK_GOAL: u32 = 7;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HabitsState {
    pub habits: Vec<Habit>,
    pub points: i64,
    pub badges: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
    /// Set by a completion; cleared by the dashboard after a short delay.
    pub celebrating: bool,
}

impl Default for HabitsState {
    fn default() -> Self {
        Self {
            habits: Vec::new(),
            points: 0,
            badges: Vec::new(),
            loading: true,
            error: None,
            celebrating: false,
        }
    }
}

impl HabitsState {
    pub fn loaded(&mut self, habits: Vec<Habit>, user: CurrentUser) {
        self.habits = habits;
        self.points = user.points;
        self.badges = user.badges;
        self.error = None;
        self.loading = false;
    }

    pub fn load_failed(&mut self) {
        self.error = Some(LOAD_FAILED_MESSAGE.to_owned());
        self.loading = false;
    }

    pub fn add(&mut self, habit: Habit) {
        self.habits.push(habit);
    }

    /// Replace the completed habit and take over the new score.
    pub fn apply_completion(&mut self, completion: Completion) {
        let Completion { habit, points, badges } = completion;
        if let Some(slot) = self.habits.iter_mut().find(|h| h.id == habit.id) {
            *slot = habit;
        }
        self.points = points;
        self.badges = badges;
        self.celebrating = true;
    }
}

/// Percentage of the way to the next multiple of [`STREAK_GOAL`].
pub fn streak_progress(streak: u32) -> f64 {
    f64::from(streak % STREAK_GOAL) * (100.0 / f64::from(STREAK_GOAL))
}
