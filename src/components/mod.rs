//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard and app chrome while reading/writing shared
//! state from Leptos context providers.

pub mod celebration;
pub mod completion_chart;
pub mod habit_card;
pub mod navbar;
pub mod toast_stack;
