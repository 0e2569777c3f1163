//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `habits`, `toast`, `ui`) so individual
//! components can depend on small focused models.

pub mod habits;
pub mod session;
pub mod toast;
pub mod ui;
