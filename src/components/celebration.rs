//! Confetti burst shown briefly after a habit is completed.

#[cfg(test)]
#[path = "celebration_test.rs"]
mod celebration_test;

use leptos::prelude::*;

/// How long the dashboard keeps the burst mounted.
pub const CELEBRATION_MS: u64 = 3_000;

const PIECES: usize = 36;

/// Inline style for confetti piece `i`: spread across the width with
/// staggered delays and rotating hues. Deterministic so renders are stable.
pub fn confetti_style(i: usize) -> String {
    let left = (i * 37) % 100;
    let delay_ms = (i % 12) * 80;
    let hue = (i * 47) % 360;
    format!("left: {left}%; animation-delay: {delay_ms}ms; background-color: hsl({hue}, 85%, 55%);")
}

#[component]
pub fn Celebration() -> impl IntoView {
    view! {
        <div class="celebration" aria-hidden="true">
            {(0..PIECES)
                .map(|i| view! { <span class="celebration__piece" style=confetti_style(i)></span> })
                .collect::<Vec<_>>()}
        </div>
    }
}
