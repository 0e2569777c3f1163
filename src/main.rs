//! Browser entry point. Build with `trunk serve` (enables `csr`).

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        leptos::mount::mount_to_body(habit_tracker::app::App);
    }
    #[cfg(not(feature = "csr"))]
    {
        eprintln!("habit-tracker runs in the browser; build it with `trunk serve`");
    }
}
