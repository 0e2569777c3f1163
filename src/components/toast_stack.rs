//! Renders queued notices from `ToastState`.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState};

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast: &Toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast toasts=toasts/> }
            />
        </div>
    }
}

/// A single notice. Click to dismiss; otherwise it expires on its own.
#[component]
fn ToastItem(toast: Toast, toasts: RwSignal<ToastState>) -> impl IntoView {
    let id = toast.id;

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(crate::state::toast::TOAST_TTL_MS)).await;
        let _ = toasts.try_update(|t| t.dismiss(id));
    });

    let class = match toast.kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    };

    view! {
        <div class=class role="status" on:click=move |_| toasts.update(|t| t.dismiss(id))>
            {toast.message}
        </div>
    }
}
