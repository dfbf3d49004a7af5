//! Toast Notification Component
//!
//! Renders the toast queue in the corner of the layout.

use leptos::*;

use crate::state::{use_toasts, ToastKind, ToastMessage};

/// Toast notification container
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="fixed bottom-6 right-4 z-50 space-y-2" aria-live="polite">
            <For
                each=move || toasts.queue.with(|q| q.items().to_vec())
                key=|toast| toast.id
                children=move |toast: ToastMessage| {
                    let id = toast.id;
                    view! {
                        <ToastItem
                            message=toast.message
                            kind=toast.kind
                            on_dismiss=Callback::new(move |_| toasts.dismiss(id))
                        />
                    }
                }
            />
        </div>
    }
}

#[component]
fn ToastItem(
    #[prop(into)]
    message: String,
    kind: ToastKind,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    let (icon, bg_class) = match kind {
        ToastKind::Success => ("✓", "bg-green-600"),
        ToastKind::Error => ("✕", "bg-red-600"),
        ToastKind::Info => ("ℹ", "bg-blue-600"),
    };

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out animate-slide-in",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium flex-1">{message}</span>
            <button
                class="text-white/70 hover:text-white"
                aria-label="Dismiss"
                on:click=move |_| on_dismiss.call(())
            >
                "×"
            </button>
        </div>
    }
}
