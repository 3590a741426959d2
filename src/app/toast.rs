use std::time::Duration;

use leptos::prelude::*;

use crate::config::TOAST_DURATION_MS;
use crate::notify::{Toast, ToastKind, ToastQueue};
use crate::theme::class_list;

#[derive(Debug, Clone, Copy)]
pub struct ToastContext {
    queue: RwSignal<ToastQueue>,
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    /// Show a toast and schedule its removal.
    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        let queue = self.queue;
        let Some(id) = queue.try_update(|q| q.push(kind, message)) else {
            return;
        };
        set_timeout(
            move || {
                queue.try_update(|q| q.dismiss(id));
            },
            Duration::from_millis(TOAST_DURATION_MS),
        );
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }
}

pub fn use_toasts() -> ToastContext {
    expect_context::<ToastContext>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div
            class="fixed bottom-4 right-4 z-[100] flex flex-col gap-2 max-w-sm"
            role="status"
            aria-live="polite"
        >
            <For
                each=move || toasts.queue.get().items().to_vec()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let accent = match toast.kind {
                        ToastKind::Success => "border-green-500 text-green-700 dark:text-green-300",
                        ToastKind::Error => "border-red-500 text-red-700 dark:text-red-300",
                    };
                    view! {
                        <div class=class_list([
                            "toast-enter glass-strong flex items-start gap-3 rounded-lg border-l-4 px-4 py-3 shadow-lg",
                            accent,
                        ])>
                            <span class="font-bold">{toast.kind.icon()}</span>
                            <p class="flex-1 text-sm text-gray-900 dark:text-gray-100">
                                {toast.message}
                            </p>
                            <button
                                type="button"
                                class="text-gray-500 hover:text-gray-900 dark:hover:text-white"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
