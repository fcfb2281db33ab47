//! Toast notifications: the root host and the `Notifier` pages push through.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Handle for pushing toasts. `Copy`, provided as context by `App`.
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: RwSignal<ToastState>,
    ttl_ms: u64,
}

impl Notifier {
    pub fn new(toasts: RwSignal<ToastState>, ttl_ms: u64) -> Self {
        Self { toasts, ttl_ms }
    }

    pub fn success(self, message: impl Into<String>) {
        let mut id = 0;
        self.toasts.update(|t| id = t.success(message));
        self.expire(id);
    }

    pub fn error(self, message: impl Into<String>) {
        let mut id = 0;
        self.toasts.update(|t| id = t.error(message));
        self.expire(id);
    }

    fn expire(self, id: u64) {
        #[cfg(feature = "hydrate")]
        {
            let toasts = self.toasts;
            let ttl = std::time::Duration::from_millis(self.ttl_ms);
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(ttl).await;
                toasts.update(|t| t.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, self.ttl_ms);
        }
    }
}

/// Top-right stack of active toasts. Clicking a toast dismisses it early.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let success = toast.kind == ToastKind::Success;
                    let error = toast.kind == ToastKind::Error;
                    view! {
                        <div
                            class="toast"
                            class:toast--success=success
                            class:toast--error=error
                            on:click=move |_| toasts.update(|t| t.dismiss(id))
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
