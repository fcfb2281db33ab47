//! Overlay showing the outcome of a weather API key test.
//!
//! A pointer-down on the backdrop (outside the dialog) and the close control
//! both call `on_dismiss`; the settings page owns the two-phase close. The
//! dialog takes focus when it mounts so Escape works without a click first.

#[cfg(test)]
#[path = "key_test_modal_test.rs"]
mod key_test_modal_test;

use leptos::prelude::*;

use crate::net::types::TestResult;

/// Whether a keydown on the dialog should dismiss it.
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

#[component]
pub fn KeyTestModal(result: TestResult, #[prop(into)] closing: Signal<bool>, on_dismiss: Callback<()>) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move || {
        if let Some(dialog) = dialog_ref.get() {
            let _ = dialog.focus();
        }
    });
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            on_dismiss.run(());
        }
    });
    let title = result.title();
    let success = result.success;
    let failure = !success;

    view! {
        <div
            class="dialog-backdrop key-test-modal__backdrop"
            class:key-test-modal__backdrop--closing=move || closing.get()
            on:mousedown=move |_| on_dismiss.run(())
        >
            <div
                node_ref=dialog_ref
                class="dialog key-test-modal"
                class:key-test-modal--closing=move || closing.get()
                role="dialog"
                aria-modal="true"
                tabindex="0"
                on:mousedown=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
            >
                <button class="key-test-modal__close" title="Close" on:click=move |_| on_dismiss.run(())>
                    "×"
                </button>
                <h3
                    class="key-test-modal__title"
                    class:key-test-modal__title--success=success
                    class:key-test-modal__title--failure=failure
                >
                    {title}
                </h3>
                <p class="key-test-modal__message">{result.message}</p>
            </div>
        </div>
    }
}
