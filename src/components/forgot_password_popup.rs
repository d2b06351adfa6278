//! Forgot-password popup shown over the login page.

use leptos::prelude::*;

/// Modal dialog; the parent owns visibility and passes a dismissal callback.
///
/// Closes on the close button, a backdrop click, or `Escape`.
#[component]
pub fn ForgotPasswordPopup(on_close: Callback<()>) -> impl IntoView {
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <div class="forgot-password-popup__backdrop" on:click=on_backdrop>
            <div
                class="forgot-password-popup"
                role="dialog"
                aria-modal="true"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
            >
                <div class="forgot-password-popup__header">
                    <h2>"Forgot Password"</h2>
                    <button
                        type="button"
                        class="forgot-password-popup__close"
                        on:click=on_close_click
                        title="Close"
                    >
                        "✕"
                    </button>
                </div>
                <p class="forgot-password-popup__body">
                    "Contact support with the email address on your account and we will help you reset your password."
                </p>
            </div>
        </div>
    }
}
