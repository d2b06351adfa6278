//! Login page: email + password form with show/hide toggle and a
//! forgot-password popup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached directly or from a guarded route via `/login?from=<path>`. The
//! page owns only local form state; authentication, loading and routing come
//! from context and are handed to a `LoginSubmitter` once at mount.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::forgot_password_popup::ForgotPasswordPopup;
use crate::config::ClientConfig;
use crate::net::auth::SessionAuthenticator;
use crate::pages::login_flow::LoginSubmitter;
use crate::state::auth::AuthState;
use crate::state::login::{LoginField, LoginFormState, submit_label};
use crate::util::navigation::{FROM_PARAM, RedirectTarget, RouterNavigator};
use crate::util::notify::AlertNotifier;

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let auth = expect_context::<RwSignal<AuthState>>();
    let form = RwSignal::new(LoginFormState::default());

    let from = use_query_map().with_untracked(|query| query.get(FROM_PARAM));
    let redirect = RedirectTarget::resolve(from.as_deref(), &config.default_redirect);
    let submitter = StoredValue::new_local(Rc::new(LoginSubmitter::new(
        SessionAuthenticator::new(auth, config.login_endpoint.clone()),
        RouterNavigator::new(use_navigate()),
        AlertNotifier,
        redirect,
    )));

    let loading = move || auth.with(|state| state.loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = form.with_untracked(|f| f.credentials().clone());
        let submitter = submitter.get_value();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let effect = submitter.submit(&credentials).await;
            log::debug!("login submit finished: {effect:?}");
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (credentials, submitter);
    };

    let signup_path = config.signup_path;
    let on_signup = move |_| submitter.with_value(|s| s.go_to_signup(&signup_path));

    let close_popup = Callback::new(move |()| form.update(LoginFormState::close_forgot_password));

    view! {
        <div class="login-page">
            <Show when=move || form.with(|f| f.forgot_password_open)>
                <ForgotPasswordPopup on_close=close_popup/>
            </Show>

            <div class="login-card">
                <h2 class="login-card__title">"Login"</h2>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="login-email">"Email"</label>
                    <input
                        id="login-email"
                        class="login-input"
                        type="email"
                        name="email"
                        required
                        prop:value=move || form.with(|f| f.credentials().email.clone())
                        on:input=move |ev| form.update(|f| f.set_field(LoginField::Email, event_target_value(&ev)))
                    />

                    <label class="login-label" for="login-password">"Password"</label>
                    <div class="login-password">
                        <input
                            id="login-password"
                            class="login-input"
                            type=move || form.with(LoginFormState::password_input_type)
                            name="password"
                            required
                            prop:value=move || form.with(|f| f.credentials().password.clone())
                            on:input=move |ev| form.update(|f| f.set_field(LoginField::Password, event_target_value(&ev)))
                        />
                        <button
                            type="button"
                            class="login-password__toggle"
                            aria-label=move || form.with(LoginFormState::visibility_label)
                            on:click=move |_| form.update(LoginFormState::toggle_visibility)
                        >
                            <span class=move || {
                                if form.with(|f| f.password_visible) { "icon icon--eye-off" } else { "icon icon--eye" }
                            }></span>
                        </button>
                    </div>

                    <div class="login-actions">
                        <button
                            type="submit"
                            class=move || if loading() { "login-button login-button--busy" } else { "login-button" }
                            disabled=loading
                        >
                            {move || submit_label(loading())}
                        </button>
                    </div>
                </form>

                <div class="login-links">
                    <button type="button" class="login-link" on:click=on_signup>
                        "Don't have an account? Sign Up"
                    </button>
                    <button
                        type="button"
                        class="login-link"
                        on:click=move |_| form.update(LoginFormState::open_forgot_password)
                    >
                        "Forgot Password?"
                    </button>
                </div>
            </div>
        </div>
    }
}
