//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::login::LoginPage;
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth session and client config contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    provide_context(ClientConfig::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/login-page.css"/>
        <Title text="Login"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPlaceholder/>
                <Route path=StaticSegment("") view=HomePlaceholder/>
            </Routes>
        </Router>
    }
}

/// Landing route; the real home page is mounted by the host application.
#[component]
fn HomePlaceholder() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || {
        auth.with(|state| match &state.user {
            Some(user) => format!("Signed in as {}", user.name.as_deref().unwrap_or(&user.email)),
            None => "Not signed in.".to_owned(),
        })
    };

    let signed_in = move || auth.with(AuthState::is_signed_in);

    view! {
        <div class="home-page">
            <p>{greeting}</p>
            <Show when=move || !signed_in()>
                <A href="/login">"Login"</A>
            </Show>
        </div>
    }
}

#[component]
fn SignupPlaceholder() -> impl IntoView {
    view! {
        <div class="signup-page">
            <p>"Sign-up is handled by the host application."</p>
            <A href="/login">"Back to login"</A>
        </div>
    }
}
