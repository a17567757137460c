//! Login Form Component
//!
//! Email/password form. On success routes to the dashboard for the user's role.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::auth::SharedAuth;
use crate::context::use_app_context;
use crate::login::{authenticate_and_route, LoginState};
use crate::store::{store_sign_in, use_app_store};

#[component]
pub fn LoginForm(auth: SharedAuth) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let navigate = use_navigate();
    let form = RwSignal::new(LoginState::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(LoginState::begin_submit).flatten() else {
            return;
        };
        let auth = auth.clone();
        let routes = ctx.routes().clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            authenticate_and_route(
                &*auth,
                credentials,
                &routes,
                |outcome| form.try_update(|f| f.complete(outcome)).flatten(),
                |user| store_sign_in(&store, user),
                |route| navigate(route, Default::default()),
            )
            .await;
        });
    };

    let is_submitting = move || form.with(LoginState::is_submitting);

    view! {
        <div class="login-card">
            <h1>"Welcome back"</h1>
            <p class="login-subtitle">"Sign in to continue"</p>

            {move || form.with(|f| f.banner().map(str::to_string)).map(|msg| view! {
                <div class="login-banner error">{msg}</div>
            })}

            <form class="login-form" on:submit=on_submit>
                <label for="login-email">"Email"</label>
                <input
                    id="login-email"
                    type="email"
                    autocomplete="username"
                    placeholder="you@school.edu"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />

                <label for="login-password">"Password"</label>
                <div class="password-row">
                    <input
                        id="login-password"
                        type=move || if form.with(|f| f.show_password) { "text" } else { "password" }
                        autocomplete="current-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="password-visibility"
                        title=move || if form.with(|f| f.show_password) { "Hide password" } else { "Show password" }
                        on:click=move |_| form.update(LoginState::toggle_password_visibility)
                    >
                        {move || if form.with(|f| f.show_password) { "🙈" } else { "👁" }}
                    </button>
                </div>

                <button type="submit" class="login-submit" disabled=is_submitting>
                    {move || if is_submitting() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>

            <div class="login-divider">"or"</div>
            <button type="button" class="login-provider">
                "Continue with Google"
            </button>
        </div>
    }
}
