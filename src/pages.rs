//! Pages
//!
//! Route targets hosting the components.

use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};

use crate::auth::SharedAuth;
use crate::components::{LoginForm, Sidebar, TodoWidget};
use crate::context::use_app_context;
use crate::menu::{display_name, role_label};
use crate::store::{use_app_store, AppStateStoreFields};

/// Signed-in layout: sidebar plus the matched child route. Mounted once for
/// all signed-in routes so sidebar state survives navigation. Sends anonymous
/// visitors to login.
#[component]
pub fn Shell(auth: SharedAuth) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let user = Signal::derive(move || store.user().get());
    let login = ctx.routes().login.clone();

    view! {
        {move || user.with(Option::is_none).then(|| view! { <Redirect path=login.clone() /> })}
        <div class="app-layout">
            <Sidebar auth=auth user=user is_narrow=ctx.is_narrow() />
            <main class="main-content">
                <Outlet />
            </main>
        </div>
    }
}

#[component]
pub fn LoginPage(auth: SharedAuth) -> impl IntoView {
    view! {
        <div class="login-page">
            <LoginForm auth=auth />
        </div>
    }
}

/// Sends `/` and `/dashboard` to the dashboard matching the user's role
#[component]
pub fn DashboardRedirect() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let target = match store.user().get_untracked() {
        Some(user) => ctx.routes().dashboard_for(user.role).to_string(),
        None => ctx.routes().login.clone(),
    };
    view! { <Redirect path=target /> }
}

#[component]
pub fn DashboardPage(#[prop(into)] title: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let storage_key = ctx.config().todo_storage_key.clone();

    view! {
        <section class="page">
            <h1>{title}</h1>
            <p class="greeting">
                {move || format!("Hello, {}!", store.user().with(|u| display_name(u.as_ref())))}
            </p>
            <TodoWidget storage_key=storage_key />
        </section>
    }
}

#[component]
pub fn TasksPage() -> impl IntoView {
    let ctx = use_app_context();
    let storage_key = ctx.config().todo_storage_key.clone();

    view! {
        <section class="page">
            <h1>"Tasks"</h1>
            <TodoWidget storage_key=storage_key />
        </section>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="page">
            <h1>"Profile"</h1>
            <dl class="profile">
                <dt>"Name"</dt>
                <dd>{move || store.user().with(|u| display_name(u.as_ref()))}</dd>
                <dt>"Role"</dt>
                <dd>{move || store.user().with(|u| role_label(u.as_ref()))}</dd>
            </dl>
        </section>
    }
}

/// Placeholder for menu destinations owned by other teams
#[component]
pub fn SectionPage(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <section class="page">
            <h1>{title}</h1>
        </section>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <a href="/">"Back to start"</a>
        </div>
    }
}
