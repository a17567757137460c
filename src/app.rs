//! Campus Portal App
//!
//! Root component: global state, configuration and routes.

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::auth::SharedAuth;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{
    DashboardPage, DashboardRedirect, LoginPage, NotFoundPage, ProfilePage, SectionPage, Shell,
    TasksPage,
};
use crate::store::AppState;
use crate::viewport::use_is_narrow;

#[component]
pub fn App(config: AppConfig, auth: SharedAuth) -> impl IntoView {
    // Session restored from the auth service, if it has one
    let user = auth.current_user();
    log::debug!("starting with user {:?}", user);
    provide_context(Store::new(AppState::new(user)));

    let is_narrow = use_is_narrow(config.narrow_breakpoint_px);
    provide_context(AppContext::new(config, is_narrow));

    let login_auth = auth.clone();

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=DashboardRedirect />
                <Route path=path!("/dashboard") view=DashboardRedirect />
                <Route path=path!("/login") view=move || view! { <LoginPage auth=login_auth.clone() /> } />
                // One shell for every signed-in page; children render into its outlet
                <ParentRoute path=path!("") view=move || view! { <Shell auth=auth.clone() /> }>
                    <Route path=path!("admin/dashboard") view=|| view! { <DashboardPage title="Admin Dashboard" /> } />
                    <Route path=path!("instructor/dashboard") view=|| view! { <DashboardPage title="Instructor Dashboard" /> } />
                    <Route path=path!("student/dashboard") view=|| view! { <DashboardPage title="Student Dashboard" /> } />
                    <Route path=path!("tasks") view=TasksPage />
                    <Route path=path!("profile") view=ProfilePage />
                    <Route path=path!("courses/mine") view=|| view! { <SectionPage title="My Courses" /> } />
                    <Route path=path!("courses/catalog") view=|| view! { <SectionPage title="Catalog" /> } />
                    <Route path=path!("reports/grades") view=|| view! { <SectionPage title="Grades" /> } />
                    <Route path=path!("reports/attendance") view=|| view! { <SectionPage title="Attendance" /> } />
                    <Route path=path!("settings") view=|| view! { <SectionPage title="Settings" /> } />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
