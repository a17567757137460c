//! Sidebar Component
//!
//! Navigation menu. Permanent panel on wide viewports, slide-in drawer on
//! narrow ones.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::auth::SharedAuth;
use crate::context::use_app_context;
use crate::menu::{display_name, role_label, MenuItem, SidebarState, MENU};
use crate::models::UserProfile;
use crate::store::{store_sign_out, use_app_store};

fn entry_class(active: bool) -> &'static str {
    if active { "menu-item active" } else { "menu-item" }
}

/// One top-level entry plus its (collapsible) submenu
fn menu_entry<F>(
    item: &'static MenuItem,
    current_path: Memo<String>,
    dashboard: Memo<String>,
    state: RwSignal<SidebarState>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(&'static MenuItem) + Clone + 'static,
{
    let select = on_select.clone();
    let parent_class = move || {
        let path = current_path.get();
        dashboard.with(|d| entry_class(item.is_active(&path, d) || item.has_active_child(&path, d)))
    };
    let expand_icon = move || {
        if !item.has_children() {
            ""
        } else if state.with(|s| s.is_open(item.title)) {
            "▾"
        } else {
            "▸"
        }
    };

    view! {
        <li>
            <div class=parent_class on:click=move |_| select(item)>
                <span class="menu-icon">{item.icon}</span>
                <span class="menu-title">{item.title}</span>
                <span class="menu-expand">{expand_icon}</span>
            </div>
            {item.has_children().then(|| view! {
                <ul class=move || if state.with(|s| s.is_open(item.title)) { "submenu open" } else { "submenu" }>
                    {item.sub_items.iter().map(|sub| {
                        let select = on_select.clone();
                        view! {
                            <li
                                class=move || dashboard.with(|d| entry_class(sub.is_active(&current_path.get(), d)))
                                on:click=move |_| select(sub)
                            >
                                <span class="menu-icon">{sub.icon}</span>
                                <span class="menu-title">{sub.title}</span>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            })}
        </li>
    }
}

#[component]
pub fn Sidebar(
    auth: SharedAuth,
    #[prop(into)] user: Signal<Option<UserProfile>>,
    #[prop(into)] is_narrow: Signal<bool>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let login_route = ctx.routes().login.clone();
    let current_path = use_location().pathname;
    let navigate = use_navigate();
    let state = RwSignal::new(SidebarState::default());

    let routes = ctx.routes().clone();
    let dashboard = Memo::new(move |_| {
        user.with(|u| routes.dashboard_for(u.as_ref().and_then(|u| u.role)).to_string())
    });

    let on_select = {
        let navigate = navigate.clone();
        move |item: &'static MenuItem| {
            let narrow = is_narrow.get_untracked();
            let target = dashboard.with_untracked(|d| {
                state.try_update(|s| s.activate(item, narrow, d).map(str::to_string)).flatten()
            });
            if let Some(path) = target {
                navigate(path.as_str(), Default::default());
            }
        }
    };

    let logout = move |_| {
        state.update(SidebarState::logout);
        auth.logout();
        store_sign_out(&store);
        log::info!("signed out");
        navigate(login_route.as_str(), Default::default());
    };

    let panel_class = move || match (is_narrow.get(), state.with(|s| s.drawer_open())) {
        (false, _) => "sidebar fixed",
        (true, true) => "sidebar drawer open",
        (true, false) => "sidebar drawer",
    };

    view! {
        <button
            class=move || if is_narrow.get() { "drawer-toggle" } else { "drawer-toggle hidden" }
            title="Menu"
            on:click=move |_| state.update(SidebarState::toggle_drawer)
        >
            "☰"
        </button>
        <div
            class=move || if is_narrow.get() && state.with(|s| s.drawer_open()) { "drawer-backdrop visible" } else { "drawer-backdrop" }
            on:click=move |_| state.update(SidebarState::close_drawer)
        ></div>
        <aside class=panel_class>
            <div class="sidebar-header">
                <A href=move || dashboard.get()>"Campus Portal"</A>
                <div class="sidebar-user">
                    <span class="user-name">{move || user.with(|u| display_name(u.as_ref()))}</span>
                    <span class="user-role">{move || user.with(|u| role_label(u.as_ref()))}</span>
                </div>
            </div>

            <ul class="sidebar-menu">
                {MENU.iter().map(|item| menu_entry(item, current_path, dashboard, state, on_select.clone())).collect_view()}
            </ul>

            <button class="logout-btn" on:click=logout>
                "Logout"
            </button>
        </aside>
    }
}
