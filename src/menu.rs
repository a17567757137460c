//! Sidebar Menu
//!
//! Static menu definition and the sidebar's expansion/drawer state.

use crate::models::UserProfile;

/// Menu entry. An empty `sub_items` slice means a leaf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuItem {
    pub title: &'static str,
    pub icon: &'static str,
    pub path: &'static str,
    pub sub_items: &'static [MenuItem],
}

impl MenuItem {
    const fn leaf(title: &'static str, icon: &'static str, path: &'static str) -> Self {
        Self { title, icon, path, sub_items: &[] }
    }

    pub fn has_children(&self) -> bool {
        !self.sub_items.is_empty()
    }

    /// Route this entry leads to. The generic dashboard entry resolves to
    /// the signed-in user's own dashboard.
    pub fn target<'a>(&self, dashboard: &'a str) -> &'a str {
        if self.path == DASHBOARD_PATH { dashboard } else { self.path }
    }

    /// Exact match of the resolved target against the current route
    pub fn is_active(&self, current_path: &str, dashboard: &str) -> bool {
        self.target(dashboard) == current_path
    }

    /// True when one of this item's own sub-items is the current route
    pub fn has_active_child(&self, current_path: &str, dashboard: &str) -> bool {
        self.sub_items.iter().any(|sub| sub.is_active(current_path, dashboard))
    }
}

pub const DASHBOARD_PATH: &str = "/dashboard";

pub static MENU: &[MenuItem] = &[
    MenuItem::leaf("Dashboard", "🏠", DASHBOARD_PATH),
    MenuItem {
        title: "Courses",
        icon: "📚",
        path: "/courses",
        sub_items: &[
            MenuItem::leaf("My Courses", "📖", "/courses/mine"),
            MenuItem::leaf("Catalog", "🗂", "/courses/catalog"),
        ],
    },
    MenuItem::leaf("Tasks", "✅", "/tasks"),
    MenuItem {
        title: "Reports",
        icon: "📊",
        path: "/reports",
        sub_items: &[
            MenuItem::leaf("Grades", "🎓", "/reports/grades"),
            MenuItem::leaf("Attendance", "🗓", "/reports/attendance"),
        ],
    },
    MenuItem::leaf("Profile", "👤", "/profile"),
    MenuItem::leaf("Settings", "⚙", "/settings"),
];

/// Sidebar view state: at most one open submenu, plus the narrow-viewport drawer
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SidebarState {
    open_title: Option<&'static str>,
    drawer_open: bool,
}

impl SidebarState {
    pub fn is_open(&self, title: &str) -> bool {
        self.open_title == Some(title)
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Open `title`, or close it if it's already the open one
    pub fn toggle_submenu(&mut self, title: &'static str) {
        self.open_title = if self.is_open(title) { None } else { Some(title) };
    }

    /// Handle a click on a menu entry. Returns the route to navigate to for
    /// leaves; parents only toggle their submenu.
    pub fn activate<'a>(
        &mut self,
        item: &MenuItem,
        is_narrow: bool,
        dashboard: &'a str,
    ) -> Option<&'a str> {
        if item.has_children() {
            self.toggle_submenu(item.title);
            return None;
        }
        if is_narrow {
            self.drawer_open = false;
        }
        Some(item.target(dashboard))
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    pub fn logout(&mut self) {
        self.close_drawer();
    }
}

pub fn display_name(user: Option<&UserProfile>) -> String {
    user.and_then(|u| u.name.as_deref())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or("Guest")
        .to_string()
}

pub fn role_label(user: Option<&UserProfile>) -> &'static str {
    user.and_then(|u| u.role).map(|r| r.label()).unwrap_or("Member")
}
