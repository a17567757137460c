//! UI Components
//!
//! Leaf components; each owns its own state.

mod sidebar;
mod todo_widget;
mod login_form;

pub use sidebar::Sidebar;
pub use todo_widget::TodoWidget;
pub use login_form::LoginForm;
