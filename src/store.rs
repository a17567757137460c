//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::UserProfile;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in identity, `None` before login or after logout
    pub user: Option<UserProfile>,
}

impl AppState {
    pub fn new(user: Option<UserProfile>) -> Self {
        Self { user }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_sign_in(store: &AppStore, user: UserProfile) {
    *store.user().write() = Some(user);
}

pub fn store_sign_out(store: &AppStore) {
    *store.user().write() = None;
}
