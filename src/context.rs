//! Application Context
//!
//! Configuration and page-wide signals shared via the Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::{AppConfig, RouteConfig};

#[derive(Clone)]
pub struct AppContext {
    config: Arc<AppConfig>,
    /// Viewport narrower than the configured breakpoint; bound once per page
    is_narrow: Signal<bool>,
}

impl AppContext {
    pub fn new(config: AppConfig, is_narrow: Signal<bool>) -> Self {
        Self { config: Arc::new(config), is_narrow }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn routes(&self) -> &RouteConfig {
        &self.config.routes
    }

    pub fn is_narrow(&self) -> Signal<bool> {
        self.is_narrow
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_is_shared_from_owner() {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(AppContext::new(AppConfig::default(), Signal::stored(true)));
            let ctx = use_app_context();
            assert_eq!(ctx.routes().login, "/login");
            assert!(ctx.is_narrow().get_untracked());
        });
    }
}
