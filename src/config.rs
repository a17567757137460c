//! Application Configuration
//!
//! Defaults can be overridden by the host page through a
//! `window.__PORTAL_CONFIG__` object.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::ConfigError;
use crate::models::Role;

/// Name of the host-page global holding overrides
const CONFIG_GLOBAL: &str = "__PORTAL_CONFIG__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// localStorage key for the todo collection
    pub todo_storage_key: String,
    /// Viewports narrower than this get the drawer sidebar
    pub narrow_breakpoint_px: u32,
    pub log_level: String,
    /// Fixed by the router; not overridable from the host page
    #[serde(skip)]
    pub routes: RouteConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            todo_storage_key: "todos".to_string(),
            narrow_breakpoint_px: 900,
            log_level: "info".to_string(),
            routes: RouteConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteConfig {
    pub login: String,
    pub admin_dashboard: String,
    pub instructor_dashboard: String,
    pub student_dashboard: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            login: "/login".to_string(),
            admin_dashboard: "/admin/dashboard".to_string(),
            instructor_dashboard: "/instructor/dashboard".to_string(),
            student_dashboard: "/student/dashboard".to_string(),
        }
    }
}

impl RouteConfig {
    /// Post-login destination; unknown or missing roles land on the student dashboard
    pub fn dashboard_for(&self, role: Option<Role>) -> &str {
        match role {
            Some(Role::Admin) => &self.admin_dashboard,
            Some(Role::Instructor) => &self.instructor_dashboard,
            Some(Role::Student) | Some(Role::Other) | None => &self.student_dashboard,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Decode(e.to_string()))
    }

    fn from_js(value: JsValue) -> Result<Self, ConfigError> {
        serde_wasm_bindgen::from_value(value).map_err(|e| ConfigError::Decode(e.to_string()))
    }

    /// Read overrides from the host page. Defaults when none are given;
    /// an error when the overrides can't be decoded.
    pub fn load() -> Result<Self, ConfigError> {
        let Some(window) = web_sys::window() else {
            return Ok(Self::default());
        };
        match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
            Ok(value) if !value.is_undefined() && !value.is_null() => Self::from_js(value),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = AppConfig::from_json(
            r#"{"todo_storage_key":"portal.todos","log_level":"debug","routes":{"login":"/signin"}}"#,
        )
        .unwrap();
        assert_eq!(config.todo_storage_key, "portal.todos");
        assert_eq!(config.narrow_breakpoint_px, 900);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.routes.login, "/login");
        assert_eq!(config.routes.admin_dashboard, "/admin/dashboard");
    }

    #[test]
    fn test_invalid_config() {
        assert!(AppConfig::from_json(r#"{"narrow_breakpoint_px":"wide"}"#).is_err());
    }

    #[test]
    fn test_decode_error_is_returned_not_swallowed() {
        let err = AppConfig::from_json(r#"{"log_level":42}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Decode(ref msg) if !msg.is_empty()));
        // the caller falls back to these before initialising the logger
        assert_eq!(AppConfig::default().log_level, "info");
    }

    #[test]
    fn test_dashboard_for_role() {
        let routes = RouteConfig::default();
        assert_eq!(routes.dashboard_for(Some(Role::Admin)), "/admin/dashboard");
        assert_eq!(routes.dashboard_for(Some(Role::Instructor)), "/instructor/dashboard");
        assert_eq!(routes.dashboard_for(Some(Role::Student)), "/student/dashboard");
        assert_eq!(routes.dashboard_for(Some(Role::Other)), "/student/dashboard");
        assert_eq!(routes.dashboard_for(None), "/student/dashboard");
    }
}
