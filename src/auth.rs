//! Authentication Collaborator
//!
//! The login/logout service lives outside this crate. Components receive it
//! as a `SharedAuth` prop; production builds bind to a host-page object.

use std::sync::Arc;

use async_trait::async_trait;
use wasm_bindgen::prelude::*;

use crate::error::AuthError;
use crate::models::{AuthResult, Credentials, UserProfile};

#[async_trait(?Send)]
pub trait Authenticator {
    /// Check credentials. A rejection carries a human-readable message.
    async fn login(&self, credentials: &Credentials) -> Result<AuthResult, AuthError>;

    /// End the session (fire-and-forget)
    fn logout(&self);

    /// Identity of the signed-in user, if any
    fn current_user(&self) -> Option<UserProfile>;
}

pub type SharedAuth = Arc<dyn Authenticator + Send + Sync>;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__PORTAL_AUTH__"], js_name = login, catch)]
    async fn js_login(credentials: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__PORTAL_AUTH__"], js_name = logout, catch)]
    fn js_logout() -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__PORTAL_AUTH__"], js_name = currentUser, catch)]
    fn js_current_user() -> Result<JsValue, JsValue>;
}

/// Binding to `window.__PORTAL_AUTH__` provided by the host page
#[derive(Debug, Clone, Copy, Default)]
pub struct JsAuthenticator;

impl JsAuthenticator {
    pub fn shared() -> SharedAuth {
        Arc::new(Self)
    }
}

/// Pull a message out of whatever the JS side threw
fn rejection_message(err: &JsValue) -> String {
    if let Some(msg) = err.as_string() {
        return msg;
    }
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_default()
}

#[async_trait(?Send)]
impl Authenticator for JsAuthenticator {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResult, AuthError> {
        let js_args = serde_wasm_bindgen::to_value(credentials).map_err(|e| AuthError::Decode(e.to_string()))?;
        let result = js_login(js_args)
            .await
            .map_err(|e| AuthError::Rejected(rejection_message(&e)))?;
        serde_wasm_bindgen::from_value(result).map_err(|e| AuthError::Decode(e.to_string()))
    }

    fn logout(&self) {
        if let Err(e) = js_logout() {
            log::warn!("logout failed: {}", rejection_message(&e));
        }
    }

    fn current_user(&self) -> Option<UserProfile> {
        let value = js_current_user().ok()?;
        if value.is_null() || value.is_undefined() {
            return None;
        }
        serde_wasm_bindgen::from_value(value)
            .map_err(|e| log::warn!("unreadable current user: {}", e))
            .ok()
    }
}
