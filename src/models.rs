//! Frontend Models
//!
//! Data structures shared by the components and the external collaborators.

use serde::{Deserialize, Serialize};

/// A single to-do entry as stored in local storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// Login form payload handed to the auth collaborator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Classification of the authenticated identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Instructor,
    Student,
    /// Anything the backend sends that we don't know about
    #[serde(other)]
    Other,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Instructor => "Instructor",
            Role::Student => "Student",
            Role::Other => "Member",
        }
    }
}

/// Identity snapshot exposed by the auth collaborator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Result of a login call (matches the collaborator's response)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResult {
    pub success: bool,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_role_is_other() {
        let result: AuthResult =
            serde_json::from_str(r#"{"success":true,"user":{"name":"Ada","role":"ta"}}"#).unwrap();
        assert_eq!(result.user.unwrap().role, Some(Role::Other));
    }

    #[test]
    fn test_missing_user_fields() {
        let result: AuthResult = serde_json::from_str(r#"{"success":true,"user":{}}"#).unwrap();
        assert_eq!(result.user, Some(UserProfile::default()));

        let result: AuthResult = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(result.user.is_none());
    }

    #[test]
    fn test_todo_record_shape() {
        let record = TodoRecord { id: 7, text: "Read".to_string(), completed: true };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"id":7,"text":"Read","completed":true}"#
        );
    }
}
