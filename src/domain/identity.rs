//! The authenticated caller and the ownership rule.

use crate::domain::entities::Todo;

/// A verified caller resolved from request credentials.
///
/// Produced by [`crate::application::services::AuthService::authenticate`]
/// and attached to the request by the auth middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: i64,
    pub username: String,
    pub role: String,
}

impl Identity {
    pub fn new(id: i64, username: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            role: role.into(),
        }
    }

    /// Whether this caller may read, change or delete `todo`.
    ///
    /// Role plays no part: an `admin` is held to the same rule as anyone else.
    pub fn owns(&self, todo: &Todo) -> bool {
        todo.owner_id == self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo_owned_by(owner_id: i64) -> Todo {
        Todo::new(
            7,
            "Write tests".to_string(),
            "For the ownership rule".to_string(),
            3,
            false,
            owner_id,
        )
    }

    #[test]
    fn test_owner_matches() {
        let identity = Identity::new(1, "jayhus", "user");
        assert!(identity.owns(&todo_owned_by(1)));
    }

    #[test]
    fn test_other_user_does_not_own() {
        let identity = Identity::new(2, "someone", "user");
        assert!(!identity.owns(&todo_owned_by(1)));
    }

    #[test]
    fn test_admin_has_no_bypass() {
        let admin = Identity::new(2, "root", "admin");
        assert!(!admin.owns(&todo_owned_by(1)));
    }
}
