//! Stand-in for user authentication.

/// The signed-in user. Signing in always succeeds.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: String,
}

impl Session {
    pub fn sign_in(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    /// Name shown in greetings.
    pub fn display_name(&self) -> String {
        format!("User {}", self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_keeps_user_id() {
        let session = Session::sign_in("42");
        assert_eq!(session.user_id, "42");
        assert_eq!(session.display_name(), "User 42");
    }
}
