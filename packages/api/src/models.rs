//! Client-side user projection.

use serde::{Deserialize, Serialize};

/// User information as the backend exposes it to the client.
///
/// The `id` is the backend's UUID rendered as a string so it stays usable
/// in WASM without pulling in a UUID type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

impl UserInfo {
    /// Display name, falling back to the email address.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_name() {
        let user = UserInfo {
            id: "u-1".to_string(),
            email: "ada@example.com".to_string(),
            name: Some("Ada".to_string()),
        };
        assert_eq!(user.display_name(), "Ada");
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let user = UserInfo {
            id: "u-1".to_string(),
            email: "ada@example.com".to_string(),
            name: None,
        };
        assert_eq!(user.display_name(), "ada@example.com");
    }
}
