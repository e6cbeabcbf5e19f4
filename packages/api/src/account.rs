//! Account operations: password edit and password reset request.

use serde::{Deserialize, Serialize};

use crate::config::endpoint;
use crate::error::ApiError;
use crate::response::interpret;

#[derive(Debug, Serialize)]
struct EditPasswordRequest<'a> {
    new_password_1: &'a str,
    new_password_2: &'a str,
}

#[derive(Debug, Serialize)]
struct ResetRequest<'a> {
    email: &'a str,
}

/// Successful password edit. The backend may attach a warning the user
/// should see alongside the success message (e.g. "please log in again").
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PasswordEdited {
    #[serde(default)]
    pub warning: Option<String>,
}

/// Successful reset request. The backend may supply its own confirmation
/// text; absent that the caller shows a generic one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResetRequested {
    #[serde(default)]
    pub message: Option<String>,
}

/// Change the password of the currently authenticated user.
///
/// Sends the session cookie along with the request; the backend decides
/// whether the pair is acceptable.
pub async fn edit_password(
    new_password_1: &str,
    new_password_2: &str,
) -> Result<PasswordEdited, ApiError> {
    let request = reqwest::Client::new()
        .post(endpoint("/user/edit_password"))
        .json(&EditPasswordRequest {
            new_password_1,
            new_password_2,
        });
    #[cfg(target_arch = "wasm32")]
    let request = request.fetch_credentials_include();

    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;
    interpret(status, &body)
}

/// Ask the backend to email a password reset link.
pub async fn request_password_reset(email: &str) -> Result<ResetRequested, ApiError> {
    let request = reqwest::Client::new()
        .post(endpoint("/user/request_password_reset"))
        .json(&ResetRequest { email });

    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;
    interpret(status, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn edit_password_success_without_warning() {
        let outcome: PasswordEdited = interpret(StatusCode::OK, "{}").unwrap();
        assert_eq!(outcome.warning, None);
    }

    #[test]
    fn edit_password_success_with_warning() {
        let outcome: PasswordEdited =
            interpret(StatusCode::OK, r#"{"warning":"re-login required"}"#).unwrap();
        assert_eq!(outcome.warning.as_deref(), Some("re-login required"));
    }

    #[test]
    fn reset_request_success_with_message() {
        let outcome: ResetRequested =
            interpret(StatusCode::OK, r#"{"message":"check your inbox"}"#).unwrap();
        assert_eq!(outcome.message.as_deref(), Some("check your inbox"));
    }

    #[test]
    fn reset_request_success_without_message() {
        let outcome: ResetRequested = interpret(StatusCode::OK, "{}").unwrap();
        assert_eq!(outcome.message, None);
    }

    #[test]
    fn request_bodies_use_the_wire_field_names() {
        let body = serde_json::to_value(EditPasswordRequest {
            new_password_1: "a",
            new_password_2: "b",
        })
        .unwrap();
        assert_eq!(body["new_password_1"], "a");
        assert_eq!(body["new_password_2"], "b");

        let body = serde_json::to_value(ResetRequest {
            email: "ada@example.com",
        })
        .unwrap();
        assert_eq!(body["email"], "ada@example.com");
    }
}
