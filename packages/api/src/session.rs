//! Current-session lookup.

use reqwest::StatusCode;

use crate::config::endpoint;
use crate::error::ApiError;
use crate::models::UserInfo;
use crate::response::interpret;

/// Fetch the user attached to the current session, if any.
///
/// A `401` is a normal answer here (no session), not an error, so the
/// auth provider can distinguish "logged out" from "backend unreachable".
pub async fn current_user() -> Result<Option<UserInfo>, ApiError> {
    let request = reqwest::Client::new().get(endpoint("/user/me"));
    #[cfg(target_arch = "wasm32")]
    let request = request.fetch_credentials_include();

    let response = request.send().await?;
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Ok(None);
    }
    let body = response.text().await?;
    interpret(status, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_body_decodes_to_a_user() {
        let user: Option<UserInfo> = interpret(
            StatusCode::OK,
            r#"{"id":"u-1","email":"ada@example.com","name":"Ada"}"#,
        )
        .unwrap();
        assert_eq!(user.unwrap().email, "ada@example.com");
    }

    #[test]
    fn null_session_body_decodes_to_none() {
        let user: Option<UserInfo> = interpret(StatusCode::OK, "null").unwrap();
        assert_eq!(user, None);
    }
}
