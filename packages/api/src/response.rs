//! Mapping of raw responses onto results.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;

/// Failure body shape shared by all endpoints.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Turn a status/body pair into a typed result.
///
/// The body is decoded on both paths, mirroring the endpoint contract that
/// success and failure responses are both JSON. An undecodable body is a
/// transport-level failure regardless of status.
pub(crate) fn interpret<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, ApiError> {
    if status.is_success() {
        serde_json::from_str(body)
            .map_err(|err| ApiError::Transport(format!("invalid response body: {err}")))
    } else {
        let parsed: ErrorBody = serde_json::from_str(body)
            .map_err(|err| ApiError::Transport(format!("invalid response body: {err}")))?;
        Err(ApiError::Rejected {
            message: parsed.error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Empty {}

    #[test]
    fn success_decodes_body() {
        let result: Result<Empty, _> = interpret(StatusCode::OK, "{}");
        assert_eq!(result, Ok(Empty {}));
    }

    #[test]
    fn failure_carries_server_message() {
        let result: Result<Empty, _> =
            interpret(StatusCode::BAD_REQUEST, r#"{"error":"weak password"}"#);
        assert_eq!(
            result,
            Err(ApiError::Rejected {
                message: Some("weak password".to_string())
            })
        );
    }

    #[test]
    fn failure_without_message_is_still_rejected() {
        let result: Result<Empty, _> = interpret(StatusCode::INTERNAL_SERVER_ERROR, "{}");
        assert_eq!(result, Err(ApiError::Rejected { message: None }));
    }

    #[test]
    fn garbage_body_is_a_transport_error_on_success_status() {
        let result: Result<Empty, _> = interpret(StatusCode::OK, "<html>");
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }

    #[test]
    fn garbage_body_is_a_transport_error_on_failure_status() {
        let result: Result<Empty, _> = interpret(StatusCode::BAD_GATEWAY, "<html>");
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }
}
