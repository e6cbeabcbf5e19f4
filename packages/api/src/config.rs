//! Backend location.

/// Base URL of the account API backend.
///
/// Overridable at compile time through the `API_BASE_URL` environment
/// variable so deployed builds can point at a different host.
pub const BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Absolute URL for an API path.
pub(crate) fn endpoint(path: &str) -> String {
    format!("{BASE_URL}{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        assert_eq!(
            endpoint("/user/edit_password"),
            format!("{BASE_URL}/user/edit_password")
        );
    }
}
