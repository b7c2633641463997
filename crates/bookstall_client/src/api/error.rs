use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API base URL: {0}")]
    InvalidBase(String),
    #[error("unable to reach the server: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("request failed ({status}): {}", .message.as_deref().unwrap_or("no details"))]
    Api { status: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for the user-facing notice: the server's message when it sent
    /// one, otherwise `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Extracts the `error` field of a JSON error body, trimmed.
pub(crate) fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = value.get("error")?.as_str()?.trim();
    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_reads_error_field() {
        assert_eq!(
            server_message(r#"{"error":"Invalid credentials"}"#),
            Some("Invalid credentials".to_string())
        );
    }

    #[test]
    fn server_message_ignores_other_shapes() {
        assert_eq!(server_message(""), None);
        assert_eq!(server_message("<html>502</html>"), None);
        assert_eq!(server_message(r#"{"message":"nope"}"#), None);
        assert_eq!(server_message(r#"{"error":"   "}"#), None);
        assert_eq!(server_message(r#"{"error":{"code":1}}"#), None);
    }

    #[test]
    fn server_message_is_kept_whole() {
        let long = "x".repeat(500);
        let body = format!(r#"{{"error":"  {long} "}}"#);
        assert_eq!(server_message(&body), Some(long));
    }

    #[test]
    fn user_message_prefers_server_text() {
        let err = ApiError::Api {
            status: 401,
            message: Some("Invalid credentials".to_string()),
        };
        assert_eq!(err.user_message("Something went wrong"), "Invalid credentials");

        let err = ApiError::Api {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("Something went wrong"), "Something went wrong");
        assert_eq!(
            ApiError::Decode("eof".to_string()).user_message("Failed to fetch books"),
            "Failed to fetch books"
        );
    }
}
