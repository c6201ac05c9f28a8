use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("API key not set. Put DEVELOPER_KEY in ~/.top-uploads/.env or the environment.")]
    ApiKeyMissing,

    #[error("Channel not found: {0}")]
    ChannelNotFound(String),

    #[error("An HTTP error {status} occurred:\n{}", beautify(.body))]
    Api { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Pretty-print a response body when it is JSON, otherwise return it as is.
fn beautify(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_pretty_prints_json_body() {
        let err = Error::Api {
            status: 403,
            body: r#"{"error":{"code":403,"message":"quotaExceeded"}}"#.to_string(),
        };
        let message = err.to_string();
        assert!(message.starts_with("An HTTP error 403 occurred:\n{\n"));
        assert!(message.contains("    \"message\": \"quotaExceeded\""));
    }

    #[test]
    fn api_error_keeps_plain_body() {
        let err = Error::Api {
            status: 502,
            body: "Bad Gateway".to_string(),
        };
        assert_eq!(err.to_string(), "An HTTP error 502 occurred:\nBad Gateway");
    }
}
