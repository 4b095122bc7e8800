use thiserror::Error;

/// Failures raised by an [`HttpTransport`](crate::transport::HttpTransport).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

impl TransportError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Request(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("No client secret received from session creation")]
    MissingCredential,
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_message() {
        assert_eq!(
            ClientError::MissingCredential.to_string(),
            "No client secret received from session creation"
        );
    }

    #[test]
    fn test_transport_error_is_transparent() {
        let err = ClientError::from(TransportError::Status {
            status: 500,
            body: "boom".to_string(),
        });
        assert_eq!(err.to_string(), "Server returned 500: boom");
    }

    #[test]
    fn test_status_accessor() {
        let err = TransportError::Status {
            status: 502,
            body: String::new(),
        };
        assert_eq!(err.status(), Some(502));
        assert_eq!(TransportError::InvalidHeader("x".into()).status(), None);
    }
}
