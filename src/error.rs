use std::fmt;

/// Custom error type for IONOS Cloud operations
#[derive(Debug)]
pub enum IonosError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// No credentials found in any source
    CredentialsNotFound(String),
    /// Failed to read, parse or write the settings file
    Config(String),
    /// JSON parsing error
    Json(String),
    /// Invalid flag combination, detected before any request is sent
    Precondition(String),
    /// User did not confirm a destructive operation
    Declined(String),
    /// A bulk delete found no items in scope
    NothingToDelete(String),
    /// A --cols entry is not a known column of the resource
    UnknownColumn {
        column: String,
        available: Vec<String>,
    },
    /// Asynchronous request finished in FAILED state
    RequestFailed { request_id: String, message: String },
    /// Asynchronous request did not finish in time
    WaitTimeout { request_id: String, seconds: u64 },
    /// Waiting was requested but the response carried no request location
    MissingRequestId,
    /// One or more items of a bulk delete failed
    BulkDelete {
        kind: String,
        failed: usize,
        total: usize,
        details: Vec<String>,
    },
}

impl fmt::Display for IonosError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IonosError::Http(e) => write!(f, "HTTP request failed: {}", e),
            IonosError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            IonosError::CredentialsNotFound(msg) => write!(f, "{}", msg),
            IonosError::Config(msg) => write!(f, "Configuration error: {}", msg),
            IonosError::Json(msg) => write!(f, "JSON error: {}", msg),
            IonosError::Precondition(msg) => write!(f, "{}", msg),
            IonosError::Declined(what) => {
                write!(f, "Operation cancelled: user did not confirm {}", what)
            }
            IonosError::NothingToDelete(kind) => {
                write!(f, "No {} found to delete", kind)
            }
            IonosError::UnknownColumn { column, available } => write!(
                f,
                "Unknown column '{}'. Available columns: {}",
                column,
                available.join(", ")
            ),
            IonosError::RequestFailed {
                request_id,
                message,
            } => write!(f, "Request {} failed: {}", request_id, message),
            IonosError::WaitTimeout {
                request_id,
                seconds,
            } => write!(
                f,
                "Timed out after {}s waiting for request {}",
                seconds, request_id
            ),
            IonosError::MissingRequestId => write!(
                f,
                "Cannot wait for request: response did not include a request location"
            ),
            IonosError::BulkDelete {
                kind,
                failed,
                total,
                details,
            } => {
                write!(f, "Failed to delete {} of {} {}:", failed, total, kind)?;
                for line in details {
                    write!(f, "\n  {}", line)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for IonosError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IonosError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for IonosError {
    fn from(err: reqwest::Error) -> Self {
        IonosError::Http(err)
    }
}

impl From<serde_json::Error> for IonosError {
    fn from(err: serde_json::Error) -> Self {
        IonosError::Json(err.to_string())
    }
}

impl From<std::io::Error> for IonosError {
    fn from(err: std::io::Error) -> Self {
        IonosError::Config(err.to_string())
    }
}

/// Result type alias for IONOS operations
pub type Result<T> = std::result::Result<T, IonosError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = IonosError::Api {
            status: 404,
            message: "Resource does not exist".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Resource does not exist"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IonosError>();
    }

    #[test]
    fn test_declined_display() {
        let err = IonosError::Declined("delete firewall rule fw-1".to_string());
        assert!(err.to_string().contains("cancelled"));
        assert!(err.to_string().contains("fw-1"));
    }

    #[test]
    fn test_nothing_to_delete_display() {
        let err = IonosError::NothingToDelete("firewall rules".to_string());
        assert_eq!(err.to_string(), "No firewall rules found to delete");
    }

    #[test]
    fn test_unknown_column_lists_available() {
        let err = IonosError::UnknownColumn {
            column: "Colour".to_string(),
            available: vec!["Id".to_string(), "Name".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'Colour'"));
        assert!(msg.contains("Id, Name"));
    }

    #[test]
    fn test_wait_timeout_display() {
        let err = IonosError::WaitTimeout {
            request_id: "req-1".to_string(),
            seconds: 60,
        };
        assert!(err.to_string().contains("60s"));
        assert!(err.to_string().contains("req-1"));
    }

    #[test]
    fn test_bulk_delete_display_lists_every_failure() {
        let err = IonosError::BulkDelete {
            kind: "users".to_string(),
            failed: 2,
            total: 3,
            details: vec!["u-1: boom".to_string(), "u-2: bang".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to delete 2 of 3 users:"));
        assert!(msg.contains("\n  u-1: boom"));
        assert!(msg.contains("\n  u-2: bang"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: IonosError = json_err.into();
        match err {
            IonosError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected IonosError::Json"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: IonosError = io_err.into();
        match err {
            IonosError::Config(msg) => assert!(msg.contains("file not found")),
            _ => panic!("Expected IonosError::Config"),
        }
    }

    #[test]
    fn test_error_source_is_none_for_api() {
        use std::error::Error;
        let err = IonosError::Api {
            status: 500,
            message: "Server error".to_string(),
        };
        assert!(err.source().is_none());
    }
}
