use std::fmt;

use thiserror::Error;

/// Uniform failure of any backend call.
///
/// Produced at the API client boundary; view code only ever sees this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub status: Option<u16>,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        let status = match kind {
            TransportErrorKind::HttpStatus(code) => Some(code),
            _ => None,
        };
        Self {
            kind,
            status,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportErrorKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportErrorKind::InvalidUrl => write!(f, "invalid url"),
            TransportErrorKind::HttpStatus(code) => write!(f, "http status {code}"),
            TransportErrorKind::Timeout => write!(f, "timeout"),
            TransportErrorKind::Network => write!(f, "network error"),
            TransportErrorKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            TransportErrorKind::Decode => write!(f, "undecodable response"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_derived_from_http_kind() {
        let err = TransportError::new(TransportErrorKind::HttpStatus(503), "Service Unavailable");
        assert_eq!(err.status, Some(503));
        assert_eq!(err.to_string(), "http status 503: Service Unavailable");

        let err = TransportError::new(TransportErrorKind::Timeout, "operation timed out");
        assert_eq!(err.status, None);
    }
}
