//! Error type returned by every client operation.
//!
//! The variants separate failures by where they happened: before anything was
//! sent ([`ForgeError::Configuration`], [`ForgeError::Encoding`]), on the wire
//! ([`ForgeError::Transport`]), or in the registry's answer
//! ([`ForgeError::Remote`], [`ForgeError::Decode`]). Nothing is retried; the
//! caller decides what to do with each.

use thiserror::Error;

/// Boxed error produced by a [`crate::Transport`] implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by [`crate::ForgeClient`] and its services.
#[derive(Debug, Error)]
pub enum ForgeError {
    /// The client configuration cannot produce a valid request.
    ///
    /// Produced before any network call: base URL unparseable or missing its
    /// trailing slash, header values with invalid characters, or a transport
    /// that failed to initialise.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },

    /// The request body could not be serialised to JSON.
    #[error("Failed to encode request body: {source}")]
    Encoding {
        #[source]
        source: serde_json::Error,
    },

    /// The transport failed: connection error, timeout, cancellation, or a
    /// response body that could not be read.
    #[error("Transport error: {source}")]
    Transport {
        #[source]
        source: BoxError,
    },

    /// The registry answered with a non-2xx status.
    ///
    /// Displays as the registry's own message, e.g. `"404 Module not found"`.
    #[error("{message}")]
    Remote {
        /// HTTP status code of the response.
        status: u16,
        /// Summary message from the error body.
        message: String,
        /// Individual error details from the error body.
        errors: Vec<String>,
    },

    /// The response body did not match the expected shape.
    #[error("Failed to decode response body (status {status}): {source}")]
    Decode {
        /// HTTP status code of the response whose body failed to decode.
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

impl ForgeError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub(crate) fn transport(source: impl Into<BoxError>) -> Self {
        Self::Transport {
            source: source.into(),
        }
    }

    /// Returns the HTTP status of the response this error came from, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } | Self::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if the registry reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if the transport gave up because a timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport { source } => source
                .downcast_ref::<reqwest::Error>()
                .is_some_and(reqwest::Error::is_timeout),
            _ => false,
        }
    }
}

/// Shorthand for results whose error is [`ForgeError`].
pub type Result<T, E = ForgeError> = std::result::Result<T, E>;
