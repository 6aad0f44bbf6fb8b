//! Error types for the Voxview SDK
//!
//! The host reports failures two ways: as a gRPC status on the call itself
//! (transport level) and as an application `Status` embedded in an otherwise
//! successful reply (in-band). Both funnel into one taxonomy here so callers
//! never have to look at raw status codes.

use thiserror::Error;
use voxview_proto::{STATUS_OK, v1 as proto};

/// Result type for all SDK operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Voxview SDK operations
#[derive(Debug, Error)]
pub enum Error {
    /// The remote identifier no longer resolves to a live object in the host
    #[error("remote object not found: {0}")]
    NotFound(String),

    /// A value was rejected locally before any request was sent, or the host
    /// rejected it as out of range
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The host reported a failure with no more specific cause
    #[error("remote call failed: {0}")]
    RemoteFailure(String),

    /// Connection-level failure from the underlying channel
    #[error("transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
}

impl Error {
    /// Create a not-found error
    #[must_use]
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an invalid-argument error
    #[must_use]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a remote-failure error
    #[must_use]
    pub fn remote_failure(msg: impl Into<String>) -> Self {
        Self::RemoteFailure(msg.into())
    }

    /// Error for a reply that reported success but omitted its payload
    pub(crate) fn missing_field(name: &str) -> Self {
        Self::RemoteFailure(format!("reply missing {name}"))
    }
}

impl From<tonic::Status> for Error {
    fn from(status: tonic::Status) -> Self {
        use tonic::Code;

        match status.code() {
            Code::NotFound => Self::NotFound(status.message().to_string()),
            Code::InvalidArgument | Code::OutOfRange => {
                Self::InvalidArgument(status.message().to_string())
            }
            code => Self::RemoteFailure(format!("{}: {}", code.description(), status.message())),
        }
    }
}

/// Check the in-band status of a read reply.
///
/// The only in-band failure a pure handle dereference has is that the handle
/// no longer resolves, so a non-success status maps to [`Error::NotFound`].
pub(crate) fn check_found(status: Option<proto::Status>, what: &str) -> Result<()> {
    check(status, |message| {
        if message.is_empty() {
            Error::NotFound(format!("{what} no longer resolves"))
        } else {
            Error::NotFound(message)
        }
    })
}

/// Check the in-band status of a mutation reply.
///
/// A non-success status maps to [`Error::RemoteFailure`].
pub(crate) fn check_ok(status: Option<proto::Status>, action: &str) -> Result<()> {
    check(status, |message| {
        if message.is_empty() {
            Error::RemoteFailure(format!("could not {action}"))
        } else {
            Error::RemoteFailure(message)
        }
    })
}

fn check(status: Option<proto::Status>, failure: impl FnOnce(String) -> Error) -> Result<()> {
    match status {
        Some(s) if s.status == STATUS_OK => Ok(()),
        Some(s) => Err(failure(s.message)),
        // A reply without a status block is malformed; treat it like a failure
        // with no message rather than trusting the payload.
        None => Err(failure(String::new())),
    }
}
