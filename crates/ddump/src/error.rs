//! Error types for session configuration.

use std::io;

use thiserror::Error;

/// Errors raised by the session itself.
///
/// Errors handed to [`Session::report_error`](crate::Session::report_error)
/// are not part of this taxonomy; they propagate back to the caller by value,
/// unwrapped.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The replacement sink rejected a probe write. The previous sink
    /// remains active.
    #[error("invalid output sink: {source}")]
    InvalidSink {
        #[source]
        source: io::Error,
    },
}
