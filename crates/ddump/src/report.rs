//! Error report payloads.

use std::fmt;

/// An ordered set of diagnostic fields plus an optional trace, consumed by
/// [`Session::report_error`](crate::Session::report_error).
///
/// Fields are emitted in insertion order, value columns aligned to the
/// longest key. A report without a trace gets the live call stack captured
/// at emit time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorReport {
    /// Context name shown in the header, usually a file path.
    pub context: String,
    /// Line number shown in the header.
    pub line: u32,
    /// Diagnostic fields, insertion-ordered.
    pub fields: Vec<(String, String)>,
    /// Caller-supplied trace; `None` means capture one at emit time.
    pub trace: Option<String>,
}

impl ErrorReport {
    /// Create an empty report for the given context.
    pub fn new(context: impl Into<String>, line: u32) -> Self {
        ErrorReport {
            context: context.into(),
            line,
            fields: Vec::new(),
            trace: None,
        }
    }

    /// Append a diagnostic field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.fields.push((key.into(), value.to_string()));
        self
    }

    /// Attach a caller-supplied trace, suppressing live capture.
    #[must_use]
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }
}
