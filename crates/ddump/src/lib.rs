//! Call-site-tagged debug output.
//!
//! Helpers that dump variable contents or formatted messages to an output
//! stream, tagging each call with the file and line it came from.
//! Consecutive calls from the same site share one location header; output
//! destined for a web response is HTML-escaped and wrapped in preformatted
//! blocks.
//!
//! The quickest path is the macro layer against the shared session:
//!
//! ```
//! let items = vec![1, 2, 3];
//! ddump::ddump!(items);
//! ddump::dprint!("processed {} items", items.len());
//! ```
//!
//! Sessions can also be constructed explicitly, one per test or per
//! request, with the sink and environment signal injected:
//!
//! ```
//! use ddump::{CallSite, Session, SessionConfig};
//!
//! let mut session = Session::with_sink(Box::new(Vec::new()), SessionConfig::default(), true);
//! session.dump(CallSite::new(file!(), line!()), &[&vec![1, 2, 3]]);
//! ```
//!
//! Error reports carry aligned diagnostic fields and a stack trace, and can
//! re-raise a caller-supplied error after the report is written:
//!
//! ```
//! use ddump::{ErrorReport, Session, SessionConfig};
//!
//! let mut session = Session::with_sink(Box::new(Vec::new()), SessionConfig::default(), true);
//! let report = ErrorReport::new(file!(), line!())
//!     .with_field("query", "select 1")
//!     .with_field("rows", 0);
//! let result = session.report_error(&report, Some("no rows"));
//! assert_eq!(result, Err("no rows"));
//! ```

mod dumper;
mod error;
pub mod global;
mod output;
mod report;
mod session;
mod site;
mod trace;

pub use dumper::{PrettyDumper, ValueDumper};
pub use error::SessionError;
pub use global::{set_global_output, with_session};
pub use output::OutputMode;
pub use report::ErrorReport;
pub use session::{Session, SessionConfig};
pub use site::CallSite;
pub use trace::{RuntimeTrace, TraceCapture};
