//! Process-wide shared session backing the helper macros.
//!
//! The [`ddump!`](crate::ddump) and [`dprint!`](crate::dprint) macros expand
//! to calls against one lazily-created session bound to standard output. The
//! mutex keeps header deduplication and sink writes coherent when calls
//! arrive from multiple threads.
//!
//! # Environment Variables
//!
//! - `DDUMP_MODE=<auto|terminal|html>` - Output context for the shared
//!   session (default: auto, resolved via terminal detection)
//! - `DDUMP_INDENT=<n>` - Spaces per indent level (default: 3)

use std::io::Write;
use std::sync::OnceLock;

use parking_lot::Mutex;

use crate::error::SessionError;
use crate::output::OutputMode;
use crate::session::{Session, SessionConfig};

static SESSION: OnceLock<Mutex<Session>> = OnceLock::new();

const MODE_VAR: &str = "DDUMP_MODE";
const INDENT_VAR: &str = "DDUMP_INDENT";

fn config_from_env() -> SessionConfig {
    let mut config = SessionConfig::default();
    if let Ok(value) = std::env::var(MODE_VAR) {
        config.mode = match value.to_lowercase().as_str() {
            "terminal" | "cli" => OutputMode::Terminal,
            "html" | "web" => OutputMode::Html,
            _ => OutputMode::Auto,
        };
    }
    if let Ok(value) = std::env::var(INDENT_VAR) {
        if let Ok(width) = value.parse() {
            config.indent_width = width;
        }
    }
    config
}

/// Run `f` against the process-wide session, creating it on first use.
///
/// The session is bound to standard output with environment-derived
/// configuration. All helper-macro calls funnel through here.
pub fn with_session<F, R>(f: F) -> R
where
    F: FnOnce(&mut Session) -> R,
{
    let session = SESSION.get_or_init(|| Mutex::new(Session::stdout(config_from_env())));
    f(&mut session.lock())
}

/// Redirect the shared session's output.
///
/// Forwards to [`Session::set_output`]; a rejected sink leaves the shared
/// session writing to its previous destination.
pub fn set_global_output(sink: Box<dyn Write + Send>) -> Result<(), SessionError> {
    with_session(|session| session.set_output(sink))
}

/// Dump the contents of one or more variables to the shared session, tagged
/// with the expansion site's file and line.
///
/// ```
/// let total = 7;
/// ddump::ddump!(total);
/// ddump::ddump!(total, "checkpoint");
/// ```
#[macro_export]
macro_rules! ddump {
    ($($value:expr),+ $(,)?) => {{
        $crate::with_session(|session| {
            session.dump(
                $crate::CallSite::new(file!(), line!()),
                &[$(&$value),+],
            );
        });
    }};
}

/// Print a formatted debug message to the shared session, tagged with the
/// expansion site's file and line. Formatting follows the rules of
/// `format!`.
///
/// ```
/// ddump::dprint!("applying {} of {}", 1, 3);
/// ```
#[macro_export]
macro_rules! dprint {
    ($($arg:tt)*) => {{
        $crate::with_session(|session| {
            session.print_formatted(
                $crate::CallSite::new(file!(), line!()),
                format_args!($($arg)*),
            );
        });
    }};
}
