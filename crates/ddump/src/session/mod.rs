//! The debug output session.
//!
//! A [`Session`] owns one sink, one output context and one call-site
//! deduplication key. Every emit path funnels through [`Session::format`],
//! which handles escaping, indentation and trailing-whitespace cleanup in
//! one place.
//!
//! Sessions are constructed explicitly and can be created per test or per
//! request; the process-wide shared session the helper macros use lives in
//! [`crate::global`].

use std::fmt;
use std::io::{self, IsTerminal, Write};

use crate::dumper::{PrettyDumper, ValueDumper};
use crate::error::SessionError;
use crate::output::{escape_html, OutputMode, PRE_CLOSE, PRE_OPEN, SCRIPT_BREAKOUT};
use crate::report::ErrorReport;
use crate::site::CallSite;
use crate::trace::{RuntimeTrace, TraceCapture};

/// Configuration for a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Spaces per indent level.
    pub indent_width: usize,
    /// Output context selection.
    pub mode: OutputMode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            indent_width: 3,
            mode: OutputMode::Auto,
        }
    }
}

/// A debug output session.
///
/// Holds the sink, the resolved output context and the most recent call-site
/// key. The key persists across `dump`/`print_formatted` calls so
/// consecutive calls from one site share a single location header.
pub struct Session {
    output: Box<dyn Write + Send>,
    indent_width: usize,
    /// Resolved once at construction from the configured mode.
    html: bool,
    /// Set when `set_output` swaps in a custom sink. Custom sinks are
    /// assumed to not need HTML wrapping.
    replaced: bool,
    last_call_key: Option<String>,
    dumper: Box<dyn ValueDumper + Send>,
    tracer: Box<dyn TraceCapture + Send>,
}

impl Session {
    /// Create a session bound to the process standard output stream.
    ///
    /// `OutputMode::Auto` resolves via terminal detection on stdout.
    pub fn stdout(config: SessionConfig) -> Self {
        let is_tty = io::stdout().is_terminal();
        Session::with_sink(Box::new(io::stdout()), config, is_tty)
    }

    /// Create a session bound to an arbitrary sink.
    ///
    /// # Arguments
    ///
    /// * `output` - The sink all emitted text is written to
    /// * `config` - Indent width and output mode
    /// * `is_tty` - Whether the sink is a terminal (used for `OutputMode::Auto`)
    pub fn with_sink(output: Box<dyn Write + Send>, config: SessionConfig, is_tty: bool) -> Self {
        Session {
            output,
            indent_width: config.indent_width,
            html: config.mode.is_html(is_tty),
            replaced: false,
            last_call_key: None,
            dumper: Box::new(PrettyDumper),
            tracer: Box::new(RuntimeTrace),
        }
    }

    /// Swap the value-dump strategy.
    #[must_use]
    pub fn with_dumper(mut self, dumper: Box<dyn ValueDumper + Send>) -> Self {
        self.dumper = dumper;
        self
    }

    /// Swap the stack-capture strategy.
    #[must_use]
    pub fn with_tracer(mut self, tracer: Box<dyn TraceCapture + Send>) -> Self {
        self.tracer = tracer;
        self
    }

    /// Replace the output sink.
    ///
    /// The sink is probed with an empty write and a flush; a sink that
    /// fails the probe is rejected and the previous sink stays active. The
    /// previous sink is not flushed or closed on replacement.
    #[allow(clippy::unused_io_amount)] // zero-byte probe; write_all skips empty buffers
    pub fn set_output(&mut self, mut sink: Box<dyn Write + Send>) -> Result<(), SessionError> {
        if let Err(source) = sink.write(&[]).and_then(|_| sink.flush()) {
            return Err(SessionError::InvalidSink { source });
        }
        self.output = sink;
        self.replaced = true;
        Ok(())
    }

    /// True when output is destined for a web response AND the sink is
    /// still the one bound at construction.
    ///
    /// A heuristic, not a guarantee: a custom sink pointed back at a web
    /// response will not get HTML wrapping.
    pub fn is_html_context(&self) -> bool {
        self.html && !self.replaced
    }

    /// Escape and indent a block of text.
    ///
    /// HTML-escapes when the output context is HTML, prefixes every line
    /// with the configured indent when `indent` is set (no prefix
    /// otherwise), trims trailing whitespace from the whole block and
    /// appends a single newline.
    pub fn format(&self, text: &str, indent: bool) -> String {
        let escaped = if self.html {
            escape_html(text)
        } else {
            text.to_string()
        };
        let prefix = if indent {
            " ".repeat(self.indent_width)
        } else {
            String::new()
        };
        let mut block = format!("{prefix}{}", escaped.replace('\n', &format!("\n{prefix}")));
        block.truncate(block.trim_end().len());
        block.push('\n');
        block
    }

    /// Dump the structural representation of each value, in order.
    ///
    /// Values are rendered independently and sequentially; no batching, no
    /// truncation.
    pub fn dump(&mut self, site: CallSite, values: &[&dyn fmt::Debug]) {
        self.emit_location_header(site);
        let wrap = self.is_html_context();
        if wrap {
            self.write_raw(PRE_OPEN);
        }
        for value in values {
            let rendered = self.dumper.render(*value);
            let block = self.format(&rendered, true);
            self.write_raw(&block);
        }
        if wrap {
            self.write_raw(PRE_CLOSE);
        }
    }

    /// Print one message produced by the standard formatting machinery.
    ///
    /// The `dprint!` macro forwards its format string and arguments here via
    /// `format_args!`.
    pub fn print_formatted(&mut self, site: CallSite, args: fmt::Arguments<'_>) {
        self.emit_location_header(site);
        let wrap = self.is_html_context();
        if wrap {
            self.write_raw(PRE_OPEN);
        }
        let block = self.format(&args.to_string(), true);
        self.write_raw(&block);
        if wrap {
            self.write_raw(PRE_CLOSE);
        }
    }

    /// Emit an error report, then propagate `error` if one was supplied.
    ///
    /// The `** ERROR **` header is always written, never deduplicated
    /// against the call-site key. Field value columns align to the longest
    /// key. A report without a trace gets the live call stack.
    ///
    /// All output is written before the error is returned. In HTML context
    /// the propagation path skips the closing preformatted tag; the
    /// escape-breaking prefix at the start of the report keeps the output
    /// visible regardless.
    pub fn report_error<E>(&mut self, report: &ErrorReport, error: Option<E>) -> Result<(), E> {
        let header = format!("\n** ERROR: {}({})**\n", report.context, report.line);
        let block = self.format(&header, false);
        self.write_raw(&block);

        let wrap = self.is_html_context();
        if wrap {
            self.write_raw(SCRIPT_BREAKOUT);
            self.write_raw(PRE_OPEN);
        }

        let width = report
            .fields
            .iter()
            .map(|(key, _)| key.len())
            .max()
            .unwrap_or(0)
            + 3;
        for (key, value) in &report.fields {
            let line = format!("{:<width$}{value}", format!("{key}:"));
            let block = self.format(&line, true);
            self.write_raw(&block);
        }

        let trace = match &report.trace {
            Some(trace) => trace.clone(),
            None => self.tracer.capture(),
        };
        self.write_raw("\n");
        let block = self.format(&trace, true);
        self.write_raw(&block);
        self.write_raw("\n");

        if let Some(error) = error {
            return Err(error);
        }
        if wrap {
            self.write_raw(PRE_CLOSE);
        }
        Ok(())
    }

    /// Emit the `** DEBUG **` location header unless the previous call came
    /// from the same site.
    fn emit_location_header(&mut self, site: CallSite) {
        let key = site.key();
        if self.last_call_key.as_deref() == Some(key.as_str()) {
            return;
        }
        let block = self.format(&format!("\n** DEBUG: {site}**\n"), false);
        self.write_raw(&block);
        self.last_call_key = Some(key);
    }

    fn write_raw(&mut self, text: &str) {
        let _ = self.output.write_all(text.as_bytes());
    }
}
