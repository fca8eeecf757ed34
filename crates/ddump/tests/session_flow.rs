//! End-to-end flows through the public API.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use ddump::{
    ddump, dprint, set_global_output, CallSite, ErrorReport, OutputMode, Session, SessionConfig,
};
use pretty_assertions::assert_eq;

/// Shared capture buffer usable as a boxed sink.
#[derive(Clone, Default)]
struct CaptureSink(Arc<Mutex<Vec<u8>>>);

impl CaptureSink {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CaptureSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn dump_flow_dedups_headers_across_sites() {
    let sink = CaptureSink::default();
    let mut session = Session::with_sink(Box::new(sink.clone()), SessionConfig::default(), true);

    session.dump(CallSite::new("a.txt", 10), &[&5]);
    session.dump(CallSite::new("a.txt", 10), &[&6]);
    session.dump(CallSite::new("b.txt", 3), &[&7]);

    assert_eq!(
        sink.contents(),
        "\n** DEBUG: a.txt(10)**\n   5\n   6\n\n** DEBUG: b.txt(3)**\n   7\n"
    );
}

#[test]
fn html_flow_escapes_and_wraps() {
    let sink = CaptureSink::default();
    let config = SessionConfig {
        mode: OutputMode::Html,
        ..SessionConfig::default()
    };
    let mut session = Session::with_sink(Box::new(sink.clone()), config, false);

    session.print_formatted(CallSite::new("page.rs", 14), format_args!("<b>{}</b>", "hi"));

    assert_eq!(
        sink.contents(),
        "\n** DEBUG: page.rs(14)**\n<pre>   &lt;b&gt;hi&lt;/b&gt;\n</pre>"
    );
}

#[test]
fn report_flow_emits_then_propagates() {
    let sink = CaptureSink::default();
    let mut session = Session::with_sink(Box::new(sink.clone()), SessionConfig::default(), true);

    let report = ErrorReport::new("worker.rs", 88)
        .with_field("job", "reindex")
        .with_field("attempt", 3)
        .with_trace("stack backtrace:\n  0: worker::run");
    let result = session.report_error(&report, Some(io::Error::other("gave up")));

    assert!(result.is_err());
    let out = sink.contents();
    assert!(out.contains("** ERROR: worker.rs(88)**"));
    assert!(out.contains("job:      reindex"));
    assert!(out.contains("attempt:  3"));
    assert!(out.contains("worker::run"));
}

#[test]
fn macros_capture_expansion_sites() {
    let sink = CaptureSink::default();
    set_global_output(Box::new(sink.clone())).unwrap();

    for _ in 0..2 {
        ddump!(41);
    }
    dprint!("answer is {}", 41 + 1);

    let out = sink.contents();
    assert_eq!(out.matches("** DEBUG:").count(), 2);
    assert!(out.contains(file!()));
    assert!(out.contains("   41\n"));
    assert!(out.contains("answer is 42"));
}
