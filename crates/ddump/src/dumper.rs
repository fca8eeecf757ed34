//! Introspective value dumping.
//!
//! The session never inspects values itself; it delegates to a [`ValueDumper`]
//! so the rendering strategy can be swapped out (or stubbed in tests).

use std::fmt;

/// Strategy for rendering a value's structural text representation.
pub trait ValueDumper {
    /// Render `value` as multi-line structural text.
    fn render(&self, value: &dyn fmt::Debug) -> String;
}

/// Default dumper: the alternate `Debug` format, one field per line.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrettyDumper;

impl ValueDumper for PrettyDumper {
    fn render(&self, value: &dyn fmt::Debug) -> String {
        format!("{value:#?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scalar_render() {
        assert_eq!(PrettyDumper.render(&5), "5");
        assert_eq!(PrettyDumper.render(&"hi"), "\"hi\"");
    }

    #[test]
    fn test_nested_render_is_multiline() {
        let rendered = PrettyDumper.render(&vec![1, 2]);
        assert_eq!(rendered, "[\n    1,\n    2,\n]");
    }
}
