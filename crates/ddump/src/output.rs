//! Output context resolution and HTML-safe escaping.
//!
//! Debug output lands either on a terminal or inside a web response. The
//! session resolves which at construction time; everything downstream keys
//! off that single answer.

/// Preformatted-block tags wrapped around a call's output in HTML context.
pub(crate) const PRE_OPEN: &str = "<pre>";
pub(crate) const PRE_CLOSE: &str = "</pre>";

/// Escape-breaking prefix written before an error report in HTML context.
///
/// Closes a comment, a script block, an attribute value and a tag so the
/// report stays visible wherever the response happened to die. Deliberate
/// workaround, kept verbatim.
pub(crate) const SCRIPT_BREAKOUT: &str = "--></script>\">'>";

/// Output context for a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Resolve from terminal detection: a non-terminal sink is assumed to
    /// be a web response.
    #[default]
    Auto,
    /// Plain text; no escaping, no wrapping.
    Terminal,
    /// HTML-escape output and wrap it in preformatted blocks.
    Html,
}

impl OutputMode {
    /// Resolve to "output is HTML" against terminal detection.
    ///
    /// For `Auto` mode, `is_tty` decides. This parameter is ignored for
    /// `Terminal` and `Html` modes.
    pub fn is_html(self, is_tty: bool) -> bool {
        match self {
            OutputMode::Auto => !is_tty,
            OutputMode::Terminal => false,
            OutputMode::Html => true,
        }
    }
}

/// Escape a string for embedding in an HTML response.
///
/// Covers `&`, `<`, `>` and double quotes; single quotes pass through.
pub(crate) fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            c => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("hello"), "hello");
        assert_eq!(escape_html("<b>"), "&lt;b&gt;");
        assert_eq!(escape_html("a && b"), "a &amp;&amp; b");
        assert_eq!(escape_html("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(escape_html("it's"), "it's");
    }

    #[test]
    fn test_auto_resolves_from_tty() {
        assert!(!OutputMode::Auto.is_html(true));
        assert!(OutputMode::Auto.is_html(false));
    }

    #[test]
    fn test_forced_modes_ignore_tty() {
        assert!(!OutputMode::Terminal.is_html(false));
        assert!(!OutputMode::Terminal.is_html(true));
        assert!(OutputMode::Html.is_html(false));
        assert!(OutputMode::Html.is_html(true));
    }

    #[test]
    fn test_default_is_auto() {
        assert_eq!(OutputMode::default(), OutputMode::Auto);
    }

    mod proptest_escape {
        use super::super::escape_html;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn escaped_output_has_no_markup(s in ".*") {
                let escaped = escape_html(&s);
                prop_assert!(!escaped.contains('<'));
                prop_assert!(!escaped.contains('>'));
                prop_assert!(!escaped.contains('"'));
            }

            #[test]
            fn escaping_preserves_plain_text(s in "[a-z0-9 ]*") {
                prop_assert_eq!(escape_html(&s), s);
            }
        }
    }
}
