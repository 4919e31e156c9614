/// Reflow `text` into newline terminated lines, each prefixed by `indent` spaces.
///
/// A line is broken only at a space/tab, and only once it holds at least `max` characters (indent included).
/// The whitespace character at the break is dropped, as is trailing whitespace on each emitted line.
/// Words are never split, so a line holding a long word may exceed `max`.
///
/// ### Example
/// ```
/// # use argdesc_builder as argdesc;
/// use argdesc::wrap_indented;
///
/// assert_eq!(
///     wrap_indented("the quick brown fox", 2, 8),
///     "  the quick\n  brown fox\n"
/// );
/// ```
pub fn wrap_indented(text: &str, indent: usize, max: usize) -> String {
    TextWrapper::new(indent, max).wrap(text)
}

/// A reusable [`wrap_indented`] configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextWrapper {
    indent: usize,
    max: usize,
}

impl TextWrapper {
    /// Create a wrapper with a hanging `indent` and a `max` line budget.
    pub fn new(indent: usize, max: usize) -> Self {
        Self { indent, max }
    }

    /// Reflow `text`; see [`wrap_indented`].
    pub fn wrap(&self, text: &str) -> String {
        let mut out = String::default();
        let mut line = " ".repeat(self.indent);
        let mut line_length = self.indent;

        for c in text.chars() {
            if (c == ' ' || c == '\t') && line_length >= self.max {
                // A line holding only the indent is never emitted.
                if line_length == self.indent {
                    continue;
                }

                out.push_str(line.trim_end_matches([' ', '\t']));
                out.push('\n');
                line = " ".repeat(self.indent);
                line_length = self.indent;
                continue;
            }

            line.push(c);
            line_length += 1;
        }

        let remainder = line.trim_end_matches([' ', '\t']);

        if !remainder.trim_start().is_empty() {
            out.push_str(remainder);
            out.push('\n');
        }

        out
    }
}
