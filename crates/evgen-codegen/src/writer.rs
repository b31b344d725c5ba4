//! Line-oriented text sink for generated source.

/// Accumulates generated source with a current indentation level.
///
/// Indentation is applied when a line starts, so a sequence of `put` calls
/// builds up one line and `putln` terminates it.
#[derive(Debug, Clone)]
pub struct CodeWriter {
    out: String,
    indent: usize,
    indent_unit: String,
    at_line_start: bool,
}

impl CodeWriter {
    pub fn new(indent_width: usize) -> Self {
        Self {
            out: String::new(),
            indent: 0,
            indent_unit: " ".repeat(indent_width),
            at_line_start: true,
        }
    }

    /// Append text to the current line.
    pub fn put(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start {
            for _ in 0..self.indent {
                self.out.push_str(&self.indent_unit);
            }
            self.at_line_start = false;
        }
        self.out.push_str(text);
    }

    /// Append text and end the line.
    pub fn putln(&mut self, text: &str) {
        self.put(text);
        self.out.push('\n');
        self.at_line_start = true;
    }

    /// Open a `{` block and indent the lines that follow.
    pub fn start_brace(&mut self, header: &str) {
        if header.is_empty() {
            self.putln("{");
        } else {
            self.putln(&format!("{header} {{"));
        }
        self.indent();
    }

    pub fn end_brace(&mut self) {
        self.dedent();
        self.putln("}");
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent below column 0");
        self.indent = self.indent.saturating_sub(1);
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn finish(self) -> String {
        self.out
    }
}
