use std::fmt::Write;

const INDENT: &str = "    ";

/// Line-oriented source text builder with block indentation.
#[derive(Debug, Default)]
pub(crate) struct SourceWriter {
    buffer: String,
    depth: usize,
}

impl SourceWriter {
    /// Write one line at the current depth; an empty line carries no indentation.
    pub(crate) fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.buffer.push_str(INDENT);
            }
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
    }

    pub(crate) fn blank(&mut self) {
        self.line("");
    }

    /// Write a `///` doc comment line.
    pub(crate) fn doc(&mut self, text: impl AsRef<str>) {
        let mut line = String::from("///");
        if !text.as_ref().is_empty() {
            let _ = write!(line, " {}", text.as_ref());
        }
        self.line(line);
    }

    /// Write a block opening line and indent what follows.
    pub(crate) fn open(&mut self, text: impl AsRef<str>) {
        self.line(text);
        self.depth += 1;
    }

    /// Dedent and write a block closing line.
    pub(crate) fn close(&mut self, text: impl AsRef<str>) {
        self.depth = self.depth.saturating_sub(1);
        self.line(text);
    }

    pub(crate) fn finish(self) -> String {
        self.buffer
    }
}
