//! @dose
//! purpose: In-memory representation of a file being rewritten. Content is
//!     normalized to `\n` while the engines run and the original line-ending
//!     convention is restored on render.
//!
//! when-editing:
//!     - !Detection is a majority vote: CRLF wins only when strictly more than
//!       half of the newlines are `\r\n`
//!     - map_lines keeps the trailing empty segment so a final newline survives
//!
//! invariants:
//!     - render() uses the ending detected at parse time, on every line
//!     - A CRLF file stays CRLF on modified lines too
//!
//! gotchas:
//!     - Mixed endings are normalized to the detected convention on write
//!     - Ties and newline-free content count as LF

/// Line-ending convention detected on read and restored on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    Crlf,
}

impl LineEnding {
    /// Detect the predominant line ending by majority vote. A file is CRLF
    /// when strictly more than half of its newlines are `\r\n`; ties and
    /// newline-free content are LF.
    pub fn detect(content: &str) -> Self {
        let total = content.matches('\n').count();
        let crlf = content.matches("\r\n").count();
        if crlf * 2 > total {
            LineEnding::Crlf
        } else {
            LineEnding::Lf
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

/// A file's text, held normalized to `\n`, plus the ending style to restore.
#[derive(Debug, Clone)]
pub struct Document {
    content: String,
    ending: LineEnding,
}

impl Document {
    /// Detect the line-ending convention and normalize the raw text to `\n`.
    pub fn parse(raw: &str) -> Self {
        let ending = LineEnding::detect(raw);
        Self {
            content: raw.replace("\r\n", "\n"),
            ending,
        }
    }

    pub fn ending(&self) -> LineEnding {
        self.ending
    }

    /// The normalized (`\n`-delimited) content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the normalized content wholesale (used by the block engine,
    /// which rewrites spans across line boundaries).
    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    /// Rewrite every line through `f`. Splitting on `\n` keeps a trailing
    /// empty segment when the file ends with a newline, so the final newline
    /// survives the round trip.
    pub fn map_lines<F>(&mut self, mut f: F)
    where
        F: FnMut(&str) -> String,
    {
        self.content = self
            .content
            .split('\n')
            .map(|line| f(line))
            .collect::<Vec<_>>()
            .join("\n");
    }

    /// Render with the originally-detected line endings.
    pub fn render(&self) -> String {
        match self.ending {
            LineEnding::Lf => self.content.clone(),
            LineEnding::Crlf => self.content.replace('\n', "\r\n"),
        }
    }
}
