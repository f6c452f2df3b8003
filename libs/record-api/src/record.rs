use std::fmt;
use std::io::{self, Write};

use serde::Deserialize;

use crate::error::RecordError;

/// A number paired with a piece of text.
///
/// Both values are set once by `Record::new` and only read afterwards.
/// Any `i64` and any text (including empty) are valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    number: i64,
    text: String,
}

impl Record {
    /// Stores both values exactly as given.
    pub fn new(number: i64, text: impl Into<String>) -> Self {
        Self { number, text: text.into() }
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Writes the two display lines to `out`:
    ///
    /// ```text
    /// Number: <number>
    /// String: <text>
    /// ```
    ///
    /// The number is rendered in decimal with its sign, the text verbatim.
    pub fn display<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), RecordError> {
        writeln!(out, "Number: {}", self.number)?;
        writeln!(out, "String: {}", self.text)?;
        tracing::debug!(number = self.number, text_len = self.text.len(), "displayed record");
        Ok(())
    }

    /// `display` on the process stdout.
    pub fn display_stdout(&self) -> Result<(), RecordError> {
        let mut out = io::stdout().lock();
        self.display(&mut out)?;
        out.flush()?;
        Ok(())
    }
}

/// Same two lines as `display`, without the final newline.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number: {}\nString: {}", self.number, self.text)
    }
}
