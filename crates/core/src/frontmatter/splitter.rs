//! Separation of the front matter block from the page body.

use std::io::{self, Read};

use thiserror::Error;

/// The line that opens and closes the front matter block.
pub const DELIMITER: &str = "---";

/// Errors that can occur while splitting a page.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("failed while scanning page: {0}")]
    Scan(#[source] io::Error),

    #[error("missing front matter: expected two '{DELIMITER}' lines, found {found}")]
    MissingFrontMatter { found: usize },
}

/// Raw front matter block and body of a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Split {
    /// Lines strictly between the two delimiters.
    pub front_matter: String,
    /// Everything after the closing delimiter line, verbatim.
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    Start,
    DelimStart,
    FrontMatter,
    DelimEnd,
    Body,
}

impl ParseState {
    fn advance(self, is_delimiter: bool) -> Self {
        match (self, is_delimiter) {
            (Self::Start, true) => Self::DelimStart,
            (Self::Start, false) => Self::Start,
            (Self::DelimStart | Self::FrontMatter, true) => Self::DelimEnd,
            (Self::DelimStart | Self::FrontMatter, false) => Self::FrontMatter,
            (Self::DelimEnd | Self::Body, _) => Self::Body,
        }
    }

    fn delimiters_seen(self) -> usize {
        match self {
            Self::Start => 0,
            Self::DelimStart | Self::FrontMatter => 1,
            Self::DelimEnd | Self::Body => 2,
        }
    }
}

/// Split a page read from `reader`.
pub fn split<R: Read>(mut reader: R) -> Result<Split, SplitError> {
    let mut content = String::new();
    reader.read_to_string(&mut content).map_err(SplitError::Scan)?;
    split_str(&content)
}

/// Split page content into front matter and body.
///
/// Lines before the first delimiter are dropped. Once the closing delimiter
/// is seen every following line, `---` included, belongs to the body.
pub fn split_str(content: &str) -> Result<Split, SplitError> {
    let mut state = ParseState::Start;
    let mut split = Split::default();

    for line in content.split_inclusive('\n') {
        state = state.advance(is_delimiter(line));

        match state {
            ParseState::FrontMatter => {
                split.front_matter.push_str(line);
                if !line.ends_with('\n') {
                    split.front_matter.push('\n');
                }
            }
            ParseState::Body => split.body.push_str(line),
            ParseState::Start | ParseState::DelimStart | ParseState::DelimEnd => {}
        }
    }

    let found = state.delimiters_seen();
    if found < 2 {
        return Err(SplitError::MissingFrontMatter { found });
    }

    Ok(split)
}

fn is_delimiter(line: &str) -> bool {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    line == DELIMITER
}
