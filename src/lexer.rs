//! Line-oriented tokenizer for scene scripts.
//!
//! Tokens are produced lazily from any buffered reader. Every input line
//! becomes one [`TokenKind::Line`] token whose single argument is the line
//! text without its terminator.

use std::io::BufRead;

use crate::error::NovelResult;

/// Kind of a lexed token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// One line of literal page text.
    Line,
    /// A token kind this version does not understand. Consumers skip it.
    Unrecognized(String),
}

impl TokenKind {
    pub fn label(&self) -> &str {
        match self {
            TokenKind::Line => "line",
            TokenKind::Unrecognized(name) => name,
        }
    }
}

/// A typed token with its ordered string arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub args: Vec<String>,
}

impl Token {
    pub fn line(text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Line,
            args: vec![text.into()],
        }
    }

    /// Returns the arguments joined in order.
    pub fn text(&self) -> String {
        self.args.concat()
    }
}

/// Lazy token stream over a reader.
#[derive(Debug)]
pub struct Tokens<R> {
    reader: R,
    buf: String,
    done: bool,
}

/// Starts tokenizing `reader`. Nothing is read until the stream is polled.
pub fn tokenize<R: BufRead>(reader: R) -> Tokens<R> {
    Tokens {
        reader,
        buf: String::new(),
        done: false,
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = NovelResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.buf.clear();
        match self.reader.read_line(&mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                let line = self
                    .buf
                    .strip_suffix('\n')
                    .map(|line| line.strip_suffix('\r').unwrap_or(line))
                    .unwrap_or(self.buf.as_str());
                Some(Ok(Token::line(line)))
            }
            Err(err) => {
                self.done = true;
                Some(Err(err.into()))
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/lexer_tests.rs"]
mod tests;
