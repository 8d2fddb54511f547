//! Lexer for normalized samx text
//!
//! Tokenization is handled entirely by logos. Tokens are always paired with their byte
//! range in the normalized text, so the grammar can slice the text back out for
//! identifiers, descriptions and paragraph lines.

pub mod tokens;

pub use tokens::Token;

use logos::Logos;
use std::fmt;
use std::ops::Range;

/// Type alias for token with span
pub type TokenSpan = (Token, Range<usize>);

/// A character that is not part of the samx alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// Byte offset of the offending character
    pub offset: usize,
    pub found: String,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unexpected character {:?}", self.found)
    }
}

impl std::error::Error for LexError {}

/// Tokenize normalized text, keeping the byte range of every token
pub fn tokenize(source: &str) -> Result<Vec<TokenSpan>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                return Err(LexError {
                    offset: lexer.span().start,
                    found: lexer.slice().to_string(),
                })
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_with_spans() {
        let tokens = tokenize("a: b\n").unwrap();
        assert_eq!(
            tokens,
            vec![
                (Token::Word, 0..1),
                (Token::Colon, 1..2),
                (Token::Whitespace, 2..3),
                (Token::Word, 3..4),
                (Token::Newline, 4..5),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize("").unwrap(), vec![]);
    }

    #[test]
    fn test_reports_first_unknown_character() {
        let err = tokenize("fine\nnot fine!\n").unwrap_err();
        assert_eq!(err.offset, 13);
        assert_eq!(err.found, "!");
        assert_eq!(err.to_string(), "Unexpected character \"!\"");
    }
}
