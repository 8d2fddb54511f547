//! Token definitions for normalized samx text
//!
//! The lexer only ever sees the normalizer's output, so indentation has already been
//! replaced by `{{` / `}}` marker lines and leading spaces carry no meaning.
use logos::Logos;
use std::fmt;

/// All tokens that can appear in normalized samx text
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    // Nesting markers written by the normalizer
    #[token("{{")]
    OpenMarker,
    #[token("}}")]
    CloseMarker,

    #[token(":")]
    Colon,

    #[token("\n")]
    Newline,

    #[regex(" +")]
    Whitespace,

    #[regex("[A-Za-z][A-Za-z0-9]*")]
    Word,
    #[regex("[0-9]+")]
    Number,
    #[token("_")]
    Underscore,

    // The only punctuation allowed in text
    #[regex(r"[+,\-./]")]
    Punct,
}

impl Token {
    /// Check if this token may appear inside a text run
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            Token::Word | Token::Number | Token::Punct | Token::Whitespace
        )
    }

    /// Check if this token may appear inside an identifier
    pub fn is_identifier_part(&self) -> bool {
        matches!(self, Token::Word | Token::Number | Token::Underscore)
    }

    /// Check if this token may start an identifier
    pub fn is_identifier_start(&self) -> bool {
        matches!(self, Token::Word | Token::Underscore)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Token::OpenMarker => "'{{'",
            Token::CloseMarker => "'}}'",
            Token::Colon => "':'",
            Token::Newline => "end of line",
            Token::Whitespace => "whitespace",
            Token::Word => "word",
            Token::Number => "number",
            Token::Underscore => "'_'",
            Token::Punct => "punctuation",
        };
        f.write_str(name)
    }
}
