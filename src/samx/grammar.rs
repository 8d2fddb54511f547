//! Grammar for normalized samx text
//!
//! The grammar is a set of chumsky parser combinators over the logos token stream. It
//! recognizes paragraphs and recursively nested blocks, but it does not assemble the
//! tree: every production reports what it matched as [GrammarEvent]s and the
//! [builder](crate::samx::builder) turns that flat stream into a [Document](crate::samx::ast::Document).
//!
//! A parse either matches the whole input or fails with a single positioned
//! [GrammarError]. There is no partial result.

pub mod combinators;
pub mod document;
pub mod events;

pub use events::GrammarEvent;

use chumsky::prelude::*;
use std::fmt;
use std::sync::Arc;

use crate::samx::ast::SourceLocation;
use crate::samx::lexer::{tokenize, LexError, TokenSpan};

/// A grammar mismatch, positioned in the normalized text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarError {
    pub message: String,
    /// 1-based line in the normalized text
    pub line: usize,
    /// 1-based column in the normalized text
    pub column: usize,
}

impl GrammarError {
    fn at(source: &str, offset: usize, message: String) -> Self {
        let position = SourceLocation::new(source).byte_to_position(offset);
        Self {
            message,
            line: position.line + 1,
            column: position.column + 1,
        }
    }

    fn from_lex(source: &str, err: LexError) -> Self {
        Self::at(source, err.offset, err.to_string())
    }

    fn from_parse(source: &str, err: &Simple<TokenSpan>) -> Self {
        let offset = err
            .found()
            .map(|(_, span)| span.start)
            .unwrap_or(source.len());

        let found = match err.found() {
            Some((token, _)) => token.to_string(),
            None => "end of input".to_string(),
        };
        let message = match err.label() {
            Some(label) => format!("Unexpected {} while parsing {}", found, label),
            None => format!("Unexpected {}", found),
        };

        Self::at(source, offset, message)
    }
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to parse input: line {}:{}: {}",
            self.line, self.column, self.message
        )
    }
}

impl std::error::Error for GrammarError {}

/// Match normalized text against the grammar, returning the flat event stream
pub fn parse_events(normalized: &str) -> Result<Vec<GrammarEvent>, GrammarError> {
    let tokens = tokenize(normalized).map_err(|err| GrammarError::from_lex(normalized, err))?;
    let source = Arc::new(normalized.to_string());

    document::document(source).parse(tokens).map_err(|errs| {
        errs.first()
            .map(|err| GrammarError::from_parse(normalized, err))
            .unwrap_or_else(|| GrammarError::at(normalized, 0, "Unknown parse error".to_string()))
    })
}
