//! Parser combinator functions for building the samx grammar.

use chumsky::prelude::*;
use std::ops::Range;
use std::sync::Arc;

use crate::samx::lexer::{Token, TokenSpan};

/// Type alias for parser error
pub(crate) type ParserError = Simple<TokenSpan>;

/// Helper: byte range covered by a non-empty run of tokens
fn run_range(first: &TokenSpan, rest: &[TokenSpan]) -> Range<usize> {
    let end = rest.last().map_or(first.1.end, |(_, span)| span.end);
    first.1.start..end
}

/// Helper: slice the source for a byte range, trimmed
pub(crate) fn extract_text(source: &str, range: Range<usize>) -> String {
    source
        .get(range)
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

/// Helper: match a specific token type, ignoring the span
pub(crate) fn token(t: Token) -> impl Parser<TokenSpan, (), Error = ParserError> + Clone {
    filter(move |(tok, _): &TokenSpan| *tok == t).ignored()
}

/// Spaces between tokens, or the canonical indentation at the start of a line
pub(crate) fn spaces() -> impl Parser<TokenSpan, (), Error = ParserError> + Clone {
    token(Token::Whitespace)
}

/// A line terminator
pub(crate) fn newline() -> impl Parser<TokenSpan, (), Error = ParserError> + Clone {
    token(Token::Newline)
}

/// A blank line: a line terminator where a line is expected to start
pub(crate) fn blank_line() -> impl Parser<TokenSpan, (), Error = ParserError> + Clone {
    spaces().or_not().ignore_then(newline()).labelled("blank line")
}

/// Text: letters, digits, `+,-./` and spaces, starting with a non-space character
pub(crate) fn text(source: Arc<String>) -> impl Parser<TokenSpan, String, Error = ParserError> + Clone {
    filter(|(t, _): &TokenSpan| t.is_text() && *t != Token::Whitespace)
        .then(filter(|(t, _): &TokenSpan| t.is_text()).repeated())
        .map(move |(first, rest)| extract_text(&source, run_range(&first, &rest)))
        .labelled("text")
}

/// Identifier: a letter or underscore followed by letters, digits and underscores
pub(crate) fn identifier(
    source: Arc<String>,
) -> impl Parser<TokenSpan, String, Error = ParserError> + Clone {
    filter(|(t, _): &TokenSpan| t.is_identifier_start())
        .then(filter(|(t, _): &TokenSpan| t.is_identifier_part()).repeated())
        .map(move |(first, rest)| extract_text(&source, run_range(&first, &rest)))
        .labelled("identifier")
}

/// A single line of paragraph text, including its terminator
pub(crate) fn text_line(
    source: Arc<String>,
) -> impl Parser<TokenSpan, String, Error = ParserError> + Clone {
    spaces()
        .or_not()
        .ignore_then(text(source))
        .then_ignore(newline())
}

/// Block header: `identifier ':' description? newline+`
pub(crate) fn block_header(
    source: Arc<String>,
) -> impl Parser<TokenSpan, (String, Option<String>), Error = ParserError> + Clone {
    spaces()
        .or_not()
        .ignore_then(identifier(source.clone()))
        .then_ignore(spaces().or_not())
        .then_ignore(token(Token::Colon))
        .then_ignore(spaces().or_not())
        .then(text(source).or_not())
        .then_ignore(newline().repeated().at_least(1))
        .labelled("block header")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samx::lexer::tokenize;

    fn run<O>(
        parser: impl Parser<TokenSpan, O, Error = ParserError>,
        source: &str,
    ) -> Result<O, Vec<ParserError>> {
        let tokens = tokenize(source).unwrap();
        parser.then_ignore(end()).parse(tokens)
    }

    fn shared(source: &str) -> Arc<String> {
        Arc::new(source.to_string())
    }

    #[test]
    fn test_text_trims_trailing_spaces() {
        let source = "Some text, v1.2 +more/less  ";
        assert_eq!(
            run(text(shared(source)), source).unwrap(),
            "Some text, v1.2 +more/less"
        );
    }

    #[test]
    fn test_text_rejects_leading_space_and_underscore() {
        let source = " leading";
        assert!(run(text(shared(source)), source).is_err());
        let source = "snake_case";
        assert!(run(text(shared(source)), source).is_err());
    }

    #[test]
    fn test_identifier() {
        let source = "_private_block2";
        assert_eq!(
            run(identifier(shared(source)), source).unwrap(),
            "_private_block2"
        );
        let source = "2fast";
        assert!(run(identifier(shared(source)), source).is_err());
    }

    #[test]
    fn test_text_line_strips_indentation() {
        let source = "        Nested text.\n";
        assert_eq!(
            run(text_line(shared(source)), source).unwrap(),
            "Nested text."
        );
    }

    #[test]
    fn test_block_header_variants() {
        let source = "intro:\n";
        assert_eq!(
            run(block_header(shared(source)), source).unwrap(),
            ("intro".to_string(), None)
        );

        let source = "    section : The first part\n\n\n";
        assert_eq!(
            run(block_header(shared(source)), source).unwrap(),
            ("section".to_string(), Some("The first part".to_string()))
        );

        let source = "intro:   \n";
        assert_eq!(
            run(block_header(shared(source)), source).unwrap(),
            ("intro".to_string(), None)
        );
    }

    #[test]
    fn test_block_header_requires_terminator() {
        let source = "intro: text";
        assert!(run(block_header(shared(source)), source).is_err());
    }

    #[test]
    fn test_blank_line() {
        assert!(run(blank_line(), "\n").is_ok());
        assert!(run(blank_line(), "x\n").is_err());
    }
}
