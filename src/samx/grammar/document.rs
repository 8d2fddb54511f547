//! Document-level grammar productions
//!
//! Content   = (blank line | Block | Paragraph)*
//! Block     = BlockHeader BlockBody?
//! BlockBody = '{{' newline Content '}}' newline
//! Paragraph = (Text newline)+ blank line
//! Document  = Content end-of-input
//!
//! Every production returns the events it matched, in source order, so the result of a
//! successful parse is one flat event list.

use chumsky::prelude::*;
use std::sync::Arc;

use super::combinators::{blank_line, block_header, newline, text_line, token, ParserError};
use super::events::GrammarEvent;
use crate::samx::lexer::{Token, TokenSpan};

/// Events for a matched block header and body
fn block_events(
    identifier: String,
    description: Option<String>,
    body: Option<Vec<GrammarEvent>>,
) -> Vec<GrammarEvent> {
    let body = body.unwrap_or_default();
    let mut events = Vec::with_capacity(body.len() + 4);
    events.push(GrammarEvent::EnterBlock);
    events.push(GrammarEvent::Identifier(identifier));
    if let Some(description) = description {
        events.push(GrammarEvent::Description(description));
    }
    events.extend(body);
    events.push(GrammarEvent::LeaveBlock);
    events
}

/// Events for a matched paragraph
fn paragraph_events(lines: Vec<String>) -> Vec<GrammarEvent> {
    let mut events: Vec<GrammarEvent> = lines.into_iter().map(GrammarEvent::Text).collect();
    events.push(GrammarEvent::ParagraphEnd);
    events
}

/// Content: blocks and paragraphs in any order, recursively nested through block bodies
pub(crate) fn content(
    source: Arc<String>,
) -> impl Parser<TokenSpan, Vec<GrammarEvent>, Error = ParserError> + Clone {
    recursive(move |content| {
        let paragraph = text_line(source.clone())
            .repeated()
            .at_least(1)
            .then_ignore(blank_line())
            .map(paragraph_events)
            .labelled("paragraph");

        let body = token(Token::OpenMarker)
            .ignore_then(newline())
            .ignore_then(content)
            .then_ignore(token(Token::CloseMarker))
            .then_ignore(newline())
            .labelled("block body");

        let block = block_header(source.clone())
            .then(body.or_not())
            .map(|((identifier, description), body)| block_events(identifier, description, body))
            .labelled("block");

        // stray blank lines between elements carry no events
        choice((blank_line().to(Vec::new()), block, paragraph))
            .repeated()
            .flatten()
    })
}

/// Parse a whole normalized document into its event stream
pub(crate) fn document(
    source: Arc<String>,
) -> impl Parser<TokenSpan, Vec<GrammarEvent>, Error = ParserError> {
    content(source).then_ignore(end())
}
