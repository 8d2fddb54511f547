//! Defines the flat event stream produced by the grammar.

use std::fmt;

/// A single grammar match event.
///
/// The grammar does not build the tree itself: it reports what it matched, in the order
/// the productions complete, and the [DocumentBuilder](crate::samx::builder::DocumentBuilder)
/// reconstructs the nesting. A block always produces
/// `EnterBlock, Identifier, Description?, <content events>, LeaveBlock`, and a paragraph
/// produces one `Text` per line followed by `ParagraphEnd`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GrammarEvent {
    /// A block header is about to be matched
    EnterBlock,
    /// The identifier of the block being matched
    Identifier(String),
    /// The description following the block's colon
    Description(String),
    /// One trimmed line of paragraph text
    Text(String),
    /// A paragraph and its terminating blank line were matched
    ParagraphEnd,
    /// A block header and its optional body were fully matched
    LeaveBlock,
}

impl fmt::Display for GrammarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarEvent::EnterBlock => write!(f, "EnterBlock"),
            GrammarEvent::Identifier(id) => write!(f, "Identifier({})", id),
            GrammarEvent::Description(desc) => write!(f, "Description({})", desc),
            GrammarEvent::Text(text) => write!(f, "Text({})", text),
            GrammarEvent::ParagraphEnd => write!(f, "ParagraphEnd"),
            GrammarEvent::LeaveBlock => write!(f, "LeaveBlock"),
        }
    }
}
