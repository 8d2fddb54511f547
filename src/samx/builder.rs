//! Builds the document tree from the grammar's flat event stream.
//!
//! # The Algorithm
//!
//! The builder owns the *current* context: the identifier and description of the block
//! being built and the list of children collected so far (at the top level, the
//! document's own element list). Blocks nest, so the contexts of enclosing blocks are
//! kept on a stack:
//!
//! 1. `EnterBlock` pushes the current context onto the stack and starts a fresh one.
//! 2. `Identifier` / `Description` record the header of the block being built.
//! 3. `Text` appends a segment to the pending paragraph.
//! 4. `ParagraphEnd` joins the pending segments into a [Paragraph] and appends it to the
//!    current children.
//! 5. `LeaveBlock` turns the current context into a [Block], pops the enclosing context
//!    and appends the block to its children.
//!
//! The stack depth always equals the nesting depth of the block being built, and it must
//! be empty when the event stream ends.

use std::fmt;
use tracing::debug;

use crate::samx::ast::{Block, Document, Element, Paragraph};
use crate::samx::grammar::GrammarEvent;

/// Errors raised when the event stream does not describe a well-formed tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderConsistencyError {
    /// `LeaveBlock` without a matching `EnterBlock`
    UnbalancedLeave,
    /// A block header event arrived outside of any block
    HeaderOutsideBlock(String),
    /// A block was closed before it received an identifier
    MissingIdentifier,
    /// Text segments were never closed by `ParagraphEnd`
    DanglingText(usize),
    /// The stream ended with blocks still open
    UnclosedBlocks(usize),
}

impl fmt::Display for BuilderConsistencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuilderConsistencyError::UnbalancedLeave => write!(f, "Block closed without a matching open"),
            BuilderConsistencyError::HeaderOutsideBlock(event) => {
                write!(f, "Block header event outside of a block: {}", event)
            }
            BuilderConsistencyError::MissingIdentifier => write!(f, "Block closed without an identifier"),
            BuilderConsistencyError::DanglingText(count) => {
                write!(f, "Paragraph not terminated: {} text segments pending", count)
            }
            BuilderConsistencyError::UnclosedBlocks(count) => {
                write!(f, "Unclosed blocks: {} contexts remain on stack", count)
            }
        }
    }
}

impl std::error::Error for BuilderConsistencyError {}

/// The in-progress state of one block (or of the document at the bottom)
#[derive(Debug, Default)]
struct Frame {
    identifier: Option<String>,
    description: Option<String>,
    children: Vec<Element>,
}

/// Incrementally assembles a [Document] from [GrammarEvent]s
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    current: Frame,
    stack: Vec<Frame>,
    segments: Vec<String>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current nesting depth, 0 at the top level
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Apply a single event
    pub fn apply(&mut self, event: GrammarEvent) -> Result<(), BuilderConsistencyError> {
        match event {
            GrammarEvent::EnterBlock => {
                let parent = std::mem::take(&mut self.current);
                self.stack.push(parent);
                debug!(depth = self.stack.len(), "enter block");
            }
            GrammarEvent::Identifier(identifier) => {
                if self.stack.is_empty() {
                    return Err(BuilderConsistencyError::HeaderOutsideBlock(identifier));
                }
                self.current.identifier = Some(identifier);
            }
            GrammarEvent::Description(description) => {
                if self.stack.is_empty() {
                    return Err(BuilderConsistencyError::HeaderOutsideBlock(description));
                }
                self.current.description = Some(description);
            }
            GrammarEvent::Text(segment) => self.segments.push(segment),
            GrammarEvent::ParagraphEnd => {
                let paragraph = Paragraph::from_segments(&self.segments);
                self.segments.clear();
                self.current.children.push(Element::Paragraph(paragraph));
            }
            GrammarEvent::LeaveBlock => {
                let parent = self.stack.pop().ok_or(BuilderConsistencyError::UnbalancedLeave)?;
                let frame = std::mem::replace(&mut self.current, parent);
                let identifier = frame.identifier.ok_or(BuilderConsistencyError::MissingIdentifier)?;
                let block = Block::new(
                    identifier,
                    frame.description.unwrap_or_default(),
                    frame.children,
                );
                debug!(
                    depth = self.stack.len(),
                    identifier = block.identifier(),
                    "leave block"
                );
                self.current.children.push(Element::Block(block));
            }
        }
        Ok(())
    }

    /// Finish building, checking that every block was closed
    pub fn finish(self) -> Result<Document, BuilderConsistencyError> {
        if !self.stack.is_empty() {
            return Err(BuilderConsistencyError::UnclosedBlocks(self.stack.len()));
        }
        if !self.segments.is_empty() {
            return Err(BuilderConsistencyError::DanglingText(self.segments.len()));
        }
        Ok(Document::new(self.current.children))
    }
}

/// Build a document from a complete event stream
pub fn build<I>(events: I) -> Result<Document, BuilderConsistencyError>
where
    I: IntoIterator<Item = GrammarEvent>,
{
    let mut builder = DocumentBuilder::new();
    for event in events {
        builder.apply(event)?;
    }
    builder.finish()
}
