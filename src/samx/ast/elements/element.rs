//! Element enum definition

use super::super::traits::{AstNode, Visitor};
use super::block::Block;
use super::paragraph::Paragraph;
use serde::Serialize;
use std::fmt;

/// Element represents anything that can appear in document or block content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Element {
    Block(Block),
    Paragraph(Paragraph),
}

impl Element {
    pub fn as_block(&self) -> Option<&Block> {
        match self {
            Element::Block(block) => Some(block),
            Element::Paragraph(_) => None,
        }
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Element::Paragraph(paragraph) => Some(paragraph),
            Element::Block(_) => None,
        }
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Element::Block(_))
    }

    pub fn is_paragraph(&self) -> bool {
        matches!(self, Element::Paragraph(_))
    }
}

impl AstNode for Element {
    fn node_type(&self) -> &'static str {
        match self {
            Element::Block(b) => b.node_type(),
            Element::Paragraph(p) => p.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            Element::Block(b) => b.display_label(),
            Element::Paragraph(p) => p.display_label(),
        }
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            Element::Block(b) => b.accept(visitor),
            Element::Paragraph(p) => p.accept(visitor),
        }
    }
}

impl From<Block> for Element {
    fn from(block: Block) -> Self {
        Element::Block(block)
    }
}

impl From<Paragraph> for Element {
    fn from(paragraph: Paragraph) -> Self {
        Element::Paragraph(paragraph)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Block(b) => write!(f, "{}", b),
            Element::Paragraph(p) => write!(f, "{}", p),
        }
    }
}
