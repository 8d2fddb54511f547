//! Block element definition

use super::super::traits::{visit_children, AstNode, Visitor};
use super::element::Element;
use serde::Serialize;
use std::fmt;

/// A named, optionally described container of elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    identifier: String,
    description: String,
    children: Vec<Element>,
}

impl Block {
    pub fn new(
        identifier: impl Into<String>,
        description: impl Into<String>,
        children: Vec<Element>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            description: description.into(),
            children,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The header text after the colon; empty when the block has none
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Number of nested block levels below and including this one
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .filter_map(Element::as_block)
            .map(Block::depth)
            .max()
            .unwrap_or(0)
    }
}

impl AstNode for Block {
    fn node_type(&self) -> &'static str {
        "Block"
    }

    fn display_label(&self) -> String {
        if self.description.is_empty() {
            self.identifier.clone()
        } else {
            format!("{} {}", self.identifier, self.description)
        }
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_block(self);
        visit_children(visitor, &self.children);
        visitor.leave_block(self);
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Block('{}', {} items)",
            self.identifier,
            self.children.len()
        )
    }
}
