//! Paragraph element definition

use super::super::traits::{AstNode, Visitor};
use serde::Serialize;
use std::fmt;

/// A paragraph: the text of its source lines joined by single spaces
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    text: String,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Join text segments (one per source line) with single spaces
    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> Self {
        let length = segments.iter().map(|s| s.as_ref().len() + 1).sum();
        let mut text = String::with_capacity(length);
        for segment in segments {
            text.push_str(segment.as_ref());
            text.push(' ');
        }
        // drop the trailing separator
        text.pop();
        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl AstNode for Paragraph {
    fn node_type(&self) -> &'static str {
        "Paragraph"
    }

    fn display_label(&self) -> String {
        if self.text.chars().count() > 50 {
            let head: String = self.text.chars().take(50).collect();
            format!("{}...", head)
        } else {
            self.text.clone()
        }
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_paragraph(self);
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Paragraph('{}')", self.text)
    }
}
