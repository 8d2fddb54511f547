//! Matching of the free text carried by samx nodes

use std::fmt;

/// The text-bearing parts of a samx node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    /// Joined text of a paragraph
    ParagraphText,
    /// Text after the colon of a block header
    BlockDescription,
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextField::ParagraphText => write!(f, "paragraph text"),
            TextField::BlockDescription => write!(f, "block description"),
        }
    }
}

/// How the text of a node is expected to look
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextMatch {
    Exact(String),
    StartsWith(String),
    Contains(String),
    /// The field is empty, e.g. a block header without a description
    Empty,
}

impl TextMatch {
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => actual == expected,
            TextMatch::StartsWith(prefix) => actual.starts_with(prefix.as_str()),
            TextMatch::Contains(needle) => actual.contains(needle.as_str()),
            TextMatch::Empty => actual.is_empty(),
        }
    }

    /// Panic with the node path and field name when `actual` does not match
    pub fn check(&self, field: TextField, actual: &str, context: &str) {
        assert!(
            self.matches(actual),
            "{}: Expected {} {}, but got '{}'",
            context,
            field,
            self,
            actual
        );
    }
}

impl fmt::Display for TextMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextMatch::Exact(expected) => write!(f, "to be '{}'", expected),
            TextMatch::StartsWith(prefix) => write!(f, "to start with '{}'", prefix),
            TextMatch::Contains(needle) => write!(f, "to contain '{}'", needle),
            TextMatch::Empty => write!(f, "to be empty"),
        }
    }
}

impl From<&str> for TextMatch {
    /// `""` asks for an empty field, anything else for an exact match
    fn from(expected: &str) -> Self {
        if expected.is_empty() {
            TextMatch::Empty
        } else {
            TextMatch::Exact(expected.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        assert!(TextMatch::from("Welcome").matches("Welcome"));
        assert!(!TextMatch::from("Welcome").matches("Welcome back"));
        assert!(TextMatch::StartsWith("Wel".into()).matches("Welcome"));
        assert!(TextMatch::Contains("com".into()).matches("Welcome"));
        assert!(TextMatch::from("").matches(""));
        assert!(!TextMatch::Empty.matches(" "));
    }

    #[test]
    #[should_panic(expected = "items[0]: Expected block description to be empty, but got 'Welcome'")]
    fn test_check_names_the_field() {
        TextMatch::Empty.check(TextField::BlockDescription, "Welcome", "items[0]");
    }
}
