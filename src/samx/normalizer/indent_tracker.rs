//! Indentation level tracking
//!
//!     The tracker keeps an ascending stack of the indent widths that enclose the current
//!     line, plus the width of the current line itself. Every non-blank line reports its
//!     width through [IndentTracker::observe], which answers with the structural
//!     transitions (open / close) needed to move from the previous line to this one.
//!
//!     Deeper lines always open exactly one level, no matter how many extra spaces they
//!     carry. Shallower lines must land exactly on a level that was previously opened:
//!
//!     - the common case (dedent by one level) is checked first against the top of the stack;
//!     - otherwise the stack is searched for the smallest entry >= the observed width, and
//!       that entry must equal the width exactly.
//!
//!     A dedent to a width that was never an enclosing level is always an error; it is never
//!     rounded to the nearest level.

use std::fmt;

/// A structural change between two consecutive non-blank lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// The line opens a new nesting level
    Open,
    /// The line closes one nesting level
    Close,
}

/// Errors raised when a line's indentation does not fit the enclosing levels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndentError {
    /// Dedent observed while no level is open
    NoEnclosingLevel { current: usize, observed: usize },
    /// Dedent width is between the innermost enclosing level and the current width
    ExcessiveDeindent { current: usize, observed: usize },
    /// Dedent width does not match any previously opened level
    NoMatchingLevel {
        current: usize,
        observed: usize,
        expected: usize,
    },
}

impl IndentError {
    /// The indent width of the line that was rejected
    pub fn observed(&self) -> usize {
        match self {
            IndentError::NoEnclosingLevel { observed, .. }
            | IndentError::ExcessiveDeindent { observed, .. }
            | IndentError::NoMatchingLevel { observed, .. } => *observed,
        }
    }
}

impl fmt::Display for IndentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndentError::NoEnclosingLevel { current, observed } => write!(
                f,
                "No previous indent level; current level: {}; observed: {}",
                current, observed
            ),
            IndentError::ExcessiveDeindent { current, observed } => write!(
                f,
                "Excessive de-indent; current level: {}; observed: {}",
                current, observed
            ),
            IndentError::NoMatchingLevel {
                current,
                observed,
                expected,
            } => write!(
                f,
                "Indent does not match any enclosing level; current level: {}; observed: {}; expected: {}",
                current, observed, expected
            ),
        }
    }
}

impl std::error::Error for IndentError {}

/// Tracks the stack of open indentation levels
#[derive(Debug, Clone, Default)]
pub struct IndentTracker {
    /// Enclosing widths, strictly increasing, not including `current`
    stack: Vec<usize>,
    current: usize,
}

impl IndentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Width of the most recently accepted non-blank line
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of open levels, i.e. the nesting depth of the current line
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The enclosing widths, outermost first
    pub fn levels(&self) -> &[usize] {
        &self.stack
    }

    /// Feed the indent width of the next non-blank line.
    ///
    /// On error the tracker is left exactly as it was before the call.
    pub fn observe(&mut self, width: usize) -> Result<Vec<Transition>, IndentError> {
        if width == self.current {
            return Ok(Vec::new());
        }

        if width > self.current {
            self.stack.push(self.current);
            self.current = width;
            return Ok(vec![Transition::Open]);
        }

        let Some(&innermost) = self.stack.last() else {
            return Err(IndentError::NoEnclosingLevel {
                current: self.current,
                observed: width,
            });
        };

        // most dedents go back just one level
        if width == innermost {
            self.stack.pop();
            self.current = width;
            return Ok(vec![Transition::Close]);
        }

        let position = self.stack.partition_point(|&level| level < width);
        let Some(&located) = self.stack.get(position) else {
            return Err(IndentError::ExcessiveDeindent {
                current: self.current,
                observed: width,
            });
        };

        if located != width {
            return Err(IndentError::NoMatchingLevel {
                current: self.current,
                observed: width,
                expected: located,
            });
        }

        let closed = self.stack.len() - position;
        self.stack.truncate(position);
        self.current = width;

        Ok(vec![Transition::Close; closed])
    }

    /// Close every level that is still open, returning one close per level
    pub fn flush(&mut self) -> Vec<Transition> {
        let closed = self.stack.len();
        if let Some(&outermost) = self.stack.first() {
            self.current = outermost;
        }
        self.stack.clear();
        vec![Transition::Close; closed]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Tracker with stack [0, 4] and current width 8
    fn two_levels_deep() -> IndentTracker {
        let mut tracker = IndentTracker::new();
        tracker.observe(4).unwrap();
        tracker.observe(8).unwrap();
        assert_eq!(tracker.levels(), &[0, 4]);
        assert_eq!(tracker.current(), 8);
        tracker
    }

    #[test]
    fn test_same_width_is_unchanged() {
        let mut tracker = IndentTracker::new();
        assert_eq!(tracker.observe(0).unwrap(), vec![]);
        assert_eq!(tracker.depth(), 0);
    }

    #[test]
    fn test_deeper_line_opens_single_level() {
        let mut tracker = IndentTracker::new();
        // 12 extra spaces still count as one level
        assert_eq!(tracker.observe(12).unwrap(), vec![Transition::Open]);
        assert_eq!(tracker.levels(), &[0]);
        assert_eq!(tracker.current(), 12);
    }

    #[test]
    fn test_dedent_to_previous_level_fast_path() {
        let mut tracker = two_levels_deep();
        assert_eq!(tracker.observe(4).unwrap(), vec![Transition::Close]);
        assert_eq!(tracker.levels(), &[0]);
        assert_eq!(tracker.current(), 4);
    }

    #[test]
    fn test_dedent_across_two_levels() {
        let mut tracker = two_levels_deep();
        assert_eq!(
            tracker.observe(0).unwrap(),
            vec![Transition::Close, Transition::Close]
        );
        assert_eq!(tracker.depth(), 0);
        assert_eq!(tracker.current(), 0);
    }

    #[rstest]
    #[case(2, IndentError::NoMatchingLevel { current: 8, observed: 2, expected: 4 })]
    #[case(6, IndentError::ExcessiveDeindent { current: 8, observed: 6 })]
    fn test_dedent_rejected(#[case] width: usize, #[case] expected: IndentError) {
        let mut tracker = two_levels_deep();
        assert_eq!(tracker.observe(width), Err(expected));
        // state is untouched by a rejected line
        assert_eq!(tracker.levels(), &[0, 4]);
        assert_eq!(tracker.current(), 8);
    }

    #[test]
    fn test_dedent_without_enclosing_level() {
        let mut tracker = IndentTracker::new();
        tracker.current = 4;
        assert_eq!(
            tracker.observe(2),
            Err(IndentError::NoEnclosingLevel {
                current: 4,
                observed: 2
            })
        );
    }

    #[rstest]
    #[case(&[0], 0)]
    #[case(&[0, 4], 1)]
    #[case(&[0, 4, 8, 4], 1)]
    #[case(&[0, 2, 7, 11], 3)]
    #[case(&[3, 0, 5], 1)]
    fn test_flush_closes_every_open_level(#[case] widths: &[usize], #[case] open: usize) {
        let mut tracker = IndentTracker::new();
        for &width in widths {
            tracker.observe(width).unwrap();
        }
        assert_eq!(tracker.depth(), open);
        assert_eq!(tracker.flush(), vec![Transition::Close; open]);
        assert_eq!(tracker.depth(), 0);
        assert_eq!(tracker.current(), 0);
    }

    #[test]
    fn test_error_messages() {
        let err = IndentError::NoMatchingLevel {
            current: 8,
            observed: 2,
            expected: 4,
        };
        assert_eq!(
            err.to_string(),
            "Indent does not match any enclosing level; current level: 8; observed: 2; expected: 4"
        );
        assert_eq!(err.observed(), 2);
    }
}
