//! Testing utilities for document assertions
//!
//! # Parser Testing Guidelines
//!
//! Document tests should use the two tools in this module together:
//!
//! 1. **[Samples]** - verified samx sources under `docs/samples/`
//! 2. **[assert_doc](fn@assert_doc)** - fluent assertions over the whole tree
//!
//! ## Rule 1: Prefer Samples for Test Content
//!
//! samx is whitespace sensitive, and small mistakes in hand-written sources (a stray
//! space, a missing blank line after a paragraph) easily turn a test into a false
//! positive. The curated samples are checked once and shared by every test:
//!
//! ```rust,ignore
//! use samx::samx::testing::Samples;
//!
//! let processed = Samples::process("020-blocks-nested.samx")?;
//! ```
//!
//! Inline sources are fine for focused unit tests of a single rule.
//!
//! ## Rule 2: Assert on Shape and Content
//!
//! Counting nodes says little. Walk the tree and check identifiers, descriptions and
//! paragraph text:
//!
//! ```rust,ignore
//! use samx::samx::testing::assert_doc;
//!
//! assert_doc(&processed.document)
//!     .item_count(2)
//!     .item(0, |item| {
//!         item.assert_block()
//!             .identifier("chapter")
//!             .description("One")
//!             .child_count(2)
//!             .child(0, |child| {
//!                 child.assert_block().identifier("section");
//!             });
//!     })
//!     .item(1, |item| {
//!         item.assert_block().identifier("closing");
//!     });
//! ```

mod assertions;
mod matchers;
mod samples;

pub use assertions::{
    assert_doc, BlockAssertion, DocumentAssertion, ElementAssertion, ParagraphAssertion,
};
pub use matchers::{TextField, TextMatch};
pub use samples::{SampleError, Samples, AVAILABLE_SAMPLES};
