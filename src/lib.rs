//! # samx
//!
//! Front end for the samx markup format: an indentation-sensitive, lightweight markup
//! where blocks are introduced by an `identifier:` header and their content is nested
//! by indentation.
//!
//! Processing happens in two sequential stages:
//!
//! 1. The [normalizer](samx::normalizer) reads raw text in fixed-size chunks and turns
//!    significant leading whitespace into explicit `{{` / `}}` marker lines, validating
//!    that every dedent returns to a previously opened level.
//! 2. The [grammar](samx::grammar) matches the normalized text and emits a flat stream of
//!    events, which the [builder](samx::builder) folds into a [Document](samx::ast::Document).
//!
//! The [processor](samx::processor) module wires both stages together.
//!
//! For testing guidelines, see the [testing module](samx::testing).

pub mod samx;
