//! Indentation normalizer for samx
//!
//! samx nests content by indentation. Parser combinator libraries handle explicit
//! delimiters far better than significant whitespace, so the first stage rewrites the
//! raw text so that every change of nesting becomes a marker line:
//!
//! ```text
//! intro:                     intro:
//!     This is text.          {{
//!                                This is text.
//!     detail:         =>
//!         Nested text.           detail:
//!                            {{
//!                                    Nested text.
//!
//!                            }}
//!                            }}
//! ```
//!
//! The output is the wire format consumed by the [lexer](crate::samx::lexer) and
//! [grammar](crate::samx::grammar). Indentation itself is validated here: a line may
//! only dedent to a width that was previously opened.

pub mod indent_tracker;
pub mod stream;

pub use indent_tracker::{IndentError, IndentTracker, Transition};
pub use stream::{
    IndentDiagnostic, NormalizeError, NormalizeReport, NormalizerConfig, StreamNormalizer,
    CLOSE_MARKER, OPEN_MARKER,
};

/// Normalized text together with the report of the run that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    pub report: NormalizeReport,
}

/// Normalize an in-memory source
pub fn normalize_str(source: &str, config: &NormalizerConfig) -> Result<Normalized, NormalizeError> {
    let mut output = Vec::with_capacity(source.len() + source.len() / 4);
    let report = StreamNormalizer::with_config(&mut output, config.clone()).normalize(source.as_bytes())?;
    // lines are only split at '\n' and markers are ASCII, so valid input stays valid
    let text = String::from_utf8_lossy(&output).into_owned();
    Ok(Normalized { text, report })
}
