//! Processing pipeline for samx sources
//!
//! Wires the two stages together: raw bytes are normalized by the
//! [StreamNormalizer](crate::samx::normalizer::StreamNormalizer), the normalized text is
//! matched by the [grammar](crate::samx::grammar) and the resulting events are folded into
//! a [Document] by the [DocumentBuilder](crate::samx::builder::DocumentBuilder).
//!
//! ```rust
//! use samx::samx::processor::{process, ProcessorConfig};
//!
//! let source = "intro:\n    This is text.\n";
//! let processed = process(source.as_bytes(), &ProcessorConfig::default()).unwrap();
//! assert_eq!(processed.document.len(), 1);
//! assert!(processed.report.is_clean());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::samx::ast::Document;
use crate::samx::builder::{build, BuilderConsistencyError};
use crate::samx::formats::{to_json_str, to_outline_str, to_treeviz_str};
use crate::samx::grammar::{parse_events, GrammarError};
use crate::samx::normalizer::{NormalizeError, NormalizeReport, NormalizerConfig, StreamNormalizer};

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The normalizer's output, markers included
    Normalized,
    Outline,
    Treeviz,
    Json,
}

impl OutputFormat {
    /// Get all available format names
    pub fn available() -> &'static [&'static str] {
        &["normalized", "outline", "treeviz", "json"]
    }
}

impl FromStr for OutputFormat {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normalized" => Ok(OutputFormat::Normalized),
            "outline" => Ok(OutputFormat::Outline),
            "treeviz" => Ok(OutputFormat::Treeviz),
            "json" => Ok(OutputFormat::Json),
            other => Err(ProcessingError::InvalidFormat(other.to_string())),
        }
    }
}

/// Configuration of a processing run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    pub normalizer: NormalizerConfig,
}

impl ProcessorConfig {
    /// Load a configuration file. YAML is read with serde_yaml, which also accepts JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ProcessingError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ProcessingError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse and validate settings from YAML (or JSON) text
    pub fn from_yaml(content: &str) -> Result<Self, ProcessingError> {
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| ProcessingError::Config(e.to_string()))?;
        config
            .normalizer
            .validate()
            .map_err(|e| ProcessingError::Config(e.to_string()))?;
        Ok(config)
    }
}

/// Errors around the pipeline itself: format names and configuration files
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    InvalidFormat(String),
    Config(String),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(format) => write!(
                f,
                "Invalid format: {} (available: {})",
                format,
                OutputFormat::available().join(", ")
            ),
            ProcessingError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ProcessingError {}

/// Failure to turn normalized text into a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Grammar(GrammarError),
    Builder(BuilderConsistencyError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Grammar(err) => write!(f, "{}", err),
            ParseError::Builder(err) => write!(f, "Inconsistent document structure: {}", err),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Grammar(err) => Some(err),
            ParseError::Builder(err) => Some(err),
        }
    }
}

impl From<GrammarError> for ParseError {
    fn from(err: GrammarError) -> Self {
        ParseError::Grammar(err)
    }
}

impl From<BuilderConsistencyError> for ParseError {
    fn from(err: BuilderConsistencyError) -> Self {
        ParseError::Builder(err)
    }
}

/// Any failure of the full pipeline
#[derive(Debug)]
pub enum SamxError {
    Normalize(NormalizeError),
    /// The normalized text is not valid UTF-8
    Utf8(std::string::FromUtf8Error),
    Parse(ParseError),
}

impl fmt::Display for SamxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamxError::Normalize(err) => write!(f, "{}", err),
            SamxError::Utf8(err) => write!(f, "Input is not valid UTF-8: {}", err),
            SamxError::Parse(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SamxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SamxError::Normalize(err) => Some(err),
            SamxError::Utf8(err) => Some(err),
            SamxError::Parse(err) => Some(err),
        }
    }
}

impl From<NormalizeError> for SamxError {
    fn from(err: NormalizeError) -> Self {
        SamxError::Normalize(err)
    }
}

impl From<std::string::FromUtf8Error> for SamxError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        SamxError::Utf8(err)
    }
}

impl From<ParseError> for SamxError {
    fn from(err: ParseError) -> Self {
        SamxError::Parse(err)
    }
}

/// The result of a successful pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    pub document: Document,
    /// The intermediate normalized text
    pub normalized: String,
    /// Indentation diagnostics and input statistics from the normalizer
    pub report: NormalizeReport,
}

impl Processed {
    /// Render the run in the requested format
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Normalized => Ok(self.normalized.clone()),
            OutputFormat::Outline => Ok(to_outline_str(&self.document)),
            OutputFormat::Treeviz => Ok(to_treeviz_str(&self.document)),
            OutputFormat::Json => to_json_str(&self.document),
        }
    }
}

/// Parse already normalized text into a document
pub fn parse_document(normalized: &str) -> Result<Document, ParseError> {
    let events = parse_events(normalized)?;
    debug!(events = events.len(), "grammar matched");
    let document = build(events)?;
    debug!(elements = document.len(), "document built");
    Ok(document)
}

/// Run the whole pipeline over a reader
pub fn process<R: Read>(input: R, config: &ProcessorConfig) -> Result<Processed, SamxError> {
    let mut output = Vec::new();
    let report = StreamNormalizer::with_config(&mut output, config.normalizer.clone()).normalize(input)?;
    debug!(
        bytes_read = report.bytes_read,
        lines = report.lines,
        diagnostics = report.diagnostics.len(),
        "normalized input"
    );

    let normalized = String::from_utf8(output)?;
    let document = parse_document(&normalized)?;

    Ok(Processed {
        document,
        normalized,
        report,
    })
}

/// Run the whole pipeline over a file
pub fn process_file<P: AsRef<Path>>(path: P, config: &ProcessorConfig) -> Result<Processed, SamxError> {
    let file = fs::File::open(path).map_err(|e| SamxError::Normalize(NormalizeError::Io(e)))?;
    process(file, config)
}
