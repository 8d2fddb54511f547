//! Verified sample sources
//!
//! The files under `docs/samples/` are the canonical samx documents used by the test
//! suites. Names are validated against [AVAILABLE_SAMPLES] so a typo fails loudly
//! instead of silently reading nothing.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::samx::processor::{process, ProcessorConfig, Processed, SamxError};

/// Available sample files (canonical sources)
pub const AVAILABLE_SAMPLES: &[&str] = &[
    "000-paragraphs.samx",
    "010-blocks-flat.samx",
    "020-blocks-nested.samx",
    "030-descriptions.samx",
    "040-mixed-content.samx",
    "090-malformed-dedent.samx",
];

#[derive(Debug)]
pub enum SampleError {
    NotAvailable(String),
    Io(String),
    Process(SamxError),
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::NotAvailable(name) => write!(
                f,
                "Sample '{}' is not available. Available samples: {:?}",
                name, AVAILABLE_SAMPLES
            ),
            SampleError::Io(msg) => write!(f, "IO error: {}", msg),
            SampleError::Process(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SampleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SampleError::Process(err) => Some(err),
            _ => None,
        }
    }
}

/// Main interface for accessing samx sample files
pub struct Samples;

impl Samples {
    /// Directory holding the samples
    pub fn samples_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("docs").join("samples")
    }

    fn sample_path(name: &str) -> Result<PathBuf, SampleError> {
        if !AVAILABLE_SAMPLES.contains(&name) {
            return Err(SampleError::NotAvailable(name.to_string()));
        }
        Ok(Self::samples_dir().join(name))
    }

    /// Raw sample content
    pub fn get_string(name: &str) -> Result<String, SampleError> {
        let path = Self::sample_path(name)?;
        fs::read_to_string(&path)
            .map_err(|e| SampleError::Io(format!("Failed to read {}: {}", path.display(), e)))
    }

    /// Run a sample through the default pipeline
    pub fn process(name: &str) -> Result<Processed, SampleError> {
        Self::process_with(name, &ProcessorConfig::default())
    }

    pub fn process_with(name: &str, config: &ProcessorConfig) -> Result<Processed, SampleError> {
        let content = Self::get_string(name)?;
        process(content.as_bytes(), config).map_err(SampleError::Process)
    }

    /// List all available sample files
    pub fn list() -> Vec<&'static str> {
        AVAILABLE_SAMPLES.to_vec()
    }
}
