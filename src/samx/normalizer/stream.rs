//! Streaming indentation normalizer
//!
//!     Reads raw samx text in fixed-size chunks and writes the normalized form to a sink:
//!
//!     - every increase of indentation becomes a `{{` line, every decrease one `}}` line
//!       per closed level (decided by the [IndentTracker]);
//!     - content lines are re-indented to `indent_unit` spaces per nesting level, capped at
//!       `max_indent` spaces (the content itself is never truncated);
//!     - runs of blank (empty or whitespace-only) lines collapse into a single empty line;
//!     - at end of input a terminating blank line is written, then every level still open
//!       is closed.
//!
//!     Lines may straddle chunk boundaries. The partial line, including the indent already
//!     counted for it, is carried over to the next chunk. A chunk is filled until it is
//!     full or the input is exhausted, so a short chunk is always the last one.
//!
//!     Indentation errors are reported with the 1-based source line number. By default they
//!     do not stop the scan: the offending line is dropped from the output and processing
//!     continues with the tracker state unchanged. `fail_fast` turns the first error into
//!     a returned [NormalizeError].
//!
//!     A content line that reads exactly like a marker cannot be told apart from one in the
//!     output, so it always aborts the run with [NormalizeError::MarkerLine].

use super::indent_tracker::{IndentError, IndentTracker, Transition};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Read, Write};
use tracing::{debug, warn};

pub const OPEN_MARKER: &[u8] = b"{{";
pub const CLOSE_MARKER: &[u8] = b"}}";

/// Largest accepted read buffer
pub const MAX_CHUNK_SIZE: usize = 16 * 1024 * 1024;
/// Largest accepted `max_indent`
pub const MAX_INDENT_LIMIT: usize = 64 * 1024;

/// Tunables for the normalizer; the defaults are the canonical samx values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Size of the read buffer in bytes
    pub chunk_size: usize,
    /// Spaces written per nesting level
    pub indent_unit: usize,
    /// Cap on the re-indentation of a single line
    pub max_indent: usize,
    /// Abort on the first indentation error instead of reporting and continuing
    pub fail_fast: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            chunk_size: 64 * 1024,
            indent_unit: 4,
            max_indent: 1024,
            fail_fast: false,
        }
    }
}

impl NormalizerConfig {
    /// Check that every tunable is within its accepted range
    pub fn validate(&self) -> Result<(), NormalizeError> {
        if self.chunk_size == 0 {
            return Err(NormalizeError::InvalidConfig("chunk_size must be positive"));
        }
        if self.chunk_size > MAX_CHUNK_SIZE {
            return Err(NormalizeError::InvalidConfig("chunk_size must not exceed 16 MiB"));
        }
        if self.max_indent > MAX_INDENT_LIMIT {
            return Err(NormalizeError::InvalidConfig("max_indent must not exceed 65536"));
        }
        if self.indent_unit == 0 || self.indent_unit > self.max_indent {
            return Err(NormalizeError::InvalidConfig(
                "indent_unit must be between 1 and max_indent",
            ));
        }
        Ok(())
    }
}

/// An indentation error tied to the source line it was found on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndentDiagnostic {
    /// 1-based line number in the raw input
    pub line: usize,
    #[serde(serialize_with = "serialize_display")]
    pub error: IndentError,
}

fn serialize_display<S: serde::Serializer>(
    error: &IndentError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

impl fmt::Display for IndentDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error on line {}: {}", self.line, self.error)
    }
}

/// Summary of a completed normalization run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizeReport {
    pub bytes_read: usize,
    /// Number of source lines seen, including an unterminated last line
    pub lines: usize,
    pub diagnostics: Vec<IndentDiagnostic>,
}

impl NormalizeReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[derive(Debug)]
pub enum NormalizeError {
    Io(io::Error),
    /// First indentation error, only raised in fail-fast mode
    Indent(IndentDiagnostic),
    /// A content line identical to a block marker, by 1-based source line
    MarkerLine(usize),
    InvalidConfig(&'static str),
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::Io(err) => write!(f, "I/O error while normalizing: {}", err),
            NormalizeError::Indent(diagnostic) => write!(f, "{}", diagnostic),
            NormalizeError::MarkerLine(line) => {
                write!(f, "Error on line {}: content line reads as a block marker", line)
            }
            NormalizeError::InvalidConfig(msg) => write!(f, "Invalid normalizer configuration: {}", msg),
        }
    }
}

impl std::error::Error for NormalizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NormalizeError::Io(err) => Some(err),
            NormalizeError::Indent(diagnostic) => Some(&diagnostic.error),
            NormalizeError::MarkerLine(_) | NormalizeError::InvalidConfig(_) => None,
        }
    }
}

impl From<io::Error> for NormalizeError {
    fn from(err: io::Error) -> Self {
        NormalizeError::Io(err)
    }
}

/// The line currently being assembled, possibly spanning several chunks
#[derive(Debug, Default)]
struct PendingLine {
    indent: usize,
    indent_done: bool,
    content: Vec<u8>,
}

impl PendingLine {
    fn is_empty(&self) -> bool {
        self.indent == 0 && !self.indent_done && self.content.is_empty()
    }

    fn reset(&mut self) {
        self.indent = 0;
        self.indent_done = false;
        self.content.clear();
    }
}

/// Normalizes one input stream into `output`
pub struct StreamNormalizer<W: Write> {
    output: W,
    config: NormalizerConfig,
    tracker: IndentTracker,
    last_line_was_blank: bool,
    spaces: Vec<u8>,
    line_number: usize,
    diagnostics: Vec<IndentDiagnostic>,
}

impl<W: Write> StreamNormalizer<W> {
    pub fn new(output: W) -> Self {
        Self::with_config(output, NormalizerConfig::default())
    }

    pub fn with_config(output: W, config: NormalizerConfig) -> Self {
        Self {
            output,
            config,
            tracker: IndentTracker::new(),
            last_line_was_blank: false,
            spaces: Vec::new(),
            line_number: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Read `input` to exhaustion, writing the normalized text to the output sink
    pub fn normalize<R: Read>(mut self, mut input: R) -> Result<NormalizeReport, NormalizeError> {
        self.config.validate()?;
        self.spaces = vec![b' '; self.config.max_indent];

        let mut buffer = vec![0u8; self.config.chunk_size];
        let mut pending = PendingLine::default();
        let mut bytes_read = 0;

        loop {
            let size = fill_chunk(&mut input, &mut buffer)?;
            bytes_read += size;
            self.scan_chunk(&buffer[..size], &mut pending)?;

            if size < buffer.len() {
                break;
            }
        }

        // unterminated last line
        if !pending.is_empty() {
            self.line_number += 1;
            let content = std::mem::take(&mut pending.content);
            self.push_line(pending.indent, &content)?;
        }

        self.finish()?;

        debug!(
            bytes_read,
            lines = self.line_number,
            diagnostics = self.diagnostics.len(),
            "normalized input"
        );

        Ok(NormalizeReport {
            bytes_read,
            lines: self.line_number,
            diagnostics: self.diagnostics,
        })
    }

    fn scan_chunk(&mut self, chunk: &[u8], pending: &mut PendingLine) -> Result<(), NormalizeError> {
        let mut pos = 0;

        while pos < chunk.len() {
            if !pending.indent_done {
                let spaces = chunk[pos..].iter().take_while(|&&b| b == b' ').count();
                pending.indent += spaces;
                pos += spaces;
                if pos == chunk.len() {
                    // the indent may continue in the next chunk
                    break;
                }
                pending.indent_done = true;
            }

            match chunk[pos..].iter().position(|&b| b == b'\n') {
                Some(offset) => {
                    let end = pos + offset;
                    self.line_number += 1;
                    if pending.content.is_empty() {
                        self.push_line(pending.indent, &chunk[pos..end])?;
                    } else {
                        pending.content.extend_from_slice(&chunk[pos..end]);
                        let content = std::mem::take(&mut pending.content);
                        self.push_line(pending.indent, &content)?;
                        pending.content = content;
                    }
                    pending.reset();
                    pos = end + 1;
                }
                None => {
                    pending.content.extend_from_slice(&chunk[pos..]);
                    pos = chunk.len();
                }
            }
        }

        Ok(())
    }

    fn push_line(&mut self, indent: usize, content: &[u8]) -> Result<(), NormalizeError> {
        let content = content.strip_suffix(b"\r").unwrap_or(content);

        if content.is_empty() {
            self.write_blank_line()?;
            return Ok(());
        }

        if content == OPEN_MARKER || content == CLOSE_MARKER {
            return Err(NormalizeError::MarkerLine(self.line_number));
        }

        match self.tracker.observe(indent) {
            Ok(transitions) => {
                self.write_transitions(&transitions)?;
                let reindent = self
                    .tracker
                    .depth()
                    .saturating_mul(self.config.indent_unit)
                    .min(self.config.max_indent);
                self.output.write_all(&self.spaces[..reindent])?;
                self.output.write_all(content)?;
                self.output.write_all(b"\n")?;
                self.last_line_was_blank = false;
                Ok(())
            }
            Err(error) => {
                let diagnostic = IndentDiagnostic {
                    line: self.line_number,
                    error,
                };
                warn!(line = diagnostic.line, error = %diagnostic.error, "indentation error");
                if self.config.fail_fast {
                    return Err(NormalizeError::Indent(diagnostic));
                }
                self.diagnostics.push(diagnostic);
                Ok(())
            }
        }
    }

    fn write_blank_line(&mut self) -> io::Result<()> {
        if !self.last_line_was_blank {
            self.output.write_all(b"\n")?;
        }
        self.last_line_was_blank = true;
        Ok(())
    }

    fn write_transitions(&mut self, transitions: &[Transition]) -> io::Result<()> {
        for transition in transitions {
            let marker = match transition {
                Transition::Open => OPEN_MARKER,
                Transition::Close => CLOSE_MARKER,
            };
            self.output.write_all(marker)?;
            self.output.write_all(b"\n")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.write_blank_line()?;
        let transitions = self.tracker.flush();
        self.write_transitions(&transitions)?;
        self.output.flush()
    }
}

/// Fill `buffer` from `input`, stopping early only at end of input
fn fill_chunk<R: Read>(input: &mut R, buffer: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        match input.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}
