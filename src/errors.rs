use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Enumeration of all possible errors that can occur while carving a tree
#[derive(Debug)]
pub enum ExtractorError {
    Read(ReadError),
    Output(OutputError),
    Chunk(ChunkError),
    Config(ConfigError),
    Other(io::Error),
}

/// A source file could not be read into memory
#[derive(Debug)]
pub struct ReadError {
    pub path: PathBuf,
    pub source: io::Error,
}

impl ReadError {
    /// Create a new error for the given source path.
    pub fn new(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Destination directory or entry could not be written or removed
#[derive(Debug)]
pub struct OutputError {
    pub path: PathBuf,
    pub message: String,
}

impl OutputError {
    /// Create a new error with the given path and message.
    pub fn new(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }
}

/// Chunk framing errors
#[derive(Debug)]
pub enum ChunkError {
    /// Fewer than the 8 header bytes are available at the match position
    Truncated { offset: usize, available: usize },
    /// Declared length runs past the buffer and the policy rejects it.
    /// `available` counts the bytes after the 8-byte header, like `declared`.
    Oversize {
        offset: usize,
        declared: u32,
        available: usize,
    },
}

/// Invalid configuration or arguments
#[derive(Debug)]
pub struct ConfigError {
    pub message: String,
}

impl ConfigError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ExtractorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractorError::Other(err) => write!(f, "I/O error: {}", err),
            ExtractorError::Read(err) => write!(f, "Read error: {}", err),
            ExtractorError::Output(err) => write!(f, "Output error: {}", err),
            ExtractorError::Chunk(err) => write!(f, "Chunk error: {}", err),
            ExtractorError::Config(err) => write!(f, "Configuration error: {}", err),
        }
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.source)
    }
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

impl fmt::Display for ChunkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkError::Truncated { offset, available } => write!(
                f,
                "chunk header at offset {} is truncated ({} bytes available)",
                offset, available
            ),
            ChunkError::Oversize {
                offset,
                declared,
                available,
            } => write!(
                f,
                "chunk at offset {} declares length {} but only {} bytes follow the header",
                offset, declared, available
            ),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ExtractorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ExtractorError::Read(err) => Some(&err.source),
            ExtractorError::Other(err) => Some(err),
            _ => None,
        }
    }
}
impl Error for ReadError {}
impl Error for OutputError {}
impl Error for ChunkError {}
impl Error for ConfigError {}

// Conversion implementations
impl From<io::Error> for ExtractorError {
    fn from(err: io::Error) -> Self {
        ExtractorError::Other(err)
    }
}

impl From<ReadError> for ExtractorError {
    fn from(err: ReadError) -> Self {
        ExtractorError::Read(err)
    }
}

impl From<OutputError> for ExtractorError {
    fn from(err: OutputError) -> Self {
        ExtractorError::Output(err)
    }
}

impl From<ChunkError> for ExtractorError {
    fn from(err: ChunkError) -> Self {
        ExtractorError::Chunk(err)
    }
}

impl From<ConfigError> for ExtractorError {
    fn from(err: ConfigError) -> Self {
        ExtractorError::Config(err)
    }
}

impl From<ExtractorError> for io::Error {
    fn from(err: ExtractorError) -> Self {
        io::Error::other(err)
    }
}

// Type alias for Result with ExtractorError
pub type ExtractorResult<T> = Result<T, ExtractorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = ExtractorError::from(ChunkError::Oversize {
            offset: 16,
            declared: 1000,
            available: 42,
        });
        assert_eq!(
            err.to_string(),
            "Chunk error: chunk at offset 16 declares length 1000 but only 42 bytes follow the header"
        );

        let err = ExtractorError::from(ReadError::new(
            "in/a.dat",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        ));
        assert!(err.to_string().starts_with("Read error: in/a.dat"));
        assert!(err.source().is_some());
    }
}
