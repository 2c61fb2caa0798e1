//! Error types for pattern generation, color parsing and image export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum PfpError {
    /// A dimension parameter was zero or otherwise unusable
    ///
    /// Covers the grid size, the pixel block size, the batch count and the
    /// preview column count.
    InvalidSize {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
    },

    /// Malformed explicit color specification
    InvalidColor {
        /// The color text as supplied by the caller
        input: String,
        /// Explanation of why the color was rejected
        reason: String,
    },

    /// Failed to encode or write a generated image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The save directory already holds more data than allowed
    CacheLimit {
        /// Directory whose size was checked
        path: PathBuf,
        /// Configured limit in megabytes
        limit_mb: f64,
    },

    /// No home directory could be resolved for the default save location
    MissingHomeDirectory,
}

impl fmt::Display for PfpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { parameter, value } => {
                write!(
                    f,
                    "Invalid size '{parameter}' = '{value}': must be a positive integer"
                )
            }
            Self::InvalidColor { input, reason } => {
                write!(f, "Invalid color '{input}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::CacheLimit { path, limit_mb } => {
                write!(
                    f,
                    "Cache limit of {limit_mb} MB reached, clear '{}' to save more images",
                    path.display()
                )
            }
            Self::MissingHomeDirectory => {
                write!(f, "Could not determine the home directory for saving images")
            }
        }
    }
}

impl std::error::Error for PfpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, PfpError>;

/// Create an invalid size error
pub fn invalid_size(parameter: &'static str, value: &impl ToString) -> PfpError {
    PfpError::InvalidSize {
        parameter,
        value: value.to_string(),
    }
}

/// Create an invalid color error
pub fn invalid_color(input: &str, reason: &impl ToString) -> PfpError {
    PfpError::InvalidColor {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

/// Reject zero for a dimension parameter
///
/// # Errors
///
/// Returns `PfpError::InvalidSize` when `value` is zero
pub fn require_positive(parameter: &'static str, value: usize) -> Result<usize> {
    if value == 0 {
        Err(invalid_size(parameter, &value))
    } else {
        Ok(value)
    }
}
