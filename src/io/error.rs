//! Error types for generation and export operations
//!
//! Placement rejections are deliberately absent here: a refused candidate
//! is the retry loop's normal fuel and travels as a domain value
//! (`algorithm::validator::PlacementRejection`), never as an error.

use std::fmt;
use std::path::PathBuf;

/// Main error type for tileset construction, generation setup, and export
#[derive(Debug)]
pub enum GenerationError {
    /// Tileset requested for a color count the encoding cannot represent
    UnsupportedColorCount {
        /// The requested color count
        color_count: usize,
        /// The color count the bit-flag codec supports
        supported: usize,
    },

    /// Invocation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save the rendered grid to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
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
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedColorCount {
                color_count,
                supported,
            } => {
                write!(
                    f,
                    "Unsupported color count {color_count}: the edge encoding supports exactly {supported} colors"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::GenerationError;

    #[test]
    fn test_unsupported_color_count_display() {
        let error = GenerationError::UnsupportedColorCount {
            color_count: 3,
            supported: 2,
        };

        let message = error.to_string();
        assert!(message.contains('3'));
        assert!(message.contains("supports exactly 2"));
    }

    #[test]
    fn test_invalid_parameter_display() {
        let error = super::invalid_parameter("size", &"0x12", &"width must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'size' = '0x12': width must be positive"
        );
    }
}
