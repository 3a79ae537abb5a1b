use std::path::Path;
use thiserror::Error;

/// Central error type for the Nexus exercises
#[derive(Error, Debug)]
pub enum NexusError {
    // ============================================================================
    // Value Errors
    // ============================================================================
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Missing key: {0}")]
    MissingKey(String),

    // ============================================================================
    // Resource Errors
    // ============================================================================
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    // ============================================================================
    // Garden Errors
    // ============================================================================
    #[error(transparent)]
    Garden(#[from] GardenError),

    // ============================================================================
    // Pipeline Errors
    // ============================================================================
    #[error("Unknown pipeline type: {0}")]
    UnknownPipelineType(String),

    #[error("{kind} processing error: {message}")]
    Processing { kind: String, message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Builder pattern validation error
    #[error("Builder error: {0}")]
    BuilderError(String),

    // ============================================================================
    // Generic/System Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Domain validation errors raised by the garden exercises
///
/// Every variant is a garden error, so callers that only care about the
/// umbrella category can match on `NexusError::Garden(_)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GardenError {
    #[error("{0}")]
    Plant(String),

    #[error("{0}")]
    Water(String),

    #[error("{0}")]
    Sunlight(String),

    #[error("{0}")]
    Temperature(String),
}

impl GardenError {
    /// Name of the narrower category, as printed by the demonstrations
    pub fn category(&self) -> &'static str {
        match self {
            GardenError::Plant(_) => "PlantError",
            GardenError::Water(_) => "WaterError",
            GardenError::Sunlight(_) => "SunlightError",
            GardenError::Temperature(_) => "TemperatureError",
        }
    }
}

impl NexusError {
    /// Short category name used when reporting caught errors
    pub fn category(&self) -> &'static str {
        match self {
            NexusError::InvalidValue(_) => "InvalidValue",
            NexusError::MissingKey(_) => "MissingKey",
            NexusError::FileNotFound(_) => "FileNotFound",
            NexusError::PermissionDenied(_) => "PermissionDenied",
            NexusError::Garden(e) => e.category(),
            NexusError::UnknownPipelineType(_) => "UnknownPipelineType",
            NexusError::Processing { .. } => "ProcessingError",
            NexusError::ConfigError(_) => "ConfigError",
            NexusError::BuilderError(_) => "BuilderError",
            NexusError::Io(_) => "IoError",
        }
    }

    /// Classify an IO error raised while touching `path`
    pub fn from_io(err: std::io::Error, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().display().to_string();
        match err.kind() {
            std::io::ErrorKind::NotFound => NexusError::FileNotFound(path),
            std::io::ErrorKind::PermissionDenied => NexusError::PermissionDenied(path),
            _ => NexusError::Io(err),
        }
    }

    /// Wrap an underlying failure as a processing error for an adapter kind
    pub fn processing(kind: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        NexusError::Processing {
            kind: kind.into(),
            message: cause.to_string(),
        }
    }
}

// Helper type alias for Results
pub type NexusResult<T> = Result<T, NexusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NexusError::UnknownPipelineType("xml".to_string());
        assert_eq!(err.to_string(), "Unknown pipeline type: xml");
    }

    #[test]
    fn test_io_error_converts_with_question_mark() {
        fn write_to_closed() -> NexusResult<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))?;
            Ok(())
        }
        let err = write_to_closed().unwrap_err();
        assert_eq!(err.category(), "IoError");
        assert_eq!(err.to_string(), "IO error: closed");
    }

    #[test]
    fn test_io_not_found_classification() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = NexusError::from_io(io_err, "lost_archive.txt");
        assert!(matches!(err, NexusError::FileNotFound(ref p) if p == "lost_archive.txt"));
    }

    #[test]
    fn test_io_permission_classification() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = NexusError::from_io(io_err, "vault.txt");
        assert!(matches!(err, NexusError::PermissionDenied(_)));
    }

    #[test]
    fn test_io_other_kind_stays_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err = NexusError::from_io(io_err, "x");
        assert!(matches!(err, NexusError::Io(_)));
    }

    #[test]
    fn test_garden_error_umbrella() {
        let err: NexusError = GardenError::Water("Not enough water in the tank!".to_string()).into();
        assert!(matches!(err, NexusError::Garden(GardenError::Water(_))));
        assert_eq!(err.to_string(), "Not enough water in the tank!");
    }

    #[test]
    fn test_garden_error_category() {
        assert_eq!(GardenError::Plant("x".into()).category(), "PlantError");
        assert_eq!(GardenError::Sunlight("x".into()).category(), "SunlightError");
    }

    #[test]
    fn test_category_names() {
        assert_eq!(NexusError::MissingKey("k".into()).category(), "MissingKey");
        let garden: NexusError = GardenError::Temperature("hot".into()).into();
        assert_eq!(garden.category(), "TemperatureError");
    }

    #[test]
    fn test_processing_wraps_cause() {
        let err = NexusError::processing("JSON", "expected value at line 1 column 1");
        assert_eq!(
            err.to_string(),
            "JSON processing error: expected value at line 1 column 1"
        );
    }
}
