//! Error types shared across GridCam crates.
//!
//! Note that the capture-source contract itself reports plain booleans and
//! `Option` (see the capture-engine crate); `GridcamError` is for the paths
//! around it — snapshot I/O, validation helpers, host integration.

/// Top-level error type for GridCam operations.
#[derive(Debug, thiserror::Error)]
pub enum GridcamError {
    #[error("Capture error: {message}")]
    Capture { message: String },

    #[error("Layout error: {message}")]
    Layout { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Unsupported operation: {message}")]
    Unsupported { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using GridcamError.
pub type GridcamResult<T> = Result<T, GridcamError>;

impl GridcamError {
    pub fn capture(msg: impl Into<String>) -> Self {
        Self::Capture {
            message: msg.into(),
        }
    }

    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported {
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_carry_their_message() {
        let err = GridcamError::layout("rows do not divide the child count");
        assert!(err.to_string().contains("rows do not divide"));
        assert!(err.to_string().starts_with("Layout error"));
    }

    #[test]
    fn io_errors_convert_transparently() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such device");
        let err: GridcamError = io.into();
        assert!(err.to_string().contains("no such device"));
    }
}
