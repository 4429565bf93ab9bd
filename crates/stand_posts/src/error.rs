//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! unit and spacing validation, unprojected references, empty or malformed input geometry,
//! capped rejection sampling, and failures reported by a [`crate::survey::io::PostSink`].
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported unit of measure '{0}'")]
    InvalidUnit(String),

    #[error("invalid grid spacing {value}: spacing must be finite and > 0")]
    InvalidSpacing { value: f64 },

    #[error("spatial reference has no linear unit ({0}); project the stands before sampling")]
    UnprojectedReference(String),

    #[error("no stand polygons supplied")]
    EmptyInput,

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(
        "rejection sampling gave up after {attempts} attempts in cell ({col}, {row}) for stand {stand}"
    )]
    SamplingTimeout {
        col: usize,
        row: usize,
        stand: usize,
        attempts: usize,
    },

    #[error("post sink failed: {0}")]
    Sink(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampling_timeout_message_names_cell_and_stand() {
        let err = Error::SamplingTimeout {
            col: 3,
            row: 7,
            stand: 1,
            attempts: 500,
        };
        let msg = err.to_string();
        assert!(msg.contains("(3, 7)"));
        assert!(msg.contains("stand 1"));
        assert!(msg.contains("500"));
    }

    #[test]
    fn io_errors_convert_transparently() {
        let io = std::io::Error::other("disk full");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "disk full");
    }
}
