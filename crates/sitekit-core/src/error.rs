//! Error handling for SiteKit
//!
//! Provides the error taxonomy for all layers of the toolkit:
//! - Survey errors (boundary traversal)
//! - Levels errors (bench/FFL calculation and site checks)
//! - CAD errors (host command round trips)
//!
//! Per-record problems (bad bearings, skipped segments) are NOT errors: they
//! are collected as diagnostics on the successful result so a batch keeps
//! going. Only whole-operation failures surface through these types.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Survey error type
///
/// Represents whole-operation failures of the boundary traversal engine.
#[derive(Error, Debug, Clone)]
pub enum SurveyError {
    /// No usable boundary rows survived parsing; there is nothing to draw.
    #[error("Insufficient geometry: {usable} usable of {total} boundary rows")]
    InsufficientGeometry {
        /// Rows that produced a segment.
        usable: usize,
        /// Rows supplied to the traversal.
        total: usize,
    },
}

/// Levels error type
///
/// Represents whole-operation failures of the site level calculator and the
/// site compatibility checker.
#[derive(Error, Debug, Clone)]
pub enum LevelsError {
    /// The reduced-level input was empty or unparsable.
    #[error("No valid levels: {reason}")]
    NoValidLevels {
        /// Why the input set was rejected.
        reason: String,
    },

    /// Site checks were requested before a successful level calculation.
    #[error("Site checks require a completed level calculation")]
    PrerequisiteMissing,
}

/// CAD host error type
///
/// Represents failures of individual host command round trips. A failed
/// polyline call is reported per-call and never halts the rest of a batch.
#[derive(Error, Debug, Clone)]
pub enum CadError {
    /// The host rejected or failed a command.
    #[error("Command {command} failed: {reason}")]
    CommandFailed {
        /// The command name (e.g. "CreatePolylines").
        command: String,
        /// The reason reported by the host.
        reason: String,
    },

    /// A named field does not exist on the host side.
    #[error("Field not found: {field}")]
    FieldNotFound {
        /// The field identifier.
        field: String,
    },
}

/// Main error type for SiteKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Survey error
    #[error(transparent)]
    Survey(#[from] SurveyError),

    /// Levels error
    #[error(transparent)]
    Levels(#[from] LevelsError),

    /// CAD host error
    #[error(transparent)]
    Cad(#[from] CadError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a traversal with no usable geometry
    pub fn is_insufficient_geometry(&self) -> bool {
        matches!(self, Error::Survey(SurveyError::InsufficientGeometry { .. }))
    }

    /// Check if this is an empty/unparsable level set
    pub fn is_no_valid_levels(&self) -> bool {
        matches!(self, Error::Levels(LevelsError::NoValidLevels { .. }))
    }

    /// Check if this is a site check invoked before a level calculation
    pub fn is_prerequisite_missing(&self) -> bool {
        matches!(self, Error::Levels(LevelsError::PrerequisiteMissing))
    }

    /// Check if this is a CAD host error
    pub fn is_cad_error(&self) -> bool {
        matches!(self, Error::Cad(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SurveyError::InsufficientGeometry {
            usable: 0,
            total: 7,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient geometry: 0 usable of 7 boundary rows"
        );

        let err = LevelsError::NoValidLevels {
            reason: "'abc' is not a number".to_string(),
        };
        assert_eq!(err.to_string(), "No valid levels: 'abc' is not a number");

        let err = CadError::CommandFailed {
            command: "CreatePolylines".to_string(),
            reason: "host offline".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Command CreatePolylines failed: host offline"
        );
    }

    #[test]
    fn test_error_classifiers() {
        let err: Error = LevelsError::PrerequisiteMissing.into();
        assert!(err.is_prerequisite_missing());
        assert!(!err.is_cad_error());

        let err: Error = SurveyError::InsufficientGeometry {
            usable: 0,
            total: 0,
        }
        .into();
        assert!(err.is_insufficient_geometry());

        let err: Error = CadError::FieldNotFound {
            field: "project_name".to_string(),
        }
        .into();
        assert!(err.is_cad_error());
    }
}
