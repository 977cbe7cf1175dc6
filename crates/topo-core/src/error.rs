//! Error taxonomy for the topology-preserving morphology engine.
//!
//! Mirrors the error table in the engine's external-interface contract:
//! one variant per failure kind, each with manual `Display`/`Error` impls.

use std::error::Error;
use std::fmt;

/// Errors raised by engine entry points before or during a run.
///
/// The propagation core itself never fails logically — the topology tests
/// are total functions over a fixed-size patch. Only preparation-time
/// validation and collaborator calls (distance transform, dilation/erosion)
/// can fail.
#[derive(Debug)]
pub enum EngineError {
    /// Input, output, or supplied mask volumes differ in size.
    DimensionMismatch {
        /// Dimensions of the input volume.
        input: (usize, usize, usize),
        /// Dimensions of the volume that disagreed with it.
        other: (usize, usize, usize),
        /// Which volume disagreed (`"mask"`, `"output"`, ...).
        which: &'static str,
    },
    /// `radius` was zero or negative.
    InvalidRadius {
        /// The rejected radius value.
        radius: i64,
    },
    /// Volume allocation failed.
    OutOfMemory {
        /// Number of voxels the allocation attempted to cover.
        requested_voxels: usize,
    },
    /// A collaborator (distance transform, dilation/erosion) reported failure.
    CollaboratorFailure {
        /// Name of the failing collaborator.
        collaborator: &'static str,
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch {
                input,
                other,
                which,
            } => write!(
                f,
                "dimension mismatch: input is {input:?}, {which} is {other:?}"
            ),
            Self::InvalidRadius { radius } => {
                write!(f, "invalid radius {radius}: must be >= 1")
            }
            Self::OutOfMemory { requested_voxels } => {
                write!(f, "allocation failed for {requested_voxels} voxels")
            }
            Self::CollaboratorFailure {
                collaborator,
                reason,
            } => write!(f, "collaborator '{collaborator}' failed: {reason}"),
        }
    }
}

impl Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_dimensions() {
        let err = EngineError::DimensionMismatch {
            input: (4, 4, 4),
            other: (4, 4, 5),
            which: "mask",
        };
        assert!(err.to_string().contains("mask"));
        assert!(err.to_string().contains("(4, 4, 5)"));
    }

    #[test]
    fn invalid_radius_message_names_value() {
        let err = EngineError::InvalidRadius { radius: 0 };
        assert_eq!(err.to_string(), "invalid radius 0: must be >= 1");
    }

    #[test]
    fn collaborator_failure_names_collaborator() {
        let err = EngineError::CollaboratorFailure {
            collaborator: "distance_transform",
            reason: "non-finite spacing".to_string(),
        };
        assert!(err.to_string().starts_with("collaborator 'distance_transform'"));
    }
}
