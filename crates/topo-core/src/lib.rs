//! Core types shared across the topology-preserving morphology engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! fundamental abstractions used throughout the workspace: the voxel label
//! state machine, 3D coordinates and extents, and the error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod int_volume;
pub mod label;

pub use coord::{Coord3, Dims3};
pub use error::EngineError;
pub use int_volume::IntVolume;
pub use label::Label;
