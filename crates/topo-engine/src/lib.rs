//! Orchestration layer: wires the core label state machine, the distance
//! and morphology collaborators, and the topology invariants into the two
//! public operations, topology-preserving closing and opening.
//!
//! This is the only crate in the workspace that logs: the algorithmic
//! leaf crates (`topo-space`, `topo-topology`, `topo-distance`) stay pure
//! and silent, and every `tracing` call site lives here, at pass
//! boundaries.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
mod finalize;
mod prepare;
mod propagate;
pub mod variant;

pub use config::{EngineConfig, EngineConfigBuilder};
pub use engine::{carve_inside, carve_inside_with_progress, carve_outside, carve_outside_with_progress, ProgressSink};
pub use variant::Variant;
