//! Reusable scenario fixtures for engine tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{dumbbell_with_legs, ring_with_hole, solid_cube};
