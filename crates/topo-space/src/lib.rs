//! Padded 3D voxel volumes and the fixed neighbourhood tables used by the
//! topology-preserving morphology engine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod binary_volume;
pub mod neighbourhood;
pub mod volume;

pub use binary_volume::BinaryVolume;
pub use neighbourhood::{NEIGHBOURS_18, NEIGHBOURS_26};
pub use volume::PaddedLabelVolume;
