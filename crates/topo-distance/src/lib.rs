//! Distance transform and morphology collaborators consumed by the
//! propagation engine: the signed priority distance map, and ball
//! dilation/erosion used to synthesize a default reference mask.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edt;
pub mod field;
pub mod morphology;
pub mod signed;

pub use field::{squared_distance_to, DistanceField};
pub use morphology::{dilate_by_radius, erode_by_radius};
pub use signed::{signed_distance_map, SignedDistanceMap};
