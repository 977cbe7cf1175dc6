//! Pure topology invariants over a 3x3x3 binary patch.
//!
//! The propagation engine decides, for each candidate voxel, whether
//! flipping it between foreground and background alters topology. For the
//! (26, 6) connectivity pair this reduces to a local test on the 3x3x3
//! patch centered at the voxel: a point is simple iff its flip preserves
//! the Euler characteristic and the component counts of foreground and
//! background touching the patch.
//!
//! This is a leaf crate: no dependencies, pure functions, no I/O.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cc;
pub mod euler;
pub mod nonmanifold;
pub mod patch;
mod union_find;

pub use cc::cc_invariant;
pub use euler::euler_invariant;
pub use nonmanifold::nonmanifold_remove;
pub use patch::{Patch, CENTER};
