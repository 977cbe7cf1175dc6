//! Topology-preserving binary morphology for 3D voxel volumes.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all `topo-fix` sub-crates. For most users, adding `topo-fix` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use topo_fix::prelude::*;
//!
//! let dims = Dims3::new(16, 16, 16);
//! let mut input = IntVolume::filled(dims, 0);
//! for z in 4..12 {
//!     for y in 4..12 {
//!         for x in 4..12 {
//!             input.set(Coord3::new(x, y, z), 1);
//!         }
//!     }
//! }
//!
//! let config = EngineConfig::builder().radius(2).build().unwrap();
//! let closed = carve_outside(&input, &config).unwrap();
//! let opened = carve_inside(&input, &config).unwrap();
//! assert_eq!(closed.dims(), input.dims());
//! assert_eq!(opened.dims(), input.dims());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`] | `topo-core` | Voxel label state machine, coordinates, errors |
//! | [`space`] | `topo-space` | Padded labeled volume, binary masks, neighbourhoods |
//! | [`topology`] | `topo-topology` | Euler and connected-component simple-point tests |
//! | [`distance`] | `topo-distance` | Signed distance map, dilation, erosion |
//! | [`engine`] | `topo-engine` | Configuration and the `carve_outside`/`carve_inside` entry points |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Voxel label state machine, coordinates, and error types (`topo-core`).
pub use topo_core as core;

/// Padded labeled volume, binary masks, and neighbourhood tables
/// (`topo-space`).
pub use topo_space as space;

/// Euler-characteristic and connected-component simple-point tests
/// (`topo-topology`).
pub use topo_topology as topology;

/// Signed distance map and ball dilation/erosion (`topo-distance`).
pub use topo_distance as distance;

/// Engine configuration and the `carve_outside`/`carve_inside` entry
/// points (`topo-engine`).
pub use topo_engine as engine;

/// Common imports for typical `topo-fix` usage.
///
/// ```rust
/// use topo_fix::prelude::*;
/// ```
pub mod prelude {
    pub use topo_core::{Coord3, Dims3, EngineError, IntVolume, Label};
    pub use topo_distance::{dilate_by_radius, erode_by_radius, signed_distance_map};
    pub use topo_engine::{carve_inside, carve_outside, EngineConfig, Variant};
    pub use topo_space::{BinaryVolume, PaddedLabelVolume};
}
