//! Signed Euclidean distance map: the priority field consumed by the
//! propagation engine.
//!
//! Negative inside foreground, positive outside, by convention. Computed
//! once at preparation time over the padded region `R+` and read-only
//! thereafter; its values are never interpreted beyond their use as a
//! heap priority key.

use crate::field::squared_distance_to;
use topo_core::{Coord3, Dims3};
use topo_space::PaddedLabelVolume;

fn padded_index(dims: Dims3, px: usize, py: usize, pz: usize) -> usize {
    (pz * dims.ny + py) * dims.nx + px
}

/// The signed distance map over a padded labeled volume's `R+`.
#[derive(Clone, Debug)]
pub struct SignedDistanceMap {
    padded_dims: Dims3,
    values: Vec<f64>,
}

impl SignedDistanceMap {
    /// Signed distance at an interior coordinate (negative inside the
    /// initial `HardForeground` set, positive outside).
    pub fn get(&self, c: Coord3) -> f64 {
        self.get_padded(c.x + 1, c.y + 1, c.z + 1)
    }

    /// Signed distance at a raw padded-space coordinate, matching
    /// [`PaddedLabelVolume::get_padded`]'s coordinate convention.
    pub fn get_padded(&self, px: i32, py: i32, pz: i32) -> f64 {
        self.values[padded_index(self.padded_dims, px as usize, py as usize, pz as usize)]
    }
}

/// Build the signed distance map from the `HardForeground` set of a
/// padded labeled volume, honoring per-axis `spacing`.
pub fn signed_distance_map(volume: &PaddedLabelVolume, spacing: (f64, f64, f64)) -> SignedDistanceMap {
    use topo_core::Label;

    let dims = volume.dims();
    let padded_dims = Dims3::new(dims.nx + 2, dims.ny + 2, dims.nz + 2);
    let is_hard = |c: Coord3| {
        volume.get_padded(c.x, c.y, c.z) == Label::HardForeground
    };

    let sq_outside = squared_distance_to(padded_dims, spacing, is_hard);
    let sq_inside = squared_distance_to(padded_dims, spacing, |c| !is_hard(c));

    let mut values = vec![0.0f64; padded_dims.voxel_count()];
    for (i, v) in values.iter_mut().enumerate() {
        let px = i % padded_dims.nx;
        let py = (i / padded_dims.nx) % padded_dims.ny;
        let pz = i / (padded_dims.nx * padded_dims.ny);
        let hard = is_hard(Coord3::new(px as i32, py as i32, pz as i32));
        *v = if hard {
            -sq_inside[i].sqrt()
        } else {
            sq_outside[i].sqrt()
        };
    }

    SignedDistanceMap {
        padded_dims,
        values,
    }
}
