//! Separable 3D squared Euclidean distance transform and the
//! [`DistanceField`] it produces.

use crate::edt::dt_1d;
use topo_core::{Coord3, Dims3};

fn index(dims: Dims3, x: usize, y: usize, z: usize) -> usize {
    (z * dims.ny + y) * dims.nx + x
}

/// Squared Euclidean distance from every cell of a `dims`-shaped grid to
/// the nearest cell for which `seed` returns `true`, honoring per-axis
/// `spacing`.
///
/// Runs the Felzenszwalt-Huttenlocher 1D transform separably along x,
/// then y, then z. Cells with no seed anywhere in the grid carry
/// `f64::INFINITY`.
pub fn squared_distance_to(
    dims: Dims3,
    spacing: (f64, f64, f64),
    seed: impl Fn(Coord3) -> bool,
) -> Vec<f64> {
    let (nx, ny, nz) = (dims.nx, dims.ny, dims.nz);
    let mut buf = vec![0.0f64; dims.voxel_count()];
    for z in 0..nz {
        for y in 0..ny {
            for x in 0..nx {
                let c = Coord3::new(x as i32, y as i32, z as i32);
                buf[index(dims, x, y, z)] = if seed(c) { 0.0 } else { f64::INFINITY };
            }
        }
    }
    if nx == 0 || ny == 0 || nz == 0 {
        return buf;
    }

    // Pass along x.
    let mut row = vec![0.0f64; nx];
    for z in 0..nz {
        for y in 0..ny {
            for x in 0..nx {
                row[x] = buf[index(dims, x, y, z)];
            }
            let out = dt_1d(&row, spacing.0);
            for x in 0..nx {
                buf[index(dims, x, y, z)] = out[x];
            }
        }
    }

    // Pass along y.
    let mut col = vec![0.0f64; ny];
    for z in 0..nz {
        for x in 0..nx {
            for y in 0..ny {
                col[y] = buf[index(dims, x, y, z)];
            }
            let out = dt_1d(&col, spacing.1);
            for y in 0..ny {
                buf[index(dims, x, y, z)] = out[y];
            }
        }
    }

    // Pass along z.
    let mut pillar = vec![0.0f64; nz];
    for y in 0..ny {
        for x in 0..nx {
            for z in 0..nz {
                pillar[z] = buf[index(dims, x, y, z)];
            }
            let out = dt_1d(&pillar, spacing.2);
            for z in 0..nz {
                buf[index(dims, x, y, z)] = out[z];
            }
        }
    }

    buf
}

/// A dense field of `f64` distance values over an unpadded interior
/// region, the same shape as a [`topo_space::BinaryVolume`].
#[derive(Clone, Debug)]
pub struct DistanceField {
    dims: Dims3,
    values: Vec<f64>,
}

impl DistanceField {
    /// Wrap a raw buffer already in row-major `(z, y, x)` scan order.
    pub fn from_raw(dims: Dims3, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), dims.voxel_count());
        Self { dims, values }
    }

    /// Extents of the field.
    pub fn dims(&self) -> Dims3 {
        self.dims
    }

    /// Read the value at an interior coordinate.
    pub fn get(&self, c: Coord3) -> f64 {
        self.values[index(self.dims, c.x as usize, c.y as usize, c.z as usize)]
    }
}
