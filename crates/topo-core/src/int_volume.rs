//! The caller-facing voxel volume: a dense `i32` grid over the interior
//! region `R`, unpadded.
//!
//! This is the type carried across the engine's public boundary as both
//! input and output. Internally the engine re-labels it into a
//! [`crate::Label`]-tagged [`topo_space::PaddedLabelVolume`] and only
//! converts back to `IntVolume` at the finalization step.

use crate::coord::{Coord3, Dims3};

/// A dense `i32` volume over the interior region `R`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntVolume {
    dims: Dims3,
    cells: Vec<i32>,
}

impl IntVolume {
    /// Allocate a volume of the given extents, every cell set to `value`.
    pub fn filled(dims: Dims3, value: i32) -> Self {
        Self {
            dims,
            cells: vec![value; dims.voxel_count()],
        }
    }

    /// Extents of the interior region.
    pub fn dims(&self) -> Dims3 {
        self.dims
    }

    fn index(&self, c: Coord3) -> usize {
        debug_assert!((c.x as usize) < self.dims.nx);
        debug_assert!((c.y as usize) < self.dims.ny);
        debug_assert!((c.z as usize) < self.dims.nz);
        (c.z as usize * self.dims.ny + c.y as usize) * self.dims.nx + c.x as usize
    }

    /// Read the value at an interior coordinate.
    pub fn get(&self, c: Coord3) -> i32 {
        self.cells[self.index(c)]
    }

    /// Write the value at an interior coordinate.
    pub fn set(&mut self, c: Coord3, value: i32) {
        let idx = self.index(c);
        self.cells[idx] = value;
    }

    /// Iterate `(coord, value)` pairs in row-major scan order.
    pub fn iterate(&self) -> impl Iterator<Item = (Coord3, i32)> + '_ {
        let (nx, ny, nz) = (self.dims.nx, self.dims.ny, self.dims.nz);
        (0..nz).flat_map(move |z| {
            (0..ny).flat_map(move |y| {
                (0..nx).map(move |x| {
                    let c = Coord3::new(x as i32, y as i32, z as i32);
                    (c, self.get(c))
                })
            })
        })
    }
}
