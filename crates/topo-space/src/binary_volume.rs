//! A plain binary volume over the interior region, unpadded.
//!
//! Used to represent reference masks (caller-supplied or synthesized by
//! dilation/erosion): unlike [`crate::PaddedLabelVolume`], a mask has no
//! label state machine and no padding shell — it is a simple predicate
//! over `R`.

use topo_core::{Coord3, Dims3};

/// A dense boolean volume over the interior region `R`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryVolume {
    dims: Dims3,
    cells: Vec<bool>,
}

impl BinaryVolume {
    /// Allocate a volume of the given extents, every cell set to `value`.
    pub fn filled(dims: Dims3, value: bool) -> Self {
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
    pub fn get(&self, c: Coord3) -> bool {
        self.cells[self.index(c)]
    }

    /// Write the value at an interior coordinate.
    pub fn set(&mut self, c: Coord3, value: bool) {
        let idx = self.index(c);
        self.cells[idx] = value;
    }

    /// Iterate `(coord, value)` pairs in row-major scan order.
    pub fn iterate(&self) -> impl Iterator<Item = (Coord3, bool)> + '_ {
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

    /// Build a new volume of the same extents by applying `f` to every cell.
    pub fn map(&self, f: impl Fn(bool) -> bool) -> Self {
        Self {
            dims: self.dims,
            cells: self.cells.iter().map(|&v| f(v)).collect(),
        }
    }
}
