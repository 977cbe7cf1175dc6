//! The 3D integer coordinate type and volume extents.

use std::fmt;
use std::ops::Add;

/// A coordinate in a 3D voxel volume.
///
/// Dimension is fixed at three throughout this engine; there is no
/// generic n-D coordinate type (see the engine's stated non-goals).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coord3 {
    /// Build a coordinate from its three components.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Component-wise addition against a raw offset triple.
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }
}

impl Add<(i32, i32, i32)> for Coord3 {
    type Output = Coord3;

    fn add(self, (dx, dy, dz): (i32, i32, i32)) -> Coord3 {
        self.offset(dx, dy, dz)
    }
}

impl fmt::Display for Coord3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<(i32, i32, i32)> for Coord3 {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

/// The extents of a 3D volume's interior region, `R`.
///
/// Dimensions are in voxels and exclude the one-voxel padding shell that
/// wraps the interior in a padded labeled volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dims3 {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
}

impl Dims3 {
    pub const fn new(nx: usize, ny: usize, nz: usize) -> Self {
        Self { nx, ny, nz }
    }

    /// Total voxel count of the interior region (`nx * ny * nz`).
    pub const fn voxel_count(self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// `true` if any axis has zero extent.
    pub const fn is_empty(self) -> bool {
        self.nx == 0 || self.ny == 0 || self.nz == 0
    }
}

impl fmt::Display for Dims3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.nx, self.ny, self.nz)
    }
}
