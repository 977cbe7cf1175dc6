//! The padded labeled volume: dense storage with a one-voxel background shell.

use topo_core::{Coord3, Dims3, Label};

/// A dense 3D array of [`Label`], padded by one voxel of permanent
/// `Background` on every face.
///
/// The interior region `R` has extents `dims`; the padded region `R+`
/// adds one voxel on every side, so every interior voxel has a complete
/// 3x3x3 neighbourhood without bounds checks. Coordinates passed to
/// [`PaddedLabelVolume::get`]/[`set`](PaddedLabelVolume::set) are interior
/// coordinates (`0..nx`, `0..ny`, `0..nz`); the padding shell is addressed
/// implicitly by the 26- and 18-neighbourhood tables and is never targeted
/// directly by callers.
#[derive(Clone, Debug)]
pub struct PaddedLabelVolume {
    dims: Dims3,
    padded_nx: usize,
    padded_ny: usize,
    cells: Vec<Label>,
}

impl PaddedLabelVolume {
    /// Allocate a padded volume of the given interior extents, filled with
    /// `Label::Background`.
    pub fn new(dims: Dims3) -> Self {
        let padded_nx = dims.nx + 2;
        let padded_ny = dims.ny + 2;
        let padded_nz = dims.nz + 2;
        Self {
            dims,
            padded_nx,
            padded_ny,
            cells: vec![Label::Background; padded_nx * padded_ny * padded_nz],
        }
    }

    /// Extents of the interior region `R` (excluding the padding shell).
    pub fn dims(&self) -> Dims3 {
        self.dims
    }

    /// Flattened index into `cells` for a padded-space coordinate
    /// `(px, py, pz)`, each in `0..dims.n{x,y,z} + 2`.
    fn padded_index(&self, px: i32, py: i32, pz: i32) -> usize {
        debug_assert!(px >= 0 && (px as usize) < self.padded_nx);
        debug_assert!(py >= 0 && (py as usize) < self.padded_ny);
        debug_assert!(pz >= 0);
        (pz as usize * self.padded_ny + py as usize) * self.padded_nx + px as usize
    }

    /// Read the label at an interior coordinate (or any padded-space
    /// coordinate reachable by offsetting an interior coordinate by a
    /// neighbourhood table entry).
    pub fn get(&self, c: Coord3) -> Label {
        self.cells[self.padded_index(c.x + 1, c.y + 1, c.z + 1)]
    }

    /// Read the label at a raw padded-space coordinate, i.e. one already
    /// shifted into `0..dims.n{x,y,z} + 2`. Used internally by iteration
    /// and by the propagation core when walking neighbour offsets.
    pub fn get_padded(&self, px: i32, py: i32, pz: i32) -> Label {
        self.cells[self.padded_index(px, py, pz)]
    }

    /// Write the label at an interior coordinate.
    ///
    /// In debug builds, panics if the transition violates invariant I1
    /// (monotone labels); release builds elide the check, matching the
    /// documented per-voxel hot-path contract.
    pub fn set(&mut self, c: Coord3, label: Label) {
        let idx = self.padded_index(c.x + 1, c.y + 1, c.z + 1);
        debug_assert!(
            self.cells[idx].can_transition_to(label) || self.cells[idx] == label,
            "illegal label transition {:?} -> {:?} at {}",
            self.cells[idx],
            label,
            c
        );
        self.cells[idx] = label;
    }

    /// Seed an interior voxel as `HardForeground` without a transition
    /// check; used only during preparation, before propagation begins.
    pub fn seed_hard_foreground(&mut self, c: Coord3) {
        let idx = self.padded_index(c.x + 1, c.y + 1, c.z + 1);
        self.cells[idx] = Label::HardForeground;
    }

    /// Seed an interior voxel as `SoftForeground` without a transition
    /// check; used only during preparation.
    pub fn seed_soft_foreground(&mut self, c: Coord3) {
        let idx = self.padded_index(c.x + 1, c.y + 1, c.z + 1);
        self.cells[idx] = Label::SoftForeground;
    }

    /// Iterate `(coord, label)` pairs over the interior region in
    /// row-major scan order (`x` fastest, `z` slowest).
    pub fn iterate(&self) -> impl Iterator<Item = (Coord3, Label)> + '_ {
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

    /// Verify invariant I2: every voxel in the padding shell is `Background`.
    ///
    /// O(padded volume); intended for tests, not the hot path.
    pub fn padding_is_inert(&self) -> bool {
        let pnx = self.padded_nx as i32;
        let pny = self.padded_ny as i32;
        let pnz = (self.dims.nz + 2) as i32;
        for pz in 0..pnz {
            for py in 0..pny {
                for px in 0..pnx {
                    let is_shell = px == 0
                        || py == 0
                        || pz == 0
                        || px == pnx - 1
                        || py == pny - 1
                        || pz == pnz - 1;
                    if is_shell && self.get_padded(px, py, pz) != Label::Background {
                        return false;
                    }
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fresh_volume_is_all_background() {
        let v = PaddedLabelVolume::new(Dims3::new(3, 3, 3));
        for (_, label) in v.iterate() {
            assert_eq!(label, Label::Background);
        }
        assert!(v.padding_is_inert());
    }

    #[test]
    fn get_set_roundtrip() {
        let mut v = PaddedLabelVolume::new(Dims3::new(4, 4, 4));
        let c = Coord3::new(1, 2, 3);
        v.seed_soft_foreground(c);
        assert_eq!(v.get(c), Label::SoftForeground);
        v.set(c, Label::Queued);
        assert_eq!(v.get(c), Label::Queued);
        v.set(c, Label::HardForeground);
        assert_eq!(v.get(c), Label::HardForeground);
    }

    #[test]
    #[should_panic(expected = "illegal label transition")]
    fn illegal_transition_panics_in_debug() {
        let mut v = PaddedLabelVolume::new(Dims3::new(2, 2, 2));
        let c = Coord3::new(0, 0, 0);
        v.seed_hard_foreground(c);
        v.set(c, Label::Background);
    }

    #[test]
    fn padding_stays_inert_after_interior_mutation() {
        let mut v = PaddedLabelVolume::new(Dims3::new(3, 3, 3));
        for x in 0..3 {
            for y in 0..3 {
                for z in 0..3 {
                    v.seed_hard_foreground(Coord3::new(x, y, z));
                }
            }
        }
        assert!(v.padding_is_inert());
    }

    #[test]
    fn iterate_visits_every_interior_voxel_exactly_once() {
        let v = PaddedLabelVolume::new(Dims3::new(2, 3, 4));
        let count = v.iterate().count();
        assert_eq!(count, 2 * 3 * 4);
    }

    proptest! {
        #[test]
        fn padding_stays_inert_for_any_seeded_interior(
            nx in 1..6usize, ny in 1..6usize, nz in 1..6usize,
            hard_bits in prop::collection::vec(any::<bool>(), 1..125),
        ) {
            let dims = Dims3::new(nx, ny, nz);
            let mut v = PaddedLabelVolume::new(dims);
            let mut idx = 0usize;
            for z in 0..dims.nz {
                for y in 0..dims.ny {
                    for x in 0..dims.nx {
                        if *hard_bits.get(idx % hard_bits.len()).unwrap_or(&false) {
                            v.seed_hard_foreground(Coord3::new(x as i32, y as i32, z as i32));
                        }
                        idx += 1;
                    }
                }
            }
            prop_assert!(v.padding_is_inert());
        }

        #[test]
        fn seed_then_get_roundtrips_regardless_of_placement(
            nx in 1..8usize, ny in 1..8usize, nz in 1..8usize,
            x in 0..7i32, y in 0..7i32, z in 0..7i32,
            hard in any::<bool>(),
        ) {
            let dims = Dims3::new(nx, ny, nz);
            let c = Coord3::new(x % nx as i32, y % ny as i32, z % nz as i32);
            let mut v = PaddedLabelVolume::new(dims);
            if hard {
                v.seed_hard_foreground(c);
                prop_assert_eq!(v.get(c), Label::HardForeground);
            } else {
                v.seed_soft_foreground(c);
                prop_assert_eq!(v.get(c), Label::SoftForeground);
            }
        }
    }
}
