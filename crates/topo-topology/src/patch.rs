//! The 3x3x3 binary patch representation shared by all three invariants.

/// A 3x3x3 binary neighborhood, flattened in row-major `(dz, dy, dx)` order.
///
/// Index `i` corresponds to offset `(dx, dy, dz) = (i % 3 - 1, i / 3 % 3 -
/// 1, i / 9 - 1)` relative to the center voxel. Index 13 is the center
/// itself. `true` means "occupied" under whatever foreground rule the
/// caller built the patch with; the invariant functions never look at
/// voxel labels directly, only at this flattened occupancy array.
pub type Patch = [bool; 27];

/// Index of the center cell within a [`Patch`].
pub const CENTER: usize = 13;

/// Flatten a relative offset `(dx, dy, dz) in {-1,0,1}^3` to a patch index.
pub const fn index_of(dx: i32, dy: i32, dz: i32) -> usize {
    ((dz + 1) * 9 + (dy + 1) * 3 + (dx + 1)) as usize
}

/// The offset at a given patch index, inverse of [`index_of`].
pub const fn offset_of(i: usize) -> (i32, i32, i32) {
    let dx = (i % 3) as i32 - 1;
    let dy = (i / 3 % 3) as i32 - 1;
    let dz = (i / 9) as i32 - 1;
    (dx, dy, dz)
}

/// The 26 non-center offsets, in ascending patch-index order.
pub const OFFSETS_26: [(i32, i32, i32); 26] = build_offsets_26();

const fn build_offsets_26() -> [(i32, i32, i32); 26] {
    let mut out = [(0, 0, 0); 26];
    let mut i = 0usize;
    let mut idx = 0usize;
    while i < 27 {
        if i != CENTER {
            out[idx] = offset_of(i);
            idx += 1;
        }
        i += 1;
    }
    out
}

/// The 6 face-adjacent (6-connected) offsets: the only neighbors that are
/// adjacent to the center under 6-connectivity.
pub const OFFSETS_6: [(i32, i32, i32); 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];
