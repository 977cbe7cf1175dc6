//! Fixed neighbourhood offset tables.
//!
//! Two distinct neighbourhoods are used throughout the engine, deliberately:
//! the propagation neighbourhood is 18-connected (face- and edge-adjacent),
//! while the topology invariants always examine the full 26-connected patch.
//! Conflating the two would be a correctness bug, not a style choice.

/// The 18 face- and edge-adjacent offsets used to discover newly exposed
/// soft voxels during propagation.
pub const NEIGHBOURS_18: [(i32, i32, i32); 18] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
    (1, 1, 0),
    (1, -1, 0),
    (-1, 1, 0),
    (-1, -1, 0),
    (1, 0, 1),
    (1, 0, -1),
    (-1, 0, 1),
    (-1, 0, -1),
    (0, 1, 1),
    (0, 1, -1),
    (0, -1, 1),
    (0, -1, -1),
];

/// The 26 neighbours (every non-center cell) of a 3x3x3 patch, in
/// row-major `(dz, dy, dx)` scan order. Index `i` of a flattened 27-cell
/// patch corresponds to `(dx, dy, dz) = ((i % 3) - 1, (i / 3 % 3) - 1, (i /
/// 9) - 1)`; this table skips the center (offset `(0, 0, 0)`, patch index
/// 13).
pub const NEIGHBOURS_26: [(i32, i32, i32); 26] = build_neighbours_26();

const fn build_neighbours_26() -> [(i32, i32, i32); 26] {
    let mut out = [(0, 0, 0); 26];
    let mut i = 0usize;
    let mut idx = 0usize;
    while i < 27 {
        let dx = (i % 3) as i32 - 1;
        let dy = (i / 3 % 3) as i32 - 1;
        let dz = (i / 9) as i32 - 1;
        if !(dx == 0 && dy == 0 && dz == 0) {
            out[idx] = (dx, dy, dz);
            idx += 1;
        }
        i += 1;
    }
    out
}
