//! Auxiliary non-manifold-junction diagnostic.
//!
//! Not consulted by the propagation engine's commit decision — the Euler
//! and connected-component invariants alone determine admissibility.
//! Exposed for callers who want to flag voxels that are thin pinch points
//! even when the two blocking invariants both pass.

use crate::patch::index_of;

/// `true` iff the center sits at a "plus-sign" junction: at least two of
/// the three axis-aligned opposite-neighbor pairs are both present under
/// the `fg` rule, with no diagonal neighbor in the shared plane linking
/// them. Such a voxel is the sole connector between arms that would
/// otherwise only touch at a single point or not at all — a classic
/// locally non-manifold configuration.
pub fn nonmanifold_remove(patch: &[bool; 27], fg: bool) -> bool {
    let o = |dx: i32, dy: i32, dz: i32| -> bool {
        let v = patch[index_of(dx, dy, dz)];
        if fg {
            v
        } else {
            !v
        }
    };

    let x_pair = o(1, 0, 0) && o(-1, 0, 0);
    let y_pair = o(0, 1, 0) && o(0, -1, 0);
    let z_pair = o(0, 0, 1) && o(0, 0, -1);

    let xy_linked = o(1, 1, 0) || o(1, -1, 0) || o(-1, 1, 0) || o(-1, -1, 0);
    let xz_linked = o(1, 0, 1) || o(1, 0, -1) || o(-1, 0, 1) || o(-1, 0, -1);
    let yz_linked = o(0, 1, 1) || o(0, 1, -1) || o(0, -1, 1) || o(0, -1, -1);

    let unlinked_pairs = [
        x_pair && y_pair && !xy_linked,
        x_pair && z_pair && !xz_linked,
        y_pair && z_pair && !yz_linked,
    ];

    unlinked_pairs.iter().filter(|&&p| p).count() >= 1
}
