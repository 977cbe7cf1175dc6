//! The Euler-characteristic simple-point test.
//!
//! Flipping the center of a 3x3x3 patch only changes the global Euler
//! characteristic through cells (lattice vertices, edges, faces, and the
//! center cube itself) that are incident to the center voxel-cube; every
//! other cell's presence is unaffected by the center's state and cancels
//! out of the before/after difference. This function computes that
//! difference directly from the incidence counts of the center cube's 8
//! corners, 12 edges, and 6 faces against their sharing neighbors — the
//! same octant decomposition the classical Lobregt/Lee/Toriwaki tables
//! encode, evaluated here rather than looked up.

use crate::patch::{index_of, Patch};

const SIGNS: [i32; 2] = [-1, 1];

fn occ(patch: &Patch, fg: bool, dx: i32, dy: i32, dz: i32) -> bool {
    let v = patch[index_of(dx, dy, dz)];
    if fg {
        v
    } else {
        !v
    }
}

/// `true` iff toggling the center of `patch` leaves the Euler
/// characteristic of the `fg` region unchanged.
pub fn euler_invariant(patch: &Patch, fg: bool) -> bool {
    euler_delta(patch, fg) == 0
}

/// Signed change in Euler characteristic from flipping the center on
/// (positive values mean adding the center strictly increases χ).
fn euler_delta(patch: &Patch, fg: bool) -> i32 {
    let o = |dx, dy, dz| occ(patch, fg, dx, dy, dz);

    let mut delta_v = 0i32;
    for &sx in &SIGNS {
        for &sy in &SIGNS {
            for &sz in &SIGNS {
                let shared = o(sx, 0, 0)
                    || o(0, sy, 0)
                    || o(0, 0, sz)
                    || o(sx, sy, 0)
                    || o(sx, 0, sz)
                    || o(0, sy, sz)
                    || o(sx, sy, sz);
                delta_v += i32::from(!shared);
            }
        }
    }

    let mut delta_e = 0i32;
    for &sx in &SIGNS {
        for &sy in &SIGNS {
            let shared = o(sx, 0, 0) || o(0, sy, 0) || o(sx, sy, 0);
            delta_e += i32::from(!shared);
        }
    }
    for &sx in &SIGNS {
        for &sz in &SIGNS {
            let shared = o(sx, 0, 0) || o(0, 0, sz) || o(sx, 0, sz);
            delta_e += i32::from(!shared);
        }
    }
    for &sy in &SIGNS {
        for &sz in &SIGNS {
            let shared = o(0, sy, 0) || o(0, 0, sz) || o(0, sy, sz);
            delta_e += i32::from(!shared);
        }
    }

    let mut delta_f = 0i32;
    for &s in &SIGNS {
        delta_f += i32::from(!o(s, 0, 0));
        delta_f += i32::from(!o(0, s, 0));
        delta_f += i32::from(!o(0, 0, s));
    }

    let delta_c = 1;

    delta_v - delta_e + delta_f - delta_c
}
