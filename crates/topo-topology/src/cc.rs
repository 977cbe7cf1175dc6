//! The connected-component simple-point test.

use crate::patch::{index_of, OFFSETS_26};
use crate::union_find::UnionFind;
use std::collections::HashSet;

fn occupied(dx: i32, dy: i32, dz: i32, patch: &[bool; 27], fg: bool) -> bool {
    let v = patch[index_of(dx, dy, dz)];
    if fg {
        v
    } else {
        !v
    }
}

fn adjacent(a: (i32, i32, i32), b: (i32, i32, i32), use_6_connectivity: bool) -> bool {
    let (dx, dy, dz) = (a.0 - b.0, a.1 - b.1, a.2 - b.2);
    if use_6_connectivity {
        dx.abs() + dy.abs() + dz.abs() == 1
    } else {
        dx.abs().max(dy.abs()).max(dz.abs()) == 1
    }
}

/// `true` iff the count of connected components of the `fg` region
/// touching the patch's center is unchanged by flipping the center.
///
/// `fg == true` tests 26-connected foreground components (the whole
/// 26-neighborhood is adjacent to the center under 26-connectivity);
/// `fg == false` tests 6-connected background components (only the 6
/// face neighbors are adjacent to the center under 6-connectivity).
///
/// A touching-component count of zero or one never looks like a split or
/// merge — it is only when two or more distinct components both border
/// the center that flipping it could fuse or sever them. A component that
/// simply vanishes when isolated (count zero) is a real topology event,
/// but it shows up in the Euler-characteristic test, not here.
pub fn cc_invariant(patch: &[bool; 27], fg: bool) -> bool {
    let use_6 = !fg;
    let region: [bool; 26] = {
        let mut r = [false; 26];
        for (i, off) in OFFSETS_26.iter().enumerate() {
            r[i] = occupied(off.0, off.1, off.2, patch, fg);
        }
        r
    };

    let mut uf: UnionFind<26> = UnionFind::new();
    for i in 0..26 {
        if !region[i] {
            continue;
        }
        for j in (i + 1)..26 {
            if region[j] && adjacent(OFFSETS_26[i], OFFSETS_26[j], use_6) {
                uf.union(i, j);
            }
        }
    }

    let mut roots = HashSet::with_capacity(4);
    for (i, &off) in OFFSETS_26.iter().enumerate() {
        if !region[i] {
            continue;
        }
        let touches_center = if use_6 {
            off.0.abs() + off.1.abs() + off.2.abs() == 1
        } else {
            true
        };
        if touches_center {
            roots.insert(uf.find(i));
        }
    }
    roots.len() <= 1
}
