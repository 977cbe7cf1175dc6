//! Reusable scenario fixtures shared by engine tests and benchmarks.
//!
//! - [`solid_cube`] — an interior-only solid block, no contact with the
//!   volume boundary. The baseline idempotence/no-op case.
//! - [`ring_with_hole`] — a torus-like shell with a genuine tunnel, for
//!   exercising the closing/opening topology-preservation invariants
//!   against a shape with nontrivial genus.
//! - [`dumbbell_with_legs`] — two blocks joined by a thin bridge and a
//!   pair of single-voxel connecting legs, scaled down from the two-block
//!   dumbbell fixture used to exercise carve-inside against real
//!   thin-structure erosion.

use topo_core::{Coord3, Dims3, IntVolume};

/// A solid axis-aligned block `[lo, hi)` on every axis, inset from the
/// volume boundary by at least one voxel.
pub fn solid_cube(dims: Dims3, lo: i32, hi: i32) -> IntVolume {
    let mut v = IntVolume::filled(dims, 0);
    for z in 0..dims.nz as i32 {
        for y in 0..dims.ny as i32 {
            for x in 0..dims.nx as i32 {
                if (lo..hi).contains(&x) && (lo..hi).contains(&y) && (lo..hi).contains(&z) {
                    v.set(Coord3::new(x, y, z), 1);
                }
            }
        }
    }
    v
}

/// A ring (annulus extruded along z) with a genuine through-hole: the
/// outer radius minus the inner radius, centered in the volume. Used to
/// confirm a real tunnel is never closed or opened away.
pub fn ring_with_hole(dims: Dims3, outer_radius: f64, inner_radius: f64) -> IntVolume {
    let mut v = IntVolume::filled(dims, 0);
    let cx = dims.nx as f64 / 2.0;
    let cy = dims.ny as f64 / 2.0;
    for z in 1..dims.nz as i32 - 1 {
        for y in 0..dims.ny as i32 {
            for x in 0..dims.nx as i32 {
                let dx = x as f64 + 0.5 - cx;
                let dy = y as f64 + 0.5 - cy;
                let r = (dx * dx + dy * dy).sqrt();
                if r <= outer_radius && r >= inner_radius {
                    v.set(Coord3::new(x, y, z), 1);
                }
            }
        }
    }
    v
}

/// Two blocks joined by a thin bridge and a pair of even thinner
/// single-voxel legs, in a 24x16x16 volume.
///
/// Scaled down from the two 20-voxel blocks connected through a 2x5x5
/// bridge and two single-voxel legs used to drive carve-inside against a
/// real thin structure: the bridge and legs must survive erosion-then-
/// restoration wherever removing them would sever the two blocks, and
/// may be carved away wherever it is safe to do so.
pub fn dumbbell_with_legs() -> IntVolume {
    let dims = Dims3::new(24, 16, 16);
    let mut v = IntVolume::filled(dims, 0);

    let mut fill_block = |v: &mut IntVolume, x0: i32, x1: i32, y0: i32, y1: i32, z0: i32, z1: i32| {
        for z in z0..z1 {
            for y in y0..y1 {
                for x in x0..x1 {
                    v.set(Coord3::new(x, y, z), 1);
                }
            }
        }
    };

    fill_block(&mut v, 2, 10, 2, 14, 2, 14);
    fill_block(&mut v, 14, 22, 2, 14, 2, 14);

    // A thin bridge connecting the blocks through the gap.
    fill_block(&mut v, 10, 14, 6, 10, 6, 10);

    // Two single-voxel legs, a separate thin connection elsewhere in the gap.
    v.set(Coord3::new(10, 4, 4), 1);
    v.set(Coord3::new(11, 4, 4), 1);
    v.set(Coord3::new(12, 4, 4), 1);
    v.set(Coord3::new(13, 4, 4), 1);

    v
}
