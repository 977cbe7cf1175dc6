//! End-to-end scenarios and cross-cutting invariants for the engine's
//! public entry points.
//!
//! Volumes here are scaled down from their originating test fixtures for
//! runtime: the topology claims being checked (tunnel survival, thin
//! bridge preservation, idempotence) don't depend on absolute size.

use std::collections::{HashSet, VecDeque};

use topo_core::{Coord3, Dims3, IntVolume};
use topo_engine::{carve_inside, carve_outside, EngineConfig};
use topo_test_utils::{dumbbell_with_legs, ring_with_hole, solid_cube};
use topo_topology::patch::OFFSETS_26;

fn foreground_component_count(volume: &IntVolume, inside_value: i32) -> usize {
    let dims = volume.dims();
    let mut visited: HashSet<(i32, i32, i32)> = HashSet::new();
    let mut components = 0usize;
    for (c, v) in volume.iterate() {
        if v != inside_value || visited.contains(&(c.x, c.y, c.z)) {
            continue;
        }
        components += 1;
        let mut queue = VecDeque::new();
        queue.push_back(c);
        visited.insert((c.x, c.y, c.z));
        while let Some(cur) = queue.pop_front() {
            for &(dx, dy, dz) in &OFFSETS_26 {
                let nx = cur.x + dx;
                let ny = cur.y + dy;
                let nz = cur.z + dz;
                if nx < 0 || ny < 0 || nz < 0 {
                    continue;
                }
                if nx as usize >= dims.nx || ny as usize >= dims.ny || nz as usize >= dims.nz {
                    continue;
                }
                let nc = Coord3::new(nx, ny, nz);
                if volume.get(nc) == inside_value && visited.insert((nx, ny, nz)) {
                    queue.push_back(nc);
                }
            }
        }
    }
    components
}

#[test]
fn scenario_a_carve_outside_fills_a_ring_hole() {
    // A ring in a single z-slice with a gap; closing should bridge the
    // gap and leave the rest of the volume untouched.
    let dims = Dims3::new(40, 40, 5);
    let mut input = IntVolume::filled(dims, 0);
    let ring = ring_with_hole(Dims3::new(40, 40, 1), 16.0, 10.0);
    for x in 0..40 {
        for y in 0..40 {
            input.set(Coord3::new(x, y, 2), ring.get(Coord3::new(x, y, 0)));
        }
    }
    // Punch a small gap in the ring band itself (distance 10..13 from
    // center, well inside the [10, 16] band), narrow enough that radius=3
    // dilation bridges it.
    for x in 30..33 {
        for y in 19..21 {
            input.set(Coord3::new(x, y, 2), 0);
        }
    }

    let config = EngineConfig::builder().radius(3).build().unwrap();
    let out = carve_outside(&input, &config).unwrap();

    for z in 0..5 {
        if z == 2 {
            continue;
        }
        for y in 0..40 {
            for x in 0..40 {
                assert_eq!(out.get(Coord3::new(x, y, z)), 0, "slice {z} must stay empty");
            }
        }
    }
    for x in 30..33 {
        for y in 19..21 {
            assert_eq!(out.get(Coord3::new(x, y, 2)), 1, "the gap must be bridged");
        }
    }
    assert_eq!(foreground_component_count(&out, 1), 1);
}

#[test]
fn scenario_b_carve_inside_preserves_the_dumbbell_bridge() {
    let input = dumbbell_with_legs();
    let config = EngineConfig::builder().radius(1).build().unwrap();
    let out = carve_inside(&input, &config).unwrap();

    // The bridge connecting the two blocks must survive.
    assert_eq!(out.get(Coord3::new(5, 7, 7)), 1);
    assert_eq!(out.get(Coord3::new(18, 7, 7)), 1);
    assert_eq!(out.get(Coord3::new(12, 7, 7)), 1, "bridge voxel must survive, it is load-bearing");
}

#[test]
fn scenario_c_carve_outside_is_identity_on_an_already_closed_cube() {
    let dims = Dims3::new(40, 40, 40);
    let input = solid_cube(dims, 15, 25);
    let config = EngineConfig::builder().radius(2).build().unwrap();
    let out = carve_outside(&input, &config).unwrap();
    for (c, v) in input.iterate() {
        assert_eq!(out.get(c), v);
    }
}

#[test]
fn scenario_e_both_variants_are_deterministic() {
    let dims = Dims3::new(20, 20, 20);
    let input = solid_cube(dims, 3, 17);
    let config = EngineConfig::builder().radius(2).build().unwrap();

    let a1 = carve_outside(&input, &config).unwrap();
    let a2 = carve_outside(&input, &config).unwrap();
    assert_eq!(a1, a2);

    let b1 = carve_inside(&input, &config).unwrap();
    let b2 = carve_inside(&input, &config).unwrap();
    assert_eq!(b1, b2);
}

#[test]
fn scenario_f_closing_expands_and_opening_shrinks_around_the_input() {
    let dims = Dims3::new(24, 24, 24);
    let input = dumbbell_with_legs_cropped(dims);
    let config = EngineConfig::builder().radius(1).build().unwrap();

    let closed = carve_outside(&input, &config).unwrap();
    let opened = carve_inside(&input, &config).unwrap();

    for (c, v) in input.iterate() {
        if v == 1 {
            assert_eq!(closed.get(c), 1, "closing never removes original foreground");
        }
        if opened.get(c) == 1 {
            assert_eq!(v, 1, "opening never adds foreground beyond the input");
        }
    }
}

fn dumbbell_with_legs_cropped(dims: Dims3) -> IntVolume {
    let full = dumbbell_with_legs();
    let mut v = IntVolume::filled(dims, 0);
    for z in 0..dims.nz as i32 {
        for y in 0..dims.ny as i32 {
            for x in 0..dims.nx as i32 {
                v.set(Coord3::new(x, y, z), full.get(Coord3::new(x, y, z)));
            }
        }
    }
    v
}

#[test]
fn hard_foreground_is_always_preserved() {
    let dims = Dims3::new(20, 20, 20);
    let input = solid_cube(dims, 5, 15);
    let config = EngineConfig::builder().radius(2).build().unwrap();
    let closed = carve_outside(&input, &config).unwrap();
    let opened = carve_inside(&input, &config).unwrap();
    for (c, v) in input.iterate() {
        if v == 1 {
            assert_eq!(closed.get(c), 1);
            assert_eq!(opened.get(c), 1);
        }
    }
}

#[test]
fn idempotence_carve_outside() {
    let dims = Dims3::new(20, 20, 20);
    let input = solid_cube(dims, 4, 16);
    let config = EngineConfig::builder().radius(2).build().unwrap();
    let once = carve_outside(&input, &config).unwrap();
    let twice = carve_outside(&once, &config).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn idempotence_carve_inside() {
    let dims = Dims3::new(20, 20, 20);
    let input = solid_cube(dims, 4, 16);
    let config = EngineConfig::builder().radius(2).build().unwrap();
    let once = carve_inside(&input, &config).unwrap();
    let twice = carve_inside(&once, &config).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn padding_shell_never_becomes_foreground() {
    let dims = Dims3::new(10, 10, 10);
    let input = solid_cube(dims, 1, 9);
    let config = EngineConfig::builder().radius(2).build().unwrap();
    let out = carve_outside(&input, &config).unwrap();
    for x in 0..10 {
        for y in 0..10 {
            assert_eq!(out.get(Coord3::new(x, y, 0)), input.get(Coord3::new(x, y, 0)));
        }
    }
}
