//! Priority-queue-driven constrained geodesic propagation.
//!
//! Carve-outside commits background voxels farthest-outside first in a
//! single pass, using a max-heap on the signed distance map. Carve-inside
//! commits foreground voxels deepest-inside first, using a min-heap, and
//! relaxes across outer passes until a pass commits nothing.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use topo_core::{Coord3, Label};
use topo_distance::SignedDistanceMap;
use topo_space::{PaddedLabelVolume, NEIGHBOURS_18};
use topo_topology::patch::{index_of, OFFSETS_26};
use topo_topology::{cc_invariant, euler_invariant, Patch};

use crate::engine::ProgressSink;

/// Report `commits_so_far / soft_total` through `progress`, if present.
/// `soft_total == 0` reports complete immediately rather than dividing by
/// zero: there is nothing left to resolve.
fn report(progress: &mut Option<ProgressSink<'_>>, commits_so_far: usize, soft_total: usize) {
    if let Some(sink) = progress {
        let frac = if soft_total == 0 { 1.0 } else { commits_so_far as f32 / soft_total as f32 };
        sink(frac.min(1.0));
    }
}

#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    priority: f64,
    sequence: u64,
    coord: Coord3,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .partial_cmp(&other.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Build the 26-neighbor occupancy patch centered at `c`, under
/// `predicate`. The patch's own center slot is left unset: neither
/// invariant test reads it, since both assume the center is the voxel
/// being hypothetically flipped.
fn build_patch(volume: &PaddedLabelVolume, c: Coord3, predicate: impl Fn(Label) -> bool) -> Patch {
    let mut patch: Patch = [false; 27];
    for &(dx, dy, dz) in &OFFSETS_26 {
        let label = volume.get_padded(c.x + 1 + dx, c.y + 1 + dy, c.z + 1 + dz);
        patch[index_of(dx, dy, dz)] = predicate(label);
    }
    patch
}

/// Run the carve-outside pass: farthest-outside-first, single pass, no
/// requeue. Voxels that never pass the simple-point test stay `Queued`
/// forever and are resolved by finalization, not here.
///
/// `soft_total` is the denominator for progress reporting (the soft-shell
/// size determined at preparation time); `progress`, if present, is
/// invoked after every commit with the monotonically non-decreasing
/// fraction `commits_so_far / soft_total`.
///
/// Returns the number of voxels committed to `Background`.
pub fn run_carve_outside(
    volume: &mut PaddedLabelVolume,
    sdm: &SignedDistanceMap,
    soft_total: usize,
    mut progress: Option<ProgressSink<'_>>,
) -> usize {
    let mut heap: BinaryHeap<QueueEntry> = BinaryHeap::new();
    let mut sequence = 0u64;
    let dims = volume.dims();

    let mut push = |volume: &mut PaddedLabelVolume, heap: &mut BinaryHeap<QueueEntry>, sequence: &mut u64, c: Coord3| {
        if volume.get(c) == Label::SoftForeground {
            volume.set(c, Label::Queued);
            heap.push(QueueEntry {
                priority: sdm.get(c),
                sequence: *sequence,
                coord: c,
            });
            *sequence += 1;
        }
    };

    for z in 0..dims.nz {
        for y in 0..dims.ny {
            for x in 0..dims.nx {
                let c = Coord3::new(x as i32, y as i32, z as i32);
                if volume.get(c) != Label::SoftForeground {
                    continue;
                }
                let touches_fixed_boundary = NEIGHBOURS_18.iter().any(|&(dx, dy, dz)| {
                    volume.get_padded(c.x + 1 + dx, c.y + 1 + dy, c.z + 1 + dz) != Label::SoftForeground
                });
                if touches_fixed_boundary {
                    push(volume, &mut heap, &mut sequence, c);
                }
            }
        }
    }

    let mut commits = 0usize;
    while let Some(entry) = heap.pop() {
        let c = entry.coord;
        if volume.get(c) != Label::Queued {
            continue;
        }
        let patch = build_patch(volume, c, Label::is_occupied);
        let simple = euler_invariant(&patch, true) && cc_invariant(&patch, true) && cc_invariant(&patch, false);
        if !simple {
            continue;
        }
        volume.set(c, Label::Background);
        commits += 1;
        report(&mut progress, commits, soft_total);
        for &(dx, dy, dz) in &NEIGHBOURS_18 {
            let nc = Coord3::new(c.x + dx, c.y + dy, c.z + dz);
            if nc.x >= 0
                && nc.y >= 0
                && nc.z >= 0
                && (nc.x as usize) < dims.nx
                && (nc.y as usize) < dims.ny
                && (nc.z as usize) < dims.nz
            {
                push(volume, &mut heap, &mut sequence, nc);
            }
        }
    }
    commits
}

/// Run carve-inside to a fixed point: repeated deepest-inside-first
/// passes, re-seeding every still-`Queued` voxel each pass, until a pass
/// commits nothing.
///
/// `soft_total` is the denominator for progress reporting; `progress`, if
/// present, is invoked after every commit (in any pass) with the
/// monotonically non-decreasing fraction `total_commits_so_far /
/// soft_total`.
///
/// Returns the total number of voxels committed to `HardForeground`.
pub fn run_carve_inside(
    volume: &mut PaddedLabelVolume,
    sdm: &SignedDistanceMap,
    soft_total: usize,
    mut progress: Option<ProgressSink<'_>>,
) -> usize {
    let dims = volume.dims();
    let mut total_commits = 0usize;

    for (c, label) in volume.iterate() {
        if label == Label::SoftForeground {
            volume.set(c, Label::Queued);
        }
    }

    loop {
        let mut heap: BinaryHeap<Reverse<QueueEntry>> = BinaryHeap::new();
        let mut sequence = 0u64;
        for z in 0..dims.nz {
            for y in 0..dims.ny {
                for x in 0..dims.nx {
                    let c = Coord3::new(x as i32, y as i32, z as i32);
                    if volume.get(c) == Label::Queued {
                        heap.push(Reverse(QueueEntry {
                            priority: sdm.get(c),
                            sequence,
                            coord: c,
                        }));
                        sequence += 1;
                    }
                }
            }
        }

        let mut commits_this_pass = 0usize;
        while let Some(Reverse(entry)) = heap.pop() {
            let c = entry.coord;
            if volume.get(c) != Label::Queued {
                continue;
            }
            let patch = build_patch(volume, c, Label::is_hard_foreground);
            let simple = euler_invariant(&patch, false) && cc_invariant(&patch, false);
            if !simple {
                continue;
            }
            volume.set(c, Label::HardForeground);
            commits_this_pass += 1;
            total_commits += 1;
            report(&mut progress, total_commits, soft_total);
        }

        if commits_this_pass == 0 {
            break;
        }
    }

    total_commits
}
