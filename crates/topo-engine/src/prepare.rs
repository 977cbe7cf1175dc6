//! Preparation: turn caller input into a labeled padded volume, a signed
//! distance map, and the soft shell the propagation pass will resolve.

use topo_core::{Coord3, EngineError, IntVolume, Label};
use topo_distance::{dilate_by_radius, erode_by_radius, signed_distance_map, SignedDistanceMap};
use topo_space::{BinaryVolume, PaddedLabelVolume};

use crate::config::EngineConfig;
use crate::variant::Variant;

/// The labeled volume and signed distance map a propagation pass consumes.
pub struct Prepared {
    /// The padded label volume, with `HardForeground`/`SoftForeground`
    /// seeded and the reference mask already applied.
    pub volume: PaddedLabelVolume,
    /// The signed distance map over the padded region, used as the
    /// propagation priority key.
    pub sdm: SignedDistanceMap,
}

fn hard_foreground_mask(input: &IntVolume, inside_value: i32) -> BinaryVolume {
    let dims = input.dims();
    let mut mask = BinaryVolume::filled(dims, false);
    for (c, v) in input.iterate() {
        mask.set(c, v == inside_value);
    }
    mask
}

/// Build the labeled volume and distance map for a run.
///
/// `reference` is the set a voxel must belong to once committed: for
/// carve-outside, the dilated superset foreground may shrink back toward;
/// for carve-inside, the eroded subset foreground may grow back toward.
/// If `config` supplies no mask, one is synthesized by dilation/erosion of
/// the input foreground by `config.radius()`.
pub fn prepare(input: &IntVolume, config: &EngineConfig, variant: Variant) -> Result<Prepared, EngineError> {
    let dims = input.dims();
    let hard_mask = hard_foreground_mask(input, config.inside_value());

    let reference = match config.mask() {
        Some(mask) => {
            if mask.dims() != dims {
                return Err(EngineError::DimensionMismatch {
                    input: (dims.nx, dims.ny, dims.nz),
                    other: (mask.dims().nx, mask.dims().ny, mask.dims().nz),
                    which: "reference mask",
                });
            }
            mask.clone()
        }
        None => match variant {
            Variant::CarveOutside => dilate_by_radius(&hard_mask, config.radius()),
            Variant::CarveInside => erode_by_radius(&hard_mask, config.radius()),
        },
    };

    let mut volume = PaddedLabelVolume::new(dims);
    for z in 0..dims.nz {
        for y in 0..dims.ny {
            for x in 0..dims.nx {
                let c = Coord3::new(x as i32, y as i32, z as i32);
                let label = match variant {
                    // Reference (dilated) minus the original hard set is
                    // candidate background-to-foreground padding the pass
                    // may carve away; the original hard set stays hard.
                    Variant::CarveOutside => {
                        if hard_mask.get(c) {
                            Some(Label::HardForeground)
                        } else if reference.get(c) {
                            Some(Label::SoftForeground)
                        } else {
                            None
                        }
                    }
                    // Original hard set minus the reference (eroded) core
                    // is the shell the pass may erode back to background;
                    // the eroded core stays hard.
                    Variant::CarveInside => {
                        if hard_mask.get(c) && reference.get(c) {
                            Some(Label::HardForeground)
                        } else if hard_mask.get(c) {
                            Some(Label::SoftForeground)
                        } else {
                            None
                        }
                    }
                };
                match label {
                    Some(Label::HardForeground) => volume.seed_hard_foreground(c),
                    Some(Label::SoftForeground) => volume.seed_soft_foreground(c),
                    _ => {}
                }
            }
        }
    }

    let sdm = signed_distance_map(&volume, config.spacing());
    Ok(Prepared { volume, sdm })
}
