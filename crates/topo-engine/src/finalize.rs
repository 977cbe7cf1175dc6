//! Convert the propagated label volume back to a caller-facing `IntVolume`.
//!
//! The two variants resolve a voxel that never committed (stuck `Queued`
//! forever) in opposite directions: carve-outside keeps anything it never
//! proved removable as foreground, while carve-inside keeps only what it
//! proved belongs back in the core. This is the asymmetry the finalization
//! rule must encode, not a detail to unify away.

use topo_core::{Coord3, IntVolume, Label};
use topo_space::PaddedLabelVolume;

use crate::variant::Variant;

/// Produce the output volume from the final labeled state.
///
/// Falls back to the original input value wherever the label doesn't
/// resolve to foreground under the variant's rule, so callers that pass
/// a multi-valued input (not just 0/1) get their original labels back
/// outside the foreground set.
pub fn finalize(volume: &PaddedLabelVolume, input: &IntVolume, inside_value: i32, variant: Variant) -> IntVolume {
    let dims = input.dims();
    let mut out = IntVolume::filled(dims, 0);
    for z in 0..dims.nz {
        for y in 0..dims.ny {
            for x in 0..dims.nx {
                let c = Coord3::new(x as i32, y as i32, z as i32);
                let label = volume.get(c);
                let is_foreground = match variant {
                    Variant::CarveOutside => label != Label::Background,
                    Variant::CarveInside => label == Label::HardForeground,
                };
                let value = if is_foreground { inside_value } else { input.get(c) };
                out.set(c, value);
            }
        }
    }
    out
}
