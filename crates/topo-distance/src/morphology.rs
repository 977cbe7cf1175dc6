//! Binary dilation and erosion by a ball radius, expressed as thresholds
//! of a squared Euclidean distance transform.
//!
//! `dilate(mask, r) = { x : distance(x, mask) <= r }` and
//! `erode(mask, r) = complement(dilate(complement(mask), r))`. Both
//! collaborators share the same transform used for the priority distance
//! map, avoiding a second, divergent morphology implementation. The ball
//! radius is a voxel count, not a physical length, so both operate with
//! unit spacing regardless of the volume's real-world voxel spacing.
//!
//! Used only to synthesize a default reference mask when the caller
//! supplies none (see the engine's preparation step).

use crate::field::squared_distance_to;
use topo_core::Coord3;
use topo_space::BinaryVolume;

/// Dilate `mask` by a ball of voxel radius `radius`.
pub fn dilate_by_radius(mask: &BinaryVolume, radius: u32) -> BinaryVolume {
    let dims = mask.dims();
    let sq = squared_distance_to(dims, (1.0, 1.0, 1.0), |c| mask.get(c));
    let threshold = f64::from(radius) * f64::from(radius);
    let mut out = BinaryVolume::filled(dims, false);
    for z in 0..dims.nz {
        for y in 0..dims.ny {
            for x in 0..dims.nx {
                let c = Coord3::new(x as i32, y as i32, z as i32);
                let idx = (z * dims.ny + y) * dims.nx + x;
                out.set(c, sq[idx] <= threshold);
            }
        }
    }
    out
}

/// Erode `mask` by a ball of voxel radius `radius`.
pub fn erode_by_radius(mask: &BinaryVolume, radius: u32) -> BinaryVolume {
    let complement = mask.map(|v| !v);
    dilate_by_radius(&complement, radius).map(|v| !v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use topo_core::Dims3;

    #[test]
    fn dilate_grows_a_single_voxel_into_a_ball() {
        let mut mask = BinaryVolume::filled(Dims3::new(7, 7, 7), false);
        mask.set(Coord3::new(3, 3, 3), true);
        let dilated = dilate_by_radius(&mask, 1);
        assert!(dilated.get(Coord3::new(3, 3, 3)));
        assert!(dilated.get(Coord3::new(4, 3, 3)));
        assert!(dilated.get(Coord3::new(3, 4, 3)));
        assert!(!dilated.get(Coord3::new(5, 3, 3)));
        // A corner diagonal at distance sqrt(3) > 1 is not included.
        assert!(!dilated.get(Coord3::new(4, 4, 4)));
    }

    #[test]
    fn erode_shrinks_a_solid_block() {
        let mut mask = BinaryVolume::filled(Dims3::new(7, 7, 7), false);
        for x in 1..6 {
            for y in 1..6 {
                for z in 1..6 {
                    mask.set(Coord3::new(x, y, z), true);
                }
            }
        }
        let eroded = erode_by_radius(&mask, 1);
        assert!(eroded.get(Coord3::new(3, 3, 3)));
        assert!(!eroded.get(Coord3::new(1, 1, 1)));
        assert!(eroded.get(Coord3::new(2, 2, 2)));
    }

    #[test]
    fn erode_is_dual_of_dilate_on_complement() {
        let mut mask = BinaryVolume::filled(Dims3::new(5, 5, 5), true);
        mask.set(Coord3::new(2, 2, 2), false);
        let eroded = erode_by_radius(&mask, 1);
        let manual = dilate_by_radius(&mask.map(|v| !v), 1).map(|v| !v);
        for (c, v) in eroded.iterate() {
            assert_eq!(v, manual.get(c));
        }
    }

    fn random_mask(dims: Dims3, bits: &[bool]) -> BinaryVolume {
        let mut mask = BinaryVolume::filled(dims, false);
        let mut i = 0usize;
        for (c, _) in mask.clone().iterate() {
            mask.set(c, bits[i % bits.len()]);
            i += 1;
        }
        mask
    }

    proptest! {
        #[test]
        fn dilation_always_contains_the_original_mask(
            bits in prop::collection::vec(any::<bool>(), 1..64),
            radius in 0..4u32,
        ) {
            let dims = Dims3::new(4, 4, 4);
            let mask = random_mask(dims, &bits);
            let dilated = dilate_by_radius(&mask, radius);
            for (c, v) in mask.iterate() {
                if v {
                    prop_assert!(dilated.get(c));
                }
            }
        }

        #[test]
        fn erosion_is_always_contained_in_the_original_mask(
            bits in prop::collection::vec(any::<bool>(), 1..64),
            radius in 0..4u32,
        ) {
            let dims = Dims3::new(4, 4, 4);
            let mask = random_mask(dims, &bits);
            let eroded = erode_by_radius(&mask, radius);
            for (c, v) in eroded.iterate() {
                if v {
                    prop_assert!(mask.get(c));
                }
            }
        }

        #[test]
        fn dilation_is_monotone_in_radius(
            bits in prop::collection::vec(any::<bool>(), 1..64),
            small_radius in 0..3u32,
        ) {
            let dims = Dims3::new(4, 4, 4);
            let mask = random_mask(dims, &bits);
            let smaller = dilate_by_radius(&mask, small_radius);
            let larger = dilate_by_radius(&mask, small_radius + 1);
            for (c, v) in smaller.iterate() {
                if v {
                    prop_assert!(larger.get(c));
                }
            }
        }
    }
}
