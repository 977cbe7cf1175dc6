//! The four-valued per-voxel label state machine.

use std::fmt;

/// Per-voxel label carried by the padded labeled volume.
///
/// A voxel may transition `SoftForeground -> Queued -> {HardForeground,
/// Background}` and no other way: `HardForeground` once committed is
/// terminal within a single run (invariant I1). Voxels in the one-voxel
/// padding shell remain `Background` for the life of the run (invariant I2).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    /// Definitely outside the final foreground.
    Background,
    /// Definitely inside the final foreground; immutable after initialization.
    HardForeground,
    /// Candidate region where the engine may add or remove foreground.
    SoftForeground,
    /// A soft voxel currently live in the priority queue.
    Queued,
}

impl Label {
    /// `true` for every label except `Background`.
    ///
    /// Used by the carve-outside patch-construction rule, which treats
    /// `HardForeground`, `SoftForeground`, and `Queued` alike as occupied.
    pub const fn is_occupied(self) -> bool {
        !matches!(self, Self::Background)
    }

    /// `true` only for `HardForeground`.
    ///
    /// Used by the carve-inside patch-construction rule, which only
    /// recognizes committed foreground as occupied.
    pub const fn is_hard_foreground(self) -> bool {
        matches!(self, Self::HardForeground)
    }

    /// Returns `true` if `next` is a legal successor of `self` under
    /// invariant I1.
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::SoftForeground, Self::Queued)
                | (Self::Queued, Self::HardForeground)
                | (Self::Queued, Self::Background)
        )
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Background => "background",
            Self::HardForeground => "hard-foreground",
            Self::SoftForeground => "soft-foreground",
            Self::Queued => "queued",
        };
        write!(f, "{s}")
    }
}
