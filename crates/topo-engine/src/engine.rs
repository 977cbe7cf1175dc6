//! Top-level entry points: prepare, propagate, finalize, with structured
//! logging and an optional progress callback.

use topo_core::{EngineError, IntVolume};

use crate::config::EngineConfig;
use crate::finalize::finalize;
use crate::prepare::prepare;
use crate::propagate::{run_carve_inside, run_carve_outside};
use crate::variant::Variant;

/// Callback invoked after each committed voxel with overall progress in
/// `[0.0, 1.0]`. Reported on a best-effort basis: the denominator is the
/// soft-shell size determined at preparation time, not a hard bound.
pub type ProgressSink<'a> = &'a mut dyn FnMut(f32);

/// Run topology-preserving closing (carve-outside) on `input`.
pub fn carve_outside(input: &IntVolume, config: &EngineConfig) -> Result<IntVolume, EngineError> {
    carve_outside_with_progress(input, config, None)
}

/// Run topology-preserving opening (carve-inside) on `input`.
pub fn carve_inside(input: &IntVolume, config: &EngineConfig) -> Result<IntVolume, EngineError> {
    carve_inside_with_progress(input, config, None)
}

/// [`carve_outside`], reporting progress through `progress`.
///
/// `progress` is invoked after every committed voxel, not just once at
/// the end, with the monotonically non-decreasing fraction
/// `commits_so_far / soft_total`.
pub fn carve_outside_with_progress(
    input: &IntVolume,
    config: &EngineConfig,
    progress: Option<ProgressSink<'_>>,
) -> Result<IntVolume, EngineError> {
    let variant = Variant::CarveOutside;
    let mut prepared = prepare(input, config, variant)?;
    let soft_total = count_soft(&prepared.volume);
    tracing::debug!(
        target: "engine.prepare",
        variant = variant.name(),
        soft_total,
        "prepared"
    );

    let commits = run_carve_outside(&mut prepared.volume, &prepared.sdm, soft_total, progress);
    tracing::trace!(target: "engine.propagate", variant = variant.name(), commits, "pass_complete");

    let out = finalize(&prepared.volume, input, config.inside_value(), variant);
    tracing::debug!(target: "engine.finalize", variant = variant.name(), commits, "finalized");
    Ok(out)
}

/// [`carve_inside`], reporting progress through `progress`.
///
/// `progress` is invoked after every committed voxel (across every
/// relaxation pass), with the monotonically non-decreasing fraction
/// `commits_so_far / soft_total`.
pub fn carve_inside_with_progress(
    input: &IntVolume,
    config: &EngineConfig,
    progress: Option<ProgressSink<'_>>,
) -> Result<IntVolume, EngineError> {
    let variant = Variant::CarveInside;
    let mut prepared = prepare(input, config, variant)?;
    let soft_total = count_soft(&prepared.volume);
    tracing::debug!(
        target: "engine.prepare",
        variant = variant.name(),
        soft_total,
        "prepared"
    );

    let commits = run_carve_inside(&mut prepared.volume, &prepared.sdm, soft_total, progress);
    tracing::trace!(
        target: "engine.propagate",
        variant = variant.name(),
        commits,
        "converged"
    );

    let out = finalize(&prepared.volume, input, config.inside_value(), variant);
    tracing::debug!(target: "engine.finalize", variant = variant.name(), commits, "finalized");
    Ok(out)
}

fn count_soft(volume: &topo_space::PaddedLabelVolume) -> usize {
    volume
        .iterate()
        .filter(|(_, label)| *label == topo_core::Label::SoftForeground)
        .count()
}
