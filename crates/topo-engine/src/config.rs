//! Engine configuration, built through a validating builder.

use topo_core::EngineError;
use topo_space::BinaryVolume;

/// Configuration for a single carve-outside or carve-inside run.
///
/// Constructed via [`EngineConfig::builder`].
#[derive(Debug)]
pub struct EngineConfig {
    inside_value: i32,
    radius: u32,
    spacing: (f64, f64, f64),
    mask: Option<BinaryVolume>,
}

impl EngineConfig {
    /// Create a new builder for configuring an engine run.
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder {
            inside_value: 1,
            radius: 1,
            spacing: (1.0, 1.0, 1.0),
            mask: None,
        }
    }

    /// The input sentinel identifying foreground voxels; also the value
    /// written to foreground output cells.
    pub fn inside_value(&self) -> i32 {
        self.inside_value
    }

    /// Structuring-element radius for the default reference mask.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Per-axis voxel spacing used by the signed distance map.
    pub fn spacing(&self) -> (f64, f64, f64) {
        self.spacing
    }

    /// The caller-supplied reference mask, if any.
    pub fn mask(&self) -> Option<&BinaryVolume> {
        self.mask.as_ref()
    }
}

/// Builder for [`EngineConfig`].
///
/// Every field has a default; `build()` only rejects an invalid radius.
pub struct EngineConfigBuilder {
    inside_value: i32,
    radius: u32,
    spacing: (f64, f64, f64),
    mask: Option<BinaryVolume>,
}

impl EngineConfigBuilder {
    /// Set the foreground sentinel value (default: 1).
    pub fn inside_value(mut self, value: i32) -> Self {
        self.inside_value = value;
        self
    }

    /// Set the default-mask structuring-element radius (default: 1).
    /// Must be >= 1.
    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the per-axis voxel spacing (default: isotropic `(1.0, 1.0,
    /// 1.0)`).
    pub fn spacing(mut self, spacing: (f64, f64, f64)) -> Self {
        self.spacing = spacing;
        self
    }

    /// Supply an explicit reference mask, overriding default synthesis.
    pub fn mask(mut self, mask: BinaryVolume) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Build the configuration, validating `radius`.
    ///
    /// # Errors
    ///
    /// Returns `Err(EngineError::InvalidRadius)` if `radius` is 0.
    pub fn build(self) -> Result<EngineConfig, EngineError> {
        if self.radius < 1 {
            return Err(EngineError::InvalidRadius {
                radius: i64::from(self.radius),
            });
        }
        Ok(EngineConfig {
            inside_value: self.inside_value,
            radius: self.radius,
            spacing: self.spacing,
            mask: self.mask,
        })
    }
}
