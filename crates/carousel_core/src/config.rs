//! Tunable carousel parameters.
//!
//! `CarouselConfig` is plain data with sensible defaults; every field can be
//! overridden from a TOML document.  Missing sections or keys fall back to
//! the defaults, so an empty file is a valid configuration.
//!
//! ```toml
//! [geometry]
//! radius = 14.0
//!
//! [motion]
//! cooldown_ms = 350
//! convention = "literal"
//!
//! [motion.smoothing]
//! mode = "per_frame"
//! factor = 0.1
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::carousel::interpolator::Smoothing;
use crate::carousel::state::NudgeConvention;
use crate::error::{CarouselError, Result};

/// Layout of the items on the ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Distance from the centre of the ring to every item, in world units.
    ///
    /// Default: `12.0`
    pub radius: f32,
    /// Scale of the item currently in front of the viewer.
    ///
    /// Default: `1.2`
    pub active_scale: f32,
    /// Scale lost per item of circular distance from the active one.
    ///
    /// Default: `0.1`
    pub falloff_per_item: f32,
    /// Lower bound for non-active items.
    ///
    /// Default: `0.8`
    pub min_scale: f32,
    /// Extra relative scale applied to the hovered item.
    ///
    /// Default: `0.1`
    pub hover_bonus: f32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            radius: 12.0,
            active_scale: 1.2,
            falloff_per_item: 0.1,
            min_scale: 0.8,
            hover_bonus: 0.1,
        }
    }
}

/// How navigation input turns into motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Length of the transition lock after a discrete jump.
    ///
    /// Default: `500`
    pub cooldown_ms: u64,
    /// Radians of rotation per unit of normalised pointer travel.
    ///
    /// Default: `3.0`
    pub drag_amplification: f32,
    pub convention: NudgeConvention,
    /// Snap the target to the nearest item when a drag ends.
    ///
    /// Default: `false`
    pub snap_on_release: bool,
    pub smoothing: Smoothing,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: 500,
            drag_amplification: 3.0,
            convention: NudgeConvention::default(),
            snap_on_release: false,
            smoothing: Smoothing::default(),
        }
    }
}

impl MotionConfig {
    /// Cooldown expressed in seconds, the unit the frame clock works in.
    #[inline]
    pub fn cooldown_secs(&self) -> f64 {
        self.cooldown_ms as f64 / 1000.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub geometry: GeometryConfig,
    pub motion: MotionConfig,
}

impl CarouselConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| CarouselError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        log::info!("loaded carousel config from {}", path.display());
        Ok(config)
    }

    /// Serialise back to TOML, e.g. to print the effective configuration.
    pub fn to_toml_string(&self) -> String {
        // every field is a plain number, bool or unit-like enum, so
        // serialisation cannot fail
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Reject values that would break the geometry or motion invariants.
    pub fn validate(&self) -> Result<()> {
        let g = &self.geometry;
        if !(g.radius.is_finite() && g.radius > 0.0) {
            return Err(CarouselError::invalid("geometry.radius", "must be a positive number"));
        }
        if !(g.min_scale > 0.0 && g.min_scale <= 1.0) {
            return Err(CarouselError::invalid("geometry.min_scale", "must be in (0, 1]"));
        }
        let nearest_neighbour = (1.0 - g.falloff_per_item.max(0.0)).max(g.min_scale);
        if !(g.active_scale > nearest_neighbour) {
            return Err(CarouselError::invalid(
                "geometry.active_scale",
                "must be larger than any neighbour scale",
            ));
        }
        if !(g.falloff_per_item >= 0.0) {
            return Err(CarouselError::invalid("geometry.falloff_per_item", "must not be negative"));
        }
        if !(g.hover_bonus >= 0.0 && g.hover_bonus < 1.0) {
            return Err(CarouselError::invalid("geometry.hover_bonus", "must be in [0, 1)"));
        }

        let m = &self.motion;
        m.smoothing.validate()?;
        if !(m.drag_amplification.is_finite() && m.drag_amplification > 0.0) {
            return Err(CarouselError::invalid("motion.drag_amplification", "must be a positive number"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = CarouselConfig::from_toml_str("").unwrap();
        assert_eq!(config, CarouselConfig::default());
        assert_eq!(config.motion.cooldown_ms, 500);
        assert_eq!(config.motion.convention, NudgeConvention::Reversed);
    }

    #[test]
    fn partial_override() {
        let src = r#"
            [geometry]
            radius = 15.0

            [motion]
            cooldown_ms = 250
            convention = "literal"

            [motion.smoothing]
            mode = "per_frame"
            factor = 0.1
        "#;
        let config = CarouselConfig::from_toml_str(src).unwrap();
        assert_eq!(config.geometry.radius, 15.0);
        assert_eq!(config.geometry.min_scale, 0.8);
        assert_eq!(config.motion.cooldown_ms, 250);
        assert_eq!(config.motion.convention, NudgeConvention::Literal);
        assert_eq!(config.motion.smoothing, Smoothing::PerFrame { factor: 0.1 });
        assert!((config.motion.cooldown_secs() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn rejects_bad_values() {
        let err = CarouselConfig::from_toml_str("[geometry]\nradius = -1.0").unwrap_err();
        assert!(matches!(err, CarouselError::InvalidParameter { field: "geometry.radius", .. }));

        let err = CarouselConfig::from_toml_str("[motion.smoothing]\nmode = \"per_frame\"\nfactor = 1.5")
            .unwrap_err();
        assert!(matches!(err, CarouselError::InvalidParameter { .. }));

        // neighbours clamped to min_scale would tie with the active item
        let err = CarouselConfig::from_toml_str(
            "[geometry]\nactive_scale = 1.0\nmin_scale = 1.0\nfalloff_per_item = 0.1",
        )
        .unwrap_err();
        assert!(matches!(err, CarouselError::InvalidParameter { field: "geometry.active_scale", .. }));

        let err = CarouselConfig::from_toml_str("[geometry\nradius = 1").unwrap_err();
        assert!(matches!(err, CarouselError::ConfigParse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = CarouselConfig::load("/definitely/not/here/carousel.toml").unwrap_err();
        assert!(err.to_string().contains("carousel.toml"));
    }

    #[test]
    fn round_trips_through_toml() {
        let config = CarouselConfig::default();
        let text = config.to_toml_string();
        assert_eq!(CarouselConfig::from_toml_str(&text).unwrap(), config);
    }
}
