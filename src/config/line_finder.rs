//! Line finder configuration.
//!
//! A `segmentation` section carries the numeric parameters and the angle
//! window (explicit or derived from the phantom pose); an optional `phantom`
//! section carries the pattern catalog. Missing numeric fields are not fatal:
//! they are logged and replaced by [`UNSET_PARAMETER`].

use crate::detector::{FidLineFinder, LineFinderParams, UNSET_PARAMETER};
use crate::error::{ConfigError, PatternError};
use crate::pattern::{Pattern, PatternCatalog};
use crate::window::{AngleWindow, RotationEnvelope, UNSET_THETA};
use log::{error, warn};
use nalgebra::Matrix4;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// `segmentation` section of the configuration file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SegmentationConfig {
    pub approximate_spacing_mm_per_pixel: Option<f64>,
    pub collinear_points_max_distance_from_line_mm: Option<f64>,
    pub min_theta_degrees: Option<f64>,
    pub max_theta_degrees: Option<f64>,
    #[serde(default)]
    pub compute_parameters_from_phantom_definition: bool,
    pub image_normal_vector_in_phantom_frame_maximum_rotation_angle_deg: Option<Vec<f64>>,
    /// Row-major 4×4 transform.
    pub image_to_phantom_transform: Option<Vec<f64>>,
}

impl SegmentationConfig {
    /// Resolves the parameters, substituting sentinels for missing fields.
    pub fn resolve(&self, catalog: &PatternCatalog) -> LineFinderParams {
        let spacing_mm_per_px = required(
            self.approximate_spacing_mm_per_pixel,
            "approximate_spacing_mm_per_pixel",
        );
        let collinear_tolerance_mm = required(
            self.collinear_points_max_distance_from_line_mm,
            "collinear_points_max_distance_from_line_mm",
        );
        let angle_window = if self.compute_parameters_from_phantom_definition {
            self.derive_window(catalog)
        } else {
            AngleWindow::new(
                self.min_theta_degrees
                    .map(f64::to_radians)
                    .unwrap_or_else(|| missing_theta("min_theta_degrees")),
                self.max_theta_degrees
                    .map(f64::to_radians)
                    .unwrap_or_else(|| missing_theta("max_theta_degrees")),
            )
        };
        LineFinderParams::new(spacing_mm_per_px, collinear_tolerance_mm, angle_window)
    }

    fn derive_window(&self, catalog: &PatternCatalog) -> AngleWindow {
        let Some(envelope) = self.envelope() else {
            error!("cannot derive angle window: rotation envelope must hold 6 values");
            return AngleWindow::unset();
        };
        let Some(transform) = self.transform() else {
            error!("cannot derive angle window: image-to-phantom transform must hold 16 values");
            return AngleWindow::unset();
        };
        let Some(normal) = catalog.first_wire_plane_normal() else {
            error!("cannot derive angle window: phantom definition has no N-wire pattern");
            return AngleWindow::unset();
        };
        match AngleWindow::derive(&transform, &envelope, &normal) {
            Ok(window) => window,
            Err(err) => {
                error!("cannot derive angle window: {err}");
                AngleWindow::unset()
            }
        }
    }

    fn envelope(&self) -> Option<RotationEnvelope> {
        let values = self
            .image_normal_vector_in_phantom_frame_maximum_rotation_angle_deg
            .as_deref()?;
        let values: [f64; 6] = values.try_into().ok()?;
        Some(RotationEnvelope(values))
    }

    fn transform(&self) -> Option<Matrix4<f64>> {
        let values = self.image_to_phantom_transform.as_deref()?;
        if values.len() != 16 {
            return None;
        }
        Some(Matrix4::from_row_slice(values))
    }
}

fn required(value: Option<f64>, field: &str) -> f64 {
    value.unwrap_or_else(|| {
        warn!("segmentation.{field} is missing, left unset");
        UNSET_PARAMETER
    })
}

fn missing_theta(field: &str) -> f64 {
    warn!("segmentation.{field} is missing, left unset");
    UNSET_THETA
}

/// `phantom` section: the wire patterns of the phantom.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PhantomDefinition {
    pub patterns: Vec<Pattern>,
}

/// Top-level line finder configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LineFinderConfig {
    pub segmentation: Option<SegmentationConfig>,
    #[serde(default)]
    pub phantom: Option<PhantomDefinition>,
}

impl LineFinderConfig {
    /// Checks what cannot be recovered from: the `segmentation` section and
    /// the pattern table.
    pub fn check(&self, path: &Path) -> Result<(), ConfigError> {
        if self.segmentation.is_none() {
            return Err(ConfigError::MissingSection {
                path: path.to_path_buf(),
                section: "segmentation",
            });
        }
        self.catalog()?;
        Ok(())
    }

    /// Validated catalog; empty when no phantom section is present.
    pub fn catalog(&self) -> Result<PatternCatalog, PatternError> {
        let patterns = self
            .phantom
            .as_ref()
            .map(|p| p.patterns.clone())
            .unwrap_or_default();
        PatternCatalog::new(patterns)
    }

    pub fn params(&self, catalog: &PatternCatalog) -> LineFinderParams {
        match &self.segmentation {
            Some(segmentation) => segmentation.resolve(catalog),
            None => {
                error!("segmentation section is missing, all parameters left unset");
                LineFinderParams::default()
            }
        }
    }

    pub fn build_finder(&self) -> Result<FidLineFinder, ConfigError> {
        let catalog = self.catalog()?;
        let params = self.params(&catalog);
        Ok(FidLineFinder::new(catalog, params))
    }
}

/// Loads and checks a line finder configuration.
pub fn load_config(path: &Path) -> Result<LineFinderConfig, ConfigError> {
    let config: LineFinderConfig = super::read_json(path)?;
    config.check(path)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn parse(json: &str) -> LineFinderConfig {
        serde_json::from_str(json).expect("valid json")
    }

    #[test]
    fn explicit_window_is_converted_to_radians() {
        let config = parse(
            r#"{"segmentation": {
                "approximate_spacing_mm_per_pixel": 0.2,
                "collinear_points_max_distance_from_line_mm": 0.5,
                "min_theta_degrees": -10.0,
                "max_theta_degrees": 15.0}}"#,
        );
        let catalog = config.catalog().expect("empty catalog");
        let params = config.params(&catalog);
        assert_eq!(params.spacing_mm_per_px, 0.2);
        assert_eq!(params.collinear_tolerance_mm, 0.5);
        assert_abs_diff_eq!(params.angle_window.min_theta, -10f64.to_radians());
        assert_abs_diff_eq!(params.angle_window.max_theta, 15f64.to_radians());
    }

    #[test]
    fn missing_fields_become_sentinels() {
        let config = parse(r#"{"segmentation": {"min_theta_degrees": 5.0}}"#);
        let params = config.params(&PatternCatalog::default());
        assert_eq!(params.spacing_mm_per_px, UNSET_PARAMETER);
        assert_eq!(params.collinear_tolerance_mm, UNSET_PARAMETER);
        assert_abs_diff_eq!(params.angle_window.min_theta, 5f64.to_radians());
        assert_eq!(params.angle_window.max_theta, UNSET_THETA);
    }

    #[test]
    fn missing_segmentation_section_is_an_error() {
        let config = parse(r#"{"phantom": {"patterns": []}}"#);
        let err = config.check(Path::new("cfg.json")).expect_err("must fail");
        assert!(matches!(
            err,
            ConfigError::MissingSection {
                section: "segmentation",
                ..
            }
        ));
    }

    #[test]
    fn derivation_without_n_wire_leaves_window_unset() {
        let config = parse(
            r#"{"segmentation": {
                "approximate_spacing_mm_per_pixel": 0.2,
                "collinear_points_max_distance_from_line_mm": 0.5,
                "compute_parameters_from_phantom_definition": true,
                "image_normal_vector_in_phantom_frame_maximum_rotation_angle_deg":
                    [-5, 5, -5, 5, -5, 5],
                "image_to_phantom_transform":
                    [1,0,0,0, 0,1,0,0, 0,0,1,0, 0,0,0,1]},
              "phantom": {"patterns": [{"name": "chain", "wires": [
                {"distance_to_origin_mm": 0.0, "tolerance_mm": 1.0},
                {"distance_to_origin_mm": 10.0, "tolerance_mm": 1.0}]}]}}"#,
        );
        let catalog = config.catalog().expect("valid catalog");
        assert!(config.params(&catalog).angle_window.is_unset());
    }

    #[test]
    fn derivation_uses_first_n_wire_pattern() {
        let config = parse(
            r#"{"segmentation": {
                "approximate_spacing_mm_per_pixel": 0.2,
                "collinear_points_max_distance_from_line_mm": 0.5,
                "compute_parameters_from_phantom_definition": true,
                "image_normal_vector_in_phantom_frame_maximum_rotation_angle_deg":
                    [0, 0, 0, 0, -10, 10],
                "image_to_phantom_transform":
                    [1,0,0,0, 0,1,0,0, 0,0,1,0, 0,0,0,1]},
              "phantom": {"patterns": [{"name": "n1",
                "wires": [
                  {"distance_to_origin_mm": 0.0, "tolerance_mm": 1.0},
                  {"distance_to_origin_mm": 10.0, "tolerance_mm": 1.0},
                  {"distance_to_origin_mm": 20.0, "tolerance_mm": 1.0}],
                "shape": {"kind": "n_wire", "endpoints": [
                  {"front": [0, 0, 0], "back": [0, 0, 10]},
                  {"front": [0, 10, 0], "back": [0, 10, 10]},
                  {"front": [0, 20, 0], "back": [0, 20, 10]}]}}]}}"#,
        );
        let catalog = config.catalog().expect("valid catalog");
        let window = config.params(&catalog).angle_window;
        // Normal (0,0,10) x (0,10,0) = (-100,0,0): lines run along image y.
        assert_abs_diff_eq!(window.min_theta, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(window.max_theta, 10f64.to_radians(), epsilon = 1e-9);
    }
}
