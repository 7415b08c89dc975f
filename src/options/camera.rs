use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TrackballError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Trackball tuning and initial pose.
pub struct CameraOptions {
    /// Rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 4.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 4.0), extend("step" = 0.05))]
    pub zoom_speed: f32,
    /// Pan sensitivity multiplier.
    #[schemars(title = "Pan Speed", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub pan_speed: f32,
    /// Fraction of residual motion consumed per frame. Lower values coast
    /// longer; 1.0 stops immediately.
    #[schemars(title = "Damping", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub damping_factor: f32,
    /// Closest the camera may get to its target.
    #[schemars(title = "Min Distance", range(min = 0.0))]
    pub min_distance: f32,
    /// Farthest the camera may get from the world origin.
    // Unbounded by default, which JSON cannot represent
    #[schemars(skip)]
    pub max_distance: f32,
    /// Initial look-at point.
    #[schemars(skip)]
    pub target: [f32; 3],
    /// Initial camera position.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Initial up vector.
    #[schemars(skip)]
    pub up: [f32; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            rotate_speed: 1.0,
            zoom_speed: 1.2,
            pan_speed: 0.1,
            damping_factor: 0.2,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            target: [0.0, 0.0, 0.0],
            position: [0.0, 0.0, 1.0],
            up: [0.0, 1.0, 0.0],
        }
    }
}

impl CameraOptions {
    /// Reject values the camera cannot use sensibly.
    pub fn validate(&self) -> Result<(), TrackballError> {
        let speeds = [
            ("rotate_speed", self.rotate_speed),
            ("zoom_speed", self.zoom_speed),
            ("pan_speed", self.pan_speed),
        ];
        for (name, value) in speeds {
            if !value.is_finite() || value < 0.0 {
                return Err(TrackballError::InvalidOptions(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        if !(self.damping_factor > 0.0 && self.damping_factor <= 1.0) {
            return Err(TrackballError::InvalidOptions(format!(
                "damping_factor must be in (0, 1], got {}",
                self.damping_factor
            )));
        }

        if self.min_distance.is_nan()
            || self.max_distance.is_nan()
            || self.min_distance < 0.0
            || self.min_distance > self.max_distance
        {
            return Err(TrackballError::InvalidOptions(format!(
                "distance limits must satisfy 0 <= min <= max, got {} and {}",
                self.min_distance, self.max_distance
            )));
        }

        let vectors = [
            ("target", self.target),
            ("position", self.position),
            ("up", self.up),
        ];
        for (name, value) in vectors {
            if value.iter().any(|c| !c.is_finite()) {
                return Err(TrackballError::InvalidOptions(format!(
                    "{name} must be finite, got {value:?}"
                )));
            }
        }
        if self.up == [0.0; 3] {
            return Err(TrackballError::InvalidOptions("up must be non-zero".to_owned()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(CameraOptions::default().validate().is_ok());
    }

    #[test]
    fn damping_outside_unit_interval_is_rejected() {
        for damping_factor in [0.0, -0.5, 1.5, f32::NAN] {
            let opts = CameraOptions {
                damping_factor,
                ..CameraOptions::default()
            };
            assert!(
                matches!(opts.validate(), Err(TrackballError::InvalidOptions(_))),
                "accepted damping {damping_factor}"
            );
        }
    }

    #[test]
    fn inverted_distance_limits_are_rejected() {
        let opts = CameraOptions {
            min_distance: 10.0,
            max_distance: 5.0,
            ..CameraOptions::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn negative_speed_is_rejected() {
        let opts = CameraOptions {
            pan_speed: -1.0,
            ..CameraOptions::default()
        };
        let err = opts.validate().unwrap_err();
        assert!(err.to_string().contains("pan_speed"));
    }

    #[test]
    fn zero_up_is_rejected() {
        let opts = CameraOptions {
            up: [0.0; 3],
            ..CameraOptions::default()
        };
        assert!(opts.validate().is_err());
    }
}
