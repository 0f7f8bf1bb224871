use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// A self-reported level between 0.0 (low) and 1.0 (high).
///
/// Only finite values inside the closed unit interval can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Level(f64);

impl Level {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 1.0;

    pub fn new(field: &'static str, value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite { field });
        }
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field,
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Level {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new("level", value)
    }
}

impl From<Level> for f64 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.0 * 100.0)
    }
}

/// One energy/flow reading as captured at the end of a rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub energy: Level,
    pub flow: Level,
}

impl Reading {
    pub fn new(energy: f64, flow: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            energy: Level::new("energy", energy)?,
            flow: Level::new("flow", flow)?,
        })
    }

    /// Map a click on a 2-D surface to a reading: x is flow, y is energy
    /// with the origin at the top-left, as on screen.
    pub fn from_surface_point(x: f64, y: f64, width: f64, height: f64) -> Result<Self, ValidationError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(ValidationError::InvalidValue {
                field: "width".into(),
                message: "surface width must be positive".into(),
            });
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(ValidationError::InvalidValue {
                field: "height".into(),
                message: "surface height must be positive".into(),
            });
        }
        Self::new(1.0 - y / height, x / width)
    }
}

/// A recorded reading. Immutable once stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatSample {
    pub energy: Level,
    pub flow: Level,
    pub timestamp: DateTime<Utc>,
}

impl StatSample {
    pub fn new(reading: Reading, timestamp: DateTime<Utc>) -> Self {
        Self {
            energy: reading.energy,
            flow: reading.flow,
            timestamp,
        }
    }

    pub fn reading(&self) -> Reading {
        Reading {
            energy: self.energy,
            flow: self.flow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_accepts_bounds() {
        assert_eq!(Level::new("energy", 0.0).unwrap().value(), 0.0);
        assert_eq!(Level::new("energy", 1.0).unwrap().value(), 1.0);
    }

    #[test]
    fn level_rejects_out_of_range_and_non_finite() {
        assert!(matches!(
            Level::new("energy", -0.1),
            Err(ValidationError::OutOfRange { field: "energy", .. })
        ));
        assert!(matches!(
            Level::new("flow", 1.5),
            Err(ValidationError::OutOfRange { field: "flow", .. })
        ));
        assert_eq!(
            Level::new("flow", f64::NAN),
            Err(ValidationError::NotFinite { field: "flow" })
        );
        assert_eq!(
            Level::new("flow", f64::INFINITY),
            Err(ValidationError::NotFinite { field: "flow" })
        );
    }

    #[test]
    fn reading_names_the_bad_field() {
        let err = Reading::new(0.5, 2.0).unwrap_err();
        assert!(err.to_string().contains("'flow'"));
    }

    #[test]
    fn surface_point_maps_axes() {
        let r = Reading::from_surface_point(150.0, 100.0, 200.0, 400.0).unwrap();
        assert_eq!(r.flow.value(), 0.75);
        assert_eq!(r.energy.value(), 0.75);
    }

    #[test]
    fn surface_point_outside_is_rejected() {
        assert!(Reading::from_surface_point(250.0, 10.0, 200.0, 100.0).is_err());
        assert!(Reading::from_surface_point(10.0, 10.0, 0.0, 100.0).is_err());
    }

    #[test]
    fn sample_json_matches_stored_format() {
        let at = DateTime::parse_from_rfc3339("2026-10-19T09:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let sample = StatSample::new(Reading::new(0.25, 0.5).unwrap(), at);
        let json = serde_json::to_value(sample).unwrap();
        assert_eq!(json["energy"], 0.25);
        assert_eq!(json["flow"], 0.5);
        assert_eq!(json["timestamp"], "2026-10-19T09:30:00Z");
    }

    #[test]
    fn out_of_range_sample_fails_to_deserialize() {
        let json = r#"{"energy": 1.2, "flow": 0.5, "timestamp": "2026-10-19T09:30:00Z"}"#;
        assert!(serde_json::from_str::<StatSample>(json).is_err());
    }
}
