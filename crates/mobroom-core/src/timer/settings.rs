use serde::Serialize;

use crate::error::ValidationError;

pub const DEFAULT_ROTATION_MINUTES: u32 = 5;
pub const DEFAULT_BREAKS_EVERY: u32 = 4;
pub const DEFAULT_BREAK_MINUTES: u32 = 10;

/// Rotation timing. Every field is a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RotationSettings {
    rotation_minutes: u32,
    breaks_every: u32,
    break_minutes: u32,
}

impl RotationSettings {
    pub fn new(
        rotation_minutes: u32,
        breaks_every: u32,
        break_minutes: u32,
    ) -> Result<Self, ValidationError> {
        positive("rotation_minutes", rotation_minutes)?;
        positive("breaks_every", breaks_every)?;
        positive("break_minutes", break_minutes)?;
        Ok(Self {
            rotation_minutes,
            breaks_every,
            break_minutes,
        })
    }

    pub fn rotation_minutes(&self) -> u32 {
        self.rotation_minutes
    }

    /// Number of rotations between breaks.
    pub fn breaks_every(&self) -> u32 {
        self.breaks_every
    }

    pub fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    pub fn rotation_secs(&self) -> u64 {
        u64::from(self.rotation_minutes) * 60
    }

    pub fn break_secs(&self) -> u64 {
        u64::from(self.break_minutes) * 60
    }

    pub fn with_rotation_minutes(self, minutes: u32) -> Result<Self, ValidationError> {
        Self::new(minutes, self.breaks_every, self.break_minutes)
    }

    pub fn with_breaks_every(self, rotations: u32) -> Result<Self, ValidationError> {
        Self::new(self.rotation_minutes, rotations, self.break_minutes)
    }

    pub fn with_break_minutes(self, minutes: u32) -> Result<Self, ValidationError> {
        Self::new(self.rotation_minutes, self.breaks_every, minutes)
    }
}

impl Default for RotationSettings {
    fn default() -> Self {
        Self {
            rotation_minutes: DEFAULT_ROTATION_MINUTES,
            breaks_every: DEFAULT_BREAKS_EVERY,
            break_minutes: DEFAULT_BREAK_MINUTES,
        }
    }
}

fn positive(field: &str, value: u32) -> Result<(), ValidationError> {
    if value == 0 {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            message: "must be a positive integer".into(),
        });
    }
    Ok(())
}
