mod engine;
mod settings;

pub use engine::{format_clock, EngineCheckpoint, Phase, RotationEngine};
pub use settings::{
    RotationSettings, DEFAULT_BREAKS_EVERY, DEFAULT_BREAK_MINUTES, DEFAULT_ROTATION_MINUTES,
};
