//! Per-rotation energy/flow statistics.

pub mod chart;
mod sample;
mod store;

pub use sample::{Level, Reading, StatSample};
pub use store::{JsonFileStorage, MemoryStorage, StatAverage, StatStorage, StatStore, STATS_KEY};
