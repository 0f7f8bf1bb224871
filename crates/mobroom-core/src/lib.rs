//! # mobroom Core Library
//!
//! Business logic for the mobroom mob-programming rotation timer. The CLI
//! binary is a thin presentation layer over this crate.
//!
//! ## Architecture
//!
//! - **Rotation Engine**: a synchronous state machine driven by an external
//!   one-second `tick()`; it sequences countdown, stat capture, optional
//!   break and driver switch
//! - **Roster**: ordered team members and the current driver
//! - **Stats**: energy/flow log with write-through persistence
//! - **Session links**: roster and settings as URL query parameters
//! - **Storage**: TOML configuration and session files
//!
//! ## Key Components
//!
//! - [`RotationEngine`]: Core rotation state machine
//! - [`Roster`]: Team order and driver
//! - [`StatStore`]: Stat log over a [`StatStorage`] backend
//! - [`SessionLink`]: Query-string codec
//! - [`Config`]: Application configuration management

pub mod error;
pub mod events;
pub mod link;
pub mod notice;
pub mod roster;
pub mod stats;
pub mod storage;
pub mod timer;

pub use error::{ConfigError, CoreError, RosterError, StorageError, TimerError, ValidationError};
pub use events::Event;
pub use link::SessionLink;
pub use notice::{Notice, NoticeLevel};
pub use roster::Roster;
pub use stats::{JsonFileStorage, MemoryStorage, Reading, StatSample, StatStorage, StatStore};
pub use storage::{Config, SessionFiles};
pub use timer::{EngineCheckpoint, Phase, RotationEngine, RotationSettings};
