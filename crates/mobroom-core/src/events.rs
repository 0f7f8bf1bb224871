use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::notice::Notice;
use crate::timer::Phase;

/// Every engine command reports what happened as an Event.
/// The presentation layer renders them; nothing else consumes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    RotationStarted {
        driver: String,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    Paused {
        phase: Phase,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    Resumed {
        phase: Phase,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// Countdown hit zero; a stat reading is expected next.
    RotationEnded {
        rotation: u32,
        driver: String,
        next_driver: String,
        at: DateTime<Utc>,
    },
    StatRecorded {
        rotation: u32,
        energy: f64,
        flow: f64,
        /// `OnBreak` or `Switching`.
        next_phase: Phase,
        /// Set when the stat log could not be saved.
        notice: Option<Notice>,
        at: DateTime<Utc>,
    },
    BreakEnded {
        skipped: bool,
        at: DateTime<Utc>,
    },
    DriverSwitched {
        from: String,
        to: String,
        next_driver: String,
        at: DateTime<Utc>,
    },
    Reset {
        at: DateTime<Utc>,
    },
    Notice {
        notice: Notice,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        phase: Phase,
        running: bool,
        remaining_secs: u64,
        total_secs: u64,
        rotation_count: u32,
        rotations_until_break: u32,
        driver: Option<String>,
        next_driver: Option<String>,
        at: DateTime<Utc>,
    },
}
