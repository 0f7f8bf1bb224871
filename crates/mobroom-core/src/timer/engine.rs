//! Rotation engine implementation.
//!
//! The engine is a synchronous state machine with one-second granularity.
//! It owns no clock and no thread: the caller invokes `tick()` once per
//! elapsed second.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Counting -> AwaitingStat -> (OnBreak ->) Switching -> Counting
//! ```
//!
//! `Counting` and `OnBreak` can be paused and resumed; `reset()` returns to
//! `Idle` from anywhere.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = RotationEngine::new(settings, roster, stats);
//! engine.start()?;
//! // Once per second:
//! if let Some(event) = engine.tick() { /* render */ }
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

use super::settings::RotationSettings;
use crate::error::{Result, TimerError};
use crate::events::Event;
use crate::notice::Notice;
use crate::roster::Roster;
use crate::stats::{Reading, StatStorage, StatStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Counting,
    /// Countdown finished, waiting for the energy/flow reading.
    AwaitingStat,
    OnBreak,
    /// Waiting for the team to confirm the hand-over.
    Switching,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Idle => "idle",
            Phase::Counting => "counting",
            Phase::AwaitingStat => "awaiting stat",
            Phase::OnBreak => "on break",
            Phase::Switching => "switching",
        };
        f.write_str(s)
    }
}

/// The resumable part of the engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineCheckpoint {
    pub phase: Phase,
    pub running: bool,
    pub remaining_secs: u64,
    pub rotation_count: u32,
    /// Rotation length in effect when the checkpoint was taken.
    #[serde(default)]
    pub rotation_secs: Option<u64>,
}

impl EngineCheckpoint {
    /// The same checkpoint with the countdown stopped.
    pub fn paused(self) -> Self {
        Self {
            running: false,
            ..self
        }
    }
}

/// Core rotation engine.
///
/// Owns the roster and stat store it is constructed with.
#[derive(Debug)]
pub struct RotationEngine<S: StatStorage> {
    settings: RotationSettings,
    roster: Roster,
    stats: StatStore<S>,
    phase: Phase,
    running: bool,
    remaining_secs: u64,
    /// Completed rotations (stat recorded) since the engine was created.
    rotation_count: u32,
}

impl<S: StatStorage> RotationEngine<S> {
    /// Create an engine in `Idle` with a full rotation countdown.
    pub fn new(settings: RotationSettings, roster: Roster, stats: StatStore<S>) -> Self {
        Self {
            remaining_secs: settings.rotation_secs(),
            settings,
            roster,
            stats,
            phase: Phase::Idle,
            running: false,
            rotation_count: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    /// Length of the countdown for the current phase.
    pub fn total_secs(&self) -> u64 {
        match self.phase {
            Phase::OnBreak => self.settings.break_secs(),
            _ => self.settings.rotation_secs(),
        }
    }

    pub fn rotation_count(&self) -> u32 {
        self.rotation_count
    }

    /// Rotations left before the next break, counting the current one.
    pub fn rotations_until_break(&self) -> u32 {
        let every = self.settings.breaks_every();
        every - self.rotation_count % every
    }

    pub fn settings(&self) -> &RotationSettings {
        &self.settings
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    pub fn stats(&self) -> &StatStore<S> {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut StatStore<S> {
        &mut self.stats
    }

    /// Current and next driver while a hand-over is pending.
    pub fn switch_preview(&self) -> Option<(&str, &str)> {
        if self.phase != Phase::Switching {
            return None;
        }
        Some((self.roster.current_driver()?, self.roster.next_driver()?))
    }

    pub fn checkpoint(&self) -> EngineCheckpoint {
        EngineCheckpoint {
            phase: self.phase,
            running: self.running,
            remaining_secs: self.remaining_secs,
            rotation_count: self.rotation_count,
            rotation_secs: Some(self.settings.rotation_secs()),
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            phase: self.phase,
            running: self.running,
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs(),
            rotation_count: self.rotation_count,
            rotations_until_break: self.rotations_until_break(),
            driver: self.roster.current_driver().map(str::to_string),
            next_driver: self.roster.next_driver().map(str::to_string),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Restore a previously saved checkpoint.
    ///
    /// Phases that need a driver fall back to `Idle` when the roster is
    /// empty, and the countdown is clamped to the phase length. If the
    /// rotation length changed since the checkpoint was taken, an `Idle` or
    /// `Counting` countdown restarts at the new length, as with
    /// [`set_settings`](Self::set_settings).
    pub fn restore(&mut self, checkpoint: EngineCheckpoint) {
        self.rotation_count = checkpoint.rotation_count;
        self.phase = checkpoint.phase;
        self.running = checkpoint.running
            && matches!(checkpoint.phase, Phase::Counting | Phase::OnBreak);
        self.remaining_secs = checkpoint.remaining_secs.min(self.total_secs());
        let length_changed = checkpoint
            .rotation_secs
            .is_some_and(|secs| secs != self.settings.rotation_secs());
        if length_changed && matches!(self.phase, Phase::Idle | Phase::Counting) {
            debug!(secs = self.settings.rotation_secs(), "rotation length changed");
            self.remaining_secs = self.settings.rotation_secs();
        }
        if self.phase != Phase::Idle && self.roster.is_empty() {
            self.phase = Phase::Idle;
            self.running = false;
            self.remaining_secs = self.settings.rotation_secs();
        }
        debug!(phase = %self.phase, remaining = self.remaining_secs, "engine restored");
    }

    /// Start the countdown, or resume a paused one.
    pub fn start(&mut self) -> Result<Option<Event>> {
        match self.phase {
            Phase::Idle => {
                let driver = self
                    .roster
                    .current_driver()
                    .ok_or(TimerError::EmptyRoster)?
                    .to_string();
                self.phase = Phase::Counting;
                self.running = true;
                info!(driver = %driver, secs = self.remaining_secs, "rotation started");
                Ok(Some(Event::RotationStarted {
                    driver,
                    duration_secs: self.remaining_secs,
                    at: Utc::now(),
                }))
            }
            Phase::Counting | Phase::OnBreak => self.resume(),
            phase => Err(TimerError::InvalidPhase {
                operation: "start",
                phase,
            }
            .into()),
        }
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        debug!(phase = %self.phase, remaining = self.remaining_secs, "paused");
        Some(Event::Paused {
            phase: self.phase,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn resume(&mut self) -> Result<Option<Event>> {
        match self.phase {
            Phase::Counting | Phase::OnBreak if !self.running => {
                if self.phase == Phase::Counting && self.roster.is_empty() {
                    return Err(TimerError::EmptyRoster.into());
                }
                self.running = true;
                debug!(phase = %self.phase, remaining = self.remaining_secs, "resumed");
                Ok(Some(Event::Resumed {
                    phase: self.phase,
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                }))
            }
            _ => Ok(None),
        }
    }

    /// Start/pause button behaviour.
    pub fn toggle(&mut self) -> Result<Option<Event>> {
        if self.running {
            Ok(self.pause())
        } else {
            self.start()
        }
    }

    /// Advance the running countdown by one second.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        match self.phase {
            Phase::Counting => {
                if self.roster.is_empty() {
                    return Some(self.halt_without_roster());
                }
                self.remaining_secs = self.remaining_secs.saturating_sub(1);
                if self.remaining_secs > 0 {
                    return None;
                }
                self.phase = Phase::AwaitingStat;
                self.running = false;
                let driver = self.roster.current_driver()?.to_string();
                let next_driver = self.roster.next_driver()?.to_string();
                info!(
                    rotation = self.rotation_count + 1,
                    driver = %driver,
                    next = %next_driver,
                    "rotation ended"
                );
                Some(Event::RotationEnded {
                    rotation: self.rotation_count + 1,
                    driver,
                    next_driver,
                    at: Utc::now(),
                })
            }
            Phase::OnBreak => {
                self.remaining_secs = self.remaining_secs.saturating_sub(1);
                if self.remaining_secs > 0 {
                    return None;
                }
                Some(self.end_break(false))
            }
            _ => None,
        }
    }

    /// Hand the reading to the stat store and move on to a break or the
    /// driver switch.
    pub fn record_stat(&mut self, reading: Reading) -> Result<Event> {
        if self.phase != Phase::AwaitingStat {
            return Err(TimerError::InvalidPhase {
                operation: "record a stat",
                phase: self.phase,
            }
            .into());
        }
        let notice = self.stats.record(reading);
        self.rotation_count += 1;

        if self.rotation_count.is_multiple_of(self.settings.breaks_every()) {
            self.phase = Phase::OnBreak;
            self.running = true;
            self.remaining_secs = self.settings.break_secs();
            info!(rotation = self.rotation_count, secs = self.remaining_secs, "break started");
        } else {
            self.phase = Phase::Switching;
        }

        Ok(Event::StatRecorded {
            rotation: self.rotation_count,
            energy: reading.energy.value(),
            flow: reading.flow.value(),
            next_phase: self.phase,
            notice,
            at: Utc::now(),
        })
    }

    /// Cut the current break short.
    pub fn skip_break(&mut self) -> Result<Event> {
        if self.phase != Phase::OnBreak {
            return Err(TimerError::InvalidPhase {
                operation: "skip the break",
                phase: self.phase,
            }
            .into());
        }
        Ok(self.end_break(true))
    }

    /// Hand over to the next driver and start their countdown.
    pub fn confirm_switch(&mut self) -> Result<Event> {
        if self.phase != Phase::Switching {
            return Err(TimerError::InvalidPhase {
                operation: "switch drivers",
                phase: self.phase,
            }
            .into());
        }
        let Some(from) = self.roster.current_driver().map(str::to_string) else {
            return Ok(self.halt_without_roster());
        };
        self.roster.advance();
        let to = self.roster.current_driver().unwrap_or_default().to_string();
        let next_driver = self.roster.next_driver().unwrap_or_default().to_string();

        self.remaining_secs = self.settings.rotation_secs();
        self.phase = Phase::Counting;
        self.running = true;
        info!(from = %from, to = %to, "driver switched");
        Ok(Event::DriverSwitched {
            from,
            to,
            next_driver,
            at: Utc::now(),
        })
    }

    /// Back to `Idle` with a fresh countdown and the first member driving.
    pub fn reset(&mut self) -> Event {
        self.phase = Phase::Idle;
        self.running = false;
        self.remaining_secs = self.settings.rotation_secs();
        self.roster.reset_driver();
        debug!("engine reset");
        Event::Reset { at: Utc::now() }
    }

    /// Replace the timing settings. A rotation countdown restarts at the new
    /// length; a break in progress keeps its remaining time.
    pub fn set_settings(&mut self, settings: RotationSettings) {
        self.settings = settings;
        if matches!(self.phase, Phase::Idle | Phase::Counting) {
            self.remaining_secs = settings.rotation_secs();
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn end_break(&mut self, skipped: bool) -> Event {
        self.phase = Phase::Switching;
        self.running = false;
        self.remaining_secs = self.settings.rotation_secs();
        info!(skipped, "break ended");
        Event::BreakEnded {
            skipped,
            at: Utc::now(),
        }
    }

    fn halt_without_roster(&mut self) -> Event {
        self.phase = Phase::Idle;
        self.running = false;
        self.remaining_secs = self.settings.rotation_secs();
        Event::Notice {
            notice: Notice::blocking(TimerError::EmptyRoster.to_string()),
            at: Utc::now(),
        }
    }
}

/// `MM:SS`, minutes unbounded.
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::stats::MemoryStorage;

    fn engine(members: &[&str], settings: RotationSettings) -> RotationEngine<MemoryStorage> {
        RotationEngine::new(
            settings,
            Roster::from_names(members, None),
            StatStore::open(MemoryStorage::new()),
        )
    }

    fn reading() -> Reading {
        Reading::new(0.5, 0.5).unwrap()
    }

    fn run_out(engine: &mut RotationEngine<MemoryStorage>) -> Option<Event> {
        let mut last = None;
        while engine.is_running() {
            last = engine.tick();
        }
        last
    }

    #[test]
    fn start_pause_resume() {
        let mut engine = engine(&["A"], RotationSettings::default());
        assert_eq!(engine.phase(), Phase::Idle);

        assert!(engine.start().unwrap().is_some());
        assert_eq!(engine.phase(), Phase::Counting);
        assert!(engine.is_running());

        engine.tick();
        let remaining = engine.remaining_secs();
        assert!(engine.pause().is_some());
        assert!(!engine.is_running());
        assert!(engine.tick().is_none());
        assert_eq!(engine.remaining_secs(), remaining);

        assert!(engine.resume().unwrap().is_some());
        assert!(engine.is_running());
        assert_eq!(engine.phase(), Phase::Counting);
    }

    #[test]
    fn start_with_empty_roster_is_refused() {
        let mut engine = engine(&[], RotationSettings::default());
        let err = engine.start().unwrap_err();
        assert!(matches!(err, CoreError::Timer(TimerError::EmptyRoster)));
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn start_while_running_is_noop() {
        let mut engine = engine(&["A"], RotationSettings::default());
        engine.start().unwrap();
        assert!(engine.start().unwrap().is_none());
    }

    #[test]
    fn one_minute_rotation_ends_after_sixty_ticks() {
        let settings = RotationSettings::new(1, 4, 1).unwrap();
        let mut engine = engine(&["A", "B"], settings);
        engine.start().unwrap();
        for _ in 0..59 {
            assert!(engine.tick().is_none());
        }
        assert_eq!(engine.phase(), Phase::Counting);
        match engine.tick() {
            Some(Event::RotationEnded {
                rotation,
                driver,
                next_driver,
                ..
            }) => {
                assert_eq!(rotation, 1);
                assert_eq!(driver, "A");
                assert_eq!(next_driver, "B");
            }
            other => panic!("Expected RotationEnded, got {other:?}"),
        }
        assert_eq!(engine.phase(), Phase::AwaitingStat);
        assert!(!engine.is_running());
    }

    #[test]
    fn stat_then_switch_advances_driver() {
        let settings = RotationSettings::new(1, 4, 1).unwrap();
        let mut engine = engine(&["A", "B", "C"], settings);
        engine.start().unwrap();
        run_out(&mut engine);

        let event = engine.record_stat(reading()).unwrap();
        assert!(matches!(
            event,
            Event::StatRecorded {
                rotation: 1,
                next_phase: Phase::Switching,
                notice: None,
                ..
            }
        ));
        assert_eq!(engine.switch_preview(), Some(("A", "B")));

        engine.confirm_switch().unwrap();
        assert_eq!(engine.roster().current_driver(), Some("B"));
        assert_eq!(engine.roster().next_driver(), Some("C"));
        assert_eq!(engine.phase(), Phase::Counting);
        assert!(engine.is_running());
        assert_eq!(engine.remaining_secs(), 60);
    }

    #[test]
    fn record_stat_outside_awaiting_is_rejected() {
        let mut engine = engine(&["A"], RotationSettings::default());
        engine.start().unwrap();
        let err = engine.record_stat(reading()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Timer(TimerError::InvalidPhase {
                phase: Phase::Counting,
                ..
            })
        ));
        assert!(engine.stats().is_empty());
    }

    #[test]
    fn break_every_fourth_rotation() {
        let settings = RotationSettings::new(1, 4, 2).unwrap();
        let mut engine = engine(&["A", "B"], settings);
        engine.start().unwrap();

        for rotation in 1..=3 {
            run_out(&mut engine);
            engine.record_stat(reading()).unwrap();
            assert_eq!(engine.phase(), Phase::Switching, "rotation {rotation}");
            engine.confirm_switch().unwrap();
        }

        run_out(&mut engine);
        let event = engine.record_stat(reading()).unwrap();
        assert!(matches!(
            event,
            Event::StatRecorded {
                rotation: 4,
                next_phase: Phase::OnBreak,
                ..
            }
        ));
        assert_eq!(engine.phase(), Phase::OnBreak);
        assert_eq!(engine.remaining_secs(), 120);
        assert_eq!(engine.total_secs(), 120);

        assert!(matches!(
            run_out(&mut engine),
            Some(Event::BreakEnded { skipped: false, .. })
        ));
        assert_eq!(engine.phase(), Phase::Switching);
    }

    #[test]
    fn break_can_be_paused_and_skipped() {
        let settings = RotationSettings::new(1, 1, 5).unwrap();
        let mut engine = engine(&["A", "B"], settings);
        engine.start().unwrap();
        run_out(&mut engine);
        engine.record_stat(reading()).unwrap();
        assert_eq!(engine.phase(), Phase::OnBreak);

        engine.tick();
        engine.pause();
        assert_eq!(engine.phase(), Phase::OnBreak);
        assert_eq!(engine.remaining_secs(), 299);

        let event = engine.skip_break().unwrap();
        assert!(matches!(event, Event::BreakEnded { skipped: true, .. }));
        assert_eq!(engine.phase(), Phase::Switching);
        assert!(engine.skip_break().is_err());
    }

    #[test]
    fn reset_returns_to_idle_and_first_driver() {
        let settings = RotationSettings::new(1, 4, 1).unwrap();
        let mut engine = engine(&["A", "B", "C"], settings);
        engine.start().unwrap();
        run_out(&mut engine);
        engine.record_stat(reading()).unwrap();
        engine.confirm_switch().unwrap();
        engine.tick();

        engine.reset();
        assert_eq!(engine.phase(), Phase::Idle);
        assert!(!engine.is_running());
        assert_eq!(engine.remaining_secs(), 60);
        assert_eq!(engine.roster().current_driver_index(), Some(0));
    }

    #[test]
    fn switch_with_emptied_roster_goes_idle() {
        let settings = RotationSettings::new(1, 4, 1).unwrap();
        let mut engine = engine(&["A"], settings);
        engine.start().unwrap();
        run_out(&mut engine);
        engine.record_stat(reading()).unwrap();
        engine.roster_mut().remove("A").unwrap();

        match engine.confirm_switch().unwrap() {
            Event::Notice { notice, .. } => assert!(notice.is_blocking()),
            other => panic!("Expected Notice, got {other:?}"),
        }
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn settings_change_restarts_rotation_countdown() {
        let mut engine = engine(&["A"], RotationSettings::default());
        engine.start().unwrap();
        engine.tick();
        engine.set_settings(RotationSettings::new(2, 4, 1).unwrap());
        assert_eq!(engine.remaining_secs(), 120);
    }

    #[test]
    fn checkpoint_restore_round_trip() {
        let settings = RotationSettings::new(1, 4, 1).unwrap();
        let mut engine = engine(&["A", "B"], settings);
        engine.start().unwrap();
        for _ in 0..10 {
            engine.tick();
        }
        engine.pause();
        let checkpoint = engine.checkpoint();

        let mut restored = self::engine(&["A", "B"], settings);
        restored.restore(checkpoint);
        assert_eq!(restored.checkpoint(), checkpoint);
        assert_eq!(restored.remaining_secs(), 50);
    }

    #[test]
    fn restore_after_longer_rotation_restarts_countdown() {
        let mut engine = engine(&["A", "B"], RotationSettings::new(5, 4, 10).unwrap());
        engine.start().unwrap();
        for _ in 0..30 {
            engine.tick();
        }
        engine.pause();
        let checkpoint = engine.checkpoint();
        assert_eq!(checkpoint.remaining_secs, 270);

        let mut restored = self::engine(&["A", "B"], RotationSettings::new(10, 4, 10).unwrap());
        restored.restore(checkpoint);
        assert_eq!(restored.phase(), Phase::Counting);
        assert_eq!(restored.remaining_secs(), 600);
        assert_eq!(restored.remaining_secs(), restored.total_secs());
    }

    #[test]
    fn restore_keeps_break_countdown_after_length_change() {
        let mut engine = engine(&["A", "B"], RotationSettings::new(1, 1, 5).unwrap());
        engine.start().unwrap();
        run_out(&mut engine);
        engine.record_stat(reading()).unwrap();
        engine.tick();
        let checkpoint = engine.checkpoint();

        let mut restored = self::engine(&["A", "B"], RotationSettings::new(3, 1, 5).unwrap());
        restored.restore(checkpoint);
        assert_eq!(restored.phase(), Phase::OnBreak);
        assert_eq!(restored.remaining_secs(), 299);
    }

    #[test]
    fn paused_checkpoint_does_not_resume_on_restore() {
        let mut engine = engine(&["A"], RotationSettings::default());
        engine.start().unwrap();
        engine.tick();
        let checkpoint = engine.checkpoint().paused();
        assert!(!checkpoint.running);

        let mut restored = self::engine(&["A"], RotationSettings::default());
        restored.restore(checkpoint);
        assert_eq!(restored.phase(), Phase::Counting);
        assert!(!restored.is_running());
        assert!(restored.tick().is_none());
        assert_eq!(restored.remaining_secs(), 299);
    }

    #[test]
    fn paused_break_resumes_and_runs_out() {
        let settings = RotationSettings::new(1, 1, 1).unwrap();
        let mut engine = engine(&["A", "B"], settings);
        engine.start().unwrap();
        run_out(&mut engine);
        engine.record_stat(reading()).unwrap();
        assert_eq!(engine.phase(), Phase::OnBreak);

        for _ in 0..20 {
            engine.tick();
        }
        assert!(matches!(
            engine.pause(),
            Some(Event::Paused {
                phase: Phase::OnBreak,
                remaining_secs: 40,
                ..
            })
        ));
        assert!(engine.tick().is_none());

        assert!(matches!(
            engine.resume().unwrap(),
            Some(Event::Resumed {
                phase: Phase::OnBreak,
                ..
            })
        ));
        let mut last = None;
        for _ in 0..40 {
            last = engine.tick();
        }
        assert!(matches!(last, Some(Event::BreakEnded { skipped: false, .. })));
        assert_eq!(engine.phase(), Phase::Switching);
        assert!(!engine.is_running());
    }

    #[test]
    fn restore_without_roster_goes_idle() {
        let mut engine = engine(&[], RotationSettings::default());
        engine.restore(EngineCheckpoint {
            phase: Phase::Counting,
            running: true,
            remaining_secs: 10,
            rotation_count: 2,
            rotation_secs: None,
        });
        assert_eq!(engine.phase(), Phase::Idle);
        assert!(!engine.is_running());
        assert_eq!(engine.rotation_count(), 2);
    }

    #[test]
    fn rotations_until_break_counts_down() {
        let settings = RotationSettings::new(1, 3, 1).unwrap();
        let mut engine = engine(&["A", "B"], settings);
        assert_eq!(engine.rotations_until_break(), 3);
        engine.start().unwrap();
        run_out(&mut engine);
        engine.record_stat(reading()).unwrap();
        assert_eq!(engine.rotations_until_break(), 2);
    }

    #[test]
    fn format_clock_pads() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(6000), "100:00");
    }
}
