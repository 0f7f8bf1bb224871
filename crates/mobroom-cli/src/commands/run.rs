//! Foreground rotation timer.
//!
//! One task multiplexes a one-second interval (driving `tick()`) with lines
//! typed on stdin (driving every other engine command).

use std::io::Write;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

use mobroom_core::timer::format_clock;
use mobroom_core::{
    CoreError, Event, JsonFileStorage, Notice, Phase, Reading, RotationEngine,
};

use crate::commands::team::print_roster;
use crate::session::{print_notice, CliResult, Session};

/// How often a running countdown is saved between events.
const SAVE_EVERY_SECS: u64 = 15;

const HELP: &str = "\
commands:
  start | pause | reset      control the countdown (empty line toggles)
  <energy> <flow>            record a reading, both 0.0-1.0
  next                       confirm the driver switch
  skip                       skip the break
  add <name> | remove <name> | shuffle | team
  status | help | quit";

#[derive(Debug, Clone, PartialEq)]
enum Input {
    Toggle,
    Start,
    Pause,
    Reset,
    Stat(f64, f64),
    Next,
    SkipBreak,
    Add(String),
    Remove(String),
    Shuffle,
    Team,
    Status,
    Help,
    Quit,
}

fn parse_input(line: &str) -> Result<Input, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let input = match word.to_lowercase().as_str() {
        "" => Input::Toggle,
        "start" | "go" => Input::Start,
        "pause" => Input::Pause,
        "reset" => Input::Reset,
        "next" | "continue" | "c" => Input::Next,
        "skip" => Input::SkipBreak,
        "add" if !rest.is_empty() => Input::Add(rest.to_string()),
        "remove" | "rm" if !rest.is_empty() => Input::Remove(rest.to_string()),
        "shuffle" => Input::Shuffle,
        "team" => Input::Team,
        "status" => Input::Status,
        "help" | "?" => Input::Help,
        "quit" | "q" | "exit" => Input::Quit,
        _ => {
            let energy = word.parse::<f64>();
            let flow = rest.parse::<f64>();
            match (energy, flow) {
                (Ok(energy), Ok(flow)) => Input::Stat(energy, flow),
                _ => return Err(format!("unknown command '{line}' (try 'help')")),
            }
        }
    };
    Ok(input)
}

/// One line per event; `None` for events that need no output.
fn describe(event: &Event) -> Option<String> {
    let text = match event {
        Event::RotationStarted {
            driver,
            duration_secs,
            ..
        } => format!("{driver} is driving for {}", format_clock(*duration_secs)),
        Event::Paused { remaining_secs, .. } => {
            format!("Paused at {}", format_clock(*remaining_secs))
        }
        Event::Resumed { .. } => "Resumed".to_string(),
        Event::RotationEnded {
            rotation,
            driver,
            next_driver,
            ..
        } => format!(
            "Rotation {rotation} is over: {driver} -> {next_driver}.\n\
             How did it go? Enter '<energy> <flow>' (0.0-1.0)."
        ),
        Event::StatRecorded { next_phase, .. } => match next_phase {
            Phase::OnBreak => "Stat recorded. Break time!".to_string(),
            _ => "Stat recorded.".to_string(),
        },
        Event::BreakEnded { skipped, .. } => {
            if *skipped {
                "Break skipped.".to_string()
            } else {
                "Break is over.".to_string()
            }
        }
        Event::DriverSwitched {
            to, next_driver, ..
        } => format!("{to} is driving now (next: {next_driver})"),
        Event::Reset { .. } => "Timer reset.".to_string(),
        Event::Notice { notice, .. } => notice.to_string(),
        Event::StateSnapshot { .. } => return None,
    };
    Some(text)
}

/// Rotation end, break start and a break that ran out ring the bell.
fn rings_bell(event: &Event) -> bool {
    matches!(
        event,
        Event::RotationEnded { .. }
            | Event::StatRecorded {
                next_phase: Phase::OnBreak,
                ..
            }
            | Event::BreakEnded { skipped: false, .. }
    )
}

fn status_line(engine: &RotationEngine<JsonFileStorage>) -> String {
    let clock = format_clock(engine.remaining_secs());
    let paused = if engine.is_running() || engine.phase() == Phase::Idle {
        ""
    } else {
        " (paused)"
    };
    match engine.phase() {
        Phase::Idle => format!("idle {clock}"),
        Phase::Counting => format!(
            "{} driving {clock}{paused}, next: {}",
            engine.roster().current_driver().unwrap_or("-"),
            engine.roster().next_driver().unwrap_or("-"),
        ),
        Phase::AwaitingStat => "waiting for '<energy> <flow>'".to_string(),
        Phase::OnBreak => format!("on break {clock}{paused} ('skip' to end it)"),
        Phase::Switching => match engine.switch_preview() {
            Some((from, to)) => format!("switch {from} -> {to}: type 'next' to continue"),
            None => "switching".to_string(),
        },
    }
}

struct Runner {
    session: Session,
    engine: RotationEngine<JsonFileStorage>,
}

impl Runner {
    fn emit(&self, event: &Event) {
        if rings_bell(event) && self.session.config.notifications.bell {
            print!("\x07");
        }
        if let Some(text) = describe(event) {
            println!("\r{text}");
        }
        if let Event::StatRecorded {
            notice: Some(notice),
            ..
        } = event
        {
            print_notice(notice);
        }
    }

    fn report(&self, err: &CoreError) {
        print_notice(&Notice::from(err));
    }

    fn persist(&self) {
        if let Err(e) = self.session.save_engine(&self.engine) {
            print_notice(&Notice::warning(format!("Failed to save session. {e}")));
        }
    }

    /// Returns false when the user asked to quit.
    fn handle(&mut self, input: Input) -> bool {
        let result: Result<Option<Event>, CoreError> = match input {
            Input::Toggle => self.engine.toggle(),
            Input::Start => self.engine.start(),
            Input::Pause => Ok(self.engine.pause()),
            Input::Reset => Ok(Some(self.engine.reset())),
            Input::Stat(energy, flow) => Reading::new(energy, flow)
                .map_err(CoreError::from)
                .and_then(|reading| self.engine.record_stat(reading))
                .map(Some),
            Input::Next => self.engine.confirm_switch().map(Some),
            Input::SkipBreak => self.engine.skip_break().map(Some),
            Input::Add(name) => self
                .engine
                .roster_mut()
                .add(&name)
                .map(|()| None)
                .map_err(CoreError::from),
            Input::Remove(name) => self
                .engine
                .roster_mut()
                .remove(&name)
                .map(|()| None)
                .map_err(CoreError::from),
            Input::Shuffle => {
                self.engine.roster_mut().shuffle(&mut rand::thread_rng());
                Ok(None)
            }
            Input::Team => {
                print_roster(self.engine.roster());
                return true;
            }
            Input::Status => {
                println!("{}", status_line(&self.engine));
                return true;
            }
            Input::Help => {
                println!("{HELP}");
                return true;
            }
            Input::Quit => return false,
        };

        match result {
            Ok(Some(event)) => self.emit(&event),
            Ok(None) => {}
            Err(e) => self.report(&e),
        }
        if matches!(self.engine.phase(), Phase::Switching) {
            println!("{}", status_line(&self.engine));
        }
        self.persist();
        true
    }

    fn on_tick(&mut self) {
        if let Some(event) = self.engine.tick() {
            self.emit(&event);
            if self.engine.phase() == Phase::Switching {
                println!("{}", status_line(&self.engine));
            }
            self.persist();
        } else if self.engine.is_running() {
            if self.engine.remaining_secs() % SAVE_EVERY_SECS == 0 {
                self.persist();
            }
            print!("\r{}   ", status_line(&self.engine));
            let _ = std::io::stdout().flush();
        }
    }
}

pub fn run(fresh: bool) -> CliResult {
    let session = Session::open()?;
    if fresh {
        session.files.clear_checkpoint()?;
    }
    let engine = session.engine(!fresh)?;
    let mut runner = Runner { session, engine };

    println!("{HELP}\n");
    print_roster(runner.engine.roster());
    println!("{}", status_line(&runner.engine));

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(async {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut ticker = interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;
        let interrupted = tokio::signal::ctrl_c();
        tokio::pin!(interrupted);

        loop {
            tokio::select! {
                _ = &mut interrupted => {
                    debug!("interrupted");
                    break;
                }
                _ = ticker.tick() => runner.on_tick(),
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        debug!("stdin closed");
                        break;
                    };
                    match parse_input(&line) {
                        Ok(input) => {
                            if !runner.handle(input) {
                                break;
                            }
                        }
                        Err(message) => print_notice(&Notice::warning(message)),
                    }
                }
            }
        }
        Ok::<(), std::io::Error>(())
    })?;

    if runner.engine.is_running() {
        runner.engine.pause();
    }
    runner.persist();
    println!("\nSession saved.");
    Ok(())
}

/// Print the saved session state as JSON.
pub fn status() -> CliResult {
    let session = Session::open()?;
    let engine = session.engine(true)?;
    println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
    Ok(())
}
