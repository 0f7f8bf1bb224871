//! Session links.
//!
//! The roster, current driver and timing settings travel as URL query
//! parameters so a session can be bookmarked or shared:
//!
//! ```text
//! ?members=Ana,Ben,Caro&driver=Ben&time=5&breaks=4&breakLength=10
//! ```

use serde::Serialize;
use tracing::debug;
use url::form_urlencoded;

use crate::roster::{Roster, MEMBER_SEPARATOR};
use crate::timer::RotationSettings;

const KEY_MEMBERS: &str = "members";
const KEY_DRIVER: &str = "driver";
const KEY_TIME: &str = "time";
const KEY_BREAKS: &str = "breaks";
const KEY_BREAK_LENGTH: &str = "breakLength";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionLink {
    pub roster: Roster,
    pub settings: RotationSettings,
}

impl SessionLink {
    pub fn new(roster: Roster, settings: RotationSettings) -> Self {
        Self { roster, settings }
    }

    /// Encode as a query string without the leading `?`.
    pub fn to_query(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if !self.roster.is_empty() {
            let members = self.roster.members().join(&MEMBER_SEPARATOR.to_string());
            query.append_pair(KEY_MEMBERS, &members);
            if let Some(driver) = self.roster.current_driver() {
                query.append_pair(KEY_DRIVER, driver);
            }
        }
        query
            .append_pair(KEY_TIME, &self.settings.rotation_minutes().to_string())
            .append_pair(KEY_BREAKS, &self.settings.breaks_every().to_string())
            .append_pair(KEY_BREAK_LENGTH, &self.settings.break_minutes().to_string());
        query.finish()
    }

    /// Parse a query string (with or without `?`) or a full URL.
    ///
    /// Parsing never fails: missing, zero or unparsable settings fall back
    /// to `defaults`, unusable member names are skipped and an unknown
    /// driver falls back to the first member.
    pub fn parse(input: &str, defaults: RotationSettings) -> Self {
        let input = input.trim();
        let query = if input.contains("://") {
            match url::Url::parse(input) {
                Ok(url) => url.query().unwrap_or_default().to_string(),
                Err(e) => {
                    debug!("not a URL ({e}), reading as query string");
                    input.to_string()
                }
            }
        } else {
            input.trim_start_matches('?').to_string()
        };

        let mut members: Option<String> = None;
        let mut driver: Option<String> = None;
        let mut settings = defaults;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                KEY_MEMBERS => members = Some(value.into_owned()),
                KEY_DRIVER => driver = Some(value.into_owned()),
                KEY_TIME => {
                    if let Some(n) = positive(&key, &value) {
                        settings = settings.with_rotation_minutes(n).unwrap_or(settings);
                    }
                }
                KEY_BREAKS => {
                    if let Some(n) = positive(&key, &value) {
                        settings = settings.with_breaks_every(n).unwrap_or(settings);
                    }
                }
                KEY_BREAK_LENGTH => {
                    if let Some(n) = positive(&key, &value) {
                        settings = settings.with_break_minutes(n).unwrap_or(settings);
                    }
                }
                other => debug!(key = other, "ignoring unknown link parameter"),
            }
        }

        let roster = match members {
            Some(members) => Roster::from_names(members.split(MEMBER_SEPARATOR), driver.as_deref()),
            None => Roster::new(),
        };
        Self { roster, settings }
    }
}

fn positive(key: &str, value: &str) -> Option<u32> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Some(n),
        _ => {
            debug!(key, value, "ignoring invalid link setting");
            None
        }
    }
}
