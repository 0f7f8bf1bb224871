//! Team roster.
//!
//! An ordered list of unique member names plus the index of the current
//! driver. The index is `None` exactly when the roster is empty.
//!
//! Driver position is tracked by index, not by identity: shuffling or
//! reordering keeps the index and whoever lands there becomes the driver.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::error::RosterError;

/// Separator used for members in session links.
pub const MEMBER_SEPARATOR: char = ',';

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Roster {
    members: Vec<String>,
    current: Option<usize>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from untrusted names, skipping blank, duplicate and
    /// unusable entries. The driver is `driver` if present, else the first
    /// member.
    pub fn from_names<I, S>(names: I, driver: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Self::new();
        for name in names {
            if let Err(e) = roster.add(name.as_ref()) {
                debug!("skipping roster entry: {e}");
            }
        }
        if let Some(driver) = driver {
            // Unknown driver keeps index 0.
            let _ = roster.set_driver(driver);
        }
        roster
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.members.iter().position(|m| m == name)
    }

    pub fn current_driver_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_driver(&self) -> Option<&str> {
        self.current.map(|i| self.members[i].as_str())
    }

    pub fn next_driver_index(&self) -> Option<usize> {
        self.current.map(|i| (i + 1) % self.members.len())
    }

    pub fn next_driver(&self) -> Option<&str> {
        self.next_driver_index().map(|i| self.members[i].as_str())
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Append a member. The first member becomes the driver.
    pub fn add(&mut self, name: &str) -> Result<(), RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if name.contains(MEMBER_SEPARATOR) {
            return Err(RosterError::ReservedCharacter(name.to_string()));
        }
        if self.contains(name) {
            return Err(RosterError::Duplicate(name.to_string()));
        }
        self.members.push(name.to_string());
        if self.members.len() == 1 {
            self.current = Some(0);
        }
        debug!(member = name, size = self.members.len(), "member added");
        Ok(())
    }

    /// Remove a member by name, clamping the driver index to the new size.
    pub fn remove(&mut self, name: &str) -> Result<(), RosterError> {
        let index = self
            .position(name)
            .ok_or_else(|| RosterError::UnknownMember(name.to_string()))?;
        self.members.remove(index);
        self.current = match (self.current, self.members.len()) {
            (_, 0) => None,
            (Some(i), len) if i >= len => Some(len - 1),
            (current, _) => current,
        };
        debug!(member = name, size = self.members.len(), "member removed");
        Ok(())
    }

    /// Uniform random permutation of the whole roster. The driver index is
    /// kept as is.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.members.shuffle(rng);
    }

    /// Replace the member order. `order` must be a permutation of the
    /// current members.
    pub fn reorder<S: AsRef<str>>(&mut self, order: &[S]) -> Result<(), RosterError> {
        if order.len() != self.members.len() {
            return Err(RosterError::MembershipMismatch);
        }
        let mut seen = vec![false; self.members.len()];
        for name in order {
            let i = self
                .position(name.as_ref())
                .ok_or(RosterError::MembershipMismatch)?;
            if std::mem::replace(&mut seen[i], true) {
                return Err(RosterError::MembershipMismatch);
            }
        }
        self.members = order.iter().map(|s| s.as_ref().to_string()).collect();
        Ok(())
    }

    /// Move one member to `position`, shifting the others.
    pub fn move_member(&mut self, name: &str, position: usize) -> Result<(), RosterError> {
        let from = self
            .position(name)
            .ok_or_else(|| RosterError::UnknownMember(name.to_string()))?;
        if position >= self.members.len() {
            return Err(RosterError::OutOfBounds {
                position,
                len: self.members.len(),
            });
        }
        let mut order = self.members.clone();
        let moved = order.remove(from);
        order.insert(position, moved);
        self.reorder(order.as_slice())
    }

    /// Hand over to the next member, wrapping around.
    pub fn advance(&mut self) {
        if let Some(next) = self.next_driver_index() {
            self.current = Some(next);
        }
    }

    /// Make `name` the driver.
    pub fn set_driver(&mut self, name: &str) -> Result<(), RosterError> {
        let index = self
            .position(name)
            .ok_or_else(|| RosterError::UnknownMember(name.to_string()))?;
        self.current = Some(index);
        Ok(())
    }

    /// Point the driver back at the first member.
    pub fn reset_driver(&mut self) {
        self.current = if self.members.is_empty() { None } else { Some(0) };
    }

    pub fn clear(&mut self) {
        self.members.clear();
        self.current = None;
    }
}
