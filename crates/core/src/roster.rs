//! Series roster projection for detail views.
//!
//! A roster splits a series' members into leaders (every member flagged as a
//! leader) and active members (active and not a leader). Inactive
//! non-leaders are left out.

use serde::Serialize;

/// Role flags the roster needs from a member record.
pub trait RosterEntry {
    fn is_leader(&self) -> bool;
    fn is_active(&self) -> bool;
}

/// Leaders and active non-leader members of one series.
#[derive(Debug, Clone, Serialize)]
pub struct Roster<T> {
    pub active_leaders: Vec<T>,
    pub active_members: Vec<T>,
}

impl<T> Default for Roster<T> {
    fn default() -> Self {
        Self {
            active_leaders: Vec::new(),
            active_members: Vec::new(),
        }
    }
}

/// Partition members into a [`Roster`], preserving input order within each
/// group.
pub fn partition_roster<T: RosterEntry>(members: Vec<T>) -> Roster<T> {
    let mut roster = Roster::default();
    for member in members {
        if member.is_leader() {
            roster.active_leaders.push(member);
        } else if member.is_active() {
            roster.active_members.push(member);
        }
    }
    roster
}
