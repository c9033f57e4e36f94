//! To-do status lifecycle.
//!
//! A to-do is created as `NOT_DONE`. Clients may move it to `DONE` and back
//! to `NOT_DONE`; only the past-due sweep may move an unfinished item to
//! `PAST_DUE`. `PAST_DUE` behaves as a sub-state of "not done": marking it
//! done takes the same path as marking a `NOT_DONE` item done.
//!
//! | From                  | Trigger                 | To         | done_date |
//! |-----------------------|-------------------------|------------|-----------|
//! | (none)                | create                  | `NOT_DONE` | null      |
//! | `NOT_DONE`/`PAST_DUE` | update -> `DONE`        | `DONE`     | now       |
//! | `DONE`                | update -> `NOT_DONE`    | `NOT_DONE` | null      |
//! | `NOT_DONE`            | sweep, `due_date < now` | `PAST_DUE` | unchanged |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Wire/storage name of [`ToDoStatus::NotDone`].
pub const STATUS_NOT_DONE: &str = "NOT_DONE";
/// Wire/storage name of [`ToDoStatus::Done`].
pub const STATUS_DONE: &str = "DONE";
/// Wire/storage name of [`ToDoStatus::PastDue`].
pub const STATUS_PAST_DUE: &str = "PAST_DUE";

/// Statuses a client may request through an explicit update.
pub const UPDATABLE_STATUSES: &[&str] = &[STATUS_DONE, STATUS_NOT_DONE];

// ---------------------------------------------------------------------------
// ToDoStatus
// ---------------------------------------------------------------------------

/// Completion status of a to-do item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToDoStatus {
    NotDone,
    Done,
    PastDue,
}

/// Result of applying an explicit status update to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub status: ToDoStatus,
    pub done_date: Option<Timestamp>,
}

impl ToDoStatus {
    /// Status every newly created item starts in.
    pub const INITIAL: ToDoStatus = ToDoStatus::NotDone;

    pub fn as_str(self) -> &'static str {
        match self {
            ToDoStatus::NotDone => STATUS_NOT_DONE,
            ToDoStatus::Done => STATUS_DONE,
            ToDoStatus::PastDue => STATUS_PAST_DUE,
        }
    }

    pub fn is_done(self) -> bool {
        self == ToDoStatus::Done
    }

    /// Apply a client-requested status to an item currently in `self`.
    ///
    /// `DONE` stamps `done_date` with `now`; `NOT_DONE` clears it. Requesting
    /// `PAST_DUE` is rejected: that status is only ever assigned by the sweep.
    pub fn apply_update(
        self,
        requested: ToDoStatus,
        now: Timestamp,
    ) -> Result<StatusChange, CoreError> {
        match requested {
            ToDoStatus::Done => Ok(StatusChange {
                status: ToDoStatus::Done,
                done_date: Some(now),
            }),
            ToDoStatus::NotDone => Ok(StatusChange {
                status: ToDoStatus::NotDone,
                done_date: None,
            }),
            ToDoStatus::PastDue => Err(CoreError::InvalidTransition(format!(
                "Cannot set to-do from '{self}' to '{requested}'. Allowed targets: {UPDATABLE_STATUSES:?}"
            ))),
        }
    }

    /// Status the past-due sweep assigns to an item in `self` due at
    /// `due_date`, judged against the sweep's `now` snapshot.
    ///
    /// Returns `None` when the item must be left untouched. The comparison is
    /// strict: an item due exactly at `now` is not yet past due. Items already
    /// `PAST_DUE` yield `Some(PastDue)` again so re-applying is a no-op write.
    pub fn sweep(self, due_date: Timestamp, now: Timestamp) -> Option<ToDoStatus> {
        if !self.is_done() && due_date < now {
            Some(ToDoStatus::PastDue)
        } else {
            None
        }
    }
}

impl fmt::Display for ToDoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToDoStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_NOT_DONE => Ok(ToDoStatus::NotDone),
            STATUS_DONE => Ok(ToDoStatus::Done),
            STATUS_PAST_DUE => Ok(ToDoStatus::PastDue),
            other => Err(CoreError::InvalidTransition(format!(
                "Unknown to-do status '{other}'. Allowed targets: {UPDATABLE_STATUSES:?}"
            ))),
        }
    }
}

impl TryFrom<String> for ToDoStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
