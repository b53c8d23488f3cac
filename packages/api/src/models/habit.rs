//! # Habit wire model
//!
//! [`Habit`] is exactly what the server returns for `GET /api/habits` and
//! `POST /api/habits`: a server-assigned [`HabitId`] and a display name. The
//! client never invents ids; a habit only exists locally once the server has
//! answered with one.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned habit identifier. Serialized as a bare integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(pub i64);

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A habit as stored on the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Habit {
    pub id: HabitId,
    pub name: String,
}

impl Habit {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: HabitId(id),
            name: name.into(),
        }
    }
}

/// Request body for create and rename: `{"name": ...}`.
#[derive(Debug, Serialize)]
pub(crate) struct HabitName<'a> {
    pub name: &'a str,
}
