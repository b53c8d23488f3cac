//! # Habit list synchronizer
//!
//! Keeps the rendered [`HabitList`] in step with the server. Each operation is
//! one request/response round trip; the list is only touched once the
//! response is in, except where noted:
//!
//! | Operation | Request | Local effect |
//! |-----------|---------|--------------|
//! | [`load_habits`](HabitApp::load_habits) | `GET /api/habits` | replace whole list, server order |
//! | [`add_habit`](HabitApp::add_habit) | `POST /api/habits` | append the returned habit (no re-fetch) |
//! | [`rename_habit`](HabitApp::rename_habit) | `PUT /api/habits/{id}` | entry takes the trimmed name; the edit is already on screen |
//! | [`delete_habit`](HabitApp::delete_habit) | `DELETE /api/habits/{id}` | entry removed once the request completes, whatever the status |
//!
//! A rejected token on any of them runs the logout path instead.

use api::{Habit, HabitApi, HabitId};
use store::TokenStore;

use crate::app::HabitApp;
use crate::error::ClientError;

/// The habits currently on screen, in display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HabitList {
    items: Vec<Habit>,
}

impl HabitList {
    pub fn iter(&self) -> std::slice::Iter<'_, Habit> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: HabitId) -> Option<&Habit> {
        self.items.iter().find(|h| h.id == id)
    }

    pub fn as_slice(&self) -> &[Habit] {
        &self.items
    }

    pub(crate) fn replace(&mut self, habits: Vec<Habit>) {
        self.items = habits;
    }

    pub(crate) fn push(&mut self, habit: Habit) {
        self.items.push(habit);
    }

    /// Returns false when no entry has `id`.
    pub(crate) fn rename(&mut self, id: HabitId, name: &str) -> bool {
        match self.items.iter_mut().find(|h| h.id == id) {
            Some(habit) => {
                habit.name = name.to_string();
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove(&mut self, id: HabitId) -> Option<Habit> {
        let index = self.items.iter().position(|h| h.id == id)?;
        Some(self.items.remove(index))
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }
}

impl From<Vec<Habit>> for HabitList {
    fn from(items: Vec<Habit>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a HabitList {
    type Item = &'a Habit;
    type IntoIter = std::slice::Iter<'a, Habit>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// The name that is sent and kept for a typed habit name.
pub fn clean_name(raw: &str) -> &str {
    raw.trim()
}

impl<A: HabitApi, S: TokenStore> HabitApp<A, S> {
    /// Replace the list with the server's current set.
    pub async fn load_habits(&self) -> Result<(), ClientError> {
        let token = self.require_token().await?;
        let result = self.api.list_habits(&token).await;
        if self.session_ended(&token) {
            return Err(ClientError::SessionInvalid);
        }
        match result {
            Ok(habits) => {
                tracing::debug!("Loaded {} habits", habits.len());
                self.update(|state| state.habits.replace(habits));
                Ok(())
            }
            Err(err) => Err(self.authenticated_failure(err).await),
        }
    }

    /// Create a habit. Blank names are dropped without a request.
    pub async fn add_habit(&self, name: &str) -> Result<HabitId, ClientError> {
        let name = clean_name(name);
        if name.is_empty() {
            return Err(ClientError::ValidationSkipped);
        }
        let token = self.require_token().await?;
        let result = self.api.create_habit(&token, name).await;
        if self.session_ended(&token) {
            return Err(ClientError::SessionInvalid);
        }
        match result {
            Ok(habit) => {
                let id = habit.id;
                self.update(|state| state.habits.push(habit));
                Ok(id)
            }
            Err(err) => Err(self.authenticated_failure(err).await),
        }
    }

    /// Persist an edited name (sent on focus loss). The trimmed name is sent
    /// even when empty.
    pub async fn rename_habit(&self, id: HabitId, new_name: &str) -> Result<(), ClientError> {
        let name = clean_name(new_name);
        let token = self.require_token().await?;
        if !self.update(|state| state.habits.rename(id, name)) {
            tracing::debug!("Renaming habit {} that is not on screen", id);
        }
        let result = self.api.rename_habit(&token, id, name).await;
        if self.session_ended(&token) {
            return Err(ClientError::SessionInvalid);
        }
        match result {
            Ok(()) => Ok(()),
            Err(err) => Err(self.authenticated_failure(err).await),
        }
    }

    /// Delete a habit. The entry leaves the list as soon as the request
    /// completes, even if the server refused.
    pub async fn delete_habit(&self, id: HabitId) -> Result<(), ClientError> {
        let token = self.require_token().await?;
        let result = self.api.delete_habit(&token, id).await;
        if self.session_ended(&token) {
            return Err(ClientError::SessionInvalid);
        }
        self.update(|state| state.habits.remove(id));
        match result {
            Ok(()) => Ok(()),
            Err(err) => Err(self.authenticated_failure(err).await),
        }
    }
}
