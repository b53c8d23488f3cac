//! # API crate: client side of the habits REST contract
//!
//! Every frontend talks to the habits server through this crate. It defines the
//! contract as the async [`HabitApi`] trait, ships the `reqwest` implementation
//! [`HttpApi`], and owns the wire models that cross the HTTP boundary.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`HabitApi`] trait and the [`HttpApi`] implementation |
//! | [`config`] | [`ApiConfig`]: server base URL from `habits.toml` or `HABITS_API_URL` |
//! | [`error`] | [`ApiError`], with 401 mapped to [`ApiError::Unauthorized`] |
//! | [`models`] | [`Habit`], [`HabitId`], [`Credentials`], [`TokenResponse`], [`RegisterOutcome`] |
//!
//! ## Endpoints
//!
//! | Method | Path | Auth | Body | Response |
//! |--------|------|------|------|----------|
//! | `POST` | `/login` | none | `{username, password}` | `{access_token}` |
//! | `POST` | `/register` | none | `{username, password}` | ignored |
//! | `GET` | `/api/habits` | bearer | none | `[{id, name}]` |
//! | `POST` | `/api/habits` | bearer | `{name}` | `{id, name}` |
//! | `PUT` | `/api/habits/{id}` | bearer | `{name}` | ignored |
//! | `DELETE` | `/api/habits/{id}` | bearer | none | ignored |

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{HabitApi, HttpApi};
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{Credentials, Habit, HabitId, RegisterOutcome, TokenResponse};
