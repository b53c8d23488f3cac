mod auth;
mod habit;

pub use auth::{Credentials, RegisterOutcome, TokenResponse};
pub use habit::{Habit, HabitId};
pub(crate) use habit::HabitName;
