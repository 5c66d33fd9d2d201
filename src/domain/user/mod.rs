//! User module - accounts, credentials policy, and profile updates.

mod errors;
mod user;

pub use errors::UserError;
pub use user::{User, UserUpdate, MAX_USER_NAME_LENGTH, MIN_PASSWORD_LENGTH};
