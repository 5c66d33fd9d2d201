//! User command and query handlers.

mod delete_user;
mod list_users;
mod login_user;
mod register_user;
mod update_user;

pub use delete_user::{DeleteUserCommand, DeleteUserHandler};
pub use list_users::{ListUsersHandler, ListUsersQuery};
pub use login_user::{LoginOutcome, LoginUserCommand, LoginUserHandler};
pub use register_user::{RegisterUserCommand, RegisterUserHandler};
pub use update_user::{UpdateUserCommand, UpdateUserHandler};
