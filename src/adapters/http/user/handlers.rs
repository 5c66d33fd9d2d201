//! HTTP handlers for user endpoints.
//!
//! Registration and login are public; the account management routes
//! require authentication.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::user::{
    DeleteUserCommand, DeleteUserHandler, ListUsersHandler, ListUsersQuery, LoginUserCommand,
    LoginUserHandler, RegisterUserCommand, RegisterUserHandler, UpdateUserCommand,
    UpdateUserHandler,
};
use crate::domain::foundation::UserId;
use crate::domain::user::UserError;
use crate::ports::{PasswordHasher, TokenIssuer, UserStore};

use super::dto::{
    ErrorResponse, LoginRequest, LoginResponse, RegisterRequest, UpdateUserRequest,
    UserListResponse, UserResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the user routes.
#[derive(Clone)]
pub struct UserAppState {
    pub store: Arc<dyn UserStore>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub issuer: Arc<dyn TokenIssuer>,
}

impl UserAppState {
    /// Create handlers on demand from the shared state.
    pub fn register_handler(&self) -> RegisterUserHandler {
        RegisterUserHandler::new(self.store.clone(), self.hasher.clone())
    }

    pub fn login_handler(&self) -> LoginUserHandler {
        LoginUserHandler::new(self.store.clone(), self.hasher.clone(), self.issuer.clone())
    }

    pub fn list_handler(&self) -> ListUsersHandler {
        ListUsersHandler::new(self.store.clone())
    }

    pub fn update_handler(&self) -> UpdateUserHandler {
        UpdateUserHandler::new(self.store.clone(), self.hasher.clone())
    }

    pub fn delete_handler(&self) -> DeleteUserHandler {
        DeleteUserHandler::new(self.store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/users/register - Create an account
pub async fn register_user(
    State(state): State<UserAppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, UserApiError> {
    let user = state
        .register_handler()
        .handle(RegisterUserCommand {
            name: request.name,
            email: request.email,
            password: request.password,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// POST /api/users/login - Exchange credentials for a bearer token
pub async fn login_user(
    State(state): State<UserAppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, UserApiError> {
    let outcome = state
        .login_handler()
        .handle(LoginUserCommand {
            email: request.email,
            password: request.password,
        })
        .await?;
    Ok(Json(LoginResponse {
        token: outcome.token,
        user: UserResponse::from(&outcome.user),
    }))
}

/// GET /api/users - List all accounts
pub async fn list_users(
    State(state): State<UserAppState>,
    RequireAuth(_user): RequireAuth,
) -> Result<impl IntoResponse, UserApiError> {
    let users = state.list_handler().handle(ListUsersQuery).await?;
    let users: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();
    let count = users.len();
    Ok(Json(UserListResponse { users, count }))
}

/// PUT /api/users/:id - Partially update an account
pub async fn update_user(
    State(state): State<UserAppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, UserApiError> {
    let user = state
        .update_handler()
        .handle(UpdateUserCommand {
            user_id: parse_user_id(&id)?,
            name: request.name,
            email: request.email,
            password: request.password,
        })
        .await?;
    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /api/users/:id - Remove an account
pub async fn delete_user(
    State(state): State<UserAppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, UserApiError> {
    state
        .delete_handler()
        .handle(DeleteUserCommand {
            user_id: parse_user_id(&id)?,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_user_id(raw: &str) -> Result<UserId, UserApiError> {
    UserId::new(raw).map_err(|_| UserError::validation("user_id", "Malformed user ID").into())
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts user errors to HTTP responses.
pub struct UserApiError(UserError);

impl From<UserError> for UserApiError {
    fn from(err: UserError) -> Self {
        Self(err)
    }
}

impl IntoResponse for UserApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code) = match &self.0 {
            UserError::NotFound(_) => (StatusCode::NOT_FOUND, "USER_NOT_FOUND"),
            UserError::DuplicateEmail(_) => (StatusCode::CONFLICT, "DUPLICATE_EMAIL"),
            UserError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS"),
            UserError::ValidationFailed { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_FAILED"),
            UserError::Infrastructure(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse::new(error_code, self.0.message());
        (status, Json(body)).into_response()
    }
}
