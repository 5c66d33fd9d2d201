//! User-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, UserId};

/// User-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    /// No user with the given ID.
    NotFound(UserId),
    /// The email is already registered.
    DuplicateEmail(String),
    /// Login with an unknown email or a wrong password. Deliberately
    /// does not say which.
    InvalidCredentials,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl UserError {
    pub fn not_found(user_id: UserId) -> Self {
        UserError::NotFound(user_id)
    }
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        UserError::DuplicateEmail(email.into())
    }
    pub fn invalid_credentials() -> Self {
        UserError::InvalidCredentials
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        UserError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        UserError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            UserError::NotFound(_) => ErrorCode::UserNotFound,
            UserError::DuplicateEmail(_) => ErrorCode::DuplicateEmail,
            UserError::InvalidCredentials => ErrorCode::InvalidCredentials,
            UserError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            UserError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            UserError::NotFound(user_id) => format!("User not found: {}", user_id),
            UserError::DuplicateEmail(email) => {
                format!("Email already registered: {}", email)
            }
            UserError::InvalidCredentials => "Invalid email or password".to_string(),
            UserError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            UserError::Infrastructure(msg) => format!("Storage error: {}", msg),
        }
    }
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for UserError {}

impl From<DomainError> for UserError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::DuplicateEmail => UserError::DuplicateEmail(err.message),
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => UserError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => UserError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_error_kinds() {
        let user = UserId::new("u1").unwrap();
        assert_eq!(UserError::not_found(user).code(), ErrorCode::UserNotFound);
        assert_eq!(
            UserError::duplicate_email("a@b.com").code(),
            ErrorCode::DuplicateEmail
        );
        assert_eq!(
            UserError::invalid_credentials().code(),
            ErrorCode::InvalidCredentials
        );
    }

    #[test]
    fn invalid_credentials_does_not_leak_which_part_failed() {
        let msg = UserError::invalid_credentials().to_string();
        assert!(!msg.contains("email address"));
        assert!(!msg.contains("user"));
        assert_eq!(msg, "Invalid email or password");
    }

    #[test]
    fn domain_duplicate_email_converts() {
        let domain = DomainError::new(ErrorCode::DuplicateEmail, "a@b.com");
        assert_eq!(
            UserError::from(domain),
            UserError::DuplicateEmail("a@b.com".to_string())
        );
    }

    #[test]
    fn domain_validation_converts_with_field() {
        let domain = DomainError::validation("email", "not a valid email address");
        let err: UserError = domain.into();
        assert!(matches!(
            err,
            UserError::ValidationFailed { ref field, .. } if field == "email"
        ));
    }
}
