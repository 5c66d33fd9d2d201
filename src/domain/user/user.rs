//! User entity.
//!
//! Users own the carts and are the subjects of the bearer tokens the
//! cart endpoints require. Only the password hash is ever stored; raw
//! passwords stay at the application boundary.

use crate::domain::foundation::{DomainError, Timestamp, UserId, ValidationError};

/// Minimum length for a raw password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum length for a user name.
pub const MAX_USER_NAME_LENGTH: usize = 100;

/// Registered user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    password_hash: String,
    created_at: Timestamp,
    updated_at: Timestamp,
}

/// Partial update for a user's profile; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserUpdate {
    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

impl User {
    /// Creates a new user from an already-hashed password.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` on an empty/overlong name or a malformed email
    pub fn new(
        id: UserId,
        name: String,
        email: String,
        password_hash: String,
    ) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;
        let email = Self::normalize_email(&email)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            name: name.trim().to_string(),
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitutes a user from persistence (no validation).
    pub fn reconstitute(
        id: UserId,
        name: String,
        email: String,
        password_hash: String,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies a partial profile update, validating each changed field.
    pub fn apply_update(&mut self, update: UserUpdate) -> Result<(), DomainError> {
        if let Some(name) = update.name {
            Self::validate_name(&name)?;
            self.name = name.trim().to_string();
        }
        if let Some(email) = update.email {
            self.email = Self::normalize_email(&email)?;
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Replaces the stored password hash.
    pub fn set_password_hash(&mut self, hash: String) {
        self.password_hash = hash;
        self.updated_at = Timestamp::now();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Validation
    // ─────────────────────────────────────────────────────────────────────────

    /// Checks a raw password against the domain policy. Called before
    /// hashing; the entity itself never sees raw passwords.
    pub fn validate_password(raw: &str) -> Result<(), DomainError> {
        if raw.len() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::invalid_format(
                "password",
                format!("must be at least {} characters", MIN_PASSWORD_LENGTH),
            )
            .into());
        }
        Ok(())
    }

    fn validate_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("name").into());
        }
        if trimmed.len() > MAX_USER_NAME_LENGTH {
            return Err(ValidationError::invalid_format(
                "name",
                format!("must be {} characters or less", MAX_USER_NAME_LENGTH),
            )
            .into());
        }
        Ok(())
    }

    /// Trims, lowercases, and shape-checks an email address.
    fn normalize_email(email: &str) -> Result<String, DomainError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(ValidationError::empty_field("email").into());
        }
        let valid = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
            }
            None => false,
        };
        if !valid {
            return Err(
                ValidationError::invalid_format("email", "not a valid email address").into(),
            );
        }
        Ok(email)
    }
}
