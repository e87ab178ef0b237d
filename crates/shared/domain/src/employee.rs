//! Employee domain entity and related types.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_EMAIL_LENGTH, MAX_NAME_LENGTH, MIN_NAME_LENGTH, UNSAVED_EMPLOYEE_ID};
use crate::error::{DomainError, DomainResult};

/// Employee domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique employee identifier (0 until persisted)
    #[serde(default)]
    pub id: i32,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact email address
    pub email: String,
}

impl Employee {
    /// Create an employee that has not been persisted yet
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: UNSAVED_EMPLOYEE_ID,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Return a copy of this employee carrying the given identifier
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Check if this employee still needs an insert
    pub fn is_new(&self) -> bool {
        self.id == UNSAVED_EMPLOYEE_ID
    }

    /// Validate identifier and field contents.
    pub fn validate(&self) -> DomainResult<()> {
        if self.id < UNSAVED_EMPLOYEE_ID {
            return Err(DomainError::validation("Employee id cannot be negative"));
        }
        validate_name("First name", &self.first_name)?;
        validate_name("Last name", &self.last_name)?;
        validate_email(&self.email)
    }
}

/// Employee creation/replacement data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact email address
    pub email: String,
}

impl NewEmployee {
    /// Build an unsaved employee from this payload
    pub fn into_employee(self) -> Employee {
        Employee::new(self.first_name, self.last_name, self.email)
    }
}

impl From<NewEmployee> for Employee {
    fn from(value: NewEmployee) -> Self {
        value.into_employee()
    }
}

// Blank check on the trimmed value, width check on the stored value.
fn validate_name(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().chars().count() < MIN_NAME_LENGTH {
        return Err(DomainError::validation(format!("{} is required", field)));
    }
    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(DomainError::validation(format!(
            "{} must be at most {} characters",
            field, MAX_NAME_LENGTH
        )));
    }
    Ok(())
}

fn validate_email(email: &str) -> DomainResult<()> {
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(DomainError::validation(format!(
            "Email must be at most {} characters",
            MAX_EMAIL_LENGTH
        )));
    }

    let mut parts = email.split('@');
    let valid = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && !email.contains(char::is_whitespace)
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(DomainError::validation("Invalid email format"))
    }
}
