//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Identity
// =============================================================================

/// Identifier carried by an employee that has not been persisted yet
pub const UNSAVED_EMPLOYEE_ID: i32 = 0;

// =============================================================================
// Validation
// =============================================================================

/// Minimum length of first and last names
pub const MIN_NAME_LENGTH: usize = 1;

/// Maximum length of first and last names (matches the column width)
pub const MAX_NAME_LENGTH: usize = 45;

/// Maximum length of an email address (matches the column width)
pub const MAX_EMAIL_LENGTH: usize = 255;
