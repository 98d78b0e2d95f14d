//! Input validation helpers
//!
//! Guards for catalog provisioning payloads. SQLite enforces no TEXT
//! length, so limits live here.

use crate::db::repository::RepoError;

/// Entity names: dish, size, ingredient
pub const MAX_NAME_LEN: usize = 200;

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), RepoError> {
    if value.trim().is_empty() {
        return Err(RepoError::Validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(RepoError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Monetary and stock inputs must be finite and non-negative.
pub fn require_non_negative(value: f64, field: &str) -> Result<(), RepoError> {
    if !value.is_finite() {
        return Err(RepoError::Validation(format!(
            "{field} must be a finite number, got {value}"
        )));
    }
    if value < 0.0 {
        return Err(RepoError::Validation(format!(
            "{field} must be non-negative, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Pizza", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(201), "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_non_negative() {
        assert!(require_non_negative(0.0, "price").is_ok());
        assert!(require_non_negative(1.5, "price").is_ok());
        assert!(require_non_negative(-0.01, "price").is_err());
        assert!(require_non_negative(f64::NAN, "price").is_err());
        assert!(require_non_negative(f64::INFINITY, "price").is_err());
    }
}
