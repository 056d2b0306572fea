//! Column limits shared by the input types and the table definitions.

use super::DomainError;

pub const OWNER_NAME_MAX: usize = 20;
pub const OWNER_ADDRESS_MAX: usize = 50;
pub const DOG_NAME_MAX: usize = 64;
pub const DOG_SIZE_MAX: usize = 10;
pub const WALKER_NAME_MAX: usize = 64;
pub const WALKER_DAY_MAX: usize = 10;
pub const WALKER_CAR_MAX: usize = 20;

/// Reject `value` if it holds more than `max` characters.
///
/// Counts characters rather than bytes, matching SQLite's `length()` on TEXT.
pub fn check_len(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    let len = value.chars().count();
    if len > max {
        tracing::warn!("Rejecting {}: {} characters (max {})", field, len, max);
        return Err(DomainError::Validation(format!(
            "{} is longer than {} characters",
            field, max
        )));
    }
    Ok(())
}

pub fn check_opt_len(field: &str, value: Option<&str>, max: usize) -> Result<(), DomainError> {
    match value {
        Some(v) => check_len(field, v, max),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_value_at_limit() {
        assert!(check_len("owner.name", &"a".repeat(OWNER_NAME_MAX), OWNER_NAME_MAX).is_ok());
        assert!(check_len("owner.name", "", OWNER_NAME_MAX).is_ok());
    }

    #[test]
    fn rejects_value_over_limit() {
        let err = check_len("owner.name", &"a".repeat(21), OWNER_NAME_MAX).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("owner.name")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 10 two-byte characters
        let size = "é".repeat(10);
        assert!(check_len("dog.size", &size, DOG_SIZE_MAX).is_ok());
    }

    #[test]
    fn missing_optional_value_passes() {
        assert!(check_opt_len("walker.car", None, WALKER_CAR_MAX).is_ok());
        assert!(check_opt_len("walker.car", Some(&"x".repeat(21)), WALKER_CAR_MAX).is_err());
    }
}
