//! To-do input validation.

use crate::error::CoreError;

/// Maximum length for a to-do description (bytes).
pub const MAX_DESCRIPTION_LENGTH: usize = 10_000;

/// Validate a client-supplied description: required and bounded.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.trim().is_empty() {
        return Err(CoreError::Validation(
            "Description must not be empty".to_string(),
        ));
    }
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "Description exceeds maximum length of {} characters (got {})",
            MAX_DESCRIPTION_LENGTH,
            description.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_within_limit_is_valid() {
        assert!(validate_description("Buy milk").is_ok());
        assert!(validate_description(&"a".repeat(MAX_DESCRIPTION_LENGTH)).is_ok());
    }

    #[test]
    fn blank_description_is_invalid() {
        assert!(validate_description("").is_err());
        assert!(validate_description("   \t").is_err());
    }

    #[test]
    fn description_over_limit_is_invalid() {
        let desc = "a".repeat(MAX_DESCRIPTION_LENGTH + 1);
        assert!(matches!(
            validate_description(&desc),
            Err(CoreError::Validation(_))
        ));
    }
}
