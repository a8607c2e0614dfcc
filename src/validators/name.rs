use super::ValidationError;

pub fn validate_display_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::DisplayNameEmpty);
    }

    if trimmed.len() > 100 {
        return Err(ValidationError::DisplayNameTooLong);
    }

    Ok(())
}
