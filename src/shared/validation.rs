use crate::domain::form::{Field, FieldValidationError};
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

/// Flattens validator output into one message per field, in form order.
/// When a field breaks several constraints only the first is reported.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldValidationError> {
    let mut flat: Vec<FieldValidationError> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(key, errs)| {
            let field = Field::from_key(&key)?;
            let first = errs.first()?;
            let message = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| first.code.to_string());
            Some(FieldValidationError::new(field, message))
        })
        .collect();

    flat.sort_by_key(|e| e.field);
    flat
}

/// Fails when `value` holds more than `max` characters
pub fn max_chars(value: &str, max: usize, message: &'static str) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::new("length").with_message(Cow::Borrowed(message)));
    }
    Ok(())
}

pub fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}
