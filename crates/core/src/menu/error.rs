use thiserror::Error;

/// Errors raised when a request payload fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        assert_eq!(
            ValidationError::MissingField("branchId").to_string(),
            "branchId is required"
        );
    }
}
