//! Request and response DTOs.

pub mod request;
pub mod response;

use std::collections::HashMap;

use stayhub_core::error::AppError;
use validator::Validate;

/// Runs derive-based validation and converts failures into a BadRequest
/// carrying per-field messages.
pub fn validate_request<T: Validate>(req: &T) -> Result<(), AppError> {
    req.validate().map_err(|errs| {
        let mut fields = HashMap::new();
        for (field, failures) in errs.field_errors() {
            let message = failures
                .first()
                .and_then(|f| f.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| "is invalid".to_string());
            fields.insert(field.to_string(), message);
        }
        AppError::validation("Validation failed", fields)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stayhub_core::error::ErrorKind;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 3, message = "must be at least 3 characters"))]
        name: String,
    }

    #[test]
    fn test_validation_failure_carries_field_map() {
        let err = validate_request(&Sample {
            name: "ab".to_string(),
        })
        .unwrap_err();

        assert_eq!(err.kind, ErrorKind::BadRequest);
        let fields = err.field_errors.unwrap();
        assert_eq!(fields.get("name").unwrap(), "must be at least 3 characters");
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(
            validate_request(&Sample {
                name: "abc".to_string(),
            })
            .is_ok()
        );
    }
}
