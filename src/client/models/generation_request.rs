use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::client::enums::aspect_ratio::AspectRatio;

/// Payload posted to the proxy. Built fresh from the form on every submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct GenerationRequest {
    #[validate(length(min = 1, message = "model must not be empty."))]
    pub model: String,
    #[validate(length(
        min = 1,
        max = 1000,
        message = "prompt must be between 1 and 1000 characters."
    ))]
    pub prompt: String,
    #[validate(range(min = 1, max = 4, message = "num_images must be between 1 and 4."))]
    pub num_images: u8,
    #[validate(custom = "validate_size")]
    pub size: String,
}

pub fn validate_size(value: &str) -> Result<(), ValidationError> {
    match AspectRatio::from_size(value) {
        Some(_) => Ok(()),
        None => {
            let mut error = ValidationError::new("size_validation");
            error.message = Some("size must be one of 1024x1024, 1792x1024, 1024x1792.".into());
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest {
            model: "img3".to_string(),
            prompt: "a red fox in snow".to_string(),
            num_images: 2,
            size: "1024x1024".to_string(),
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_count() {
        let mut req = request();
        req.num_images = 5;

        let errors = req.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("num_images"));
    }

    #[test]
    fn rejects_unsupported_size() {
        let mut req = request();
        req.size = "256x256".to_string();

        let errors = req.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("size"));
    }
}
