use validator::Validate;

use super::{
    enums::{aspect_ratio::AspectRatio, image_model::ImageModel},
    errors::ClientError,
    models::generation_request::GenerationRequest,
};

/// User input held between submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationForm {
    pub prompt: String,
    pub model: String,
    pub aspect_ratio: AspectRatio,
    pub count: u8,
}

impl Default for GenerationForm {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            model: ImageModel::IMG3.to_string(),
            aspect_ratio: AspectRatio::default(),
            count: 1,
        }
    }
}

impl GenerationForm {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    /// Builds and validates the outbound payload. The prompt is sent as typed;
    /// only the emptiness check looks at its trimmed form.
    pub fn to_request(&self) -> Result<GenerationRequest, ClientError> {
        if self.prompt.trim().is_empty() {
            return Err(ClientError::empty_prompt());
        }

        let request = GenerationRequest {
            model: self.model.to_string(),
            prompt: self.prompt.to_string(),
            num_images: self.count,
            size: self.aspect_ratio.size().to_string(),
        };

        match request.validate() {
            Ok(_) => Ok(request),
            Err(e) => Err(ClientError::Validation(e.to_string())),
        }
    }
}
