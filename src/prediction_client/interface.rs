use crate::selected_image::SelectedImage;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub confidence: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },
    #[error("could not decode response: {0}")]
    Decode(String),
}

pub trait PredictionClient: Send + Sync {
    fn predict(&self, image: &SelectedImage) -> Result<Prediction, PredictionError>;
}
