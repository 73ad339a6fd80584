use crate::library::logger::interface::Logger;
use crate::prediction_client::interface::{Prediction, PredictionClient, PredictionError};
use crate::selected_image::SelectedImage;
use reqwest::blocking::multipart::{Form, Part};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

pub struct PredictionClientHttp {
    endpoint: String,
    client: reqwest::blocking::Client,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PredictionClientHttp {
    pub fn new(
        endpoint: &str,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        // Requests wait for the server for as long as it takes.
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<std::time::Duration>)
            .build()?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            client,
            logger: logger.with_namespace("prediction_client").with_namespace("http"),
        })
    }

    fn form(image: &SelectedImage) -> Result<Form, PredictionError> {
        let part = Part::bytes(image.bytes.to_vec())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime_type)
            .map_err(|e| PredictionError::Request(e.to_string()))?;

        Ok(Form::new().part("file", part))
    }
}

impl PredictionClient for PredictionClientHttp {
    fn predict(&self, image: &SelectedImage) -> Result<Prediction, PredictionError> {
        let _ = self.logger.info(&format!(
            "POST {} ({}, {} bytes)",
            self.endpoint,
            image.file_name,
            image.bytes.len()
        ));

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(Self::form(image)?)
            .send()
            .map_err(|e| PredictionError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| PredictionError::Request(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            return Err(PredictionError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let prediction: Prediction =
            serde_json::from_str(&body).map_err(|e| PredictionError::Decode(e.to_string()))?;

        let _ = self.logger.info(&format!(
            "Predicted {} ({})",
            prediction.label, prediction.confidence
        ));

        Ok(prediction)
    }
}
