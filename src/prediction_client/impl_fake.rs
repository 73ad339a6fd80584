use crate::library::logger::interface::Logger;
use crate::prediction_client::interface::{Prediction, PredictionClient, PredictionError};
use crate::selected_image::SelectedImage;
use rand::distr::{Distribution, Uniform};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};

pub const SCENE_LABELS: [&str; 6] = ["buildings", "forest", "glacier", "mountain", "sea", "street"];

pub enum FakeResponse {
    Random,
    Prediction(Prediction),
    Failure,
}

pub struct PredictionClientFake {
    logger: Arc<dyn Logger + Send + Sync>,
    response: FakeResponse,
    calls: AtomicUsize,
    gate: Option<Mutex<Receiver<()>>>,
}

impl PredictionClientFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("prediction_client").with_namespace("fake"),
            response: FakeResponse::Random,
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    pub fn with_response(mut self, response: FakeResponse) -> Self {
        self.response = response;
        self
    }

    /// Each call blocks until one message arrives on `gate`.
    pub fn with_gate(mut self, gate: Receiver<()>) -> Self {
        self.gate = Some(Mutex::new(gate));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn random_prediction() -> Result<Prediction, PredictionError> {
        let mut rng = rand::rng();

        let index_dist = Uniform::new(0, SCENE_LABELS.len())
            .map_err(|e| PredictionError::Request(e.to_string()))?;
        let confidence_dist =
            Uniform::new(0.0, 100.0).map_err(|e| PredictionError::Request(e.to_string()))?;

        let confidence: f64 = confidence_dist.sample(&mut rng);

        Ok(Prediction {
            label: SCENE_LABELS[index_dist.sample(&mut rng)].to_string(),
            confidence: (confidence * 100.0).round() / 100.0,
        })
    }
}

impl PredictionClient for PredictionClientFake {
    fn predict(&self, image: &SelectedImage) -> Result<Prediction, PredictionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let _ = self
            .logger
            .info(&format!("Classifying {} with fake client...", image.file_name));

        if let Some(gate) = &self.gate {
            let gate = gate
                .lock()
                .map_err(|e| PredictionError::Request(e.to_string()))?;
            let _ = gate.recv();
        }

        match &self.response {
            FakeResponse::Random => Self::random_prediction(),
            FakeResponse::Prediction(prediction) => Ok(prediction.clone()),
            FakeResponse::Failure => Err(PredictionError::Request(
                "connection refused".to_string(),
            )),
        }
    }
}
