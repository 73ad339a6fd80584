use crate::library::logger::interface::Logger;
use crate::prediction_client::interface::PredictionClient;
use crate::preview::store::{PreviewImage, PreviewStore};
use crate::upload_form::core::{Effect, Event};
use std::sync::mpsc::Sender;
use std::sync::Arc;

#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    prediction_client: Arc<dyn PredictionClient + Send + Sync>,
    preview_store: PreviewStore,
    request_repaint: Arc<dyn Fn() + Send + Sync>,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        prediction_client: Arc<dyn PredictionClient + Send + Sync>,
        preview_store: PreviewStore,
        request_repaint: Arc<dyn Fn() + Send + Sync>,
    ) -> Self {
        Self {
            logger: logger.with_namespace("effect"),
            prediction_client,
            preview_store,
            request_repaint,
        }
    }

    pub fn run_effect(&self, effect: Effect, event_sender: Sender<Event>) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::CreatePreview { preview, image } => {
                match PreviewImage::decode(&image.bytes)
                    .and_then(|decoded| self.preview_store.insert(preview, decoded))
                {
                    Ok(true) => {
                        let _ = self.logger.info(&format!(
                            "Stored preview {} for {}",
                            preview.0, image.file_name
                        ));
                    }
                    Ok(false) => {
                        let _ = self.logger.info(&format!(
                            "Dropped preview {} for {}, already released",
                            preview.0, image.file_name
                        ));
                    }
                    Err(e) => {
                        let _ = self.logger.error(&format!(
                            "Could not store preview for {}: {}",
                            image.file_name, e
                        ));
                    }
                }
                (self.request_repaint)();
            }
            Effect::ReleasePreview { preview } => {
                self.preview_store.release(preview);
                (self.request_repaint)();
            }
            Effect::Predict { request, image } => {
                let result = self.prediction_client.predict(&image);

                if let Err(e) = &result {
                    let _ = self
                        .logger
                        .error(&format!("Prediction for {} failed: {}", image.file_name, e));
                }

                let _ = event_sender.send(Event::PredictDone { request, result });
                (self.request_repaint)();
            }
        }
    }
}
