use crate::upload_form::core::{Outcome, PreviewRef, State};

pub const TITLE: &str = "Intel Scene Classifier";
pub const UPLOAD_PROMPT: &str = "Click to upload an image or drag and drop here";
pub const RESULT_HEADING: &str = "Prediction Result";

#[derive(Debug, Clone, PartialEq)]
pub enum Banner {
    None,
    Result { label: String, confidence: String },
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub file_name: Option<String>,
    pub preview: Option<PreviewRef>,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    pub banner: Banner,
}

pub fn view(state: &State) -> ViewModel {
    let loading = state.is_loading();

    let banner = match &state.outcome {
        Outcome::Empty => Banner::None,
        Outcome::Success(prediction) => Banner::Result {
            label: prediction.label.clone(),
            confidence: format!("{}%", prediction.confidence),
        },
        Outcome::Failure(message) => Banner::Error(message.clone()),
    };

    ViewModel {
        file_name: state.image.as_ref().map(|image| image.file_name.clone()),
        preview: state.preview,
        submit_label: if loading { "Predicting..." } else { "Predict" },
        submit_enabled: !loading,
        banner,
    }
}
