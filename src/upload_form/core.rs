use crate::prediction_client::interface::{Prediction, PredictionError};
use crate::selected_image::SelectedImage;

pub const NO_IMAGE_MESSAGE: &str = "Please select an image first.";
pub const PREDICTION_FAILED_MESSAGE: &str = "Prediction failed. Please check the backend server.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewRef(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(pub u64);

/// What the form shows below the submit button. Only one at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Outcome {
    #[default]
    Empty,
    Success(Prediction),
    Failure(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct InFlight {
    pub request: RequestId,
    /// Preview that was current when the request started.
    pub preview: Option<PreviewRef>,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    pub image: Option<SelectedImage>,
    pub preview: Option<PreviewRef>,
    pub outcome: Outcome,
    pub in_flight: Option<InFlight>,
    next_preview: u64,
    next_request: u64,
}

impl State {
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }
}

#[derive(Debug)]
pub enum Event {
    ImageSelected(Option<SelectedImage>),
    SubmitClicked,
    PredictDone {
        request: RequestId,
        result: Result<Prediction, PredictionError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    CreatePreview {
        preview: PreviewRef,
        image: SelectedImage,
    },
    ReleasePreview {
        preview: PreviewRef,
    },
    Predict {
        request: RequestId,
        image: SelectedImage,
    },
}

pub fn init() -> (State, Vec<Effect>) {
    (State::default(), vec![])
}

pub fn transition(state: State, event: Event) -> (State, Vec<Effect>) {
    match event {
        Event::ImageSelected(None) => (state, vec![]),

        Event::ImageSelected(Some(image)) => {
            let mut state = state;
            let mut effects = vec![];

            if let Some(old) = state.preview.take() {
                effects.push(Effect::ReleasePreview { preview: old });
            }

            state.next_preview += 1;
            let preview = PreviewRef(state.next_preview);

            effects.push(Effect::CreatePreview {
                preview,
                image: image.clone(),
            });

            state.image = Some(image);
            state.preview = Some(preview);
            state.outcome = Outcome::Empty;

            (state, effects)
        }

        Event::SubmitClicked if state.is_loading() => (state, vec![]),

        Event::SubmitClicked => {
            let mut state = state;

            let Some(image) = state.image.clone() else {
                state.outcome = Outcome::Failure(NO_IMAGE_MESSAGE.to_string());
                return (state, vec![]);
            };

            state.next_request += 1;
            let request = RequestId(state.next_request);

            state.in_flight = Some(InFlight {
                request,
                preview: state.preview,
            });
            state.outcome = Outcome::Empty;

            (state, vec![Effect::Predict { request, image }])
        }

        Event::PredictDone { request, result } => {
            let mut state = state;

            let in_flight = match state.in_flight.take() {
                Some(in_flight) if in_flight.request == request => in_flight,
                other => {
                    state.in_flight = other;
                    return (state, vec![]);
                }
            };

            // A result for an image the user has since replaced is dropped.
            if in_flight.preview != state.preview {
                return (state, vec![]);
            }

            state.outcome = match result {
                Ok(prediction) => Outcome::Success(prediction),
                Err(_) => Outcome::Failure(PREDICTION_FAILED_MESSAGE.to_string()),
            };

            (state, vec![])
        }
    }
}
