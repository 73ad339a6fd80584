use super::fixture::{mountain, png_image, Fixture};
use crate::prediction_client::impl_fake::FakeResponse;
use crate::selected_image::SelectedImage;
use crate::upload_form::core::{Effect, Event, PreviewRef, RequestId};
use std::sync::atomic::Ordering;
use std::sync::mpsc::channel;

#[test]
fn test_create_preview_decodes_into_store() {
    let f = Fixture::new(FakeResponse::Random);
    let (sender, _receiver) = channel();

    f.run_effect.run_effect(
        Effect::CreatePreview {
            preview: PreviewRef(1),
            image: png_image("a.png"),
        },
        sender,
    );

    let preview = f.preview_store.get(PreviewRef(1)).unwrap();
    assert_eq!(preview.size, [2, 2]);
    assert_eq!(f.repaints.load(Ordering::SeqCst), 1);
}

#[test]
fn test_undecodable_preview_is_logged() {
    let f = Fixture::new(FakeResponse::Random);
    let (sender, _receiver) = channel();

    f.run_effect.run_effect(
        Effect::CreatePreview {
            preview: PreviewRef(1),
            image: SelectedImage::new("notes.txt", b"hello".to_vec()),
        },
        sender,
    );

    assert!(!f.preview_store.contains(PreviewRef(1)));
    assert!(f
        .logger
        .lines()
        .iter()
        .any(|line| line.starts_with("ERROR") && line.contains("notes.txt")));
}

#[test]
fn test_release_preview_removes_entry() {
    let f = Fixture::new(FakeResponse::Random);
    let (sender, _receiver) = channel();
    f.run_effect.run_effect(
        Effect::CreatePreview {
            preview: PreviewRef(1),
            image: png_image("a.png"),
        },
        sender.clone(),
    );

    f.run_effect.run_effect(
        Effect::ReleasePreview {
            preview: PreviewRef(1),
        },
        sender,
    );

    assert_eq!(f.preview_store.len(), 0);
}

#[test]
fn test_create_after_release_is_dropped() {
    let f = Fixture::new(FakeResponse::Random);
    let (sender, _receiver) = channel();
    f.run_effect.run_effect(
        Effect::ReleasePreview {
            preview: PreviewRef(1),
        },
        sender.clone(),
    );

    f.run_effect.run_effect(
        Effect::CreatePreview {
            preview: PreviewRef(1),
            image: png_image("a.png"),
        },
        sender,
    );

    assert_eq!(f.preview_store.len(), 0);
    assert!(f
        .logger
        .lines()
        .iter()
        .any(|line| line.contains("already released")));
}

#[test]
fn test_poisoned_store_is_logged() {
    let f = Fixture::new(FakeResponse::Random);
    let (sender, _receiver) = channel();
    f.preview_store.poison();

    f.run_effect.run_effect(
        Effect::CreatePreview {
            preview: PreviewRef(1),
            image: png_image("a.png"),
        },
        sender,
    );

    assert!(f
        .logger
        .lines()
        .iter()
        .any(|line| line.starts_with("ERROR") && line.contains("a.png")));
}

#[test]
fn test_predict_sends_done_event() {
    let f = Fixture::new(FakeResponse::Prediction(mountain()));
    let (sender, receiver) = channel();

    f.run_effect.run_effect(
        Effect::Predict {
            request: RequestId(3),
            image: png_image("a.png"),
        },
        sender,
    );

    match receiver.try_recv().unwrap() {
        Event::PredictDone { request, result } => {
            assert_eq!(request, RequestId(3));
            assert_eq!(result.unwrap(), mountain());
        }
        other => panic!("Unexpected event: {:?}", other),
    }
    assert_eq!(f.prediction_client.calls(), 1);
}

#[test]
fn test_predict_failure_is_logged() {
    let f = Fixture::new(FakeResponse::Failure);
    let (sender, receiver) = channel();

    f.run_effect.run_effect(
        Effect::Predict {
            request: RequestId(1),
            image: png_image("a.png"),
        },
        sender,
    );

    assert!(matches!(
        receiver.try_recv().unwrap(),
        Event::PredictDone { result: Err(_), .. }
    ));
    assert!(f
        .logger
        .lines()
        .iter()
        .any(|line| line.starts_with("ERROR") && line.contains("connection refused")));
}

#[test]
fn test_random_prediction_uses_scene_labels() {
    let f = Fixture::new(FakeResponse::Random);
    let (sender, receiver) = channel();

    f.run_effect.run_effect(
        Effect::Predict {
            request: RequestId(1),
            image: png_image("a.png"),
        },
        sender,
    );

    match receiver.try_recv().unwrap() {
        Event::PredictDone {
            result: Ok(prediction),
            ..
        } => {
            assert!(crate::prediction_client::impl_fake::SCENE_LABELS
                .contains(&prediction.label.as_str()));
            assert!((0.0..=100.0).contains(&prediction.confidence));
        }
        other => panic!("Unexpected event: {:?}", other),
    }
}
