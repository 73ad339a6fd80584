use crate::config::Config;
use crate::image_picker::interface::ImagePicker;
use crate::library::logger::interface::Logger;
use crate::library::state_machine::StateMachine;
use crate::preview::store::PreviewStore;
use crate::selected_image::SelectedImage;
use crate::upload_form::core::{init, transition, Effect, Event, PreviewRef, State};
use crate::upload_form::render::{render, UiAction};
use crate::upload_form::run_effect::RunEffect;
use crate::upload_form::view::view;
use eframe::egui;
use std::collections::HashMap;
use std::sync::mpsc::Sender;
use std::sync::Arc;

pub type TransitionFn = fn(State, Event) -> (State, Vec<Effect>);
pub type RunEffectFn = Box<dyn Fn(Effect, Sender<Event>) + Send + Sync>;
pub type Machine = StateMachine<State, Event, Effect, TransitionFn, RunEffectFn>;

pub fn new_machine(run_effect: RunEffect) -> Machine {
    StateMachine::new(
        init(),
        transition as TransitionFn,
        Box::new(move |effect, event_sender| run_effect.run_effect(effect, event_sender)),
    )
}

pub struct UploadForm {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    image_picker: Arc<dyn ImagePicker + Send + Sync>,
    preview_store: PreviewStore,
    textures: HashMap<PreviewRef, egui::TextureHandle>,
    machine: Machine,
}

impl UploadForm {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        image_picker: Arc<dyn ImagePicker + Send + Sync>,
        run_effect: RunEffect,
        preview_store: PreviewStore,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("upload_form"),
            image_picker,
            preview_store,
            textures: HashMap::new(),
            machine: new_machine(run_effect),
        }
    }

    fn dispatch(&mut self, event: Event) {
        let _ = self.logger.info(&format!("Event: {:?}", event));
        self.machine.dispatch(event);
    }

    fn pick_image(&mut self) {
        match self.image_picker.pick() {
            Ok(image) => self.dispatch(Event::ImageSelected(image)),
            Err(e) => {
                let _ = self.logger.error(&format!("Could not read selected file: {}", e));
            }
        }
    }

    fn take_dropped_image(&self, ctx: &egui::Context) -> Option<SelectedImage> {
        let dropped = ctx.input(|i| i.raw.dropped_files.first().cloned())?;

        if let Some(bytes) = dropped.bytes {
            let name = if dropped.name.is_empty() {
                "image".to_string()
            } else {
                dropped.name
            };
            return Some(SelectedImage::new(&name, bytes));
        }

        let path = dropped.path?;
        match SelectedImage::from_path(&path) {
            Ok(image) => Some(image),
            Err(e) => {
                let _ = self
                    .logger
                    .error(&format!("Could not read {}: {}", path.display(), e));
                None
            }
        }
    }

    /// Uploads pixels for the current preview and drops textures whose
    /// preview was released.
    fn sync_textures(&mut self, ctx: &egui::Context) {
        let current = self.machine.state().preview;
        self.textures
            .retain(|preview, _| Some(*preview) == current);

        let Some(preview) = current else {
            return;
        };
        if self.textures.contains_key(&preview) {
            return;
        }
        let Some(image) = self.preview_store.get(preview) else {
            return;
        };

        let color_image = egui::ColorImage::from_rgba_unmultiplied(image.size, &image.rgba);
        let texture = ctx.load_texture(
            format!("preview-{}", preview.0),
            color_image,
            egui::TextureOptions::LINEAR,
        );
        self.textures.insert(preview, texture);
    }
}

impl eframe::App for UploadForm {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.machine.pump();

        if let Some(image) = self.take_dropped_image(ctx) {
            self.dispatch(Event::ImageSelected(Some(image)));
        }

        self.sync_textures(ctx);

        let view_model = view(self.machine.state());
        let texture = view_model
            .preview
            .and_then(|preview| self.textures.get(&preview));

        let actions = render(ctx, &view_model, texture, self.config.preview_max_height);

        for action in actions {
            match action {
                UiAction::PickImage => self.pick_image(),
                UiAction::Submit => self.dispatch(Event::SubmitClicked),
            }
        }
    }
}
