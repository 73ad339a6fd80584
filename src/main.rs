use config::Config;
use eframe::egui;
use image_picker::impl_rfd::ImagePickerRfd;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use prediction_client::impl_http::PredictionClientHttp;
use preview::store::PreviewStore;
use std::sync::Arc;
use upload_form::main::UploadForm;
use upload_form::run_effect::RunEffect;

mod config;
mod image_picker;
mod library;
mod prediction_client;
mod preview;
mod selected_image;
mod upload_form;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    let logger = Arc::new(LoggerConsole::new(config.logger_timezone));

    let prediction_client = Arc::new(
        PredictionClientHttp::new(&config.endpoint, logger.clone())
            .map_err(|e| e as Box<dyn std::error::Error>)?,
    );

    let image_picker = Arc::new(ImagePickerRfd::new());

    let preview_store = PreviewStore::new();

    let _ = logger.info(&format!("Sending predictions to {}", config.endpoint));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.window_size)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    let window_title = config.window_title.clone();

    eframe::run_native(
        &window_title,
        options,
        Box::new(move |cc| {
            let egui_ctx = cc.egui_ctx.clone();
            let run_effect = RunEffect::new(
                logger.clone(),
                prediction_client,
                preview_store.clone(),
                Arc::new(move || egui_ctx.request_repaint()),
            );

            Box::new(UploadForm::new(
                config,
                logger,
                image_picker,
                run_effect,
                preview_store,
            ))
        }),
    )?;

    Ok(())
}
