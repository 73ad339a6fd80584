use crate::upload_form::view::{Banner, ViewModel, RESULT_HEADING, TITLE, UPLOAD_PROMPT};
use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiAction {
    PickImage,
    Submit,
}

const TITLE_COLOR: egui::Color32 = egui::Color32::from_rgb(30, 64, 175);
const LABEL_COLOR: egui::Color32 = egui::Color32::from_rgb(29, 78, 216);
const CONFIDENCE_COLOR: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);

pub fn render(
    ctx: &egui::Context,
    view_model: &ViewModel,
    preview_texture: Option<&egui::TextureHandle>,
    preview_max_height: f32,
) -> Vec<UiAction> {
    let mut actions = vec![];
    let hovering_files = ctx.input(|i| !i.raw.hovered_files.is_empty());

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.label(
                egui::RichText::new(TITLE)
                    .size(28.0)
                    .strong()
                    .color(TITLE_COLOR),
            );
            ui.add_space(20.0);

            let width = ui.available_width().min(420.0);

            let prompt = egui::RichText::new(UPLOAD_PROMPT).color(if hovering_files {
                LABEL_COLOR
            } else {
                egui::Color32::GRAY
            });
            if ui
                .add_sized([width, 56.0], egui::Button::new(prompt))
                .on_hover_text("Upload image")
                .clicked()
            {
                actions.push(UiAction::PickImage);
            }

            if let Some(file_name) = &view_model.file_name {
                ui.label(egui::RichText::new(file_name).small());
            }

            if view_model.preview.is_some() {
                ui.add_space(12.0);
                match preview_texture {
                    Some(texture) => {
                        ui.add(
                            egui::Image::new(egui::load::SizedTexture::from_handle(texture))
                                .max_width(width)
                                .max_height(preview_max_height)
                                .maintain_aspect_ratio(true)
                                .rounding(8.0),
                        );
                    }
                    None => {
                        ui.label(egui::RichText::new("Preview unavailable").italics());
                    }
                }
            }

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                ui.add_space(((ui.available_width() - width) / 2.0).max(0.0));
                let button = egui::Button::new(egui::RichText::new(view_model.submit_label).strong())
                    .min_size(egui::vec2(width, 36.0));
                if ui.add_enabled(view_model.submit_enabled, button).clicked() {
                    actions.push(UiAction::Submit);
                }
            });
            if !view_model.submit_enabled {
                ui.add(egui::Spinner::new());
            }

            match &view_model.banner {
                Banner::None => {}
                Banner::Error(message) => {
                    ui.add_space(12.0);
                    ui.colored_label(ERROR_COLOR, format!("⚠ {}", message));
                }
                Banner::Result { label, confidence } => {
                    ui.add_space(24.0);
                    egui::Frame::group(ui.style())
                        .inner_margin(egui::Margin::same(16.0))
                        .show(ui, |ui| {
                            ui.set_width(width);
                            ui.vertical_centered(|ui| {
                                ui.colored_label(CONFIDENCE_COLOR, "✔");
                                ui.label(egui::RichText::new(RESULT_HEADING).size(20.0).strong());
                                ui.horizontal_wrapped(|ui| {
                                    ui.label("Scene classified as");
                                    ui.label(egui::RichText::new(label).strong().color(LABEL_COLOR));
                                    ui.label("with");
                                    ui.label(
                                        egui::RichText::new(confidence)
                                            .strong()
                                            .color(CONFIDENCE_COLOR),
                                    );
                                    ui.label("confidence.");
                                });
                            });
                        });
                }
            }
        });
    });

    actions
}
