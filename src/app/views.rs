//! Page rendering (sidebar, form, result, footer)

use super::App;
use crate::constants::*;
use crate::session::{format_confidence, Outcome};
use crate::theme;
use crate::types::{AskState, ModelStatus};
use crate::ui::components::{self, Tone};
use eframe::egui;
use egui_phosphor::regular as icons;
use tracing::warn;

/// Visible rows in the context area
const CONTEXT_ROWS: usize = 9;

impl App {
    pub(crate) fn render_sidebar(&self, ctx: &egui::Context, status: &ModelStatus) {
        egui::SidePanel::left("instructions")
            .exact_width(theme::SIDEBAR_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .frame(theme::sidebar_frame())
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new("How to Use")
                        .color(theme::TEXT_PRIMARY)
                        .size(theme::FONT_SUBHEADING)
                        .strong(),
                );
                ui.add_space(theme::SPACING_SM);
                components::info_list(ui, INSTRUCTIONS);

                ui.add_space(theme::SPACING_LG);
                components::field_label(ui, "MODEL");
                let (dot, color) = match status {
                    ModelStatus::Loading => (icons::CIRCLE_DASHED, theme::TEXT_MUTED),
                    ModelStatus::Ready(_) => (icons::CIRCLE, theme::SUCCESS_TEXT),
                    ModelStatus::Failed(_) => (icons::X_CIRCLE, theme::ERROR_TEXT),
                };
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(dot).color(color));
                    ui.label(
                        egui::RichText::new(&self.model_config.model_id)
                            .color(theme::TEXT_SECONDARY)
                            .size(theme::FONT_LABEL)
                            .monospace(),
                    );
                });
            });
    }

    pub(crate) fn render_footer(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer")
            .show_separator_line(true)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::symmetric(theme::SPACING_XL as i8, 10)),
            )
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(FOOTER_ATTRIBUTION)
                        .italics()
                        .color(theme::TEXT_DIM)
                        .size(theme::FONT_CAPTION),
                );
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing.x = theme::SPACING_SM;
                    ui.label(
                        egui::RichText::new(format!("{} v{} ·", APP_NAME, APP_VERSION))
                            .color(theme::TEXT_DIM)
                            .size(theme::FONT_CAPTION),
                    );
                    let link = ui.link(
                        egui::RichText::new(format!("{} {}", self.model_config.model_id, icons::ARROW_SQUARE_OUT))
                            .size(theme::FONT_CAPTION),
                    );
                    if link.clicked() {
                        let url = self.model_config.model_card_url();
                        if let Err(e) = open::that(&url) {
                            warn!(error = %e, url = %url, "Failed to open model card");
                        }
                    }
                });
            });
    }

    pub(crate) fn render_page(&mut self, ctx: &egui::Context, status: &ModelStatus) {
        egui::CentralPanel::default()
            .frame(theme::page_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.set_max_width(theme::CONTENT_MAX_WIDTH);

                        ui.label(
                            egui::RichText::new(format!("{}  {}", icons::ROBOT, APP_NAME))
                                .color(theme::TEXT_PRIMARY)
                                .size(theme::FONT_TITLE)
                                .strong(),
                        );
                        ui.add_space(theme::SPACING_MD);

                        match status {
                            ModelStatus::Loading => self.render_loading(ui),
                            ModelStatus::Failed(msg) => render_load_error(ui, msg),
                            ModelStatus::Ready(_) => {
                                let state = self.controller.ask_state();
                                self.render_form(ui, ctx, state.is_pending());
                                render_outcome(ui, &state);
                            }
                        }
                    });
            });
    }

    fn render_loading(&self, ui: &mut egui::Ui) {
        ui.add_space(theme::SPACING_XL);
        ui.horizontal(|ui| {
            ui.add(egui::Spinner::new().size(20.0));
            ui.label(
                egui::RichText::new(format!("Loading model {}…", self.model_config.model_id))
                    .color(theme::TEXT_MUTED)
                    .size(theme::FONT_BODY),
            );
        });
    }

    fn render_form(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, pending: bool) {
        components::section_header(ui, icons::NOTE_PENCIL, "Context");
        components::field_label(ui, "Enter your context paragraph:");
        let context_edit = egui::ScrollArea::vertical()
            .id_salt("context_scroll")
            .max_height(theme::CONTEXT_AREA_HEIGHT)
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.form.context)
                        .desired_width(f32::INFINITY)
                        .desired_rows(CONTEXT_ROWS)
                        .font(egui::TextStyle::Body),
                )
            })
            .inner;

        components::section_header(ui, icons::QUESTION, "Your Question");
        components::field_label(ui, "What would you like to know?");
        let question_edit = ui.add(
            egui::TextEdit::singleline(&mut self.form.question)
                .hint_text(QUESTION_PLACEHOLDER)
                .desired_width(f32::INFINITY)
                .font(egui::TextStyle::Body),
        );
        if context_edit.changed() || question_edit.changed() {
            self.controller.discard_result();
        }

        ui.add_space(theme::SPACING_MD);
        ui.horizontal(|ui| {
            let button = theme::button_primary(format!("{}  Get Answer", icons::MAGNIFYING_GLASS));
            if ui.add_enabled(!pending, button).clicked() {
                self.submit(ctx);
            }
            if pending {
                ui.add(egui::Spinner::new());
                ui.label(egui::RichText::new("Finding the answer…").color(theme::TEXT_MUTED));
            }
        });
        ui.add_space(theme::SPACING_MD);
    }
}

fn render_load_error(ui: &mut egui::Ui, msg: &str) {
    components::callout(ui, Tone::Error, &format!("Error loading model: {}", msg));
    components::callout(ui, Tone::Error, MSG_LOAD_FAILED);
}

fn render_outcome(ui: &mut egui::Ui, state: &AskState) {
    let AskState::Done { outcome, at } = state else {
        return;
    };

    match outcome {
        Outcome::MissingInput => components::callout(ui, Tone::Warning, MSG_MISSING_INPUT),
        Outcome::Failed(msg) => components::callout(
            ui,
            Tone::Error,
            &format!("Error processing your question: {}", msg),
        ),
        Outcome::Answered {
            answer,
            low_confidence,
        } => {
            components::sub_header(ui, icons::PUSH_PIN, "Answer:");
            let text = if answer.text.trim().is_empty() {
                "No answer span found in the context."
            } else {
                answer.text.as_str()
            };
            components::callout(ui, Tone::Success, text);
            ui.add_space(theme::SPACING_SM);
            components::metric(ui, "Confidence", &format_confidence(answer.score));
            if *low_confidence {
                components::callout(ui, Tone::Warning, MSG_LOW_CONFIDENCE);
            }

            let mut caption = format!("Answered at {}", at.format("%H:%M:%S"));
            if let (Some(start), Some(end)) = (answer.start, answer.end) {
                caption.push_str(&format!(" · characters {}–{} of the context", start, end));
            }
            ui.label(
                egui::RichText::new(caption)
                    .color(theme::TEXT_DIM)
                    .size(theme::FONT_CAPTION),
            );
        }
    }
}
