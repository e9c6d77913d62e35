//! Reusable UI components
//!
//! Standalone widgets used across the page: tinted message boxes, the
//! confidence metric, and section headers.

use crate::theme;
use eframe::egui;

/// Style of a message box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Info,
    Warning,
    Error,
}

impl Tone {
    /// (fill, text color)
    pub fn colors(self) -> (egui::Color32, egui::Color32) {
        match self {
            Tone::Success => (theme::SUCCESS_FILL, theme::SUCCESS_TEXT),
            Tone::Info => (theme::INFO_FILL, theme::INFO_TEXT),
            Tone::Warning => (theme::WARNING_FILL, theme::WARNING_TEXT),
            Tone::Error => (theme::ERROR_FILL, theme::ERROR_TEXT),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tone::Success => egui_phosphor::regular::CHECK_CIRCLE,
            Tone::Info => egui_phosphor::regular::INFO,
            Tone::Warning => egui_phosphor::regular::WARNING,
            Tone::Error => egui_phosphor::regular::WARNING_OCTAGON,
        }
    }
}

/// Full-width tinted box with an icon and wrapped text
pub fn callout(ui: &mut egui::Ui, tone: Tone, text: &str) {
    let (fill, color) = tone.colors();
    theme::callout_frame(fill).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new(tone.icon()).color(color).size(theme::FONT_BODY));
            ui.add(
                egui::Label::new(egui::RichText::new(text).color(color).size(theme::FONT_BODY))
                    .wrap(),
            );
        });
    });
}

/// Numbered lines inside an info box
pub fn info_list(ui: &mut egui::Ui, lines: &[&str]) {
    let (fill, color) = Tone::Info.colors();
    theme::callout_frame(fill).show(ui, |ui| {
        ui.set_width(ui.available_width());
        for (i, line) in lines.iter().enumerate() {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(format!("{}. {}", i + 1, line))
                        .color(color)
                        .size(theme::FONT_LABEL),
                )
                .wrap(),
            );
        }
    });
}

/// Small caption over a large value
pub fn metric(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.vertical(|ui| {
        ui.spacing_mut().item_spacing.y = theme::SPACING_SM;
        ui.label(egui::RichText::new(label).color(theme::TEXT_MUTED).size(theme::FONT_LABEL));
        ui.label(egui::RichText::new(value).color(theme::TEXT_PRIMARY).size(theme::FONT_METRIC));
    });
}

pub fn section_header(ui: &mut egui::Ui, icon: &str, text: &str) {
    ui.add_space(theme::SPACING_MD);
    ui.label(
        egui::RichText::new(format!("{}  {}", icon, text))
            .color(theme::TEXT_PRIMARY)
            .size(theme::FONT_HEADING)
            .strong(),
    );
}

pub fn sub_header(ui: &mut egui::Ui, icon: &str, text: &str) {
    ui.label(
        egui::RichText::new(format!("{}  {}", icon, text))
            .color(theme::TEXT_PRIMARY)
            .size(theme::FONT_SUBHEADING)
            .strong(),
    );
}

/// Muted label above an input
pub fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).color(theme::TEXT_MUTED).size(theme::FONT_LABEL));
}
