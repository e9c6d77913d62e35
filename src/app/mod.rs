//! App module - contains the main application state and logic

mod controller;
mod views;

use controller::Controller;

use crate::model::{self, ModelConfig};
use crate::session::Form;
use crate::settings::Settings;
use crate::theme;
use eframe::egui;
use std::path::PathBuf;
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) form: Form,
    pub(crate) controller: Controller,
    pub(crate) model_config: ModelConfig,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
    // Window geometry, saved on exit
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
    ) -> std::io::Result<Self> {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let runtime = tokio::runtime::Runtime::new()?;
        let model_config = settings.model_config();

        let mut app = Self {
            form: Form::default(),
            controller: Controller::default(),
            model_config,
            runtime,
            settings,
            data_dir,
            window_pos: None,
            window_size: None,
            needs_center: false,
        };
        app.start_model_load(&cc.egui_ctx);
        Ok(app)
    }

    /// Kick off the one-time model load in the background
    fn start_model_load(&mut self, ctx: &egui::Context) {
        info!(model = %self.model_config.model_id, "Loading model");
        let config = self.model_config.clone();
        self.controller.start_model_load(
            self.runtime.handle(),
            ctx,
            async move { model::load_model(&config).await },
        );
    }

    /// Handle a press of the Get Answer button
    pub(crate) fn submit(&mut self, ctx: &egui::Context) {
        // Detached: the task reports back through the controller's state
        self.controller
            .submit(self.runtime.handle(), ctx, &self.form);
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            ..self.settings.clone()
        };
        settings.save(&self.data_dir);
    }
}
