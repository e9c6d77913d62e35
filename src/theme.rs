//! Centralized theme constants for the Question Answering Assistant
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x0e, 0x11, 0x17); // page background
pub const BG_SIDEBAR: Color32 = Color32::from_rgb(0x16, 0x1a, 0x23);
pub const BG_INPUT: Color32 = Color32::from_rgb(0x1a, 0x1e, 0x28);
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x26, 0x2a, 0x36);
pub const BG_HOVER: Color32 = Color32::from_rgb(0x2c, 0x31, 0x3f);

// =============================================================================
// COLORS - Accent
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0xff, 0x4b, 0x4b); // primary button red

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0xfa, 0xfa, 0xfa);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x2a, 0x2e, 0x3a);
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x43, 0x50);

// =============================================================================
// COLORS - Callouts (fill, text)
// =============================================================================
pub const SUCCESS_FILL: Color32 = Color32::from_rgb(0x17, 0x36, 0x28);
pub const SUCCESS_TEXT: Color32 = Color32::from_rgb(0x7b, 0xe0, 0xa8);
pub const INFO_FILL: Color32 = Color32::from_rgb(0x17, 0x2d, 0x43);
pub const INFO_TEXT: Color32 = Color32::from_rgb(0x8c, 0xc8, 0xff);
pub const WARNING_FILL: Color32 = Color32::from_rgb(0x3b, 0x33, 0x14);
pub const WARNING_TEXT: Color32 = Color32::from_rgb(0xfb, 0xd3, 0x5c);
pub const ERROR_FILL: Color32 = Color32::from_rgb(0x3e, 0x1b, 0x1f);
pub const ERROR_TEXT: Color32 = Color32::from_rgb(0xff, 0x9c, 0x9c);

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 30.0;
pub const FONT_HEADING: f32 = 22.0;
pub const FONT_SUBHEADING: f32 = 18.0;
pub const FONT_BODY: f32 = 15.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_METRIC: f32 = 32.0;
pub const FONT_CAPTION: f32 = 12.0;

// =============================================================================
// DIMENSIONS - Layout
// =============================================================================
pub const SIDEBAR_WIDTH: f32 = 280.0;
pub const CONTENT_MAX_WIDTH: f32 = 720.0;
pub const CONTEXT_AREA_HEIGHT: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 36.0;

// =============================================================================
// CORNER RADIUS / STROKES / SPACING
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 6.0;
pub const RADIUS_LARGE: f32 = 8.0;
pub const STROKE_DEFAULT: f32 = 1.0;

pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 16.0;
pub const SPACING_XL: f32 = 24.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    let widget = |bg_fill: Color32, stroke: Color32, fg: Color32| egui::style::WidgetVisuals {
        bg_fill,
        weak_bg_fill: bg_fill,
        bg_stroke: egui::Stroke::new(STROKE_DEFAULT, stroke),
        fg_stroke: egui::Stroke::new(STROKE_DEFAULT, fg),
        corner_radius: RADIUS_DEFAULT.into(),
        expansion: 0.0,
    };

    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_SIDEBAR,
        extreme_bg_color: BG_INPUT, // text edit background
        faint_bg_color: BG_SIDEBAR,
        hyperlink_color: INFO_TEXT,
        selection: egui::style::Selection {
            bg_fill: Color32::from_rgb(0x3a, 0x3f, 0x4f),
            stroke: egui::Stroke::new(STROKE_DEFAULT, ACCENT),
        },
        widgets: egui::style::Widgets {
            noninteractive: widget(BG_SIDEBAR, BORDER_SUBTLE, TEXT_SECONDARY),
            inactive: widget(BG_SURFACE, BORDER_DEFAULT, TEXT_SECONDARY),
            hovered: widget(BG_HOVER, BORDER_DEFAULT, TEXT_PRIMARY),
            active: widget(BG_HOVER, ACCENT, TEXT_PRIMARY),
            open: widget(BG_SURFACE, BORDER_DEFAULT, TEXT_PRIMARY),
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_corner_radius: egui::CornerRadius::same(8),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.button_padding = egui::vec2(14.0, 8.0);
        style.spacing.text_edit_width = CONTENT_MAX_WIDTH;
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================
pub fn sidebar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_SIDEBAR)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
}

pub fn page_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_BASE)
        .inner_margin(egui::Margin::symmetric(SPACING_XL as i8 * 2, SPACING_XL as i8))
}

/// Tinted box for success/info/warning/error messages
pub fn callout_frame(fill: Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::symmetric(SPACING_LG as i8, 12))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Primary action button (Get Answer)
pub fn button_primary(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(Color32::WHITE).size(FONT_BODY))
        .fill(ACCENT)
        .corner_radius(RADIUS_DEFAULT)
        .min_size(egui::vec2(0.0, BUTTON_HEIGHT))
}

