// LogTranslator - ui/theme.rs
//
// Colour scheme, layout constants, and global style setup.
// No dependencies on app state or business logic.

use egui::{Color32, TextStyle};

/// Hero panel background.
pub const HERO_BG: Color32 = Color32::from_rgb(30, 27, 75); // Indigo 950
/// Hero headline colour.
pub const HERO_TITLE: Color32 = Color32::WHITE;
/// Hero body text colour.
pub const HERO_TEXT: Color32 = Color32::from_rgb(203, 213, 225); // Slate 300
/// Hero tagline accent.
pub const HERO_ACCENT: Color32 = Color32::from_rgb(52, 211, 153); // Emerald 400

/// Translator panel background (dark mode).
pub const PANEL_BG_DARK: Color32 = Color32::from_rgb(2, 6, 23); // Slate 950
/// Placeholder prompt colour.
pub const PLACEHOLDER_TEXT: Color32 = Color32::from_rgb(148, 163, 184); // Slate 400
/// Translate button fill.
pub const TRANSLATE_FILL: Color32 = Color32::from_rgb(99, 102, 241); // Indigo 500

/// Layout constants.
pub const HERO_WIDTH_FRACTION: f32 = 0.4;
pub const HERO_MIN_WIDTH: f32 = 280.0;
pub const PANEL_MARGIN: i8 = 48;
pub const OUTPUT_MIN_HEIGHT: f32 = 120.0;
pub const INPUT_ROWS: usize = 7;
pub const TRANSLATE_BUTTON_MIN_WIDTH: f32 = 120.0;
pub const HERO_TITLE_SIZE: f32 = 44.0;
pub const PLACEHOLDER_SIZE: f32 = 22.0;

/// Apply the dark/light visuals and the body font size.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });

    ctx.style_mut(|style| {
        for text_style in [TextStyle::Body, TextStyle::Button, TextStyle::Monospace] {
            if let Some(font_id) = style.text_styles.get_mut(&text_style) {
                font_id.size = font_size;
            }
        }
    });
}

/// Background of the translator panel for the current mode.
pub fn panel_bg(dark_mode: bool) -> Color32 {
    if dark_mode {
        PANEL_BG_DARK
    } else {
        Color32::from_rgb(248, 250, 252) // Slate 50
    }
}
