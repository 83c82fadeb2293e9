use eframe::egui::{self, Color32, Visuals};
use prodraft_core::types::Theme;

// Layout
pub const PRICING_PANEL_WIDTH: f32 = 280.0;
pub const FIELD_SPACING: f32 = 10.0;
pub const EDITOR_ROWS: usize = 8;
pub const NOTICE_MAX_WIDTH: f32 = 360.0;

// Window
pub const WINDOW_MIN_SIZE: [f32; 2] = [760.0, 520.0];
pub const WINDOW_DEFAULT_SIZE: [f32; 2] = [1080.0, 720.0];

// Text colors
pub const ERROR_TEXT: Color32 = Color32::from_rgb(0xe0, 0x5c, 0x5c);
pub const SUCCESS_TEXT: Color32 = Color32::from_rgb(0x6f, 0xc2, 0x76);
pub const HINT_TEXT: Color32 = Color32::from_gray(130);

/// Creates the dark gray admin theme.
pub fn dark_gray_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    // Main background - dark gray instead of black
    visuals.panel_fill = Color32::from_gray(50);
    visuals.window_fill = Color32::from_gray(50);
    visuals.extreme_bg_color = Color32::from_gray(35);
    visuals.faint_bg_color = Color32::from_gray(45);

    // Widget backgrounds
    visuals.widgets.noninteractive.bg_fill = Color32::from_gray(60);
    visuals.widgets.inactive.bg_fill = Color32::from_gray(65);
    visuals.widgets.hovered.bg_fill = Color32::from_gray(75);
    visuals.widgets.active.bg_fill = Color32::from_gray(85);

    visuals
}

/// Applies the configured theme to the context.
pub fn apply_theme(ctx: &egui::Context, theme: Theme) {
    match theme {
        Theme::Dark => {
            ctx.set_theme(egui::Theme::Dark);
            ctx.set_visuals(dark_gray_visuals());
        }
        Theme::Light => {
            ctx.set_theme(egui::Theme::Light);
            ctx.set_visuals(Visuals::light());
        }
        Theme::System => {
            ctx.set_theme(egui::ThemePreference::System);
        }
    }
}
