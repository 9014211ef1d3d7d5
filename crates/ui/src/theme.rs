use bevy_egui::{egui, EguiContexts};

pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(200, 203, 210);
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(140, 145, 155);
pub const TEXT_FAINT: egui::Color32 = egui::Color32::from_rgb(105, 110, 120);
pub const ACCENT_CYAN: egui::Color32 = egui::Color32::from_rgb(34, 211, 238);
pub const ACCENT_PURPLE: egui::Color32 = egui::Color32::from_rgb(147, 51, 234);
pub const COUNTER_RED: egui::Color32 = egui::Color32::from_rgb(248, 113, 113);
pub const LIVE_GREEN: egui::Color32 = egui::Color32::from_rgb(74, 222, 128);

pub fn apply_night_theme(mut contexts: EguiContexts) {
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };
    let mut style = (*ctx.style()).clone();

    // Near-black panels so the star field shows through
    let panel = egui::Color32::from_rgba_unmultiplied(8, 10, 14, 235);
    let border = egui::Color32::from_rgb(55, 60, 72);

    style.visuals.dark_mode = true;
    style.visuals.window_fill = panel;
    style.visuals.panel_fill = egui::Color32::TRANSPARENT;
    style.visuals.window_stroke = egui::Stroke::new(1.0, border);
    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.override_text_color = Some(TEXT_PRIMARY);

    // egui 0.31+ uses CornerRadius with u8 values
    style.visuals.window_corner_radius = egui::CornerRadius::same(12);
    style.visuals.menu_corner_radius = egui::CornerRadius::same(12);

    ctx.set_style(style);
}
