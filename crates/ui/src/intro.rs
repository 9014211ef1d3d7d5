//! Opening title card.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::view::ViewTransform;
use simulation::phase::PhaseTimer;

use crate::theme::{ACCENT_CYAN, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};

pub const INTRO_LINES: [&str; 4] = [
    "In the next 60 seconds...",
    "Around the world...",
    "Lives will end.",
    "This is their story.",
];

/// Seconds each line stays up before the next replaces it.
pub const LINE_SECS: f32 = 1.2;

/// Line shown `phase_secs` into the intro; the last one holds.
pub fn intro_line(phase_secs: f32) -> &'static str {
    let step = (phase_secs.max(0.0) / LINE_SECS) as usize;
    INTRO_LINES[step.min(INTRO_LINES.len() - 1)]
}

pub fn draw_intro(mut contexts: EguiContexts, view: Res<ViewTransform>, timer: Res<PhaseTimer>) {
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };
    let center = view.center();

    egui::Area::new(egui::Id::new("intro_card"))
        .fixed_pos(egui::pos2(center.x, center.y))
        .pivot(egui::Align2::CENTER_CENTER)
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("Every Second")
                        .size(56.0)
                        .strong()
                        .color(TEXT_PRIMARY),
                );
                ui.add_space(18.0);
                ui.label(
                    egui::RichText::new(intro_line(timer.phase_secs))
                        .size(22.0)
                        .color(ACCENT_CYAN),
                );
                ui.add_space(24.0);
                ui.label(
                    egui::RichText::new("A cinematic journey through global mortality")
                        .size(13.0)
                        .italics()
                        .color(TEXT_MUTED),
                );
                ui.label(
                    egui::RichText::new("Space pauses, R restarts")
                        .size(10.0)
                        .color(TEXT_SECONDARY.gamma_multiply(0.6)),
                );
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_rotate_then_hold() {
        assert_eq!(intro_line(0.0), INTRO_LINES[0]);
        assert_eq!(intro_line(1.3), INTRO_LINES[1]);
        assert_eq!(intro_line(3.7), INTRO_LINES[3]);
        assert_eq!(intro_line(60.0), INTRO_LINES[3]);
        assert_eq!(intro_line(-1.0), INTRO_LINES[0]);
    }
}
