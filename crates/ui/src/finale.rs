use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::view::ViewTransform;
use simulation::rate_counter::StreamCounters;
use simulation::sim_clock::SimulationClock;

use crate::format::with_thousands;
use crate::theme::{ACCENT_PURPLE, COUNTER_RED, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};

const QUOTE: &str =
    "\"The death of one man is a tragedy. The death of millions is a statistic.\" - Joseph Stalin";
const CLOSING: &str = "But every number represents a human story, a family, a future unlived.";

/// Closing card with the final tally.
pub fn draw_finale(
    mut contexts: EguiContexts,
    view: Res<ViewTransform>,
    counters: Res<StreamCounters>,
    clock: Res<SimulationClock>,
) {
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };
    let center = view.center();

    egui::Area::new(egui::Id::new("finale_card"))
        .fixed_pos(egui::pos2(center.x, center.y))
        .pivot(egui::Align2::CENTER_CENTER)
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            ui.set_max_width(560.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(with_thousands(counters.aggregate()))
                        .size(64.0)
                        .strong()
                        .monospace()
                        .color(COUNTER_RED),
                );
                ui.label(
                    egui::RichText::new("Lives lost since you began watching")
                        .size(18.0)
                        .color(TEXT_PRIMARY),
                );
                ui.label(
                    egui::RichText::new(clock.formatted())
                        .size(12.0)
                        .monospace()
                        .color(TEXT_MUTED),
                );
                ui.add_space(28.0);
                ui.label(
                    egui::RichText::new(QUOTE)
                        .size(14.0)
                        .italics()
                        .color(TEXT_SECONDARY),
                );
                ui.add_space(12.0);
                ui.label(egui::RichText::new(CLOSING).size(14.0).color(ACCENT_PURPLE));
            });
        });
}
