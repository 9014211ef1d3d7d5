use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::view::ViewTransform;
use simulation::catalog::RateCatalog;
use simulation::rate_counter::StreamCounters;

use crate::format::with_thousands;
use crate::theme::{COUNTER_RED, TEXT_MUTED, TEXT_SECONDARY};

/// Aggregate tally at the orbit center.
pub fn draw_central_counter(
    mut contexts: EguiContexts,
    view: Res<ViewTransform>,
    counters: Res<StreamCounters>,
    catalog: Res<RateCatalog>,
) {
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };
    let center = view.center();
    let scale = view.scale.max(0.5);

    egui::Area::new(egui::Id::new("central_counter"))
        .fixed_pos(egui::pos2(center.x, center.y))
        .pivot(egui::Align2::CENTER_CENTER)
        .order(egui::Order::Middle)
        .interactable(false)
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing.y = 2.0;
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("LIVES LOST SINCE")
                        .size(12.0 * scale)
                        .color(TEXT_MUTED),
                );
                ui.label(
                    egui::RichText::new("You Began Watching")
                        .size(14.0 * scale)
                        .color(TEXT_SECONDARY),
                );
                ui.label(
                    egui::RichText::new(with_thousands(counters.aggregate()))
                        .size(44.0 * scale)
                        .strong()
                        .monospace()
                        .color(COUNTER_RED),
                );
                ui.label(
                    egui::RichText::new(format!(
                        "~{:.2} per second",
                        catalog.aggregate_rate_per_second()
                    ))
                    .size(11.0 * scale)
                    .color(TEXT_MUTED),
                );
            });
        });
}
