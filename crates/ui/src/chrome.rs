//! Header and footer strips.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::sim_clock::{DriverControl, SimulationClock};

use crate::theme::{LIVE_GREEN, TEXT_FAINT, TEXT_MUTED, TEXT_PRIMARY};

const DATA_SOURCES: [&str; 4] = [
    "World Health Organization (WHO)",
    "Global Burden of Disease Study",
    "Institute for Health Metrics",
    "Our World in Data",
];

const ABOUT: &str = "Real-time visualization of global mortality statistics, \
    based on daily averages from international health organizations.";

const DISCLAIMER: &str = "Numbers are statistical averages spread evenly over time. \
    Actual events occur irregularly and vary by region and season.";

/// "LIVE" while the clock runs, "PAUSED" otherwise.
pub fn status_badge(control: &DriverControl) -> (&'static str, egui::Color32) {
    if control.clock_running {
        ("LIVE", LIVE_GREEN)
    } else {
        ("PAUSED", TEXT_MUTED)
    }
}

pub fn draw_header(
    mut contexts: EguiContexts,
    control: Res<DriverControl>,
    clock: Res<SimulationClock>,
) {
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };
    let (badge, badge_color) = status_badge(&control);

    egui::Area::new(egui::Id::new("header_title"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(20.0, 16.0))
        .order(egui::Order::Middle)
        .interactable(false)
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing.y = 0.0;
            ui.label(
                egui::RichText::new("Daily Deaths")
                    .size(20.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );
            ui.label(
                egui::RichText::new("Global Death Observatory")
                    .size(11.0)
                    .color(TEXT_MUTED),
            );
        });

    egui::Area::new(egui::Id::new("header_status"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-20.0, 20.0))
        .order(egui::Order::Middle)
        .interactable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(clock.formatted())
                        .size(11.0)
                        .monospace()
                        .color(TEXT_MUTED),
                );
                ui.label(
                    egui::RichText::new(format!("● {badge}"))
                        .size(12.0)
                        .strong()
                        .color(badge_color),
                );
            });
        });
}

pub fn draw_footer(mut contexts: EguiContexts) {
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };
    let width = (ctx.screen_rect().width() - 80.0).max(200.0);

    egui::Area::new(egui::Id::new("footer"))
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -12.0))
        .order(egui::Order::Middle)
        .interactable(false)
        .show(ctx, |ui| {
            ui.set_max_width(width);
            ui.spacing_mut().item_spacing.y = 2.0;
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(ABOUT).size(10.0).color(TEXT_MUTED));
                ui.label(
                    egui::RichText::new(format!("Data sources: {}", DATA_SOURCES.join(" · ")))
                        .size(9.0)
                        .color(TEXT_FAINT),
                );
                ui.label(
                    egui::RichText::new(DISCLAIMER)
                        .size(9.0)
                        .italics()
                        .color(TEXT_FAINT),
                );
            });
        });
}
