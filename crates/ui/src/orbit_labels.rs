//! Text inside each orbital disc and the hover detail card.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::hover::HoveredItem;
use rendering::item_animation::ItemAnimations;
use rendering::palette::border_color;
use rendering::view::ViewTransform;
use simulation::catalog::{EventStream, RateCatalog};
use simulation::orbital::OrbitalLayout;
use simulation::rate_counter::StreamCounters;
use simulation::text_fit::{FitResult, GlyphAdvanceEstimate, TextFitter};
use simulation::visual_params::VisualParams;

use crate::format::{daily_total, rate_badge, with_thousands};
use crate::label_fit::LabelFitCache;
use crate::text_measure::EguiTextMeasure;
use crate::theme::{TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};

/// Share of the disc diameter available to the fitted label.
const LABEL_WIDTH_RATIO: f32 = 0.72;
const LABEL_HEIGHT_RATIO: f32 = 0.26;
const LABEL_BASE_RATIO: f32 = 0.13;
const ICON_RATIO: f32 = 0.2;
const COUNT_RATIO: f32 = 0.15;
const RATE_RATIO: f32 = 0.085;
const TOOLTIP_GAP_PX: f32 = 14.0;
const TOOLTIP_WIDTH_PX: f32 = 260.0;

fn rgb32(color: Color) -> egui::Color32 {
    let c = color.to_srgba();
    egui::Color32::from_rgb(
        (c.red * 255.0).round() as u8,
        (c.green * 255.0).round() as u8,
        (c.blue * 255.0).round() as u8,
    )
}

#[allow(clippy::too_many_arguments)]
pub fn draw_orbit_labels(
    mut contexts: EguiContexts,
    view: Res<ViewTransform>,
    layout: Res<OrbitalLayout>,
    catalog: Res<RateCatalog>,
    counters: Res<StreamCounters>,
    animations: Res<ItemAnimations>,
    params: Res<VisualParams>,
    mut cache: ResMut<LabelFitCache>,
    mut warned_estimate: Local<bool>,
) {
    if layout.is_empty() {
        return;
    }
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };
    // Font metrics appear after egui's first pass; estimated fits are not cached.
    let metrics_ready = ctx.cumulative_pass_nr() > 0;
    if !metrics_ready && !*warned_estimate {
        warn!("Font metrics unavailable, fitting labels with estimated glyph widths");
        *warned_estimate = true;
    }
    let fitter = TextFitter::new(params.fit.clone(), EguiTextMeasure::new(ctx));
    let estimate = TextFitter::new(params.fit.clone(), GlyphAdvanceEstimate::default());
    let mut fit_label = |text: &str, width: f32, height: f32, base: f32| -> FitResult {
        if metrics_ready {
            cache.fit(&fitter, text, width, height, base)
        } else {
            estimate.fit(text, width, height, base)
        }
    };

    for item in layout.items() {
        let Some(stream) = catalog.get(item.stream_index) else {
            continue;
        };
        let diameter = item.size_px * view.scale * animations.display_scale(item.stream_index);
        if diameter < 8.0 {
            continue;
        }
        let center = view.layout_to_screen(item.position());
        let fitted = fit_label(
            &stream.label,
            diameter * LABEL_WIDTH_RATIO,
            diameter * LABEL_HEIGHT_RATIO,
            diameter * LABEL_BASE_RATIO,
        );
        let count = counters.count(item.stream_index);

        egui::Area::new(egui::Id::new(("orbit_label", item.stream_index)))
            .fixed_pos(egui::pos2(center.x, center.y))
            .pivot(egui::Align2::CENTER_CENTER)
            .order(egui::Order::Middle)
            .interactable(false)
            .show(ctx, |ui| {
                ui.set_max_width(diameter * LABEL_WIDTH_RATIO);
                ui.spacing_mut().item_spacing.y = 0.0;
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(&stream.icon).size(diameter * ICON_RATIO));
                    for line in &fitted.lines {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(line)
                                    .size(fitted.font_size_px)
                                    .color(TEXT_SECONDARY),
                            )
                            .extend(),
                        );
                    }
                    ui.label(
                        egui::RichText::new(with_thousands(count))
                            .size(diameter * COUNT_RATIO)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.label(
                        egui::RichText::new(rate_badge(stream.rate_per_second))
                            .size(diameter * RATE_RATIO)
                            .monospace()
                            .color(TEXT_MUTED),
                    );
                });
            });
    }
}

/// Detail card under the hovered item.
pub fn draw_hover_tooltip(
    mut contexts: EguiContexts,
    hovered: Res<HoveredItem>,
    view: Res<ViewTransform>,
    layout: Res<OrbitalLayout>,
    catalog: Res<RateCatalog>,
    counters: Res<StreamCounters>,
    animations: Res<ItemAnimations>,
) {
    let Some(index) = hovered.0 else {
        return;
    };
    let (Some(item), Some(stream)) = (layout.item_for_stream(index), catalog.get(index)) else {
        return;
    };
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };

    let center = view.layout_to_screen(item.position());
    let radius = item.size_px * 0.5 * view.scale * animations.display_scale(index);
    let accent = rgb32(border_color(stream.color_tag));

    egui::Area::new(egui::Id::new("orbit_tooltip"))
        .fixed_pos(egui::pos2(center.x, center.y + radius + TOOLTIP_GAP_PX))
        .pivot(egui::Align2::CENTER_TOP)
        .order(egui::Order::Tooltip)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .stroke(egui::Stroke::new(1.0, accent))
                .show(ui, |ui| {
                    ui.set_max_width(TOOLTIP_WIDTH_PX);
                    tooltip_body(ui, stream, counters.count(index));
                });
        });
}

fn tooltip_body(ui: &mut egui::Ui, stream: &EventStream, count: u64) {
    ui.label(
        egui::RichText::new(format!("{} {}", stream.icon, stream.label))
            .size(15.0)
            .strong()
            .color(TEXT_PRIMARY),
    );
    ui.label(
        egui::RichText::new(format!("{} deaths since you started", with_thousands(count)))
            .size(12.0)
            .color(TEXT_SECONDARY),
    );
    if !stream.description.is_empty() {
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new(&stream.description)
                .size(11.0)
                .color(TEXT_MUTED),
        );
    }
    ui.separator();
    ui.label(
        egui::RichText::new(format!(
            "Rate: ~{:.3} deaths per second",
            stream.rate_per_second
        ))
        .size(11.0)
        .color(TEXT_SECONDARY),
    );
    ui.label(
        egui::RichText::new(format!(
            "Daily average: {} deaths",
            daily_total(stream.daily_rate)
        ))
        .size(11.0)
        .color(TEXT_SECONDARY),
    );
}
