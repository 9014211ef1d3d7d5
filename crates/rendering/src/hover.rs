//! Pointer hit-testing against orbital items.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use simulation::orbital::{ItemHoverChanged, OrbitalLayout};

use crate::egui_input_guard::egui_wants_pointer;
use crate::item_animation::ItemAnimations;
use crate::view::ViewTransform;

/// Stream index of the item under the pointer.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoveredItem(pub Option<usize>);

/// Topmost item whose displayed disc contains `layout_point`.
pub fn hit_test(
    layout: &OrbitalLayout,
    animations: &ItemAnimations,
    layout_point: Vec2,
) -> Option<usize> {
    layout
        .items()
        .iter()
        .rev()
        .find(|item| {
            let radius = item.size_px * 0.5 * animations.display_scale(item.stream_index);
            item.position().distance(layout_point) <= radius
        })
        .map(|item| item.stream_index)
}

/// Runs before `FrameSet::Pointer` so a hover change pauses the item in the
/// same frame.
pub fn detect_item_hover(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut contexts: EguiContexts,
    view: Res<ViewTransform>,
    layout: Res<OrbitalLayout>,
    animations: Res<ItemAnimations>,
    mut hovered: ResMut<HoveredItem>,
    mut events: EventWriter<ItemHoverChanged>,
) {
    let cursor = windows.get_single().ok().and_then(|w| w.cursor_position());
    let current = match cursor {
        Some(pos) if !egui_wants_pointer(&mut contexts) => {
            hit_test(&layout, &animations, view.screen_to_layout(pos))
        }
        _ => None,
    };

    if current == hovered.0 {
        return;
    }
    if let Some(previous) = hovered.0 {
        events.send(ItemHoverChanged {
            stream_index: previous,
            hovered: false,
        });
    }
    if let Some(next) = current {
        events.send(ItemHoverChanged {
            stream_index: next,
            hovered: true,
        });
    }
    hovered.0 = current;
}

#[cfg(test)]
mod tests {
    use super::*;
    use simulation::catalog::RateCatalog;
    use simulation::visual_params::OrbitParams;

    #[test]
    fn test_hit_test_finds_item_under_point() {
        let catalog = RateCatalog::builtin().unwrap();
        let params = OrbitParams::default();
        let mut layout = OrbitalLayout::default();
        layout.insert(&catalog, &params).unwrap();
        let anims = ItemAnimations::default();

        let at = layout.items()[0].position();
        assert_eq!(hit_test(&layout, &anims, at), Some(0));
        assert_eq!(hit_test(&layout, &anims, Vec2::ZERO), None);
    }
}
