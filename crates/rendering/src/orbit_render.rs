//! Orbital item discs.
//!
//! Each visible item gets a filled disc entity synced from `OrbitalLayout`
//! every frame; borders and glows are drawn with gizmos on top.

use std::collections::HashSet;

use bevy::prelude::*;

use simulation::catalog::RateCatalog;
use simulation::orbital::OrbitalLayout;

use crate::hover::HoveredItem;
use crate::item_animation::ItemAnimations;
use crate::palette::{border_color, glow_color, DISC_FILL};
use crate::view::ViewTransform;

const DISC_Z: f32 = 1.0;
const HOVERED_DISC_Z: f32 = 2.0;

/// Glow extends to this multiple of the disc radius.
const GLOW_RADIUS_FACTOR: f32 = 1.5;

/// Concentric gizmo circles used to fake the soft glow.
const GLOW_LAYERS: usize = 6;

#[derive(Component, Debug, Clone, Copy)]
pub struct ItemDisc {
    pub stream_index: usize,
}

/// Shared unit-diameter mesh and fill material for every disc.
#[derive(Resource)]
pub struct DiscAssets {
    mesh: Handle<Mesh>,
    fill: Handle<ColorMaterial>,
}

pub fn setup_disc_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.insert_resource(DiscAssets {
        mesh: meshes.add(Circle::new(0.5)),
        fill: materials.add(ColorMaterial::from_color(DISC_FILL)),
    });
}

fn disc_transform(
    stream_index: usize,
    layout: &OrbitalLayout,
    view: &ViewTransform,
    animations: &ItemAnimations,
    hovered: Option<usize>,
) -> Option<Transform> {
    let item = layout.item_for_stream(stream_index)?;
    let z = if hovered == Some(stream_index) {
        HOVERED_DISC_Z
    } else {
        DISC_Z
    };
    let diameter = item.size_px * view.scale * animations.display_scale(stream_index);
    Some(
        Transform::from_translation(view.layout_to_world(item.position()).extend(z))
            .with_scale(Vec3::splat(diameter)),
    )
}

/// Spawn discs for newly visible items, move existing ones and despawn
/// discs whose item is gone (after a reset).
pub fn sync_item_discs(
    mut commands: Commands,
    assets: Res<DiscAssets>,
    layout: Res<OrbitalLayout>,
    view: Res<ViewTransform>,
    animations: Res<ItemAnimations>,
    hovered: Res<HoveredItem>,
    mut discs: Query<(Entity, &ItemDisc, &mut Transform)>,
) {
    let mut synced = HashSet::new();
    for (entity, disc, mut transform) in &mut discs {
        match disc_transform(disc.stream_index, &layout, &view, &animations, hovered.0) {
            Some(next) => {
                *transform = next;
                synced.insert(disc.stream_index);
            }
            None => commands.entity(entity).despawn(),
        }
    }

    for item in layout.items() {
        if synced.contains(&item.stream_index) {
            continue;
        }
        let Some(transform) =
            disc_transform(item.stream_index, &layout, &view, &animations, hovered.0)
        else {
            continue;
        };
        commands.spawn((
            ItemDisc {
                stream_index: item.stream_index,
            },
            Mesh2d(assets.mesh.clone()),
            MeshMaterial2d(assets.fill.clone()),
            transform,
        ));
    }
}

/// 1px colored border and soft glow around each disc.
pub fn draw_item_outlines(
    layout: Res<OrbitalLayout>,
    catalog: Res<RateCatalog>,
    view: Res<ViewTransform>,
    animations: Res<ItemAnimations>,
    mut gizmos: Gizmos,
) {
    for item in layout.items() {
        let Some(stream) = catalog.get(item.stream_index) else {
            continue;
        };
        let center = view.layout_to_world(item.position());
        let radius = item.size_px * 0.5 * view.scale * animations.display_scale(item.stream_index);

        let glow = glow_color(stream.color_tag);
        for layer in 1..=GLOW_LAYERS {
            let t = layer as f32 / GLOW_LAYERS as f32;
            let r = radius * (1.0 + (GLOW_RADIUS_FACTOR - 1.0) * t);
            gizmos.circle_2d(center, r, glow.with_alpha(glow.alpha() * (1.0 - t)));
        }
        gizmos.circle_2d(center, radius, border_color(stream.color_tag));
    }
}
