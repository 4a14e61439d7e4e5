//! Placement of gallery items on the ring.
//!
//! All items sit on a horizontal circle at height 0 around the viewer and
//! face inward.  The active item is enlarged and its neighbours shrink with
//! circular distance down to a floor, so nothing ever becomes too small to
//! read.

use glam::{Mat4, Quat, Vec3};

use crate::angle::Ring;
use crate::config::GeometryConfig;
use crate::scene::constraint::yaw_facing;

/// Where and how large one item is drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemPlacement {
    pub index: usize,
    pub position: Vec3,
    /// Rotation about the vertical axis; the item's front faces the centre.
    pub yaw: f32,
    pub scale: f32,
    pub is_active: bool,
    pub is_hovered: bool,
}

impl ItemPlacement {
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }

    /// TRS model matrix for the host renderer.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), self.rotation(), self.position)
    }

    /// Unit normal of the item's front face.
    pub fn facing(&self) -> Vec3 {
        self.rotation() * Vec3::Z
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ItemPlacer {
    geometry: GeometryConfig,
}

impl ItemPlacer {
    pub fn new(geometry: GeometryConfig) -> Self {
        Self { geometry }
    }

    pub fn radius(&self) -> f32 {
        self.geometry.radius
    }

    /// Scale for an item `distance` steps from the active one.
    pub fn scale_for(&self, distance: usize, hovered: bool) -> f32 {
        let g = &self.geometry;
        let base = if distance == 0 {
            g.active_scale
        } else {
            (1.0 - g.falloff_per_item * distance as f32).max(g.min_scale)
        };
        if hovered {
            base * (1.0 + g.hover_bonus)
        } else {
            base
        }
    }

    /// Placement of item `index`.  `None` for an empty ring or an index past
    /// the end.
    pub fn place(
        &self,
        ring: &Ring,
        index: usize,
        current_index: usize,
        hovered: bool,
    ) -> Option<ItemPlacement> {
        if index >= ring.item_count() {
            return None;
        }
        let angle = ring.index_to_angle(index);
        let r = self.geometry.radius;
        let distance = ring.circular_distance(index, current_index);
        Some(ItemPlacement {
            index,
            position: Vec3::new(angle.sin() * r, 0.0, angle.cos() * r),
            yaw: yaw_facing(angle),
            scale: self.scale_for(distance, hovered),
            is_active: distance == 0,
            is_hovered: hovered,
        })
    }

    /// Placements for every item, in index order.  Empty for an empty ring.
    pub fn place_all(
        &self,
        ring: &Ring,
        current_index: usize,
        hovered_index: Option<usize>,
    ) -> Vec<ItemPlacement> {
        (0..ring.item_count())
            .filter_map(|i| self.place(ring, i, current_index, hovered_index == Some(i)))
            .collect()
    }
}
