//! Data for the 2D overlay drawn on top of the carousel.
//!
//! The overlay itself (counter, range input, prev/next and close buttons,
//! per-item title labels) is drawn by the host; this module only computes
//! what it should show.  Buttons feed back as
//! [`CarouselEvent`](crate::events::CarouselEvent)s.

use carousel_core::carousel::{ItemPlacement, SliderAdapter};
use carousel_core::glam::{Vec2, Vec3};
use carousel_core::scene::Camera;
use carousel_core::{GalleryItem, ItemId};

/// Height above an item's centre at which its label is anchored, in item
/// units (multiplied by the item's scale).
const LABEL_OFFSET: f32 = 0.65;

/// `"3 of 12"`, or `"0 of 0"` for an empty gallery.
pub fn counter_text(current_index: usize, item_count: usize) -> String {
    if item_count == 0 {
        "0 of 0".to_string()
    } else {
        format!("{} of {}", current_index + 1, item_count)
    }
}

/// Title label (and play affordance) anchored to one item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemLabel {
    pub item_id: ItemId,
    pub index: usize,
    pub title: String,
    /// World-space anchor point.
    pub anchor: Vec3,
    /// Anchor in viewport pixels; `None` when the item is behind the viewer.
    pub screen: Option<Vec2>,
    pub shows_playback_control: bool,
    pub is_active: bool,
}

/// Everything the host needs to draw the overlay for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub counter: String,
    pub slider_value: f64,
    pub slider_max: f64,
    /// Prev/next buttons and the slider are disabled without items.
    pub navigation_enabled: bool,
    pub is_transitioning: bool,
    pub labels: Vec<ItemLabel>,
}

impl Overlay {
    pub fn build(
        items: &[GalleryItem],
        placements: &[ItemPlacement],
        current_index: usize,
        is_transitioning: bool,
        slider: &SliderAdapter,
        camera: &Camera,
        viewport: (u32, u32),
    ) -> Self {
        let labels = placements
            .iter()
            .filter_map(|p| {
                let item = items.get(p.index)?;
                let anchor = p.position + Vec3::Y * (LABEL_OFFSET * p.scale);
                Some(ItemLabel {
                    item_id: item.id,
                    index: p.index,
                    title: item.title.clone(),
                    anchor,
                    screen: camera.project_to_screen(anchor, viewport),
                    shows_playback_control: item.media_type.requires_playback_control(),
                    is_active: p.is_active,
                })
            })
            .collect();

        Self {
            counter: counter_text(current_index, items.len()),
            slider_value: slider.value_for(current_index, items.len()),
            slider_max: slider.max(),
            navigation_enabled: !items.is_empty(),
            is_transitioning,
            labels,
        }
    }

    /// Label of the item in front of the viewer.
    pub fn active_label(&self) -> Option<&ItemLabel> {
        self.labels.iter().find(|l| l.is_active)
    }
}
