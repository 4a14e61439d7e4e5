//! Absolute navigation from a range input.
//!
//! The slider is bound both ways: user input jumps the target straight to
//! the item under the thumb, and the thumb follows the displayed item while
//! other inputs move the carousel.

use super::state::CarouselState;

/// Range input mapped onto item indices, `0..=max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderAdapter {
    max: f64,
}

impl Default for SliderAdapter {
    fn default() -> Self {
        Self { max: 100.0 }
    }
}

impl SliderAdapter {
    /// Slider with a custom upper bound (must be positive; anything else
    /// falls back to 100).
    pub fn with_max(max: f64) -> Self {
        if max.is_finite() && max > 0.0 {
            Self { max }
        } else {
            Self::default()
        }
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamp into `[0, max]`; NaN counts as 0.
    pub fn clamp_value(&self, value: f64) -> f64 {
        if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, self.max)
        }
    }

    /// Item index under the thumb at `value`, or `None` without items.
    pub fn index_for(&self, value: f64, item_count: usize) -> Option<usize> {
        if item_count == 0 {
            return None;
        }
        let v = self.clamp_value(value) / self.max;
        let index = (v * item_count as f64).floor() as usize;
        Some(index.min(item_count - 1))
    }

    /// Thumb position that displays `index`.  Maps back through
    /// [`index_for`](Self::index_for) to the same index.
    pub fn value_for(&self, index: usize, item_count: usize) -> f64 {
        if item_count <= 1 {
            return 0.0;
        }
        let index = index.min(item_count - 1);
        index as f64 * self.max / (item_count - 1) as f64
    }

    /// Apply a slider value.  Returns the new target index.
    pub fn set_value(&self, state: &mut CarouselState, value: f64) -> Option<usize> {
        let index = self.index_for(value, state.item_count())?;
        state.jump_to_index(index);
        log::debug!("slider {value} -> target index {index}");
        Some(index)
    }

    /// Apply raw text from the input element.  Non-numeric text is ignored.
    pub fn set_text(&self, state: &mut CarouselState, text: &str) -> Option<usize> {
        match text.trim().parse::<f64>() {
            Ok(value) => self.set_value(state, value),
            Err(_) => {
                log::warn!("ignoring non-numeric slider value {text:?}");
                None
            }
        }
    }

    /// Current thumb position for the displayed item.
    pub fn value(&self, state: &CarouselState) -> f64 {
        self.value_for(state.current_index(), state.item_count())
    }
}
