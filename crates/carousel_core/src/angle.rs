//! Index ↔ angle conversion for a ring of evenly spaced items.
//!
//! Every piece of index arithmetic in the carousel goes through [`Ring`], so
//! an index produced here is always inside `[0, item_count)` (or `0` for an
//! empty ring).  No state beyond the item count is kept.
//!
//! # Example
//! ```rust
//! use carousel_core::angle::Ring;
//!
//! let ring = Ring::new(5);
//! let last = ring.index_to_angle(4);
//! assert_eq!(ring.angle_to_index(last + ring.angle_step()), 0);
//! ```

use std::f32::consts::TAU;

/// Angular layout of `item_count` items spread evenly around a full turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    item_count: usize,
    angle_step: f32,
}

impl Ring {
    /// Build a ring for `item_count` items.
    ///
    /// An empty ring still gets a finite step of `2π` so nothing downstream
    /// divides by zero; callers check [`Ring::is_empty`] before placing items.
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            angle_step: TAU / item_count.max(1) as f32,
        }
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Angular spacing between two neighbouring items, in radians.
    #[inline]
    pub fn angle_step(&self) -> f32 {
        self.angle_step
    }

    /// Angle at which item `index` sits.
    #[inline]
    pub fn index_to_angle(&self, index: usize) -> f32 {
        index as f32 * self.angle_step
    }

    /// Nearest item index for an arbitrary (possibly negative, possibly
    /// multi-turn) angle.  Returns `0` for an empty ring.
    pub fn angle_to_index(&self, angle: f32) -> usize {
        if self.is_empty() {
            return 0;
        }
        let steps = (normalize_angle(angle) / self.angle_step).round();
        // `normalize_angle` can return values a hair below 2π, which round up
        // to `item_count`; the modulo folds that back onto item 0.
        (steps as usize) % self.item_count
    }

    /// Shorter of the two arc distances between `a` and `b`, in items.
    pub fn circular_distance(&self, a: usize, b: usize) -> usize {
        if self.is_empty() {
            return 0;
        }
        let a = a % self.item_count;
        let b = b % self.item_count;
        let d = a.abs_diff(b);
        d.min(self.item_count - d)
    }

    /// The angle congruent to `angle` (mod 2π) that lies closest to
    /// `reference`.
    ///
    /// Absolute jumps use this so the smoothed angle takes the short way
    /// round instead of unwinding every turn accumulated by earlier drags.
    pub fn nearest_equivalent(&self, angle: f32, reference: f32) -> f32 {
        let diff = normalize_angle(angle - reference);
        if diff > std::f32::consts::PI {
            reference + diff - TAU
        } else {
            reference + diff
        }
    }
}

/// Map any angle into `[0, 2π)` using floored modulo.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid may return exactly TAU for tiny negative inputs
    if a >= TAU {
        0.0
    } else {
        a
    }
}
