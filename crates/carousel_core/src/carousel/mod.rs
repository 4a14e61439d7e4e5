//! Carousel navigation: state, input adapters, smoothing and placement.
//!
//! A frame of an open carousel runs, in order:
//! 1. [`DragAdapter::frame`] (pointer travel since the last frame),
//! 2. [`CarouselState::advance_clock`] (transition cooldown),
//! 3. [`Interpolator::step`] (smoothed angle and displayed index),
//! 4. [`ItemPlacer::place_all`] for the renderer.
//!
//! Keyboard and slider input is applied from event handlers between frames.

pub mod drag;
pub mod interpolator;
#[cfg(feature = "input")]
pub mod keyboard;
pub mod placer;
pub mod slider;
pub mod state;

pub use drag::DragAdapter;
pub use interpolator::{Interpolator, Smoothing};
#[cfg(feature = "input")]
pub use keyboard::{KeyResponse, KeyboardAdapter};
pub use placer::{ItemPlacement, ItemPlacer};
pub use slider::SliderAdapter;
pub use state::{CarouselState, IndexChange, NudgeConvention, NudgeDirection};
