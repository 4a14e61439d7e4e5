// carousel_core: modelo angular del carrusel, entradas y restricción de cámara

pub mod angle;
pub mod carousel;
pub mod config;
pub mod error;
pub mod item;
pub mod scene;
pub mod time;

// keyboard state for the carousel and any free-fly view sharing it
#[cfg(feature = "input")]
pub mod input;

pub use angle::Ring;
pub use config::{CarouselConfig, GeometryConfig, MotionConfig};
pub use error::{CarouselError, Result};
pub use item::{GalleryItem, ItemId, MediaType};
pub use time::{FixedClock, Time, TimeClock};

// re-export common input types so callers don't need to depend on winit
#[cfg(feature = "input")]
pub use input::{KeyCode, MouseButton, PressedKeys};

// glam is part of the public API (positions, matrices)
pub use glam;
