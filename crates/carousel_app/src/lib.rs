//! Host wiring for the gallery carousel: the per-frame driver, the mounted
//! session and the winit window runner.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use carousel_app::{AppConfig, CarouselBuilder, GalleryItem};
//! use carousel_core::scene::Camera;
//!
//! fn main() -> anyhow::Result<()> {
//!     carousel_app::logging::init(log::LevelFilter::Info).ok();
//!
//!     let items = vec![
//!         GalleryItem::new(1, "Beach", "beach.jpg"),
//!         GalleryItem::new(2, "First steps", "steps.mp4"),
//!     ];
//!     let mut camera = Camera::default();
//!     let session = CarouselBuilder::new(items)
//!         .on_close(|| log::info!("closed"))
//!         .mount(&mut camera)?;
//!
//!     let session = carousel_app::run_windowed(AppConfig::default(), session)?;
//!     session.unmount();
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod events;
pub mod logging;
pub mod overlay;
mod runner;
pub mod session;
pub mod traits;

pub use builder::{AppConfig, CarouselBuilder};
pub use context::FrameContext;
pub use events::{CarouselEvent, EventTranslator};
pub use overlay::{ItemLabel, Overlay};
pub use runner::{run_windowed, Driver, FrameRequest};
pub use session::CarouselSession;
pub use traits::FrameHook;

// ── Re-export the most-used carousel_core types ────────────────────────────
pub use carousel_core::{
    CarouselConfig,
    FixedClock,
    GalleryItem,
    ItemId,
    KeyCode,
    MediaType,
    Time,
    TimeClock,
};

pub use carousel_core::glam::{Mat4, Quat, Vec2, Vec3};
