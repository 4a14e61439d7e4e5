//! Host-independent input events for an open carousel.
//!
//! Hosts either build [`CarouselEvent`]s directly (HTML overlay buttons, a
//! web range input, scripted replays) or feed raw winit events through an
//! [`EventTranslator`].

use carousel_core::KeyCode;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::PhysicalKey;

#[derive(Debug, Clone, PartialEq)]
pub enum CarouselEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    /// The window or page lost keyboard focus.
    Blur,
    /// Primary button pressed at `x` physical pixels from the viewport's left
    /// edge.
    PointerDown { x: f64 },
    PointerMove { x: f64 },
    PointerUp,
    Resized { width: u32, height: u32 },
    /// Numeric value from the range input.
    Slider(f64),
    /// Raw text from the range input, parsed leniently.
    SliderText(String),
    /// Overlay "previous" button.
    Prev,
    /// Overlay "next" button.
    Next,
    /// Overlay close button.
    Close,
    /// The user clicked or tapped the item at this index.
    Activate(usize),
    /// The pointer entered an item (or left every item).
    Hover(Option<usize>),
}

/// Stateful winit → [`CarouselEvent`] translation.
///
/// winit reports button presses without a position, so the translator keeps
/// the last cursor position to attach to [`CarouselEvent::PointerDown`].
#[derive(Debug, Default, Clone)]
pub struct EventTranslator {
    cursor_x: f64,
}

impl EventTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(&mut self, event: &WindowEvent) -> Option<CarouselEvent> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => key_event(event.physical_key, event.state),
            WindowEvent::Focused(false) => Some(CarouselEvent::Blur),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_x = position.x;
                Some(CarouselEvent::PointerMove { x: position.x })
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => Some(match state {
                ElementState::Pressed => CarouselEvent::PointerDown { x: self.cursor_x },
                ElementState::Released => CarouselEvent::PointerUp,
            }),
            // the release may never arrive once the cursor is gone
            WindowEvent::CursorLeft { .. } => Some(CarouselEvent::PointerUp),
            WindowEvent::Resized(size) => Some(CarouselEvent::Resized {
                width: size.width,
                height: size.height,
            }),
            _ => None,
        }
    }
}

fn key_event(key: PhysicalKey, state: ElementState) -> Option<CarouselEvent> {
    let PhysicalKey::Code(code) = key else {
        return None;
    };
    Some(match state {
        ElementState::Pressed => CarouselEvent::KeyDown(code),
        ElementState::Released => CarouselEvent::KeyUp(code),
    })
}
