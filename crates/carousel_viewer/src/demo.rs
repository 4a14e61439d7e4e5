//! Demo gallery and the scripted input used by the headless run.

use carousel_app::{CarouselEvent, CarouselSession, FixedClock, GalleryItem, KeyCode, Vec3};

pub fn gallery() -> Vec<GalleryItem> {
    [
        ("Wedding day", "photos/wedding.jpg"),
        ("First steps", "videos/first_steps.mp4"),
        ("Graduation", "photos/graduation.png"),
        ("Harbour at dusk", "photos/harbour.jpg"),
        ("Birthday candles", "videos/birthday.webm"),
        ("Mountain hut", "photos/hut.jpeg"),
        ("Grandma's garden", "photos/garden.jpg"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, path))| GalleryItem::new(i as u64 + 1, title, path))
    .collect()
}

/// One step of a scripted replay: an optional event, then `frames` frames.
pub struct Step {
    pub event: Option<CarouselEvent>,
    pub frames: u32,
}

fn step(event: CarouselEvent, frames: u32) -> Step {
    Step { event: Some(event), frames }
}

/// Keyboard nudges, a drag, a fly key, a slider jump, then Escape.
pub fn script(viewport_width: u32) -> Vec<Step> {
    let w = viewport_width as f64;
    vec![
        Step { event: None, frames: 10 },
        step(CarouselEvent::KeyDown(KeyCode::ArrowRight), 1),
        step(CarouselEvent::KeyUp(KeyCode::ArrowRight), 45),
        step(CarouselEvent::KeyDown(KeyCode::ArrowLeft), 1),
        // pressed again inside the cooldown, swallowed
        step(CarouselEvent::KeyUp(KeyCode::ArrowLeft), 1),
        step(CarouselEvent::KeyDown(KeyCode::ArrowLeft), 1),
        step(CarouselEvent::KeyUp(KeyCode::ArrowLeft), 60),
        step(CarouselEvent::PointerDown { x: w * 0.5 }, 1),
        step(CarouselEvent::PointerMove { x: w * 0.4 }, 1),
        step(CarouselEvent::PointerMove { x: w * 0.3 }, 1),
        step(CarouselEvent::PointerUp, 60),
        step(CarouselEvent::Hover(Some(2)), 5),
        // fly keys are held but never move the ring
        step(CarouselEvent::KeyDown(KeyCode::KeyW), 3),
        step(CarouselEvent::KeyUp(KeyCode::KeyW), 1),
        step(CarouselEvent::Slider(100.0), 90),
        step(CarouselEvent::Activate(6), 1),
        step(CarouselEvent::KeyDown(KeyCode::Escape), 1),
    ]
}

/// Play `steps` against `session`, logging the counter whenever the active
/// item changes.  Stops early once the session asks to close.  Returns the
/// number of steps that left free-fly input held.
pub fn replay(session: &mut CarouselSession<'_>, clock: &mut FixedClock, steps: &[Step]) -> usize {
    let mut fly_steps = 0;
    for step in steps {
        if let Some(event) = &step.event {
            log::debug!("replay: {event:?}");
            session.handle_event(event);
        }
        let fly = session.fly_direction();
        if fly != Vec3::ZERO {
            log::info!("free-fly input held: {fly}");
            fly_steps += 1;
        }
        if session.is_close_requested() {
            break;
        }
        for _ in 0..step.frames {
            if session.frame(&clock.tick()).is_some() {
                log::info!("{}", session.overlay().counter);
            }
        }
    }
    fly_steps
}
