use egui::{Context, Pos2, Rect};

mod router;
pub use router::route_event;

/// Pointer events in canvas-local pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press(Pos2),
    Move(Pos2),
    Release(Pos2),
}

/// One frame's worth of primary-button pointer state, in screen coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    /// Where the pointer is, if it is over the window
    pub pos: Option<Pos2>,
    /// Primary button went down this frame
    pub pressed: bool,
    /// Primary button went up this frame
    pub released: bool,
}

impl PointerSample {
    /// Reads the primary button state from egui
    pub fn from_context(ctx: &Context) -> Self {
        ctx.input(|input| Self {
            pos: input.pointer.interact_pos(),
            pressed: input.pointer.primary_pressed(),
            released: input.pointer.primary_released(),
        })
    }
}

/// Converts raw pointer samples into press/move/release events for the canvas.
///
/// A gesture only starts on a press inside the canvas rectangle. Once started
/// it follows the pointer anywhere and is always closed by exactly one
/// `Release`, even if the button is let go outside the canvas or the pointer
/// leaves the window.
#[derive(Debug, Default)]
pub struct InputHandler {
    /// Last canvas-local position of the active gesture
    active: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self { active: None }
    }

    pub fn is_tracking(&self) -> bool {
        self.active.is_some()
    }

    /// Process one sample and generate the resulting events, in order
    pub fn process(&mut self, sample: PointerSample, canvas_rect: Rect) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let local = sample.pos.map(|pos| pos - canvas_rect.min.to_vec2());

        if sample.pressed && self.active.is_none() {
            if let Some(pos) = sample.pos.filter(|pos| canvas_rect.contains(*pos)) {
                let local = pos - canvas_rect.min.to_vec2();
                events.push(PointerEvent::Press(local));
                self.active = Some(local);
            }
        }

        if let (Some(last), Some(pos)) = (self.active, local) {
            if pos != last {
                events.push(PointerEvent::Move(pos));
                self.active = Some(pos);
            }
        }

        if sample.released {
            if let Some(last) = self.active.take() {
                events.push(PointerEvent::Release(local.unwrap_or(last)));
            }
        }

        events
    }
}
