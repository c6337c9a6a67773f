use crate::session::DrawingSession;

use super::PointerEvent;

/// Routes a pointer event to the matching session entry point
pub fn route_event(event: PointerEvent, session: &mut DrawingSession) {
    match event {
        PointerEvent::Press(pos) => session.on_press(pos),
        PointerEvent::Move(pos) => session.on_move(pos),
        PointerEvent::Release(pos) => session.on_release(pos),
    }
}
