//! Per-keystroke edit record
//!
//! Built fresh for every event and handed to the target explicitly; nothing
//! survives from one keystroke to the next.

use serde::{Deserialize, Serialize};

use crate::models::{Key, KeyEvent, Modifiers, Point, Rect};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditSession {
    pub key: Key,
    pub modifiers: Modifiers,
    /// Literal text of the keystroke
    pub text: String,
    /// Grip handles of the target
    pub grips: Vec<Rect>,
    /// Index into `grips` of the grip being dragged
    pub cur_grip: Option<usize>,
    /// Offset applied by a drag
    pub delta: Point,
    /// Drag position, seeded from the current grip when there is one
    pub pos: Option<Point>,
    pub h_raster: bool,
    pub v_raster: bool,
}

impl EditSession {
    pub fn from_event(event: &KeyEvent) -> Self {
        Self {
            key: event.key,
            modifiers: event.modifiers,
            text: event.text.clone(),
            grips: Vec::new(),
            cur_grip: None,
            delta: Point::default(),
            pos: None,
            h_raster: false,
            v_raster: false,
        }
    }

    /// Clear drag state, keeping the keystroke
    pub fn init(&mut self) {
        self.grips.clear();
        self.cur_grip = None;
        self.delta = Point::default();
        self.pos = None;
        self.h_raster = false;
        self.v_raster = false;
    }

    /// Center of the current grip, if the index points at a real grip
    pub fn current_grip_center(&self) -> Option<Point> {
        self.cur_grip
            .and_then(|i| self.grips.get(i))
            .map(|grip| grip.center())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_clears_drag_state() {
        let ev = KeyEvent::press(Key::Right, Modifiers::SHIFT, "");
        let mut session = EditSession::from_event(&ev);
        session.grips.push(Rect::new(0.0, 0.0, 2.0, 2.0));
        session.cur_grip = Some(0);
        session.delta = Point::new(1.0, 0.0);
        session.h_raster = true;

        session.init();

        assert!(session.grips.is_empty());
        assert_eq!(session.cur_grip, None);
        assert_eq!(session.delta, Point::default());
        assert!(!session.h_raster);
        assert_eq!(session.key, Key::Right);
        assert_eq!(session.modifiers, Modifiers::SHIFT);
    }

    #[test]
    fn test_out_of_range_grip_has_no_center() {
        let mut session = EditSession::from_event(&KeyEvent::press(Key::Left, Modifiers::empty(), ""));
        session.grips = vec![Rect::new(0.0, 0.0, 2.0, 2.0)];
        session.cur_grip = Some(3);
        assert_eq!(session.current_grip_center(), None);

        session.cur_grip = Some(0);
        assert_eq!(session.current_grip_center(), Some(Point::new(1.0, 1.0)));
    }
}
