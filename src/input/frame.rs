use std::collections::BTreeMap;

use glam::Vec2;

use super::event::{InputEvent, TouchPhase};
use super::sample::PointerSample;

/// Accumulates one frame of [`InputEvent`]s into a [`PointerSample`].
///
/// Touch points persist across frames until they end; wheel scroll is a
/// per-frame quantity and is cleared by [`end_frame`](Self::end_frame).
#[derive(Debug, Clone, Default)]
pub struct InputFrame {
    touch_supported: bool,
    pointer_present: bool,
    wheel_delta: f32,
    /// Active touches keyed by id; ordered so the pair is stable.
    touches: BTreeMap<u64, Vec2>,
}

impl InputFrame {
    /// Create an accumulator. The pointer is considered present once any
    /// cursor or wheel event arrives.
    #[must_use]
    pub fn new(touch_supported: bool) -> Self {
        Self {
            touch_supported,
            ..Self::default()
        }
    }

    /// Mark the pointer as present or absent (e.g. mouse unplugged).
    pub fn set_pointer_present(&mut self, present: bool) {
        self.pointer_present = present;
    }

    /// Fold one event into the current frame.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { .. } => self.pointer_present = true,
            InputEvent::Scroll { delta } => {
                self.pointer_present = true;
                self.wheel_delta += delta;
            }
            InputEvent::Touch { id, phase, x, y } => match phase {
                TouchPhase::Started | TouchPhase::Moved => {
                    let _ = self.touches.insert(id, Vec2::new(x, y));
                }
                TouchPhase::Ended | TouchPhase::Cancelled => {
                    let _ = self.touches.remove(&id);
                }
            },
        }
    }

    /// Number of touches currently down.
    #[must_use]
    pub fn active_touches(&self) -> usize {
        self.touches.len()
    }

    /// Produce this frame's sample and clear per-frame deltas.
    pub fn end_frame(&mut self) -> PointerSample {
        let sample = PointerSample {
            touch_supported: self.touch_supported,
            pointer_present: self.pointer_present,
            wheel_delta: self.wheel_delta,
            touches: self.touches.values().copied().collect(),
        };
        self.wheel_delta = 0.0;
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(id: u64, phase: TouchPhase, x: f32) -> InputEvent {
        InputEvent::Touch { id, phase, x, y: 0.0 }
    }

    #[test]
    fn wheel_accumulates_and_clears() {
        let mut frame = InputFrame::new(false);
        frame.handle_event(InputEvent::Scroll { delta: 1.0 });
        frame.handle_event(InputEvent::Scroll { delta: 0.5 });
        let sample = frame.end_frame();
        assert_eq!(sample.wheel_delta, 1.5);
        assert!(sample.pointer_present);

        assert_eq!(frame.end_frame().wheel_delta, 0.0);
    }

    #[test]
    fn touches_persist_until_ended() {
        let mut frame = InputFrame::new(true);
        frame.handle_event(touch(7, TouchPhase::Started, 10.0));
        frame.handle_event(touch(3, TouchPhase::Started, 20.0));
        let sample = frame.end_frame();
        // Ordered by id, not arrival
        assert_eq!(
            sample.touch_pair(),
            Some([Vec2::new(20.0, 0.0), Vec2::new(10.0, 0.0)])
        );

        frame.handle_event(touch(7, TouchPhase::Moved, 40.0));
        let sample = frame.end_frame();
        assert_eq!(sample.touches[1], Vec2::new(40.0, 0.0));

        frame.handle_event(touch(3, TouchPhase::Cancelled, 0.0));
        frame.handle_event(touch(7, TouchPhase::Ended, 0.0));
        assert_eq!(frame.active_touches(), 0);
        assert!(frame.end_frame().touches.is_empty());
    }

    #[test]
    fn pointer_absent_until_seen() {
        let mut frame = InputFrame::new(true);
        assert!(!frame.end_frame().pointer_present);
        frame.handle_event(InputEvent::CursorMoved { x: 1.0, y: 2.0 });
        assert!(frame.end_frame().pointer_present);
        frame.set_pointer_present(false);
        assert!(!frame.end_frame().pointer_present);
    }
}
