//! Position providers the camera can track.
//!
//! The controller only ever holds a [`Weak`](std::rc::Weak) handle to its
//! target. Dropping the last strong handle on the host side makes the target
//! read as absent on the next frame.

use std::cell::Cell;

use glam::{Vec2, Vec3};

/// Anything that can report a 2D world position for the camera to follow.
pub trait FollowTarget {
    /// Current world-space position on the camera plane.
    fn follow_position(&self) -> Vec2;
}

/// A host-owned point the host moves between frames.
///
/// Uses interior mutability so the host can keep updating it while the
/// controller holds a weak handle.
#[derive(Debug, Default)]
pub struct TrackedPoint {
    position: Cell<Vec2>,
}

impl TrackedPoint {
    /// Create a point at `position`.
    #[must_use]
    pub fn new(position: Vec2) -> Self {
        Self {
            position: Cell::new(position),
        }
    }

    /// Move the point.
    pub fn set(&self, position: Vec2) {
        self.position.set(position);
    }

    /// Read the point.
    #[must_use]
    pub fn get(&self) -> Vec2 {
        self.position.get()
    }
}

impl FollowTarget for TrackedPoint {
    fn follow_position(&self) -> Vec2 {
        self.get()
    }
}

impl FollowTarget for Cell<Vec2> {
    fn follow_position(&self) -> Vec2 {
        self.get()
    }
}

impl FollowTarget for Cell<Vec3> {
    fn follow_position(&self) -> Vec2 {
        self.get().truncate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracked_point_reports_latest_position() {
        let point = TrackedPoint::new(Vec2::new(1.0, 2.0));
        point.set(Vec2::new(-3.0, 4.5));
        assert_eq!(point.follow_position(), Vec2::new(-3.0, 4.5));
    }

    #[test]
    fn vec3_cell_drops_depth() {
        let cell = Cell::new(Vec3::new(1.0, 2.0, 99.0));
        assert_eq!(cell.follow_position(), Vec2::new(1.0, 2.0));
    }
}
