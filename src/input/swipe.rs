//! Swipe gestures from mouse drags.
//!
//! A swipe is a left-button press followed by a release. The displacement
//! between the two points is reduced to its dominant axis.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::game::Direction;

/// Direction of the dominant axis of a displacement
///
/// Compares absolute horizontal and vertical deltas and picks the larger;
/// ties go to the horizontal axis. A zero displacement has no direction.
pub fn swipe_direction(dx: i32, dy: i32) -> Option<Direction> {
    if dx == 0 && dy == 0 {
        return None;
    }
    if dx.abs() >= dy.abs() {
        Some(if dx > 0 { Direction::Right } else { Direction::Left })
    } else {
        Some(if dy > 0 { Direction::Down } else { Direction::Up })
    }
}

/// Tracks a press/release pair and reports the swipe it forms
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    /// Terminal columns per grid cell; rows are always one per cell
    cell_width: i32,
    /// Minimum displacement, in cells, to count as a swipe
    threshold: i32,
    origin: Option<(u16, u16)>,
}

impl SwipeTracker {
    pub fn new(cell_width: u32, threshold: u32) -> Self {
        Self {
            cell_width: cell_width.max(1) as i32,
            threshold: threshold as i32,
            origin: None,
        }
    }

    pub fn handle_mouse_event(&mut self, event: &MouseEvent) -> Option<Direction> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.origin = Some((event.column, event.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (col, row) = self.origin.take()?;
                let dx = event.column as i32 - col as i32;
                let dy = event.row as i32 - row as i32;
                self.finish(dx, dy)
            }
            _ => None,
        }
    }

    fn finish(&self, dx: i32, dy: i32) -> Option<Direction> {
        // Compare in cell units; a cell is wider than it is tall.
        let dx_cells = dx / self.cell_width;
        if dx_cells.abs().max(dy.abs()) < self.threshold.max(1) {
            return None;
        }
        swipe_direction(dx_cells, dy)
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(2, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn event(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn swipe(tracker: &mut SwipeTracker, from: (u16, u16), to: (u16, u16)) -> Option<Direction> {
        tracker.handle_mouse_event(&event(MouseEventKind::Down(MouseButton::Left), from.0, from.1));
        tracker.handle_mouse_event(&event(MouseEventKind::Drag(MouseButton::Left), to.0, from.1));
        tracker.handle_mouse_event(&event(MouseEventKind::Up(MouseButton::Left), to.0, to.1))
    }

    #[test]
    fn test_dominant_axis() {
        assert_eq!(swipe_direction(5, 1), Some(Direction::Right));
        assert_eq!(swipe_direction(-5, 4), Some(Direction::Left));
        assert_eq!(swipe_direction(1, 3), Some(Direction::Down));
        assert_eq!(swipe_direction(2, -3), Some(Direction::Up));
        assert_eq!(swipe_direction(3, 3), Some(Direction::Right));
        assert_eq!(swipe_direction(0, 0), None);
    }

    #[test]
    fn test_tracker_scales_columns_to_cells() {
        let mut tracker = SwipeTracker::new(2, 1);
        // Six columns is three cells, less than four rows.
        assert_eq!(swipe(&mut tracker, (10, 10), (16, 14)), Some(Direction::Down));
        // Ten columns is five cells, more than four rows.
        assert_eq!(swipe(&mut tracker, (10, 10), (0, 6)), Some(Direction::Left));
    }

    #[test]
    fn test_short_drag_is_ignored() {
        let mut tracker = SwipeTracker::new(2, 2);
        assert_eq!(swipe(&mut tracker, (10, 10), (12, 11)), None);
        assert_eq!(swipe(&mut tracker, (10, 10), (10, 12)), Some(Direction::Down));
    }

    #[test]
    fn test_release_without_press() {
        let mut tracker = SwipeTracker::default();
        let up = event(MouseEventKind::Up(MouseButton::Left), 30, 30);
        assert_eq!(tracker.handle_mouse_event(&up), None);
    }

    #[test]
    fn test_other_buttons_ignored() {
        let mut tracker = SwipeTracker::new(1, 1);
        tracker.handle_mouse_event(&event(MouseEventKind::Down(MouseButton::Right), 0, 0));
        let up = event(MouseEventKind::Up(MouseButton::Right), 10, 0);
        assert_eq!(tracker.handle_mouse_event(&up), None);
    }
}
