//! Snake body - the ordered list of occupied cells
//!
//! Segments are stored tail first: index 0 is the tail, the last index is the head.
//! Moving pops the tail and pushes a new head, so a `VecDeque` keeps both ends O(1).

use std::collections::VecDeque;

use crate::types::{Cell, Direction};

/// Ordered segments of a snake, never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeBody {
    segments: VecDeque<Cell>,
}

impl SnakeBody {
    /// A one-segment body at `start`
    pub fn new(start: Cell) -> Self {
        let mut segments = VecDeque::with_capacity(16);
        segments.push_back(start);
        Self { segments }
    }

    /// Build a body from explicit segments (tail first)
    ///
    /// Returns `None` for an empty list.
    pub fn from_segments(cells: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let segments: VecDeque<Cell> = cells.into_iter().collect();
        if segments.is_empty() {
            return None;
        }
        Some(Self { segments })
    }

    pub fn head(&self) -> Cell {
        self.segments[self.segments.len() - 1]
    }

    pub fn tail(&self) -> Cell {
        self.segments[0]
    }

    pub fn count(&self) -> usize {
        self.segments.len()
    }

    /// Segment at `index`, counted from the tail
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.segments.get(index).copied()
    }

    /// Segments from tail to head
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.segments.iter().copied()
    }

    /// Add a segment on top of the head.
    ///
    /// Nothing moves; the new segment separates from the head on the next move.
    pub fn grow(&mut self) {
        let head = self.head();
        self.segments.push_back(head);
    }

    pub fn move_right(&mut self) {
        self.move_towards(Direction::Right);
    }

    pub fn move_left(&mut self) {
        self.move_towards(Direction::Left);
    }

    pub fn move_up(&mut self) {
        self.move_towards(Direction::Up);
    }

    pub fn move_down(&mut self) {
        self.move_towards(Direction::Down);
    }

    /// Shift the whole body one cell: drop the tail, push a new head.
    pub fn move_towards(&mut self, direction: Direction) {
        let next = self.head().step(direction);
        self.segments.pop_front();
        self.segments.push_back(next);
    }

    /// Whether the head shares its cell with any other segment
    pub fn touched_himself(&self) -> bool {
        let last = self.segments.len() - 1;
        let head = self.segments[last];
        self.segments.range(..last).any(|&part| part == head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(cells: &[(i32, i32)]) -> SnakeBody {
        SnakeBody::from_segments(cells.iter().map(|&c| Cell::from(c))).unwrap()
    }

    #[test]
    fn test_new_body_has_one_segment() {
        let b = SnakeBody::new(Cell::new(2, 3));
        assert_eq!(b.count(), 1);
        assert_eq!(b.head(), Cell::new(2, 3));
        assert_eq!(b.tail(), Cell::new(2, 3));
    }

    #[test]
    fn test_from_segments_rejects_empty() {
        assert!(SnakeBody::from_segments(Vec::new()).is_none());
    }

    #[test]
    fn test_head_is_last_segment() {
        let b = body(&[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(b.head(), Cell::new(2, 0));
        assert_eq!(b.get(0), Some(Cell::new(0, 0)));
        assert_eq!(b.get(3), None);
    }

    #[test]
    fn test_grow_stacks_on_head() {
        let mut b = body(&[(0, 0), (1, 0)]);
        b.grow();
        assert_eq!(b.count(), 3);
        assert_eq!(b.get(0), Some(Cell::new(0, 0)));
        assert_eq!(b.get(1), Some(Cell::new(1, 0)));
        assert_eq!(b.get(2), Some(Cell::new(1, 0)));
    }

    #[test]
    fn test_grow_n_times() {
        let mut b = body(&[(4, 4), (5, 4)]);
        let before: Vec<Cell> = b.iter().collect();
        for n in 1..=5 {
            b.grow();
            assert_eq!(b.count(), 2 + n);
        }
        let after: Vec<Cell> = b.iter().collect();
        assert_eq!(&after[..2], &before[..]);
        assert!(after[2..].iter().all(|&c| c == Cell::new(5, 4)));
    }

    #[test]
    fn test_moves_shift_whole_body() {
        let mut b = body(&[(0, 0), (1, 0), (2, 0)]);
        b.move_right();
        assert_eq!(b.iter().collect::<Vec<_>>(), vec![
            Cell::new(1, 0),
            Cell::new(2, 0),
            Cell::new(3, 0)
        ]);
        b.move_down();
        assert_eq!(b.head(), Cell::new(3, 1));
        assert_eq!(b.tail(), Cell::new(2, 0));
        b.move_left();
        assert_eq!(b.head(), Cell::new(2, 1));
        b.move_up();
        assert_eq!(b.head(), Cell::new(2, 0));
        assert_eq!(b.count(), 3);
    }

    #[test]
    fn test_move_changes_one_axis_by_one() {
        for d in Direction::ALL {
            let mut b = body(&[(5, 5), (5, 6)]);
            let before = b.head();
            b.move_towards(d);
            let after = b.head();
            let (dx, dy) = d.delta();
            assert_eq!((after.x - before.x, after.y - before.y), (dx, dy));
            assert_eq!(b.count(), 2);
        }
    }

    #[test]
    fn test_grow_then_move_separates_segment() {
        let mut b = SnakeBody::new(Cell::new(1, 0));
        b.grow();
        b.move_right();
        assert_eq!(b.iter().collect::<Vec<_>>(), vec![Cell::new(1, 0), Cell::new(2, 0)]);
        assert!(!b.touched_himself());
    }

    #[test]
    fn test_touched_himself_detects_overlap() {
        // Head (1,1) revisits the cell of segment 1.
        let b = body(&[(0, 1), (1, 1), (2, 1), (2, 2), (1, 2), (1, 1)]);
        assert!(b.touched_himself());
    }

    #[test]
    fn test_straight_body_does_not_touch() {
        let b = body(&[(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert!(!b.touched_himself());
    }

    #[test]
    fn test_single_segment_never_touches() {
        assert!(!SnakeBody::new(Cell::new(0, 0)).touched_himself());
    }

    #[test]
    fn test_collapsed_growth_counts_as_touch_until_moved() {
        let mut b = body(&[(0, 0), (1, 0)]);
        b.grow();
        assert!(b.touched_himself());
        b.move_right();
        assert!(!b.touched_himself());
    }
}
