//! Board cursor: which card the player is pointing at.

use crate::types::{BoardSize, Direction};

/// Row/column selection on a board grid. Movement wraps around the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    row: usize,
    col: usize,
    width: usize,
    height: usize,
}

impl Cursor {
    pub fn new(size: BoardSize) -> Self {
        Self {
            row: 0,
            col: 0,
            width: size.width(),
            height: size.height(),
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major card position under the cursor.
    pub fn position(&self) -> usize {
        self.row * self.width + self.col
    }

    pub fn apply(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.col = (self.col + self.width - 1) % self.width,
            Direction::Right => self.col = (self.col + 1) % self.width,
            Direction::Up => self.row = (self.row + self.height - 1) % self.height,
            Direction::Down => self.row = (self.row + 1) % self.height,
        }
    }

    /// Adopt a new board, keeping the cursor inside it.
    pub fn resize(&mut self, size: BoardSize) {
        self.width = size.width();
        self.height = size.height();
        self.row = self.row.min(self.height - 1);
        self.col = self.col.min(self.width - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_top_left() {
        let cursor = Cursor::new(BoardSize::Medium);
        assert_eq!((cursor.row(), cursor.col()), (0, 0));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_moves_row_major() {
        let mut cursor = Cursor::new(BoardSize::Medium);
        cursor.apply(Direction::Right);
        cursor.apply(Direction::Down);
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_wraps_at_edges() {
        let mut cursor = Cursor::new(BoardSize::Small);
        cursor.apply(Direction::Left);
        assert_eq!(cursor.col(), 1);
        cursor.apply(Direction::Up);
        assert_eq!(cursor.row(), 3);
        assert_eq!(cursor.position(), 7);
        cursor.apply(Direction::Down);
        cursor.apply(Direction::Right);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_resize_clamps() {
        let mut cursor = Cursor::new(BoardSize::Large);
        for _ in 0..3 {
            cursor.apply(Direction::Right);
        }
        for _ in 0..5 {
            cursor.apply(Direction::Down);
        }
        assert_eq!(cursor.position(), 23);

        cursor.resize(BoardSize::Small);
        assert_eq!((cursor.row(), cursor.col()), (3, 1));
        assert_eq!(cursor.position(), 7);
    }
}
