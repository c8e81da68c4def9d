//! Board occupancy and capture rules.

use crate::{Color, Point};

/// Why the board refused a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("move at {0} is outside the board")]
    OutOfBounds(Point),
    #[error("point {0} is already occupied")]
    Occupied(Point),
    #[error("suicide at {0} is not allowed")]
    Suicide(Point),
}

/// A rectangular grid of points, each empty or holding a stone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    cells: Vec<Option<Color>>,
}

impl Board {
    /// An empty board.
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    fn index(&self, point: Point) -> usize {
        point.y as usize * self.width as usize + point.x as usize
    }

    /// Stone at `point`; `None` when empty or off the board.
    pub fn get(&self, point: Point) -> Option<Color> {
        if self.contains(point) {
            self.cells[self.index(point)]
        } else {
            None
        }
    }

    /// Set a point unconditionally. Returns `false` for points off the board.
    pub fn set(&mut self, point: Point, state: Option<Color>) -> bool {
        if !self.contains(point) {
            return false;
        }
        let index = self.index(point);
        self.cells[index] = state;
        true
    }

    /// Number of stones of `color` on the board.
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|c| **c == Some(color)).count()
    }

    /// Orthogonal neighbours of `point` that lie on the board.
    pub fn neighbors(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        let Point { x, y } = point;
        [
            x.checked_sub(1).map(|x| Point::new(x, y)),
            x.checked_add(1).map(|x| Point::new(x, y)),
            y.checked_sub(1).map(|y| Point::new(x, y)),
            y.checked_add(1).map(|y| Point::new(x, y)),
        ]
        .into_iter()
        .flatten()
        .filter(|p| self.contains(*p))
    }

    /// The chain of same-colored stones containing `point` and its number of
    /// liberties. An empty point has no chain.
    pub fn group(&self, point: Point) -> Option<(Vec<Point>, usize)> {
        let color = self.get(point)?;
        let mut seen = vec![false; self.cells.len()];
        let mut stones = Vec::new();
        let mut liberties = 0;
        let mut pending = vec![point];
        seen[self.index(point)] = true;

        while let Some(current) = pending.pop() {
            stones.push(current);
            for next in self.neighbors(current) {
                let index = self.index(next);
                if seen[index] {
                    continue;
                }
                match self.cells[index] {
                    None => {
                        seen[index] = true;
                        liberties += 1;
                    }
                    Some(c) if c == color => {
                        seen[index] = true;
                        pending.push(next);
                    }
                    Some(_) => {}
                }
            }
        }
        Some((stones, liberties))
    }

    /// Check a move of `color` at `point` without changing the board.
    ///
    /// Returns the opponent stones the move would capture. Ko is not checked.
    pub fn evaluate_move(&self, point: Point, color: Color) -> Result<Vec<Point>, MoveError> {
        if !self.contains(point) {
            return Err(MoveError::OutOfBounds(point));
        }
        if self.get(point).is_some() {
            return Err(MoveError::Occupied(point));
        }

        let mut trial = self.clone();
        trial.set(point, Some(color));

        let mut captures: Vec<Point> = Vec::new();
        for neighbor in trial.neighbors(point) {
            if trial.get(neighbor) != Some(color.opponent()) || captures.contains(&neighbor) {
                continue;
            }
            if let Some((stones, 0)) = trial.group(neighbor) {
                captures.extend(stones);
            }
        }

        if captures.is_empty() && matches!(trial.group(point), Some((_, 0))) {
            return Err(MoveError::Suicide(point));
        }

        captures.sort();
        Ok(captures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(text: &str) -> Point {
        Point::from_sgf(text).unwrap()
    }

    fn board_with(black: &[&str], white: &[&str]) -> Board {
        let mut board = Board::new(9, 9);
        for s in black {
            board.set(p(s), Some(Color::Black));
        }
        for s in white {
            board.set(p(s), Some(Color::White));
        }
        board
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new(9, 9);
        assert!(board.set(p("ee"), Some(Color::Black)));
        assert_eq!(board.get(p("ee")), Some(Color::Black));
        assert!(!board.set(p("jj"), Some(Color::White)));
        assert_eq!(board.get(p("jj")), None);
        assert_eq!(board.count(Color::Black), 1);
    }

    #[test]
    fn test_non_square_board() {
        let board = Board::new(13, 5);
        assert!(board.contains(p("ma")));
        assert!(!board.contains(p("af")));
    }

    #[test]
    fn test_corner_neighbors() {
        let board = Board::new(9, 9);
        assert_eq!(board.neighbors(p("aa")).count(), 2);
        assert_eq!(board.neighbors(p("ea")).count(), 3);
        assert_eq!(board.neighbors(p("ee")).count(), 4);
    }

    #[test]
    fn test_group_liberties() {
        let board = board_with(&["ee", "ef"], &["fe"]);
        let (stones, liberties) = board.group(p("ee")).unwrap();
        assert_eq!(stones.len(), 2);
        assert_eq!(liberties, 5);
        assert!(board.group(p("aa")).is_none());
    }

    #[test]
    fn test_simple_move() {
        let board = Board::new(9, 9);
        assert_eq!(board.evaluate_move(p("ee"), Color::Black), Ok(vec![]));
        // The board itself is untouched.
        assert_eq!(board.get(p("ee")), None);
    }

    #[test]
    fn test_capture_in_corner() {
        let board = board_with(&["ba"], &["aa"]);
        assert_eq!(board.evaluate_move(p("ab"), Color::Black), Ok(vec![p("aa")]));
    }

    #[test]
    fn test_capture_group() {
        let board = board_with(&["ca", "cb", "ac"], &["aa", "ba", "ab", "bb"]);
        let captures = board.evaluate_move(p("bc"), Color::Black).unwrap();
        assert_eq!(captures, vec![p("aa"), p("ab"), p("ba"), p("bb")]);
    }

    #[test]
    fn test_occupied() {
        let board = board_with(&["ee"], &[]);
        assert_eq!(
            board.evaluate_move(p("ee"), Color::White),
            Err(MoveError::Occupied(p("ee")))
        );
    }

    #[test]
    fn test_out_of_bounds() {
        let board = Board::new(9, 9);
        assert_eq!(
            board.evaluate_move(p("jj"), Color::White),
            Err(MoveError::OutOfBounds(p("jj")))
        );
    }

    #[test]
    fn test_suicide() {
        let board = board_with(&["ba", "ab"], &[]);
        assert_eq!(
            board.evaluate_move(p("aa"), Color::White),
            Err(MoveError::Suicide(p("aa")))
        );
    }

    #[test]
    fn test_capture_is_not_suicide() {
        // White at aa has one liberty left at ab; black filling it captures.
        let board = board_with(&["ba", "bb", "ac"], &["aa", "cb"]);
        assert_eq!(board.evaluate_move(p("ab"), Color::Black), Ok(vec![p("aa")]));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::Occupied(p("pd")).to_string(),
            "point pd is already occupied"
        );
        assert_eq!(
            MoveError::Suicide(p("aa")).to_string(),
            "suicide at aa is not allowed"
        );
    }
}
