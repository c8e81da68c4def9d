//! Board points and their two-letter SGF encoding.

use std::fmt;

/// Largest board edge the two-letter encoding can address.
pub const MAX_BOARD_SIZE: u8 = 52;

/// A point on the board. `x` is the column, `y` the row, both from the
/// top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: u8,
    pub y: u8,
}

impl Point {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Decode a two-letter coordinate such as `pd`.
    ///
    /// `a`..`z` are 0..25 and `A`..`Z` are 26..51. Anything that is not
    /// exactly two such letters yields `None`.
    pub fn from_sgf(text: &str) -> Option<Point> {
        let mut chars = text.chars();
        let (Some(x), Some(y), None) = (chars.next(), chars.next(), chars.next()) else {
            return None;
        };
        Some(Point::new(decode_axis(x)?, decode_axis(y)?))
    }

    /// Every point of the rectangle spanned by two corners, each exactly once.
    ///
    /// Corners may be given in any order. Columns vary in the outer loop and
    /// rows in the inner loop.
    pub fn rect(a: Point, b: Point) -> impl Iterator<Item = Point> {
        let (x0, x1) = (a.x.min(b.x), a.x.max(b.x));
        let (y0, y1) = (a.y.min(b.y), a.y.max(b.y));
        (x0..=x1).flat_map(move |x| (y0..=y1).map(move |y| Point::new(x, y)))
    }
}

fn decode_axis(c: char) -> Option<u8> {
    match c {
        'a'..='z' => Some(c as u8 - b'a'),
        'A'..='Z' => Some(c as u8 - b'A' + 26),
        _ => None,
    }
}

fn encode_axis(v: u8) -> char {
    if v < 26 {
        (b'a' + v) as char
    } else {
        (b'A' + v - 26) as char
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", encode_axis(self.x), encode_axis(self.y))
    }
}
