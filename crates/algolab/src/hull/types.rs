use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;

/// Planar point with integer coordinates.
///
/// Integer coordinates keep every orientation test exact: `cross` and
/// `dist2` are evaluated in `i128`, which cannot overflow for coordinates
/// with `|x|, |y| <= 2^62`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Float view for metric computations.
    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x as f64, self.y as f64)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Errors surfaced when parsing a point from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePointError {
    /// No comma separating the two coordinates.
    MissingSeparator,
    /// A coordinate was not a valid `i64`.
    BadCoordinate { axis: char },
}

impl fmt::Display for ParsePointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsePointError::MissingSeparator => {
                write!(f, "expected two comma-separated coordinates")
            }
            ParsePointError::BadCoordinate { axis } => {
                write!(f, "coordinate {} is not a valid integer", axis)
            }
        }
    }
}

impl std::error::Error for ParsePointError {}

impl FromStr for Point {
    type Err = ParsePointError;

    /// Accepts `"x, y"` and `"x,y"`; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s.split_once(',').ok_or(ParsePointError::MissingSeparator)?;
        let x = x
            .trim()
            .parse()
            .map_err(|_| ParsePointError::BadCoordinate { axis: 'x' })?;
        let y = y
            .trim()
            .parse()
            .map_err(|_| ParsePointError::BadCoordinate { axis: 'y' })?;
        Ok(Point { x, y })
    }
}

/// Cross product of `o->a` and `o->b`. Positive when `o->a->b` turns
/// counter-clockwise, zero when collinear.
#[inline]
pub(crate) fn cross(o: Point, a: Point, b: Point) -> i128 {
    let ax = a.x as i128 - o.x as i128;
    let ay = a.y as i128 - o.y as i128;
    let bx = b.x as i128 - o.x as i128;
    let by = b.y as i128 - o.y as i128;
    ax * by - ay * bx
}

/// Squared euclidean distance between `a` and `b`.
#[inline]
pub(crate) fn dist2(a: Point, b: Point) -> i128 {
    let dx = b.x as i128 - a.x as i128;
    let dy = b.y as i128 - a.y as i128;
    dx * dx + dy * dy
}
