use super::Direction;
use serde::Deserialize;
use serde::Serialize;

/// A cell coordinate. `x` is the column, `y` is the row,
/// and `(0, 0)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    x: usize,
    y: usize,
}

impl Square {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
    pub fn x(&self) -> usize {
        self.x
    }
    pub fn y(&self) -> usize {
        self.y
    }
    /// Whether the square lies on a board of the given edge length.
    pub fn within(&self, size: usize) -> bool {
        self.x < size && self.y < size
    }
    /// The neighbour one step in `direction`, or `None` off the board.
    pub fn step(&self, direction: Direction, size: usize) -> Option<Self> {
        let (dx, dy) = direction.offset();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Self::new(x, y)).filter(|s| s.within(size))
    }
}

impl From<(usize, usize)> for Square {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Square> for (usize, usize) {
    fn from(square: Square) -> Self {
        (square.x, square.y)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl TryFrom<&str> for Square {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (x, y) = s.split_once(',').ok_or("expected a square as x,y")?;
        let x = x.trim().parse::<usize>().map_err(|_| "invalid x coordinate")?;
        let y = y.trim().parse::<usize>().map_err(|_| "invalid y coordinate")?;
        Ok(Self::new(x, y))
    }
}

impl std::str::FromStr for Square {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}
