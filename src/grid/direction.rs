use super::Square;

/// One of the eight compass steps. North points toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    /// Clockwise from North. Successor states are generated in this order.
    pub const ALL: [Self; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// Column and row delta of a single step.
    pub const fn offset(&self) -> (isize, isize) {
        match self {
            Self::N => (0, -1),
            Self::NE => (1, -1),
            Self::E => (1, 0),
            Self::SE => (1, 1),
            Self::S => (0, 1),
            Self::SW => (-1, 1),
            Self::W => (-1, 0),
            Self::NW => (-1, -1),
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }

    /// The direction leading from one square to an adjacent one.
    pub fn between(from: Square, to: Square) -> Option<Self> {
        let dx = to.x() as isize - from.x() as isize;
        let dy = to.y() as isize - from.y() as isize;
        Self::ALL.into_iter().find(|d| d.offset() == (dx, dy))
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<&str> for Direction {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(s))
            .ok_or("invalid direction (expected one of N NE E SE S SW W NW)")
    }
}

impl std::str::FromStr for Direction {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clockwise_from_north() {
        let labels = Direction::ALL
            .iter()
            .map(Direction::label)
            .collect::<Vec<_>>();
        assert_eq!(labels, ["N", "NE", "E", "SE", "S", "SW", "W", "NW"]);
    }

    #[test]
    fn between_inverts_step() {
        let center = Square::new(2, 2);
        for direction in Direction::ALL {
            let next = center.step(direction, 5).unwrap();
            assert_eq!(Direction::between(center, next), Some(direction));
        }
        assert_eq!(Direction::between(center, Square::new(4, 2)), None);
        assert_eq!(Direction::between(center, center), None);
    }

    #[test]
    fn parse_labels() {
        assert_eq!(Direction::try_from("nw"), Ok(Direction::NW));
        assert_eq!(Direction::try_from(" S "), Ok(Direction::S));
        assert!(Direction::try_from("north").is_err());
    }
}
