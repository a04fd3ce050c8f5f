use super::GameError;
use super::Policy;
use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Everything needed to start a game.
///
/// Unset starting squares fall back to opposite corners: Max on `(0,0)`,
/// Min on `(size-1,size-1)`. The corners are worked out on each call to
/// [`starts`](Self::starts), never stored in a shared default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub size: usize,
    pub max: Option<Square>,
    pub min: Option<Square>,
    /// Who moves first.
    pub mover: Player,
    /// Lookahead for minimax players.
    pub depth: Depth,
    pub max_policy: Policy,
    pub min_policy: Policy,
    /// Fixes the random stream (random moves and minimax tie-breaks).
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            max: None,
            min: None,
            mover: Player::Max,
            depth: DEFAULT_DEPTH,
            max_policy: Policy::Random,
            min_policy: Policy::Random,
            seed: None,
        }
    }
}

impl Config {
    pub fn policy(&self, player: Player) -> Policy {
        match player {
            Player::Max => self.max_policy,
            Player::Min => self.min_policy,
        }
    }
    /// Starting squares, with unset ones resolved to opposite corners.
    pub fn starts(&self) -> (Square, Square) {
        let far = self.size.saturating_sub(1);
        (
            self.max.unwrap_or(Square::new(0, 0)),
            self.min.unwrap_or(Square::new(far, far)),
        )
    }
    /// Checks the board and starting squares, returning the resolved starts.
    pub fn validate(&self) -> Result<(Square, Square), GameError> {
        if self.size == 0 {
            return Err(GameError::InvalidConfiguration(
                "grid size must be positive".into(),
            ));
        }
        let (max, min) = self.starts();
        for (player, square) in [(Player::Max, max), (Player::Min, min)] {
            if !square.within(self.size) {
                return Err(GameError::OutOfRange {
                    player,
                    square,
                    size: self.size,
                });
            }
        }
        if max == min {
            return Err(GameError::InvalidConfiguration(format!(
                "both players start on {}",
                max
            )));
        }
        Ok((max, min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_corners() {
        let config = Config::default();
        assert_eq!(config.starts(), (Square::new(0, 0), Square::new(3, 3)));
        let config = Config {
            size: 6,
            ..Config::default()
        };
        assert_eq!(config.starts(), (Square::new(0, 0), Square::new(5, 5)));
    }

    #[test]
    fn out_of_range() {
        let config = Config {
            max: Some(Square::new(4, 2)),
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(GameError::OutOfRange {
                player: Player::Max,
                square: Square::new(4, 2),
                size: 4,
            })
        );
        let config = Config {
            min: Some(Square::new(0, 9)),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GameError::OutOfRange {
                player: Player::Min,
                ..
            })
        ));
    }

    #[test]
    fn degenerate_boards() {
        let config = Config {
            size: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfiguration(_))
        ));
        let config = Config {
            size: 1,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn partial_json() {
        let config = serde_json::from_str::<Config>(
            r#"{ "size": 5, "max": { "x": 1, "y": 2 }, "min_policy": "minimax" }"#,
        )
        .unwrap();
        assert_eq!(config.size, 5);
        assert_eq!(config.max, Some(Square::new(1, 2)));
        assert_eq!(config.min_policy, Policy::Minimax);
        assert_eq!(config.depth, DEFAULT_DEPTH);
        assert_eq!(config.starts().1, Square::new(4, 4));
    }
}
