use crate::*;

/// Errors that can occur while setting up or playing a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A starting square lies off the board. No game is created.
    OutOfRange {
        player: Player,
        square: Square,
        size: usize,
    },
    /// No legal step in that direction. The game is unchanged and the caller may retry.
    InvalidMove(Direction),
    /// Unknown policy name, empty board, or both tokens on one square.
    InvalidConfiguration(String),
    /// The mover plays an external policy; use `make_external_move`.
    AwaitingInput(Player),
    /// An external move was offered for a player that chooses its own moves.
    NotExternal(Player),
    /// The game is over.
    Finished,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange {
                player,
                square,
                size,
            } => write!(f, "{} position {} out of range for a {}x{} grid", player, square, size, size),
            Self::InvalidMove(d) => write!(f, "invalid move: nothing free to the {}", d),
            Self::InvalidConfiguration(s) => write!(f, "invalid configuration: {}", s),
            Self::AwaitingInput(p) => write!(f, "{} moves externally, waiting for input", p),
            Self::NotExternal(p) => write!(f, "{} does not take external moves", p),
            Self::Finished => write!(f, "game is already finished"),
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let out = GameError::OutOfRange {
            player: Player::Max,
            square: Square::new(4, 2),
            size: 4,
        };
        assert_eq!(out.to_string(), "max position (4,2) out of range for a 4x4 grid");
        assert_eq!(
            GameError::InvalidMove(Direction::N).to_string(),
            "invalid move: nothing free to the N"
        );
        assert_eq!(
            GameError::InvalidConfiguration("unknown policy `greedy`".into()).to_string(),
            "invalid configuration: unknown policy `greedy`"
        );
        assert_eq!(
            GameError::AwaitingInput(Player::Min).to_string(),
            "min moves externally, waiting for input"
        );
        assert_eq!(
            GameError::NotExternal(Player::Max).to_string(),
            "max does not take external moves"
        );
        assert_eq!(GameError::Finished.to_string(), "game is already finished");
    }

    #[test]
    fn boxes_as_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(GameError::InvalidMove(Direction::SW));
        assert_eq!(err.to_string(), "invalid move: nothing free to the SW");
    }
}
