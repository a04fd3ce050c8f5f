use super::GameError;
use serde::Deserialize;
use serde::Serialize;

/// How a player picks its next move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Uniformly among the legal moves.
    #[default]
    Random,
    /// Best minimax score, ties broken uniformly at random.
    Minimax,
    /// Supplied by the caller through [`Game::make_external_move`](super::Game::make_external_move).
    #[serde(alias = "user")]
    External,
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
            Self::Minimax => write!(f, "minimax"),
            Self::External => write!(f, "external"),
        }
    }
}

impl TryFrom<&str> for Policy {
    type Error = GameError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "minimax" => Ok(Self::Minimax),
            "external" | "user" => Ok(Self::External),
            other => Err(GameError::InvalidConfiguration(format!(
                "unknown move policy '{}'",
                other
            ))),
        }
    }
}

impl std::str::FromStr for Policy {
    type Err = GameError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}
