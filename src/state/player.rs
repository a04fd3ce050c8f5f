use serde::Deserialize;
use serde::Serialize;

/// One of the two tokens. Max scores positive payoffs, Min negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Max,
    Min,
}

impl std::ops::Not for Player {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Self::Max => Self::Min,
            Self::Min => Self::Max,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Max => write!(f, "max"),
            Self::Min => write!(f, "min"),
        }
    }
}

impl TryFrom<&str> for Player {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max" => Ok(Self::Max),
            "min" => Ok(Self::Min),
            _ => Err("invalid player (expected max or min)"),
        }
    }
}

impl std::str::FromStr for Player {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponents() {
        assert_eq!(!Player::Max, Player::Min);
        assert_eq!(!!Player::Min, Player::Min);
        assert_eq!(Player::try_from("MAX"), Ok(Player::Max));
        assert_eq!(serde_json::to_string(&Player::Min).unwrap(), "\"min\"");
    }
}
