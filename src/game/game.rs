use super::*;
use crate::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// A game in progress.
///
/// `Game` holds the live position and the moves played so far. On each turn
/// it asks the mover's [`Policy`] for a successor:
///
/// - `Random` — uniform over the legal moves
/// - `Minimax` — every successor scored with `minimax(depth)`, then a
///   uniform pick among those sharing the best score
/// - `External` — the caller names a [`Direction`] via
///   [`make_external_move`](Self::make_external_move)
///
/// After every move the new position is expanded straight away. A mover
/// with no legal step ends the game, and the player who just moved wins.
#[derive(Debug)]
pub struct Game {
    config: Config,
    current: State,
    history: Vec<Direction>,
    winner: Option<Player>,
    rng: SmallRng,
}

impl Game {
    /// Validates the configuration and sets up the starting position.
    pub fn new(config: Config) -> Result<Self, GameError> {
        let (max, min) = config.validate()?;
        let config = Config {
            max: Some(max),
            min: Some(min),
            ..config
        };
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        let current = State::root(config.size, max, min, config.mover);
        let winner = match current.expand().is_empty() {
            true => Some(!current.mover()),
            false => None,
        };
        log::debug!(
            "new {}x{} game: max {} ({}) vs min {} ({}), {} to move",
            config.size,
            config.size,
            max,
            config.max_policy,
            min,
            config.min_policy,
            config.mover,
        );
        Ok(Self {
            config,
            current,
            history: Vec::new(),
            winner,
            rng,
        })
    }

    /// Plays one move for a `Random` or `Minimax` mover.
    pub fn make_move(&mut self) -> Result<Direction, GameError> {
        let mover = self.live()?;
        let index = match self.config.policy(mover) {
            Policy::Random => self.sample(),
            Policy::Minimax => self.search(),
            Policy::External => return Err(GameError::AwaitingInput(mover)),
        };
        Ok(self.advance(index))
    }

    /// Plays a caller-chosen step for an `External` mover.
    ///
    /// An illegal direction leaves the game untouched, so the caller can retry.
    pub fn make_external_move(&mut self, direction: Direction) -> Result<Direction, GameError> {
        let mover = self.live()?;
        if self.config.policy(mover) != Policy::External {
            return Err(GameError::NotExternal(mover));
        }
        let index = self
            .current
            .position(direction)
            .ok_or(GameError::InvalidMove(direction))?;
        Ok(self.advance(index))
    }
}

/// Public game accessors.
impl Game {
    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn current(&self) -> &State {
        &self.current
    }
    pub fn mover(&self) -> Player {
        self.current.mover()
    }
    pub fn max_to_move(&self) -> bool {
        self.current.max_to_move()
    }
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }
    /// The winner, once the game is finished.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }
    /// Steps played so far, oldest first.
    pub fn history(&self) -> &[Direction] {
        &self.history
    }
    pub fn plies(&self) -> usize {
        self.history.len()
    }
    /// Directions the mover may step in right now.
    pub fn legal(&self) -> Vec<Direction> {
        self.current.directions()
    }
    /// Configuration, turn flag and outcome as a flat record.
    pub fn record(&self) -> Record {
        let (max, min) = self.config.starts();
        Record {
            size: self.config.size,
            max_x: max.x(),
            max_y: max.y(),
            min_x: min.x(),
            min_y: min.y(),
            max_policy: self.config.max_policy,
            min_policy: self.config.min_policy,
            depth: self.config.depth,
            max_first: self.config.mover == Player::Max,
            plies: self.plies(),
            winner: self.winner,
        }
    }
}

impl Game {
    fn live(&self) -> Result<Player, GameError> {
        match self.winner {
            Some(_) => Err(GameError::Finished),
            None => Ok(self.current.mover()),
        }
    }
    fn sample(&mut self) -> usize {
        use rand::Rng;
        let n = self.current.expand().len();
        self.rng.random_range(0..n)
    }
    fn search(&mut self) -> usize {
        let depth = self.config.depth;
        let scores = self
            .current
            .expand()
            .iter()
            .map(|child| child.minimax(depth))
            .collect::<Vec<Payoff>>();
        let best = match self.current.mover() {
            Player::Max => scores.iter().max(),
            Player::Min => scores.iter().min(),
        }
        .copied()
        .unwrap_or_default();
        let ties = scores
            .iter()
            .enumerate()
            .filter(|(_, score)| **score == best)
            .map(|(i, _)| i)
            .collect::<Vec<usize>>();
        log::debug!(
            "{} searched {} moves at depth {}: best {} shared by {}",
            self.current.mover(),
            scores.len(),
            depth,
            best,
            ties.len()
        );
        ties.choose(&mut self.rng).copied().unwrap_or_default()
    }
    fn advance(&mut self, index: usize) -> Direction {
        let mover = self.current.mover();
        let next = self
            .current
            .take_successor(index)
            .expect("index within expanded successors");
        let step = next.last().expect("successors record their step");
        log::debug!("{} steps {} to {}", mover, step, next.square(mover));
        self.history.push(step);
        if next.expand().is_empty() {
            log::info!("{} is stuck after {} plies, {} wins", next.mover(), self.history.len(), mover);
            self.winner = Some(mover);
        }
        self.current = next;
        step
    }
}
