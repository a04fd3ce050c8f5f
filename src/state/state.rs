use super::Player;
use crate::*;
use std::cell::OnceCell;

/// One ply of the pursuit game.
///
/// `State` is immutable once built. It knows where both tokens stand, whose
/// turn it is, and which cells have been visited on the way here. Two things
/// are filled in on first demand and then frozen:
///
/// - `successors` — every legal child state, in compass order
/// - `payoff` — the mobility heuristic (or the ±10 outcome at a dead end)
///
/// # Tree Shape
///
/// Children are owned by their parent, so a subtree expanded during one
/// search is reused by the next search of the same position. There is no
/// pointer back to the parent; `last` records the step that produced the
/// state, which is all that is needed to replay the move.
///
/// Terminal status is `None` until [`expand`](Self::expand) has run and
/// never changes afterwards.
#[derive(Debug, Clone)]
pub struct State {
    max: Square,
    min: Square,
    mover: Player,
    grid: Grid,
    last: Option<Direction>,
    successors: OnceCell<Vec<State>>,
    payoff: OnceCell<Payoff>,
}

/// Game tree entry points.
impl State {
    /// The starting position. Both starting squares are marked visited.
    ///
    /// The squares must be distinct and on the board; [`Game::new`] checks
    /// this before calling here.
    pub fn root(size: usize, max: Square, min: Square, mover: Player) -> Self {
        assert!(max.within(size) && min.within(size), "start off a {}x{} grid", size, size);
        debug_assert!(max != min);
        let mut grid = Grid::new(size);
        grid.mark(max);
        grid.mark(min);
        Self {
            max,
            min,
            mover,
            grid,
            last: None,
            successors: OnceCell::new(),
            payoff: OnceCell::new(),
        }
    }
    /// The position after the mover steps onto `to`.
    /// The step is recorded as `direction`, and the turn passes to the other player.
    fn child(&self, to: Square, direction: Direction) -> Self {
        let mut grid = self.grid.clone();
        grid.mark(to);
        let (max, min) = match self.mover {
            Player::Max => (to, self.min),
            Player::Min => (self.max, to),
        };
        Self {
            max,
            min,
            mover: !self.mover,
            grid,
            last: Some(direction),
            successors: OnceCell::new(),
            payoff: OnceCell::new(),
        }
    }
    /// Consumes the state and hands back one of its children.
    ///
    /// Returns `None` if the state was never expanded or the index is out of range.
    pub fn into_successor(mut self, index: usize) -> Option<Self> {
        self.take_successor(index)
    }
    /// Detaches one child and drops the rest of the successor list.
    ///
    /// The state goes back to being unexpanded, so this is only for a
    /// position that is about to be discarded.
    pub(crate) fn take_successor(&mut self, index: usize) -> Option<Self> {
        self.successors.take()?.into_iter().nth(index)
    }
}

/// Public state accessors.
impl State {
    pub fn size(&self) -> usize {
        self.grid.size()
    }
    pub fn max(&self) -> Square {
        self.max
    }
    pub fn min(&self) -> Square {
        self.min
    }
    /// The square held by `player`.
    pub fn square(&self, player: Player) -> Square {
        match player {
            Player::Max => self.max,
            Player::Min => self.min,
        }
    }
    /// The player to move.
    pub fn mover(&self) -> Player {
        self.mover
    }
    pub fn max_to_move(&self) -> bool {
        self.mover == Player::Max
    }
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    /// The step that led here. `None` at the root.
    pub fn last(&self) -> Option<Direction> {
        self.last
    }
}

/// Successor generation and evaluation.
impl State {
    /// Generates the legal successors once and returns them on every call.
    ///
    /// The mover's neighbours are scanned clockwise from North
    /// (N, NE, E, SE, S, SW, W, NW). Off-board and visited cells are skipped,
    /// and that order is kept. An empty slice means the mover is stuck.
    pub fn expand(&self) -> &[State] {
        self.successors.get_or_init(|| self.spawn())
    }
    /// Successors, if [`expand`](Self::expand) has already run.
    pub fn successors(&self) -> Option<&[State]> {
        self.successors.get().map(Vec::as_slice)
    }
    /// Whether the mover is stuck, if successors are known yet.
    pub fn is_terminal(&self) -> Option<bool> {
        self.successors().map(<[State]>::is_empty)
    }
    /// Direction of each successor, in successor order.
    pub fn directions(&self) -> Vec<Direction> {
        self.expand().iter().filter_map(State::last).collect()
    }
    /// Index of the successor reached by stepping in `direction`.
    pub fn position(&self, direction: Direction) -> Option<usize> {
        self.expand()
            .iter()
            .position(|child| child.last == Some(direction))
    }
    /// Heuristic payoff, computed once.
    ///
    /// A stuck mover loses, so the value is -10 if Max is stuck and +10 if Min is stuck.
    /// Otherwise the value is the mover's branching factor, negated when Min is to move.
    /// This rewards mobility, not forced wins.
    pub fn payoff(&self) -> Payoff {
        *self.payoff.get_or_init(|| self.heuristic())
    }

    fn heuristic(&self) -> Payoff {
        let mobility = self.expand().len() as Payoff;
        match (self.mover, mobility) {
            (Player::Max, 0) => -WIN_PAYOFF,
            (Player::Min, 0) => WIN_PAYOFF,
            (Player::Max, n) => n,
            (Player::Min, n) => -n,
        }
    }
    fn spawn(&self) -> Vec<State> {
        let from = self.square(self.mover);
        let size = self.size();
        Direction::ALL
            .into_iter()
            .filter_map(|d| from.step(d, size).map(|to| (d, to)))
            .filter(|(_, to)| !self.grid.is_occupied(*to))
            .map(|(d, to)| self.child(to, d))
            .collect()
    }
}

/// Positions compare equal on squares, turn and grid. Cached fields are ignored.
impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.max == other.max
            && self.min == other.min
            && self.mover == other.mover
            && self.grid == other.grid
    }
}
impl Eq for State {}
