use super::Player;
use super::State;
use crate::Depth;
use crate::Payoff;

impl State {
    /// Depth-bounded minimax value of this position, from Max's point of view.
    ///
    /// At a dead end or at `depth == 0` this is the cached [`payoff`](Self::payoff).
    /// Otherwise every successor is searched at `depth - 1`. Max takes the
    /// largest value and Min the smallest. Nothing is pruned. Expanded
    /// successors stay attached to the tree, but values are recomputed on
    /// every call, so the cost grows as branching^depth.
    pub fn minimax(&self, depth: Depth) -> Payoff {
        let children = self.expand();
        if children.is_empty() || depth == 0 {
            return self.payoff();
        }
        let values = children.iter().map(|child| child.minimax(depth - 1));
        let value = match self.mover() {
            Player::Max => values.max(),
            Player::Min => values.min(),
        };
        log::trace!("minimax {} @ depth {} = {:?}", self.mover(), depth, value);
        value.unwrap_or_else(|| self.payoff())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::*;

    fn corner(mover: Player) -> State {
        State::root(4, Square::new(3, 3), Square::new(0, 0), mover)
    }

    #[test]
    fn depth_zero_is_payoff() {
        assert_eq!(corner(Player::Max).minimax(0), 3);
        assert_eq!(corner(Player::Min).minimax(0), -3);
    }

    #[test]
    fn depth_one_looks_at_replies() {
        assert_eq!(corner(Player::Max).minimax(1), -3);
        assert_eq!(corner(Player::Min).minimax(1), 3);
    }

    #[test]
    fn repeated_search_agrees() {
        let state = corner(Player::Max);
        let deep = state.minimax(3);
        assert_eq!(state.minimax(1), -3);
        assert_eq!(state.minimax(3), deep);
        assert_eq!(corner(Player::Max).minimax(3), deep);
    }

    #[test]
    fn one_ply_is_best_child_payoff() {
        let state = State::root(5, Square::new(2, 2), Square::new(0, 4), Player::Min);
        let children = state.expand();
        let worst = children.iter().map(State::payoff).min().unwrap();
        assert_eq!(state.minimax(1), worst);
        let state = State::root(5, Square::new(2, 2), Square::new(0, 4), Player::Max);
        let best = state.expand().iter().map(State::payoff).max().unwrap();
        assert_eq!(state.minimax(1), best);
    }

    #[test]
    fn terminal_ignores_depth() {
        // min at (1,0) on a 2x2 board is boxed in after three plies
        let root = State::root(2, Square::new(1, 1), Square::new(0, 0), Player::Min);
        let state = root.into_successor_toward(Direction::E);
        let state = state.into_successor_toward(Direction::W);
        assert_eq!(state.minimax(0), WIN_PAYOFF);
        assert_eq!(state.minimax(5), WIN_PAYOFF);
    }

    #[test]
    fn values_are_bounded() {
        let state = State::root(4, Square::new(0, 0), Square::new(3, 3), Player::Max);
        let value = state.minimax(4);
        assert!((-WIN_PAYOFF..=WIN_PAYOFF).contains(&value));
    }

    impl State {
        fn into_successor_toward(self, direction: Direction) -> State {
            let i = self.position(direction).expect("legal direction");
            self.into_successor(i).expect("expanded state")
        }
    }
}
