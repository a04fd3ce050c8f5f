use super::Player;
use super::State;
use crate::Square;

/// Draws the board one row per line, as `|b|0|0|0|`.
///
/// The mover's token is uppercase and the waiting player's token lowercase.
/// Every other cell shows its occupancy digit.
pub fn render(state: &State, max_token: char, min_token: char) -> String {
    let (max_token, min_token) = match state.mover() {
        Player::Max => (max_token.to_ascii_uppercase(), min_token.to_ascii_lowercase()),
        Player::Min => (max_token.to_ascii_lowercase(), min_token.to_ascii_uppercase()),
    };
    let size = state.size();
    let mut board = String::with_capacity(size * (2 * size + 2));
    for y in 0..size {
        board.push('|');
        for x in 0..size {
            let square = Square::new(x, y);
            board.push(match square {
                s if s == state.max() => max_token,
                s if s == state.min() => min_token,
                s => char::from(b'0' + state.grid().cell(s)),
            });
            board.push('|');
        }
        board.push('\n');
    }
    board
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", render(self, 'a', 'b'))
    }
}
