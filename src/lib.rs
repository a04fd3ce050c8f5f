//! Two-player pursuit on a square grid.
//!
//! Max and Min take turns stepping to one of the eight neighbouring
//! squares that has not been visited yet. Whoever cannot move loses.
//!
//! # Module Structure
//!
//! - `grid` — Occupancy map, coordinates, compass directions
//! - `state` — Immutable game-tree nodes, heuristic payoff, minimax
//! - `game` — Turn-by-turn controller with per-player move policies
pub mod game;
pub mod grid;
pub mod state;

pub use game::*;
pub use grid::*;
pub use state::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Heuristic and minimax scores, from Max's point of view.
pub type Payoff = i32;
/// Remaining plies of lookahead for minimax.
pub type Depth = usize;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Payoff magnitude of a terminal state (the stuck player loses).
pub const WIN_PAYOFF: Payoff = 10;
/// Board edge length when none is configured.
pub const DEFAULT_SIZE: usize = 4;
/// Minimax lookahead when none is configured.
pub const DEFAULT_DEPTH: Depth = 2;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
/// Location, target and thread columns are switched off.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term]).expect("initialize logger");
}
