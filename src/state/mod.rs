//! Game-tree nodes.
//!
//! A [`State`] is one ply of the game: both token squares, the player to
//! move, and a private copy of the grid. Successors are generated lazily
//! and owned by their parent, so earlier states stay valid while play
//! moves on down the tree.
mod minimax;
mod player;
mod render;
mod state;

pub use player::*;
pub use render::*;
pub use state::*;
