//! Turn-by-turn play.
//!
//! [`Game`] owns the live [`State`](crate::State) and asks each player's
//! [`Policy`] for a move until the player to move is stuck.
mod config;
mod error;
mod game;
mod policy;
mod record;

pub use config::*;
pub use error::*;
pub use game::*;
pub use policy::*;
pub use record::*;
