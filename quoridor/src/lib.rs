mod display;
mod serialization;

pub mod action;
pub mod board;
pub mod constants;
pub mod coordinate;
pub mod game_state;
pub mod legal_actions;
pub mod legality;
pub mod oracle;
pub mod options;
pub mod pawn_moves;
pub mod perft;
pub mod walls;

pub use action::*;
pub use board::*;
pub use constants::*;
pub use coordinate::*;
pub use game_state::*;
pub use legal_actions::*;
pub use legality::*;
pub use oracle::*;
pub use options::*;
pub use pawn_moves::*;
pub use perft::*;
pub use walls::*;
