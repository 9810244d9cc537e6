//! Core module - pure game rules with no clocks and no I/O
//!
//! Everything in here is deterministic: the same seed and the same
//! action sequence produce the same [`GameState`]. Timing, input and
//! rendering live in the outer layers.

pub mod achievements;
pub mod bag;
pub mod board;
pub mod engine;
pub mod kicks;
pub mod piece;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

// Re-export the types most callers need.
pub use bag::{GameRng, PieceQueue};
pub use board::Board;
pub use engine::GameState;
pub use piece::ActivePiece;
pub use scoring::Metrics;
pub use snapshot::GameSnapshot;
