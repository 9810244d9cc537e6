//! Terminal front end.
//!
//! The game core stays deterministic and free of I/O; this module turns
//! snapshots into character frames and flushes them to the terminal. Drawing
//! goes through a plain framebuffer instead of a widget toolkit so the board
//! can use exact cell proportions (two characters per block).

pub mod frame;
pub mod screen;
pub mod view;

pub use frame::{Frame, Glyph, Style};
pub use screen::Screen;
pub use view::{GameView, Viewport};
