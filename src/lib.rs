//! Quadfall, a terminal falling-block game.
//!
//! The crate is split into a deterministic, I/O-free game core (`core`,
//! `scheduler`, `types`) and a thin terminal shell (`term`, `input`, `store`)
//! wired together by the binary. Everything the shell draws comes from
//! [`core::GameSnapshot`], so the whole game can be exercised in tests without
//! a terminal.

pub mod core;
pub mod input;
pub mod scheduler;
pub mod store;
pub mod term;
pub mod types;
