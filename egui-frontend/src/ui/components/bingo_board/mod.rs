//! # Bingo Board Module
//!
//! A 4×4 grid of squares built from the first sixteen tasks. Clicking a square
//! marks it and the mark is written back to the task it stands for.
//!
//! ## Key Components:
//! - `board.rs` - Grid layout, refresh from the task list, toggling
//! - `renderer.rs` - Painting of a single square
//!
//! ## Purpose:
//! Tasks do not point at squares. The board is rebuilt from the task list on
//! every frame, so the task → square mapping is always derived and never stale.

pub mod board;
pub mod renderer;

pub use board::BingoBoard;
