//! # Spinning Wheel Module
//!
//! A prize wheel with one colored segment per reward. A click sets it spinning
//! at a random speed which decays every tick; when it settles, the segment
//! under the pointer at the top is the reward won.
//!
//! ## Key Components:
//! - `physics.rs` - Angle, decaying velocity, fixed-rate ticking, segment lookup
//! - `renderer.rs` - The `SpinningWheel` widget: drawing, input and selection

pub mod physics;
pub mod renderer;

pub use renderer::SpinningWheel;
