pub mod app_coordinator;
pub mod app_state;
pub mod commands;
pub mod components;
pub mod input;
pub mod state;

pub use app_state::TodoBingoApp;
