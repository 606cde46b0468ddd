//! # Modal State Module
//!
//! This module contains the state of the modal reward popup.
//!
//! ## Purpose:
//! While a popup is open it owns all input; the screen underneath neither
//! receives events nor animates. Keeping that flag in one place lets the
//! coordinator route input without asking every screen.

use crate::ui::components::modals::RewardPopup;

/// Modal visibility and modal-specific state
#[derive(Debug, Default)]
pub struct ModalState {
    /// Popup showing a randomly drawn reward
    pub reward_popup: Option<RewardPopup>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any modal currently owns the input
    pub fn is_open(&self) -> bool {
        self.reward_popup.is_some()
    }

    pub fn close_all(&mut self) {
        self.reward_popup = None;
    }
}
