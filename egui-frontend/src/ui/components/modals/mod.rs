//! # Modals Module
//!
//! Modal dialogs drawn over the whole window.
//!
//! ## Module Organization:
//! - `reward_popup` - Shows one randomly drawn reward with an "OK" button
//!
//! ## Architecture:
//! A modal is plain state stored in `ModalState`. While one is open the
//! coordinator sends every input event to it instead of the active screen.

pub mod reward_popup;

pub use reward_popup::RewardPopup;
