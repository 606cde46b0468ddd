//! # State Module
//!
//! Application state split by concern:
//! - `list_state` - records plus scroll/selection/edit state of a list view
//! - `record_store` - owner of the task and reward lists
//! - `modal_state` - the modal reward popup

pub mod list_state;
pub mod modal_state;
pub mod record_store;

pub use list_state::{ClickOutcome, RecordList};
pub use modal_state::ModalState;
pub use record_store::RecordStore;
