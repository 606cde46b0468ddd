//! # UI Components Module
//!
//! This module organizes all UI components of the todo bingo app.
//! Each submodule handles a specific aspect of the user interface.
//!
//! ## Module Organization:
//! - `widgets` - The `Widget` trait, text buttons and image buttons
//! - `scrolling_list` - Scrollable, editable task and reward lists
//! - `bingo_board` - The 4×4 bingo grid built from the tasks
//! - `spinning_wheel` - The reward wheel on the Randomiser screen
//! - `modals` - The random reward popup
//! - `screen_manager` - Screens and the active-screen registry
//! - `screen_layouts` - Widget positions for every screen
//! - `styling` / `theme` - Colors, fonts and shared drawing helpers
//!
//! ## Architecture:
//! Widgets draw themselves and turn input into `Command`s. They never reach
//! into the app; the records they show are passed in through `RecordStore`.

pub mod bingo_board;
pub mod modals;
pub mod screen_layouts;
pub mod screen_manager;
pub mod scrolling_list;
pub mod spinning_wheel;
pub mod styling;
pub mod theme;
pub mod widgets;
