//! # Commands Module
//!
//! Widgets report what the user asked for as a [`Command`]; the app applies it
//! here. Navigation, list edits and the reward popup are all driven through
//! this one dispatcher.

use log::{info, warn};
use shared::{NEW_REWARD_TEXT, NEW_TASK_TEXT};

use crate::ui::app_state::TodoBingoApp;
use crate::ui::components::modals::RewardPopup;

/// The screens of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Menu,
    TodoList,
    Rewards,
    Bingo,
    Randomiser,
}

impl ScreenId {
    pub const ALL: [ScreenId; 5] = [
        ScreenId::Menu,
        ScreenId::TodoList,
        ScreenId::Rewards,
        ScreenId::Bingo,
        ScreenId::Randomiser,
    ];

    /// Registry name of the screen
    pub fn name(self) -> &'static str {
        match self {
            ScreenId::Menu => "Menu",
            ScreenId::TodoList => "To-Do List",
            ScreenId::Rewards => "Rewards",
            ScreenId::Bingo => "Bingo",
            ScreenId::Randomiser => "Randomiser",
        }
    }

    /// Window title while the screen is active
    pub fn window_title(self) -> &'static str {
        match self {
            ScreenId::Menu => "Menu",
            ScreenId::TodoList => "To-Do List",
            ScreenId::Rewards => "Rewards List",
            ScreenId::Bingo => "Bingo Board",
            ScreenId::Randomiser => "Randomiser",
        }
    }
}

/// An action requested by a widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    GoTo(ScreenId),
    AddTask,
    RemoveTask,
    AddReward,
    RemoveReward,
    /// Open the popup with a randomly drawn reward
    ShowRandomReward,
    CloseRewardPopup,
}

impl TodoBingoApp {
    /// Apply a command to the app state
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::GoTo(screen) => self.navigate_to(screen),
            Command::AddTask => {
                let index = self.store.tasks.add(NEW_TASK_TEXT);
                info!("➕ Added task #{}", index);
            }
            Command::RemoveTask => match self.store.tasks.remove_selected() {
                Some(task) => info!("🗑️ Removed task '{}'", task.text),
                None => warn!("Remove Task pressed with no task selected"),
            },
            Command::AddReward => {
                let index = self.store.rewards.add(NEW_REWARD_TEXT);
                info!("➕ Added reward #{}", index);
            }
            Command::RemoveReward => match self.store.rewards.remove_selected() {
                Some(reward) => info!("🗑️ Removed reward '{}'", reward.text),
                None => warn!("Remove Reward pressed with no reward selected"),
            },
            Command::ShowRandomReward => {
                let canvas = self.canvas_rect();
                let popup = RewardPopup::open(canvas, self.store.rewards.records(), &mut self.rng);
                info!("🎁 Showing random reward: {}", popup.message());
                self.modal.reward_popup = Some(popup);
            }
            Command::CloseRewardPopup => {
                self.modal.close_all();
                info!("🎁 Reward popup closed");
            }
        }
    }

    /// Switch screens and queue the matching window title
    pub fn navigate_to(&mut self, screen: ScreenId) {
        if !self.screens.set_screen(screen.name()) {
            warn!("Screen '{}' is not registered", screen.name());
            return;
        }

        // A list shown again starts from a clean view
        match screen {
            ScreenId::TodoList => self.store.tasks.reset_view(),
            ScreenId::Rewards => self.store.rewards.reset_view(),
            _ => {}
        }

        self.pending_title = Some(screen.window_title());
        info!("📄 Switched to screen '{}'", screen.name());
    }
}
