//! # Screen Layouts
//!
//! Builds the five screens of the app with their widgets at fixed positions
//! on the 600×400 canvas. Every screen gets the house button in the top-left
//! corner, which leads back to the menu.

use eframe::egui;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::assets::ImageAsset;
use crate::config::AppConfig;
use crate::ui::commands::{Command, ScreenId};

use super::bingo_board::BingoBoard;
use super::screen_manager::{Screen, ScreenManager};
use super::scrolling_list::ScrollingList;
use super::spinning_wheel::SpinningWheel;
use super::widgets::{Button, ButtonStyle, ImageButton, Widget};

/// Where the house button sits on every screen
pub const HOME_RECT: egui::Rect = egui::Rect {
    min: egui::pos2(5.0, 5.0),
    max: egui::pos2(55.0, 55.0),
};

pub const WHEEL_CENTER: egui::Pos2 = egui::pos2(300.0, 200.0);
pub const WHEEL_RADIUS: f32 = 150.0;

fn rect(x: f32, y: f32, w: f32, h: f32) -> egui::Rect {
    egui::Rect::from_min_size(egui::pos2(x, y), egui::vec2(w, h))
}

fn button(x: f32, y: f32, w: f32, h: f32, label: &str, command: Command) -> Box<dyn Widget> {
    Box::new(Button::new(rect(x, y, w, h), label, ButtonStyle::default(), Some(command)))
}

fn image(x: f32, y: f32, w: f32, h: f32, asset: ImageAsset) -> Box<dyn Widget> {
    Box::new(ImageButton::decoration(rect(x, y, w, h), asset))
}

fn home_button() -> Box<dyn Widget> {
    Box::new(ImageButton::new(HOME_RECT, ImageAsset::House, Some(Command::GoTo(ScreenId::Menu))))
}

fn list_rect() -> egui::Rect {
    rect(50.0, 50.0, 500.0, 300.0)
}

fn menu_screen() -> Screen {
    Screen::new(
        vec![
            button(200.0, 120.0, 200.0, 50.0, "To-Do List", Command::GoTo(ScreenId::TodoList)),
            button(200.0, 180.0, 200.0, 50.0, "Rewards", Command::GoTo(ScreenId::Rewards)),
            button(200.0, 240.0, 200.0, 50.0, "Bingo", Command::GoTo(ScreenId::Bingo)),
            button(200.0, 300.0, 200.0, 50.0, "Randomiser", Command::GoTo(ScreenId::Randomiser)),
            // Artwork is drawn over the buttons
            image(90.0, 5.0, 450.0, 100.0, ImageAsset::Title),
            image(430.0, 150.0, 180.0, 300.0, ImageAsset::Logo),
            image(-30.0, 20.0, 200.0, 450.0, ImageAsset::Vine),
        ],
        home_button(),
    )
}

fn todo_screen() -> Screen {
    Screen::new(
        vec![
            Box::new(ScrollingList::tasks(list_rect())) as Box<dyn Widget>,
            button(200.0, 250.0, 200.0, 50.0, "Add Task", Command::AddTask),
            button(200.0, 320.0, 200.0, 50.0, "Remove Task", Command::RemoveTask),
        ],
        home_button(),
    )
}

fn rewards_screen() -> Screen {
    Screen::new(
        vec![
            Box::new(ScrollingList::rewards(list_rect())) as Box<dyn Widget>,
            button(200.0, 250.0, 200.0, 50.0, "Add Reward", Command::AddReward),
            button(200.0, 320.0, 200.0, 50.0, "Remove Reward", Command::RemoveReward),
        ],
        home_button(),
    )
}

fn bingo_screen() -> Screen {
    Screen::new(
        vec![
            Box::new(BingoBoard::new()) as Box<dyn Widget>,
            button(490.0, 340.0, 100.0, 50.0, "Reward", Command::ShowRandomReward),
            // Artwork sits on top of the board
            image(-60.0, 20.0, 200.0, 450.0, ImageAsset::Vine),
        ],
        home_button(),
    )
}

fn randomiser_screen(config: &AppConfig, rng: StdRng) -> Screen {
    Screen::new(
        vec![
            image(-30.0, 20.0, 200.0, 450.0, ImageAsset::Vine),
            image(450.0, 150.0, 180.0, 300.0, ImageAsset::Logo),
            Box::new(SpinningWheel::new(
                WHEEL_CENTER,
                WHEEL_RADIUS,
                HOME_RECT,
                config.wheel.clone(),
                rng,
            )),
        ],
        home_button(),
    )
}

/// Register all screens. Nothing is active until the caller selects one.
pub fn build_screens(config: &AppConfig, rng: &mut StdRng) -> ScreenManager {
    let mut screens = ScreenManager::new();
    screens.add_screen(ScreenId::Menu.name(), menu_screen());
    screens.add_screen(ScreenId::TodoList.name(), todo_screen());
    screens.add_screen(ScreenId::Rewards.name(), rewards_screen());
    screens.add_screen(ScreenId::Bingo.name(), bingo_screen());
    screens.add_screen(
        ScreenId::Randomiser.name(),
        randomiser_screen(config, StdRng::seed_from_u64(rng.gen())),
    );
    screens
}
