//! # Reward Popup
//!
//! A 300×150 box centered in the window that shows a reward picked at random
//! when the popup opens. The only way out is the green "OK" button.

use eframe::egui;
use rand::seq::SliceRandom;
use rand::Rng;
use shared::Reward;

use crate::ui::commands::Command;
use crate::ui::components::styling::{draw_screen_background, BODY_FONT_SIZE};
use crate::ui::components::theme::CURRENT_THEME;
use crate::ui::components::widgets::{Button, ButtonStyle};
use crate::ui::input::InputEvent;

/// Shown instead of a reward when the reward list is empty
pub const NO_REWARDS_TEXT: &str = "No rewards yet";

const POPUP_SIZE: egui::Vec2 = egui::vec2(300.0, 150.0);
const OK_OFFSET: egui::Vec2 = egui::vec2(100.0, 90.0);
const OK_SIZE: egui::Vec2 = egui::vec2(100.0, 40.0);

#[derive(Debug, Clone)]
pub struct RewardPopup {
    rect: egui::Rect,
    message: String,
    ok_button: Button,
}

impl RewardPopup {
    /// Pick a reward uniformly at random and lay the popup out in `canvas`
    pub fn open<G: Rng + ?Sized>(canvas: egui::Rect, rewards: &[Reward], rng: &mut G) -> Self {
        let message = rewards
            .choose(rng)
            .map(|reward| reward.text.clone())
            .unwrap_or_else(|| NO_REWARDS_TEXT.to_string());

        let rect = egui::Rect::from_center_size(canvas.center(), POPUP_SIZE);
        let ok_button = Button::new(
            egui::Rect::from_min_size(rect.min + OK_OFFSET, OK_SIZE),
            "OK",
            ButtonStyle::confirm(),
            Some(Command::CloseRewardPopup),
        );

        Self {
            rect,
            message,
            ok_button,
        }
    }

    pub fn rect(&self) -> egui::Rect {
        self.rect
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn ok_rect(&self) -> egui::Rect {
        self.ok_button.rect()
    }

    /// Only a press on "OK" does anything
    pub fn handle_input(&self, event: &InputEvent) -> Option<Command> {
        self.ok_button.press(event)
    }

    /// Draw the background fill and the popup; the screen underneath is hidden
    pub fn render(&self, painter: &egui::Painter, canvas: egui::Rect, pointer: Option<egui::Pos2>) {
        let colors = &CURRENT_THEME.layout;

        draw_screen_background(painter, canvas);
        painter.rect_filled(self.rect, egui::Rounding::ZERO, colors.popup_background);
        painter.rect_stroke(
            self.rect,
            egui::Rounding::ZERO,
            egui::Stroke::new(3.0, colors.popup_border),
        );

        painter.text(
            egui::pos2(self.rect.center().x, self.rect.top() + 40.0),
            egui::Align2::CENTER_CENTER,
            &self.message,
            egui::FontId::new(BODY_FONT_SIZE, egui::FontFamily::Proportional),
            CURRENT_THEME.buttons.text,
        );

        self.ok_button.paint(painter, pointer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::input::KeyInput;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn canvas() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(600.0, 400.0))
    }

    #[test]
    fn test_popup_layout_is_centered() {
        let mut rng = StdRng::seed_from_u64(7);
        let popup = RewardPopup::open(canvas(), &shared::default_rewards(), &mut rng);

        assert_eq!(popup.rect().min, egui::pos2(150.0, 125.0));
        assert_eq!(popup.ok_rect().min, egui::pos2(250.0, 215.0));
        assert_eq!(popup.ok_rect().size(), egui::vec2(100.0, 40.0));
    }

    #[test]
    fn test_message_is_one_of_the_rewards() {
        let rewards = shared::default_rewards();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let popup = RewardPopup::open(canvas(), &rewards, &mut rng);
            assert!(rewards.iter().any(|r| r.text == popup.message()));
        }
    }

    #[test]
    fn test_empty_rewards_message() {
        let mut rng = StdRng::seed_from_u64(1);
        let popup = RewardPopup::open(canvas(), &[], &mut rng);
        assert_eq!(popup.message(), NO_REWARDS_TEXT);
    }

    #[test]
    fn test_only_ok_closes() {
        let mut rng = StdRng::seed_from_u64(1);
        let popup = RewardPopup::open(canvas(), &shared::default_rewards(), &mut rng);

        let on_ok = InputEvent::PointerPressed { pos: egui::pos2(300.0, 235.0), time_ms: 0 };
        let on_box = InputEvent::PointerPressed { pos: egui::pos2(200.0, 150.0), time_ms: 0 };

        assert_eq!(popup.handle_input(&on_ok), Some(Command::CloseRewardPopup));
        assert_eq!(popup.handle_input(&on_box), None);
        assert_eq!(popup.handle_input(&InputEvent::Key(KeyInput::Enter)), None);
    }
}
