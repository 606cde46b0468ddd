//! # Spinning Wheel Widget
//!
//! Draws one wedge per reward around the wheel center, a pointer triangle
//! above the top and the last result near the bottom of the window. Any press
//! on the screen outside the excluded rectangle (the home button) spins it.

use eframe::egui;
use log::{debug, info};
use rand::rngs::StdRng;
use shared::Reward;

use crate::config::WheelConfig;
use crate::ui::commands::Command;
use crate::ui::components::styling::BODY_FONT_SIZE;
use crate::ui::components::theme::CURRENT_THEME;
use crate::ui::components::widgets::{RenderContext, Widget};
use crate::ui::input::InputEvent;
use crate::ui::state::RecordStore;

use super::physics::{segment_index, WheelPhysics};

/// Arc resolution of the wedges, in degrees per polygon edge
const ARC_STEP_DEGREES: f32 = 5.0;

pub struct SpinningWheel {
    center: egui::Pos2,
    radius: f32,
    /// Presses here do not spin the wheel
    excluded: egui::Rect,
    physics: WheelPhysics,
    rng: StdRng,
    selected: Option<String>,
    selected_index: Option<usize>,
}

impl SpinningWheel {
    pub fn new(
        center: egui::Pos2,
        radius: f32,
        excluded: egui::Rect,
        settings: WheelConfig,
        rng: StdRng,
    ) -> Self {
        Self {
            center,
            radius,
            excluded,
            physics: WheelPhysics::new(settings),
            rng,
            selected: None,
            selected_index: None,
        }
    }

    pub fn physics(&self) -> &WheelPhysics {
        &self.physics
    }

    /// Text of the reward the wheel last settled on
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn start_spin(&mut self) {
        if self.physics.start_spin(&mut self.rng) {
            info!("🎡 Wheel spinning at {:.1}°/tick", self.physics.speed());
        }
    }

    /// Pick the reward under the pointer for the current angle
    pub fn select(&mut self, rewards: &[Reward]) {
        self.selected_index = segment_index(self.physics.angle(), rewards.len());
        self.selected = self
            .selected_index
            .and_then(|index| rewards.get(index))
            .map(|reward| reward.text.clone());

        match &self.selected {
            Some(text) => {
                info!("🎉 Wheel stopped at {:.1}° on '{}'", self.physics.angle(), text)
            }
            None => debug!("🎡 Wheel stopped with no rewards to pick"),
        }
    }

    /// Point on the rim at `degrees` clockwise from the top
    fn rim_point(&self, degrees: f32) -> egui::Pos2 {
        let radians = degrees.to_radians();
        self.center + egui::vec2(radians.sin(), -radians.cos()) * self.radius
    }

    fn draw_segments(&self, painter: &egui::Painter, count: usize) {
        match count {
            0 => {}
            1 => {
                let fill = CURRENT_THEME.wheel_segment_color(0);
                painter.circle_filled(self.center, self.radius, fill);
            }
            _ => {
                let segment = 360.0 / count as f32;
                let steps = (segment / ARC_STEP_DEGREES).ceil().max(1.0) as usize;

                for i in 0..count {
                    let start = self.physics.angle() + i as f32 * segment;
                    let mut points = Vec::with_capacity(steps + 2);
                    points.push(self.center);
                    let step = segment / steps as f32;
                    points.extend((0..=steps).map(|s| self.rim_point(start + step * s as f32)));

                    painter.add(egui::Shape::convex_polygon(
                        points,
                        CURRENT_THEME.wheel_segment_color(i),
                        egui::Stroke::NONE,
                    ));
                }
            }
        }
    }

    fn draw_pointer(&self, painter: &egui::Painter) {
        let top = self.center.y - self.radius;
        let points = vec![
            egui::pos2(self.center.x - 15.0, top - 25.0),
            egui::pos2(self.center.x + 15.0, top - 25.0),
            egui::pos2(self.center.x, top + 5.0),
        ];
        painter.add(egui::Shape::convex_polygon(
            points,
            CURRENT_THEME.wheel.pointer,
            egui::Stroke::NONE,
        ));
    }
}

impl Widget for SpinningWheel {
    fn render(&mut self, ctx: &RenderContext<'_>) {
        let colors = &CURRENT_THEME.wheel;

        self.draw_segments(ctx.painter, ctx.store.rewards.len());
        ctx.painter
            .circle_stroke(self.center, self.radius, egui::Stroke::new(3.0, colors.outline));
        self.draw_pointer(ctx.painter);

        if let Some(text) = &self.selected {
            ctx.painter.text(
                egui::pos2(ctx.canvas.center().x, ctx.canvas.bottom() - 50.0),
                egui::Align2::CENTER_CENTER,
                format!("You won: {}", text),
                egui::FontId::new(BODY_FONT_SIZE, egui::FontFamily::Proportional),
                colors.result_text,
            );
        }
    }

    fn handle_input(&mut self, event: &InputEvent, _store: &mut RecordStore) -> Option<Command> {
        if let Some(pos) = event.press_pos() {
            if !self.excluded.contains(pos) {
                self.start_spin();
            }
        }
        None
    }

    fn update(&mut self, dt: f32, store: &RecordStore) {
        if self.physics.advance(dt) {
            self.select(store.rewards.records());
        }
    }

    fn is_animating(&self) -> bool {
        self.physics.is_spinning()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ListConfig;
    use crate::ui::input::KeyInput;
    use rand::SeedableRng;

    fn wheel() -> SpinningWheel {
        SpinningWheel::new(
            egui::pos2(300.0, 200.0),
            150.0,
            egui::Rect::from_min_size(egui::pos2(5.0, 5.0), egui::vec2(50.0, 50.0)),
            WheelConfig::default(),
            StdRng::seed_from_u64(42),
        )
    }

    fn press(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerPressed { pos: egui::pos2(x, y), time_ms: 0 }
    }

    fn run_until_stopped(wheel: &mut SpinningWheel, store: &RecordStore) {
        for _ in 0..2_000 {
            wheel.update(1.0 / 60.0, store);
            if !wheel.is_animating() {
                return;
            }
        }
        panic!("wheel never stopped");
    }

    #[test]
    fn test_press_spins_wheel() {
        let mut store = RecordStore::new(&ListConfig::default());
        let mut wheel = wheel();

        // Presses outside the wheel itself count too
        wheel.handle_input(&press(580.0, 380.0), &mut store);
        assert!(wheel.is_animating());
    }

    #[test]
    fn test_home_press_and_keys_do_not_spin() {
        let mut store = RecordStore::new(&ListConfig::default());
        let mut wheel = wheel();

        wheel.handle_input(&press(20.0, 20.0), &mut store);
        wheel.handle_input(&InputEvent::Key(KeyInput::Enter), &mut store);
        assert!(!wheel.is_animating());
    }

    #[test]
    fn test_settled_wheel_selects_reward_under_pointer() {
        let mut store = RecordStore::new(&ListConfig::default());
        let mut wheel = wheel();

        wheel.handle_input(&press(300.0, 200.0), &mut store);
        run_until_stopped(&mut wheel, &store);

        let rewards = store.rewards.records();
        let expected = segment_index(wheel.physics().angle(), rewards.len());
        assert_eq!(wheel.selected_index(), expected);
        assert_eq!(
            wheel.selected(),
            expected.map(|i| rewards[i].text.as_str())
        );
    }

    #[test]
    fn test_no_rewards_selects_nothing() {
        let store =
            RecordStore::with_records(shared::default_tasks(), Vec::new(), &ListConfig::default());
        let mut wheel = wheel();

        wheel.start_spin();
        run_until_stopped(&mut wheel, &store);
        assert_eq!(wheel.selected(), None);
        assert_eq!(wheel.selected_index(), None);
    }

    #[test]
    fn test_single_reward_always_wins() {
        let rewards = vec![Reward::new("Chocolate")];
        let store = RecordStore::with_records(Vec::new(), rewards, &ListConfig::default());
        let mut wheel = wheel();

        wheel.start_spin();
        run_until_stopped(&mut wheel, &store);
        assert_eq!(wheel.selected(), Some("Chocolate"));
    }
}
