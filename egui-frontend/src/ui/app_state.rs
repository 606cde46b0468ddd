//! # App State Module
//!
//! This module defines the central application state structure and its
//! initialization.
//!
//! ## Key Types:
//! - `TodoBingoApp` - Main application state struct
//!
//! ## Key Functions:
//! - `new()` - Load artwork and build every screen
//! - `handle_events()` - Route one frame of input to the popup or the active screen
//!
//! ## State Management:
//! All records live in the `RecordStore`; screens and widgets only hold layout
//! and transient view state and are handed the store when they need it.

use anyhow::Context;
use eframe::egui;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::assets::Assets;
use crate::config::AppConfig;
use crate::ui::commands::ScreenId;
use crate::ui::components::screen_layouts::build_screens;
use crate::ui::components::screen_manager::ScreenManager;
use crate::ui::components::styling::setup_garden_style;
use crate::ui::input::InputEvent;
use crate::ui::state::{ModalState, RecordStore};

/// Main application struct for the todo bingo app
pub struct TodoBingoApp {
    pub config: AppConfig,
    pub store: RecordStore,
    pub screens: ScreenManager,
    pub modal: ModalState,
    pub assets: Assets,
    /// Window title to send on the next frame
    pub pending_title: Option<&'static str>,
    /// Source of the popup's random reward
    pub rng: StdRng,
}

impl TodoBingoApp {
    /// Create the app: style the context, upload the artwork and open the menu
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> anyhow::Result<Self> {
        setup_garden_style(&cc.egui_ctx);

        let assets = Assets::load(&cc.egui_ctx, &config.assets_dir)
            .with_context(|| {
                format!("Failed to load artwork from {}", config.assets_dir.display())
            })?;

        Ok(Self::with_parts(config, assets, StdRng::from_entropy()))
    }

    /// Assemble the app from already-prepared parts
    pub fn with_parts(config: AppConfig, assets: Assets, mut rng: StdRng) -> Self {
        let store = RecordStore::new(&config.list);
        let screens = build_screens(&config, &mut rng);

        let mut app = Self {
            config,
            store,
            screens,
            modal: ModalState::new(),
            assets,
            pending_title: None,
            rng,
        };
        app.navigate_to(ScreenId::Menu);

        info!(
            "🚀 App ready with {} tasks and {} rewards",
            app.store.tasks.len(),
            app.store.rewards.len()
        );
        app
    }

    /// The fixed drawing area every layout is positioned in
    pub fn canvas_rect(&self) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(self.config.window.width, self.config.window.height),
        )
    }

    /// Feed input to the open popup, or to the active screen when none is open
    pub fn handle_events(&mut self, events: &[InputEvent]) {
        for event in events {
            if self.modal.is_open() {
                let command = self
                    .modal
                    .reward_popup
                    .as_ref()
                    .and_then(|popup| popup.handle_input(event));
                if let Some(command) = command {
                    self.dispatch(command);
                }
                continue;
            }

            for command in self.screens.handle_input(event, &mut self.store) {
                self.dispatch(command);
            }
        }
    }
}
