//! # Theme Configuration
//!
//! This module provides centralized color configuration for the app.
//! All drawing code should use these constants to keep the garden-green look
//! consistent across screens.
//!
//! ## Usage
//! ```rust
//! use crate::ui::components::theme::colors;
//!
//! painter.rect_filled(rect, 0.0, colors::SCREEN_BACKGROUND);
//! ```

use eframe::egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background and layout colors
    pub layout: LayoutColors,
    /// Menu and action button colors
    pub buttons: ButtonColors,
    /// Scrolling list colors
    pub list: ListColors,
    /// Bingo board colors
    pub bingo: BingoColors,
    /// Spinning wheel colors
    pub wheel: WheelColors,
}

#[derive(Debug, Clone)]
pub struct LayoutColors {
    /// Fill behind every screen
    pub screen_background: Color32,
    pub popup_background: Color32,
    pub popup_border: Color32,
}

#[derive(Debug, Clone)]
pub struct ButtonColors {
    pub fill: Color32,
    pub hover_fill: Color32,
    pub text: Color32,
    /// The "OK" button of the reward popup
    pub confirm_fill: Color32,
    pub confirm_hover_fill: Color32,
    pub confirm_text: Color32,
}

#[derive(Debug, Clone)]
pub struct ListColors {
    pub background: Color32,
    pub row_background: Color32,
    pub text: Color32,
    /// Text of completed records
    pub complete_text: Color32,
    /// Outline of the selected row and of the edit box
    pub selected_outline: Color32,
}

#[derive(Debug, Clone)]
pub struct BingoColors {
    pub marked: Color32,
    pub unmarked: Color32,
    pub border: Color32,
    pub text: Color32,
}

#[derive(Debug, Clone)]
pub struct WheelColors {
    /// Segment colors, cycled when there are more rewards than colors
    pub segments: [Color32; 5],
    pub outline: Color32,
    pub pointer: Color32,
    pub result_text: Color32,
}

/// The current active theme
pub const CURRENT_THEME: Theme = Theme {
    layout: LayoutColors {
        screen_background: Color32::from_rgb(114, 165, 119),
        popup_background: Color32::WHITE,
        popup_border: Color32::BLACK,
    },
    buttons: ButtonColors {
        fill: Color32::WHITE,
        hover_fill: Color32::from_rgb(200, 200, 200),
        text: Color32::BLACK,
        confirm_fill: Color32::from_rgb(0, 200, 0),
        confirm_hover_fill: Color32::from_rgb(0, 255, 0),
        confirm_text: Color32::WHITE,
    },
    list: ListColors {
        background: Color32::from_rgb(158, 198, 162),
        row_background: Color32::WHITE,
        text: Color32::BLACK,
        complete_text: Color32::from_rgb(0, 0, 255),
        selected_outline: Color32::from_rgb(0, 255, 0),
    },
    bingo: BingoColors {
        marked: Color32::from_rgb(0, 255, 0),
        unmarked: Color32::WHITE,
        border: Color32::BLACK,
        text: Color32::BLACK,
    },
    wheel: WheelColors {
        segments: [
            Color32::from_rgb(255, 0, 0),
            Color32::from_rgb(0, 255, 0),
            Color32::from_rgb(0, 0, 255),
            Color32::from_rgb(255, 255, 0),
            Color32::from_rgb(255, 165, 0),
        ],
        outline: Color32::BLACK,
        pointer: Color32::BLACK,
        result_text: Color32::BLACK,
    },
};

impl Theme {
    /// Color of the wheel segment at `index`, cycling through the palette
    pub fn wheel_segment_color(&self, index: usize) -> Color32 {
        self.wheel.segments[index % self.wheel.segments.len()]
    }
}

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    pub const SCREEN_BACKGROUND: Color32 = CURRENT_THEME.layout.screen_background;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_segment_colors_cycle() {
        let theme = CURRENT_THEME;
        assert_eq!(theme.wheel_segment_color(0), Color32::from_rgb(255, 0, 0));
        assert_eq!(theme.wheel_segment_color(5), theme.wheel_segment_color(0));
        assert_eq!(theme.wheel_segment_color(7), Color32::from_rgb(0, 0, 255));
    }
}
