//! UI theme definitions.

use egui::{Color32, Visuals};
use serde::{Deserialize, Serialize};

use crate::workouts::WorkoutKind;

/// Theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark theme (default)
    #[default]
    Dark,
    /// Light theme
    Light,
}

impl Theme {
    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => Palette::DARK.apply(Visuals::dark()),
            Theme::Light => Palette::LIGHT.apply(Visuals::light()),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Dark => write!(f, "Dark"),
            Theme::Light => write!(f, "Light"),
        }
    }
}

/// Marker and list accent for the run-shaped kinds.
pub const RUN_ACCENT: Color32 = Color32::from_rgb(52, 168, 83);
/// Marker and list accent for cycling.
pub const CYCLE_ACCENT: Color32 = Color32::from_rgb(255, 140, 26);

/// Accent color for a workout kind, shared by markers and list entries.
pub fn kind_color(kind: WorkoutKind) -> Color32 {
    if kind.is_run_shaped() {
        RUN_ACCENT
    } else {
        CYCLE_ACCENT
    }
}

/// Named colors for one theme, applied on top of egui's base visuals.
struct Palette {
    background: Color32,
    panel: Color32,
    card: Color32,
    card_hover: Color32,
    text: Color32,
    text_dim: Color32,
    /// Text on accent-filled widgets
    text_on_accent: Color32,
    accent: Color32,
    border: Color32,
    /// Opacity of the accent when used as a selection fill
    selection_opacity: f32,
}

impl Palette {
    const DARK: Palette = Palette {
        background: Color32::from_rgb(18, 20, 26),
        panel: Color32::from_rgb(28, 30, 38),
        card: Color32::from_rgb(38, 40, 50),
        card_hover: Color32::from_rgb(50, 52, 64),
        text: Color32::from_rgb(240, 240, 245),
        text_dim: Color32::from_rgb(160, 162, 172),
        text_on_accent: Color32::from_rgb(240, 240, 245),
        accent: Color32::from_rgb(66, 133, 244),
        border: Color32::from_rgb(58, 60, 72),
        selection_opacity: 0.4,
    };

    const LIGHT: Palette = Palette {
        background: Color32::from_rgb(248, 249, 252),
        panel: Color32::from_rgb(255, 255, 255),
        card: Color32::from_rgb(243, 244, 248),
        card_hover: Color32::from_rgb(232, 234, 240),
        text: Color32::from_rgb(32, 34, 42),
        text_dim: Color32::from_rgb(96, 98, 108),
        text_on_accent: Color32::WHITE,
        accent: Color32::from_rgb(26, 115, 232),
        border: Color32::from_rgb(216, 218, 226),
        selection_opacity: 0.2,
    };

    fn apply(&self, mut visuals: Visuals) -> Visuals {
        visuals.window_fill = self.panel;
        visuals.panel_fill = self.panel;
        visuals.faint_bg_color = self.card;
        visuals.extreme_bg_color = self.background;

        visuals.widgets.noninteractive.bg_fill = self.card;
        visuals.widgets.inactive.bg_fill = self.card;
        visuals.widgets.hovered.bg_fill = self.card_hover;
        visuals.widgets.active.bg_fill = self.accent;

        visuals.selection.bg_fill = self.accent.linear_multiply(self.selection_opacity);
        visuals.selection.stroke.color = self.accent;

        visuals.widgets.noninteractive.fg_stroke.color = self.text;
        visuals.widgets.inactive.fg_stroke.color = self.text_dim;
        visuals.widgets.hovered.fg_stroke.color = self.text;
        visuals.widgets.active.fg_stroke.color = self.text_on_accent;

        visuals.widgets.noninteractive.bg_stroke.color = self.border;
        visuals.widgets.inactive.bg_stroke.color = self.border;

        visuals
    }
}
