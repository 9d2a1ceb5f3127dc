use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::{Color, InteractionMode};

/// Where a tooltip is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TooltipPosition {
    Average,
    Nearest,
}

/// Directions used when computing distances for `nearest` interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InteractionAxis {
    X,
    Y,
    Xy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltips {
    #[serde(skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<InteractionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    intersect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<TooltipPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title_font_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title_font_size: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body_font_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body_font_size: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    footer_font_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    x_padding: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    y_padding: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    caret_size: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    corner_radius: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_colors: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    border_width: Option<Decimal>,
}

impl Tooltips {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Chart.js default: `nearest`.
    #[must_use]
    pub fn with_mode(mut self, mode: InteractionMode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub fn with_intersect(mut self, intersect: bool) -> Self {
        self.intersect = Some(intersect);
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: TooltipPosition) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_title_font_color(mut self, color: Color) -> Self {
        self.title_font_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_title_font_size(mut self, size: impl Into<Decimal>) -> Self {
        self.title_font_size = Some(size.into());
        self
    }

    #[must_use]
    pub fn with_body_font_color(mut self, color: Color) -> Self {
        self.body_font_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_body_font_size(mut self, size: impl Into<Decimal>) -> Self {
        self.body_font_size = Some(size.into());
        self
    }

    #[must_use]
    pub fn with_footer_font_color(mut self, color: Color) -> Self {
        self.footer_font_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_x_padding(mut self, padding: impl Into<Decimal>) -> Self {
        self.x_padding = Some(padding.into());
        self
    }

    #[must_use]
    pub fn with_y_padding(mut self, padding: impl Into<Decimal>) -> Self {
        self.y_padding = Some(padding.into());
        self
    }

    #[must_use]
    pub fn with_caret_size(mut self, size: impl Into<Decimal>) -> Self {
        self.caret_size = Some(size.into());
        self
    }

    #[must_use]
    pub fn with_corner_radius(mut self, radius: impl Into<Decimal>) -> Self {
        self.corner_radius = Some(radius.into());
        self
    }

    /// Draws the dataset color box next to each tooltip line.
    #[must_use]
    pub fn with_display_colors(mut self, display: bool) -> Self {
        self.display_colors = Some(display);
        self
    }

    #[must_use]
    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_border_width(mut self, width: impl Into<Decimal>) -> Self {
        self.border_width = Some(width.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hover {
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<InteractionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    intersect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    axis: Option<InteractionAxis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    animation_duration: Option<u32>,
}

impl Hover {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_mode(mut self, mode: InteractionMode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub fn with_intersect(mut self, intersect: bool) -> Self {
        self.intersect = Some(intersect);
        self
    }

    #[must_use]
    pub fn with_axis(mut self, axis: InteractionAxis) -> Self {
        self.axis = Some(axis);
        self
    }

    /// Milliseconds to animate hover style changes. Chart.js default: `400`.
    #[must_use]
    pub fn with_animation_duration(mut self, millis: u32) -> Self {
        self.animation_duration = Some(millis);
        self
    }
}
