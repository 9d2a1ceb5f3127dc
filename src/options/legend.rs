use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::{Color, FontStyle, OneOrMany, Position};
use crate::json::{is_blank, is_unset};

/// Chart title block.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    #[serde(skip_serializing_if = "Option::is_none")]
    display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_size: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    padding: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line_height: Option<Decimal>,
    #[serde(skip_serializing_if = "is_unset")]
    text: Option<OneOrMany<String>>,
}

impl Title {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Chart.js default: `false`.
    #[must_use]
    pub fn with_display(mut self, display: bool) -> Self {
        self.display = Some(display);
        self
    }

    /// Chart.js default: `top`.
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn with_font_size(mut self, size: impl Into<Decimal>) -> Self {
        self.font_size = Some(size.into());
        self
    }

    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    #[must_use]
    pub fn with_font_color(mut self, color: Color) -> Self {
        self.font_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_font_style(mut self, style: FontStyle) -> Self {
        self.font_style = Some(style);
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: impl Into<Decimal>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    #[must_use]
    pub fn with_line_height(mut self, line_height: impl Into<Decimal>) -> Self {
        self.line_height = Some(line_height.into());
        self
    }

    /// Title text; a list renders one line per entry.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(OneOrMany::One(text.into()));
        self
    }

    #[must_use]
    pub fn with_lines<I>(mut self, lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.text = Some(OneOrMany::Many(lines.into_iter().map(Into::into).collect()));
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    #[serde(skip_serializing_if = "Option::is_none")]
    display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    full_width: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reverse: Option<bool>,
    #[serde(skip_serializing_if = "is_blank")]
    labels: Option<LegendLabels>,
}

impl Legend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Chart.js default: `true`.
    #[must_use]
    pub fn with_display(mut self, display: bool) -> Self {
        self.display = Some(display);
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Whether the legend takes the full canvas width.
    #[must_use]
    pub fn with_full_width(mut self, full_width: bool) -> Self {
        self.full_width = Some(full_width);
        self
    }

    /// Shows datasets in reverse order.
    #[must_use]
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = Some(reverse);
        self
    }

    #[must_use]
    pub fn labels(&self) -> Option<&LegendLabels> {
        self.labels.as_ref()
    }

    #[must_use]
    pub fn with_labels(mut self, labels: LegendLabels) -> Self {
        self.labels = Some(labels);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabels {
    #[serde(skip_serializing_if = "Option::is_none")]
    box_width: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_size: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    padding: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    use_point_style: Option<bool>,
}

impl LegendLabels {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Width of the colored box. Chart.js default: `40`.
    #[must_use]
    pub fn with_box_width(mut self, width: impl Into<Decimal>) -> Self {
        self.box_width = Some(width.into());
        self
    }

    #[must_use]
    pub fn with_font_size(mut self, size: impl Into<Decimal>) -> Self {
        self.font_size = Some(size.into());
        self
    }

    #[must_use]
    pub fn with_font_style(mut self, style: FontStyle) -> Self {
        self.font_style = Some(style);
        self
    }

    #[must_use]
    pub fn with_font_color(mut self, color: Color) -> Self {
        self.font_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: impl Into<Decimal>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    /// Uses the dataset point style instead of a box.
    #[must_use]
    pub fn with_use_point_style(mut self, use_point_style: bool) -> Self {
        self.use_point_style = Some(use_point_style);
        self
    }
}
