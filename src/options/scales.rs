//! Cartesian axes for bar and line charts.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::trace;

use crate::core::{AxisType, Color, FontStyle, OneOrMany, Position};
use crate::dataset::BarThickness;
use crate::json::{is_blank, is_unset};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scales {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    x_axes: Vec<Axis>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    y_axes: Vec<Axis>,
}

impl Scales {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn x_axes(&self) -> &[Axis] {
        &self.x_axes
    }

    #[must_use]
    pub fn y_axes(&self) -> &[Axis] {
        &self.y_axes
    }

    /// Replaces every x axis.
    #[must_use]
    pub fn with_x_axes(mut self, axes: impl IntoIterator<Item = Axis>) -> Self {
        self.x_axes = axes.into_iter().collect();
        trace!(count = self.x_axes.len(), "replace x axes");
        self
    }

    #[must_use]
    pub fn add_x_axis(mut self, axis: Axis) -> Self {
        self.x_axes.push(axis);
        self
    }

    /// Replaces every y axis.
    #[must_use]
    pub fn with_y_axes(mut self, axes: impl IntoIterator<Item = Axis>) -> Self {
        self.y_axes = axes.into_iter().collect();
        trace!(count = self.y_axes.len(), "replace y axes");
        self
    }

    #[must_use]
    pub fn add_y_axis(mut self, axis: Axis) -> Self {
        self.y_axes.push(axis);
        self
    }
}

/// One axis; `type` selects category, linear, logarithmic or time scaling.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    axis_type: Option<AxisType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stacked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bar_percentage: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category_percentage: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bar_thickness: Option<BarThickness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_bar_thickness: Option<Decimal>,
    #[serde(skip_serializing_if = "is_blank")]
    grid_lines: Option<GridLines>,
    #[serde(skip_serializing_if = "is_blank")]
    scale_label: Option<ScaleLabel>,
    #[serde(skip_serializing_if = "is_blank")]
    ticks: Option<Ticks>,
}

impl Axis {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_type(mut self, axis_type: AxisType) -> Self {
        self.axis_type = Some(axis_type);
        self
    }

    #[must_use]
    pub fn with_display(mut self, display: bool) -> Self {
        self.display = Some(display);
        self
    }

    /// Identifier referenced by a dataset's `xAxisID`/`yAxisID`.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn stacked(&self) -> Option<bool> {
        self.stacked
    }

    /// Stacks the datasets plotted on this axis. Chart.js default: `false`.
    #[must_use]
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = Some(stacked);
        self
    }

    /// Adds half a category of space at both edges.
    #[must_use]
    pub fn with_offset(mut self, offset: bool) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn with_bar_percentage(mut self, percentage: impl Into<Decimal>) -> Self {
        self.bar_percentage = Some(percentage.into());
        self
    }

    #[must_use]
    pub fn with_category_percentage(mut self, percentage: impl Into<Decimal>) -> Self {
        self.category_percentage = Some(percentage.into());
        self
    }

    #[must_use]
    pub fn with_bar_thickness(mut self, thickness: BarThickness) -> Self {
        self.bar_thickness = Some(thickness);
        self
    }

    #[must_use]
    pub fn with_max_bar_thickness(mut self, pixels: impl Into<Decimal>) -> Self {
        self.max_bar_thickness = Some(pixels.into());
        self
    }

    #[must_use]
    pub fn with_grid_lines(mut self, grid_lines: GridLines) -> Self {
        self.grid_lines = Some(grid_lines);
        self
    }

    #[must_use]
    pub fn with_scale_label(mut self, label: ScaleLabel) -> Self {
        self.scale_label = Some(label);
        self
    }

    #[must_use]
    pub fn with_ticks(mut self, ticks: Ticks) -> Self {
        self.ticks = Some(ticks);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLines {
    #[serde(skip_serializing_if = "Option::is_none")]
    display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    circular: Option<bool>,
    #[serde(skip_serializing_if = "is_unset")]
    color: Option<OneOrMany<Color>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    border_dash: Vec<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    border_dash_offset: Option<Decimal>,
    #[serde(skip_serializing_if = "is_unset")]
    line_width: Option<OneOrMany<Decimal>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    draw_border: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    draw_on_chart_area: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    draw_ticks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tick_mark_length: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    zero_line_width: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    zero_line_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    offset_grid_lines: Option<bool>,
}

impl GridLines {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_display(mut self, display: bool) -> Self {
        self.display = Some(display);
        self
    }

    /// Radar charts only: circular grid instead of polygons.
    #[must_use]
    pub fn with_circular(mut self, circular: bool) -> Self {
        self.circular = Some(circular);
        self
    }

    /// One color for every line, or one per line starting at the first.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<OneOrMany<Color>>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_border_dash<I>(mut self, dash: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Decimal>,
    {
        self.border_dash = dash.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_border_dash_offset(mut self, offset: impl Into<Decimal>) -> Self {
        self.border_dash_offset = Some(offset.into());
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, width: impl Into<OneOrMany<Decimal>>) -> Self {
        self.line_width = Some(width.into());
        self
    }

    #[must_use]
    pub fn with_draw_border(mut self, draw: bool) -> Self {
        self.draw_border = Some(draw);
        self
    }

    #[must_use]
    pub fn with_draw_on_chart_area(mut self, draw: bool) -> Self {
        self.draw_on_chart_area = Some(draw);
        self
    }

    #[must_use]
    pub fn with_draw_ticks(mut self, draw: bool) -> Self {
        self.draw_ticks = Some(draw);
        self
    }

    #[must_use]
    pub fn with_tick_mark_length(mut self, length: impl Into<Decimal>) -> Self {
        self.tick_mark_length = Some(length.into());
        self
    }

    #[must_use]
    pub fn with_zero_line_width(mut self, width: impl Into<Decimal>) -> Self {
        self.zero_line_width = Some(width.into());
        self
    }

    #[must_use]
    pub fn with_zero_line_color(mut self, color: Color) -> Self {
        self.zero_line_color = Some(color);
        self
    }

    /// Shifts grid lines between labels. Chart.js default: `true` for bar
    /// charts.
    #[must_use]
    pub fn with_offset_grid_lines(mut self, offset: bool) -> Self {
        self.offset_grid_lines = Some(offset);
        self
    }
}

/// Title drawn along an axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleLabel {
    #[serde(skip_serializing_if = "Option::is_none")]
    display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line_height: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_size: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    padding: Option<Decimal>,
}

impl ScaleLabel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_display(mut self, display: bool) -> Self {
        self.display = Some(display);
        self
    }

    #[must_use]
    pub fn with_label_string(mut self, label: impl Into<String>) -> Self {
        self.label_string = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_line_height(mut self, line_height: impl Into<Decimal>) -> Self {
        self.line_height = Some(line_height.into());
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
    pub fn with_padding(mut self, padding: impl Into<Decimal>) -> Self {
        self.padding = Some(padding.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    #[serde(skip_serializing_if = "Option::is_none")]
    display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    begin_at_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggested_min: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggested_max: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    step_size: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_ticks_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    precision: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reverse: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_skip: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_skip_padding: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_size: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    padding: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label_offset: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_rotation: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_rotation: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mirror: Option<bool>,
}

impl Ticks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_display(mut self, display: bool) -> Self {
        self.display = Some(display);
        self
    }

    /// Linear scales only: include `0` in the range.
    #[must_use]
    pub fn with_begin_at_zero(mut self, begin_at_zero: bool) -> Self {
        self.begin_at_zero = Some(begin_at_zero);
        self
    }

    #[must_use]
    pub fn with_min(mut self, min: impl Into<Decimal>) -> Self {
        self.min = Some(min.into());
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: impl Into<Decimal>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Lower bound used unless the data goes below it.
    #[must_use]
    pub fn with_suggested_min(mut self, min: impl Into<Decimal>) -> Self {
        self.suggested_min = Some(min.into());
        self
    }

    /// Upper bound used unless the data goes above it.
    #[must_use]
    pub fn with_suggested_max(mut self, max: impl Into<Decimal>) -> Self {
        self.suggested_max = Some(max.into());
        self
    }

    #[must_use]
    pub fn with_step_size(mut self, step: impl Into<Decimal>) -> Self {
        self.step_size = Some(step.into());
        self
    }

    /// Chart.js default: `11`.
    #[must_use]
    pub fn with_max_ticks_limit(mut self, limit: u32) -> Self {
        self.max_ticks_limit = Some(limit);
        self
    }

    /// Rounds generated tick values to this many decimal places.
    #[must_use]
    pub fn with_precision(mut self, places: u32) -> Self {
        self.precision = Some(places);
        self
    }

    #[must_use]
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = Some(reverse);
        self
    }

    #[must_use]
    pub fn with_auto_skip(mut self, auto_skip: bool) -> Self {
        self.auto_skip = Some(auto_skip);
        self
    }

    #[must_use]
    pub fn with_auto_skip_padding(mut self, padding: impl Into<Decimal>) -> Self {
        self.auto_skip_padding = Some(padding.into());
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
    pub fn with_padding(mut self, padding: impl Into<Decimal>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    #[must_use]
    pub fn with_label_offset(mut self, offset: impl Into<Decimal>) -> Self {
        self.label_offset = Some(offset.into());
        self
    }

    #[must_use]
    pub fn with_min_rotation(mut self, degrees: impl Into<Decimal>) -> Self {
        self.min_rotation = Some(degrees.into());
        self
    }

    #[must_use]
    pub fn with_max_rotation(mut self, degrees: impl Into<Decimal>) -> Self {
        self.max_rotation = Some(degrees.into());
        self
    }

    /// Draws tick labels inside the chart area.
    #[must_use]
    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = Some(mirror);
        self
    }
}
