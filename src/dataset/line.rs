use rust_decimal::Decimal;
use serde::Serialize;

use super::{Dataset, Series, SeriesStyle, StyledDataset};
use crate::core::value::push_value;
use crate::core::{
    BorderCapStyle, BorderJoinStyle, Color, CubicInterpolationMode, Fill, OneOrMany, PointStyle,
    SteppedLine,
};
use crate::json::is_unset;

/// A series drawn as a line through its points.
///
/// Point styling fields take one value for every point or one per point.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDataset {
    #[serde(flatten)]
    series: Series,
    #[serde(flatten)]
    style: SeriesStyle,
    #[serde(rename = "xAxisID", skip_serializing_if = "Option::is_none")]
    x_axis_id: Option<String>,
    #[serde(rename = "yAxisID", skip_serializing_if = "Option::is_none")]
    y_axis_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    border_dash: Vec<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    border_dash_offset: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    border_cap_style: Option<BorderCapStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    border_join_style: Option<BorderJoinStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cubic_interpolation_mode: Option<CubicInterpolationMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fill: Option<Fill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line_tension: Option<Decimal>,
    #[serde(skip_serializing_if = "is_unset")]
    point_background_color: Option<OneOrMany<Color>>,
    #[serde(skip_serializing_if = "is_unset")]
    point_border_color: Option<OneOrMany<Color>>,
    #[serde(skip_serializing_if = "is_unset")]
    point_border_width: Option<OneOrMany<Decimal>>,
    #[serde(skip_serializing_if = "is_unset")]
    point_radius: Option<OneOrMany<Decimal>>,
    #[serde(skip_serializing_if = "is_unset")]
    point_style: Option<OneOrMany<PointStyle>>,
    #[serde(skip_serializing_if = "is_unset")]
    point_hit_radius: Option<OneOrMany<Decimal>>,
    #[serde(skip_serializing_if = "is_unset")]
    point_hover_background_color: Option<OneOrMany<Color>>,
    #[serde(skip_serializing_if = "is_unset")]
    point_hover_border_color: Option<OneOrMany<Color>>,
    #[serde(skip_serializing_if = "is_unset")]
    point_hover_border_width: Option<OneOrMany<Decimal>>,
    #[serde(skip_serializing_if = "is_unset")]
    point_hover_radius: Option<OneOrMany<Decimal>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    show_line: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    span_gaps: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stepped_line: Option<SteppedLine>,
}

impl LineDataset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_x_axis_id(mut self, id: impl Into<String>) -> Self {
        self.x_axis_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_y_axis_id(mut self, id: impl Into<String>) -> Self {
        self.y_axis_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn border_dash(&self) -> &[Decimal] {
        &self.border_dash
    }

    /// Alternating dash and gap lengths in pixels; replaces the current
    /// pattern.
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
    pub fn add_border_dash(mut self, length: impl Into<Decimal>) -> Self {
        self.border_dash.push(length.into());
        self
    }

    #[must_use]
    pub fn with_border_dash_offset(mut self, offset: impl Into<Decimal>) -> Self {
        self.border_dash_offset = Some(offset.into());
        self
    }

    #[must_use]
    pub fn with_border_cap_style(mut self, style: BorderCapStyle) -> Self {
        self.border_cap_style = Some(style);
        self
    }

    #[must_use]
    pub fn with_border_join_style(mut self, style: BorderJoinStyle) -> Self {
        self.border_join_style = Some(style);
        self
    }

    #[must_use]
    pub fn with_cubic_interpolation_mode(mut self, mode: CubicInterpolationMode) -> Self {
        self.cubic_interpolation_mode = Some(mode);
        self
    }

    #[must_use]
    pub fn fill(&self) -> Option<Fill> {
        self.fill
    }

    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<Fill>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Bezier curve tension; `0` draws straight lines.
    #[must_use]
    pub fn with_line_tension(mut self, tension: impl Into<Decimal>) -> Self {
        self.line_tension = Some(tension.into());
        self
    }

    #[must_use]
    pub fn with_point_background_color(mut self, color: impl Into<OneOrMany<Color>>) -> Self {
        self.point_background_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn add_point_background_color(mut self, color: Color) -> Self {
        push_value(&mut self.point_background_color, color);
        self
    }

    #[must_use]
    pub fn with_point_border_color(mut self, color: impl Into<OneOrMany<Color>>) -> Self {
        self.point_border_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn add_point_border_color(mut self, color: Color) -> Self {
        push_value(&mut self.point_border_color, color);
        self
    }

    #[must_use]
    pub fn with_point_border_width(mut self, width: impl Into<OneOrMany<Decimal>>) -> Self {
        self.point_border_width = Some(width.into());
        self
    }

    #[must_use]
    pub fn add_point_border_width(mut self, width: impl Into<Decimal>) -> Self {
        push_value(&mut self.point_border_width, width.into());
        self
    }

    /// Point radius in pixels; `0` hides the points.
    #[must_use]
    pub fn with_point_radius(mut self, radius: impl Into<OneOrMany<Decimal>>) -> Self {
        self.point_radius = Some(radius.into());
        self
    }

    #[must_use]
    pub fn add_point_radius(mut self, radius: impl Into<Decimal>) -> Self {
        push_value(&mut self.point_radius, radius.into());
        self
    }

    #[must_use]
    pub fn with_point_style(mut self, style: impl Into<OneOrMany<PointStyle>>) -> Self {
        self.point_style = Some(style.into());
        self
    }

    #[must_use]
    pub fn add_point_style(mut self, style: PointStyle) -> Self {
        push_value(&mut self.point_style, style);
        self
    }

    #[must_use]
    pub fn with_point_hit_radius(mut self, radius: impl Into<OneOrMany<Decimal>>) -> Self {
        self.point_hit_radius = Some(radius.into());
        self
    }

    #[must_use]
    pub fn with_point_hover_background_color(
        mut self,
        color: impl Into<OneOrMany<Color>>,
    ) -> Self {
        self.point_hover_background_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn add_point_hover_background_color(mut self, color: Color) -> Self {
        push_value(&mut self.point_hover_background_color, color);
        self
    }

    #[must_use]
    pub fn with_point_hover_border_color(mut self, color: impl Into<OneOrMany<Color>>) -> Self {
        self.point_hover_border_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn add_point_hover_border_color(mut self, color: Color) -> Self {
        push_value(&mut self.point_hover_border_color, color);
        self
    }

    #[must_use]
    pub fn with_point_hover_border_width(mut self, width: impl Into<OneOrMany<Decimal>>) -> Self {
        self.point_hover_border_width = Some(width.into());
        self
    }

    #[must_use]
    pub fn with_point_hover_radius(mut self, radius: impl Into<OneOrMany<Decimal>>) -> Self {
        self.point_hover_radius = Some(radius.into());
        self
    }

    /// `false` draws only the points of this dataset.
    #[must_use]
    pub fn with_show_line(mut self, show: bool) -> Self {
        self.show_line = Some(show);
        self
    }

    /// Draws lines across missing (`null`) points instead of breaking.
    #[must_use]
    pub fn with_span_gaps(mut self, span: bool) -> Self {
        self.span_gaps = Some(span);
        self
    }

    #[must_use]
    pub fn with_stepped_line(mut self, stepped: impl Into<SteppedLine>) -> Self {
        self.stepped_line = Some(stepped.into());
        self
    }
}

impl Dataset for LineDataset {
    fn series(&self) -> &Series {
        &self.series
    }

    fn series_mut(&mut self) -> &mut Series {
        &mut self.series
    }
}

impl StyledDataset for LineDataset {
    fn style(&self) -> &SeriesStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut SeriesStyle {
        &mut self.style
    }
}
