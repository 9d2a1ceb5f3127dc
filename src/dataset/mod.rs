//! Datasets: one visual series each.
//!
//! Fields every series carries live in [`Series`] and [`SeriesStyle`]; the
//! per-kind structs flatten them into their own JSON object and expose the
//! shared builder methods through the [`Dataset`] and [`StyledDataset`]
//! traits, so chaining keeps the concrete type.

mod bar;
mod line;
mod pie;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::trace;

use crate::core::value::push_value;
use crate::core::{Color, OneOrMany, ToDecimal, decimals_from};
use crate::error::ChartResult;
use crate::json::is_unset;

pub use bar::{BarDataset, BarThickness};
pub use line::LineDataset;
pub use pie::PieDataset;

/// Label, data points and visibility of one series.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Series {
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    data: Vec<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hidden: Option<bool>,
}

impl Series {
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }

    #[must_use]
    pub fn data(&self) -> &[Decimal] {
        &self.data
    }

    /// Replaces every data point.
    pub fn set_data(&mut self, data: Vec<Decimal>) {
        trace!(
            previous_count = self.data.len(),
            count = data.len(),
            "replace dataset data"
        );
        self.data = data;
    }

    pub fn push_data(&mut self, value: Decimal) {
        self.data.push(value);
    }

    #[must_use]
    pub fn hidden(&self) -> Option<bool> {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = Some(hidden);
    }
}

/// Background, border and hover styling shared by bar, line and pie series.
///
/// Each field holds either one value for the whole series or one value per
/// data point.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesStyle {
    #[serde(skip_serializing_if = "is_unset")]
    background_color: Option<OneOrMany<Color>>,
    #[serde(skip_serializing_if = "is_unset")]
    border_color: Option<OneOrMany<Color>>,
    #[serde(skip_serializing_if = "is_unset")]
    border_width: Option<OneOrMany<Decimal>>,
    #[serde(skip_serializing_if = "is_unset")]
    hover_background_color: Option<OneOrMany<Color>>,
    #[serde(skip_serializing_if = "is_unset")]
    hover_border_color: Option<OneOrMany<Color>>,
    #[serde(skip_serializing_if = "is_unset")]
    hover_border_width: Option<OneOrMany<Decimal>>,
}

impl SeriesStyle {
    #[must_use]
    pub fn background_color(&self) -> Option<&OneOrMany<Color>> {
        self.background_color.as_ref()
    }

    #[must_use]
    pub fn border_color(&self) -> Option<&OneOrMany<Color>> {
        self.border_color.as_ref()
    }

    #[must_use]
    pub fn border_width(&self) -> Option<&OneOrMany<Decimal>> {
        self.border_width.as_ref()
    }

    #[must_use]
    pub fn hover_background_color(&self) -> Option<&OneOrMany<Color>> {
        self.hover_background_color.as_ref()
    }

    #[must_use]
    pub fn hover_border_color(&self) -> Option<&OneOrMany<Color>> {
        self.hover_border_color.as_ref()
    }

    #[must_use]
    pub fn hover_border_width(&self) -> Option<&OneOrMany<Decimal>> {
        self.hover_border_width.as_ref()
    }
}

/// Builder surface common to every dataset kind.
pub trait Dataset {
    fn series(&self) -> &Series;

    fn series_mut(&mut self) -> &mut Series;

    fn label(&self) -> Option<&str> {
        self.series().label()
    }

    fn data(&self) -> &[Decimal] {
        self.series().data()
    }

    /// The label for the dataset which appears in the legend and tooltips.
    #[must_use]
    fn with_label(mut self, label: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.series_mut().set_label(label);
        self
    }

    /// Replaces any data already set or added.
    #[must_use]
    fn with_data<I>(mut self, data: I) -> Self
    where
        Self: Sized,
        I: IntoIterator,
        I::Item: Into<Decimal>,
    {
        self.series_mut()
            .set_data(data.into_iter().map(Into::into).collect());
        self
    }

    /// Replaces any data already set or added, converting floats or strings
    /// through their exact decimal text.
    fn try_with_data<I>(mut self, data: I) -> ChartResult<Self>
    where
        Self: Sized,
        I: IntoIterator,
        I::Item: ToDecimal,
    {
        let data = decimals_from(data)?;
        self.series_mut().set_data(data);
        Ok(self)
    }

    #[must_use]
    fn add_data(mut self, value: impl Into<Decimal>) -> Self
    where
        Self: Sized,
    {
        self.series_mut().push_data(value.into());
        self
    }

    fn try_add_data(mut self, value: impl ToDecimal) -> ChartResult<Self>
    where
        Self: Sized,
    {
        let value = value.to_decimal()?;
        self.series_mut().push_data(value);
        Ok(self)
    }

    /// Hides the dataset until it is toggled on from the legend.
    #[must_use]
    fn with_hidden(mut self, hidden: bool) -> Self
    where
        Self: Sized,
    {
        self.series_mut().set_hidden(hidden);
        self
    }
}

/// Builder surface for datasets drawn with background, border and hover
/// styling.
///
/// `with_*` replaces the field with one value or a per-point list; `add_*`
/// appends one per-point value, turning a single value into a list.
pub trait StyledDataset: Dataset {
    fn style(&self) -> &SeriesStyle;

    fn style_mut(&mut self) -> &mut SeriesStyle;

    #[must_use]
    fn with_background_color(mut self, color: impl Into<OneOrMany<Color>>) -> Self
    where
        Self: Sized,
    {
        self.style_mut().background_color = Some(color.into());
        self
    }

    #[must_use]
    fn add_background_color(mut self, color: Color) -> Self
    where
        Self: Sized,
    {
        push_value(&mut self.style_mut().background_color, color);
        self
    }

    #[must_use]
    fn with_border_color(mut self, color: impl Into<OneOrMany<Color>>) -> Self
    where
        Self: Sized,
    {
        self.style_mut().border_color = Some(color.into());
        self
    }

    #[must_use]
    fn add_border_color(mut self, color: Color) -> Self
    where
        Self: Sized,
    {
        push_value(&mut self.style_mut().border_color, color);
        self
    }

    /// Stroke width in pixels.
    #[must_use]
    fn with_border_width(mut self, width: impl Into<OneOrMany<Decimal>>) -> Self
    where
        Self: Sized,
    {
        self.style_mut().border_width = Some(width.into());
        self
    }

    #[must_use]
    fn add_border_width(mut self, width: impl Into<Decimal>) -> Self
    where
        Self: Sized,
    {
        push_value(&mut self.style_mut().border_width, width.into());
        self
    }

    #[must_use]
    fn with_hover_background_color(mut self, color: impl Into<OneOrMany<Color>>) -> Self
    where
        Self: Sized,
    {
        self.style_mut().hover_background_color = Some(color.into());
        self
    }

    #[must_use]
    fn add_hover_background_color(mut self, color: Color) -> Self
    where
        Self: Sized,
    {
        push_value(&mut self.style_mut().hover_background_color, color);
        self
    }

    #[must_use]
    fn with_hover_border_color(mut self, color: impl Into<OneOrMany<Color>>) -> Self
    where
        Self: Sized,
    {
        self.style_mut().hover_border_color = Some(color.into());
        self
    }

    #[must_use]
    fn add_hover_border_color(mut self, color: Color) -> Self
    where
        Self: Sized,
    {
        push_value(&mut self.style_mut().hover_border_color, color);
        self
    }

    #[must_use]
    fn with_hover_border_width(mut self, width: impl Into<OneOrMany<Decimal>>) -> Self
    where
        Self: Sized,
    {
        self.style_mut().hover_border_width = Some(width.into());
        self
    }

    #[must_use]
    fn add_hover_border_width(mut self, width: impl Into<Decimal>) -> Self
    where
        Self: Sized,
    {
        push_value(&mut self.style_mut().hover_border_width, width.into());
        self
    }
}
