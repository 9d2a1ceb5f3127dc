use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use super::{Dataset, Series, SeriesStyle, StyledDataset};
use crate::core::value::push_value;
use crate::core::{BorderSkipped, OneOrMany, ToDecimal};
use crate::error::{ChartError, ChartResult};
use crate::json::is_unset;

const FLEX: &str = "flex";

/// Width of each bar.
///
/// `Fixed` is a width in pixels; `Flex` lets the chart compute widths that
/// arrange bars side by side. Left unset, bars are sized from the smallest
/// interval. Serializes as a bare number or the string `"flex"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarThickness {
    Fixed(Decimal),
    Flex,
}

impl BarThickness {
    /// A fixed width in pixels; must be strictly positive.
    pub fn fixed(pixels: impl ToDecimal) -> ChartResult<Self> {
        let pixels = pixels.to_decimal()?;
        if pixels <= Decimal::ZERO {
            return Err(ChartError::InvalidInput(format!(
                "bar thickness must be > 0, got {pixels}"
            )));
        }
        Ok(Self::Fixed(pixels))
    }

    #[must_use]
    pub const fn flex() -> Self {
        Self::Flex
    }

    #[must_use]
    pub fn pixels(&self) -> Option<Decimal> {
        match self {
            Self::Fixed(pixels) => Some(*pixels),
            Self::Flex => None,
        }
    }

    #[must_use]
    pub fn is_flex(&self) -> bool {
        matches!(self, Self::Flex)
    }

    pub fn set_pixels(&mut self, pixels: impl ToDecimal) -> ChartResult<()> {
        *self = Self::fixed(pixels)?;
        Ok(())
    }

    pub fn set_flex(&mut self) {
        *self = Self::Flex;
    }
}

impl Serialize for BarThickness {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Fixed(pixels) => Serialize::serialize(pixels, serializer),
            Self::Flex => serializer.serialize_str(FLEX),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarDataset {
    #[serde(flatten)]
    series: Series,
    #[serde(flatten)]
    style: SeriesStyle,
    #[serde(rename = "xAxisID", skip_serializing_if = "Option::is_none")]
    x_axis_id: Option<String>,
    #[serde(rename = "yAxisID", skip_serializing_if = "Option::is_none")]
    y_axis_id: Option<String>,
    #[serde(skip_serializing_if = "is_unset")]
    border_skipped: Option<OneOrMany<BorderSkipped>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bar_percentage: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category_percentage: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bar_thickness: Option<BarThickness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_bar_thickness: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_bar_length: Option<Decimal>,
}

impl BarDataset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn x_axis_id(&self) -> Option<&str> {
        self.x_axis_id.as_deref()
    }

    /// The ID of the x axis to plot this dataset on.
    #[must_use]
    pub fn with_x_axis_id(mut self, id: impl Into<String>) -> Self {
        self.x_axis_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn y_axis_id(&self) -> Option<&str> {
        self.y_axis_id.as_deref()
    }

    /// The ID of the y axis to plot this dataset on.
    #[must_use]
    pub fn with_y_axis_id(mut self, id: impl Into<String>) -> Self {
        self.y_axis_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn border_skipped(&self) -> &[BorderSkipped] {
        self.border_skipped
            .as_ref()
            .map(OneOrMany::as_slice)
            .unwrap_or_default()
    }

    /// Which edge to skip drawing the border for, for every bar or per bar.
    #[must_use]
    pub fn with_border_skipped(mut self, edges: impl Into<OneOrMany<BorderSkipped>>) -> Self {
        self.border_skipped = Some(edges.into());
        self
    }

    #[must_use]
    pub fn add_border_skipped(mut self, edge: BorderSkipped) -> Self {
        push_value(&mut self.border_skipped, edge);
        self
    }

    #[must_use]
    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }

    /// The name of the stack the dataset appears in, for multi stack charts.
    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    #[must_use]
    pub fn bar_percentage(&self) -> Option<Decimal> {
        self.bar_percentage
    }

    /// Percent (0-1) of the available width each bar takes within the
    /// category width. Chart.js default: `0.9`.
    #[must_use]
    pub fn with_bar_percentage(mut self, percentage: impl Into<Decimal>) -> Self {
        self.bar_percentage = Some(percentage.into());
        self
    }

    #[must_use]
    pub fn category_percentage(&self) -> Option<Decimal> {
        self.category_percentage
    }

    /// Percent (0-1) of the available width each category takes within the
    /// sample width. Chart.js default: `0.8`.
    #[must_use]
    pub fn with_category_percentage(mut self, percentage: impl Into<Decimal>) -> Self {
        self.category_percentage = Some(percentage.into());
        self
    }

    #[must_use]
    pub fn bar_thickness(&self) -> Option<BarThickness> {
        self.bar_thickness
    }

    #[must_use]
    pub fn with_bar_thickness(mut self, thickness: BarThickness) -> Self {
        self.bar_thickness = Some(thickness);
        self
    }

    #[must_use]
    pub fn max_bar_thickness(&self) -> Option<Decimal> {
        self.max_bar_thickness
    }

    /// Bars are never drawn thicker than this many pixels.
    #[must_use]
    pub fn with_max_bar_thickness(mut self, pixels: impl Into<Decimal>) -> Self {
        self.max_bar_thickness = Some(pixels.into());
        self
    }

    #[must_use]
    pub fn min_bar_length(&self) -> Option<Decimal> {
        self.min_bar_length
    }

    /// Bars are always at least this many pixels long.
    #[must_use]
    pub fn with_min_bar_length(mut self, pixels: impl Into<Decimal>) -> Self {
        self.min_bar_length = Some(pixels.into());
        self
    }
}

impl Dataset for BarDataset {
    fn series(&self) -> &Series {
        &self.series
    }

    fn series_mut(&mut self) -> &mut Series {
        &mut self.series
    }
}

impl StyledDataset for BarDataset {
    fn style(&self) -> &SeriesStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut SeriesStyle {
        &mut self.style
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::json;

    use super::BarThickness;

    #[test]
    fn thickness_serializes_as_bare_number_or_keyword() {
        let fixed = BarThickness::fixed(24).expect("fixed");
        assert_eq!(serde_json::to_value(fixed).expect("fixed"), json!(24));
        assert_eq!(
            serde_json::to_value(BarThickness::flex()).expect("flex"),
            json!("flex")
        );
    }

    #[test]
    fn switching_thickness_replaces_previous_value() {
        let mut thickness = BarThickness::fixed(12).expect("fixed");
        assert_eq!(thickness.pixels(), Some(Decimal::from(12)));
        thickness.set_flex();
        assert!(thickness.is_flex());
        assert_eq!(thickness.pixels(), None);
        thickness.set_pixels(8.5).expect("pixels");
        assert!(!thickness.is_flex());
        assert_eq!(thickness.pixels(), Some(Decimal::new(85, 1)));
    }

    #[test]
    fn non_positive_thickness_is_rejected() {
        assert!(BarThickness::fixed(0).is_err());
        assert!(BarThickness::fixed(-2.0).is_err());
        assert!(BarThickness::fixed("wide").is_err());
    }
}
