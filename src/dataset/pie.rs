use rust_decimal::Decimal;
use serde::Serialize;

use super::{Dataset, Series, SeriesStyle, StyledDataset};
use crate::core::BorderAlign;

/// A series drawn as arcs of a pie or doughnut.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieDataset {
    #[serde(flatten)]
    series: Series,
    #[serde(flatten)]
    style: SeriesStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    border_align: Option<BorderAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    weight: Option<Decimal>,
}

impl PieDataset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_border_align(mut self, align: BorderAlign) -> Self {
        self.border_align = Some(align);
        self
    }

    /// Relative thickness of this ring among the chart's datasets.
    #[must_use]
    pub fn with_weight(mut self, weight: impl Into<Decimal>) -> Self {
        self.weight = Some(weight.into());
        self
    }
}

impl Dataset for PieDataset {
    fn series(&self) -> &Series {
        &self.series
    }

    fn series_mut(&mut self) -> &mut Series {
        &mut self.series
    }
}

impl StyledDataset for PieDataset {
    fn style(&self) -> &SeriesStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut SeriesStyle {
        &mut self.style
    }
}
