//! Root chart objects: a kind, one data container, one options container
//! and the ids of inline plugins.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::data::{BarData, LineData, PieData};
use crate::error::ChartResult;
use crate::json::{self, is_default};
use crate::options::{BarOptions, LineOptions, PieOptions};

/// Value of the top-level `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Bar,
    HorizontalBar,
    Line,
    Pie,
    Doughnut,
}

impl ChartKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::HorizontalBar => "horizontalBar",
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Doughnut => "doughnut",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Behavior shared by every chart kind, including the serialization entry
/// points.
pub trait Chart: Serialize {
    fn kind(&self) -> ChartKind;

    fn plugins(&self) -> &[String];

    fn plugins_mut(&mut self) -> &mut Vec<String>;

    /// Whether the chart has anything to draw: at least one dataset, each
    /// with at least one point. Labels are not checked.
    fn is_drawable(&self) -> bool;

    /// Replaces the plugin list.
    #[must_use]
    fn with_plugins<I>(mut self, plugins: I) -> Self
    where
        Self: Sized,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        *self.plugins_mut() = plugins.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    fn add_plugin(mut self, plugin: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.plugins_mut().push(plugin.into());
        self
    }

    fn to_json(&self) -> ChartResult<String> {
        let output = json::to_json(self)?;
        debug!(kind = %self.kind(), bytes = output.len(), "serialized chart");
        Ok(output)
    }

    fn to_json_pretty(&self) -> ChartResult<String> {
        let output = json::to_json_pretty(self)?;
        debug!(kind = %self.kind(), bytes = output.len(), "serialized chart (pretty)");
        Ok(output)
    }

    fn to_value(&self) -> ChartResult<Value> {
        json::to_value(self)
    }
}

fn log_undrawable(kind: ChartKind, drawable: bool) -> bool {
    if !drawable {
        debug!(%kind, "chart has no dataset with data points");
    }
    drawable
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    #[serde(rename = "type")]
    kind: ChartKind,
    data: BarData,
    #[serde(skip_serializing_if = "is_default")]
    options: BarOptions,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    plugins: Vec<String>,
}

impl BarChart {
    /// Vertical bars.
    #[must_use]
    pub fn new(data: BarData, options: BarOptions) -> Self {
        Self {
            kind: ChartKind::Bar,
            data,
            options,
            plugins: Vec::new(),
        }
    }

    /// Horizontal bars, categories along the y axis.
    #[must_use]
    pub fn horizontal(data: BarData, options: BarOptions) -> Self {
        Self {
            kind: ChartKind::HorizontalBar,
            ..Self::new(data, options)
        }
    }

    #[must_use]
    pub fn data(&self) -> &BarData {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut BarData {
        &mut self.data
    }

    #[must_use]
    pub fn with_data(mut self, data: BarData) -> Self {
        self.data = data;
        self
    }

    #[must_use]
    pub fn options(&self) -> &BarOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut BarOptions {
        &mut self.options
    }

    #[must_use]
    pub fn with_options(mut self, options: BarOptions) -> Self {
        self.options = options;
        self
    }
}

impl Default for BarChart {
    fn default() -> Self {
        Self::new(BarData::default(), BarOptions::default())
    }
}

impl Chart for BarChart {
    fn kind(&self) -> ChartKind {
        self.kind
    }

    fn plugins(&self) -> &[String] {
        &self.plugins
    }

    fn plugins_mut(&mut self) -> &mut Vec<String> {
        &mut self.plugins
    }

    fn is_drawable(&self) -> bool {
        log_undrawable(self.kind, self.data.has_plottable_data())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    #[serde(rename = "type")]
    kind: ChartKind,
    data: LineData,
    #[serde(skip_serializing_if = "is_default")]
    options: LineOptions,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    plugins: Vec<String>,
}

impl LineChart {
    #[must_use]
    pub fn new(data: LineData, options: LineOptions) -> Self {
        Self {
            kind: ChartKind::Line,
            data,
            options,
            plugins: Vec::new(),
        }
    }

    #[must_use]
    pub fn data(&self) -> &LineData {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut LineData {
        &mut self.data
    }

    #[must_use]
    pub fn with_data(mut self, data: LineData) -> Self {
        self.data = data;
        self
    }

    #[must_use]
    pub fn options(&self) -> &LineOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut LineOptions {
        &mut self.options
    }

    #[must_use]
    pub fn with_options(mut self, options: LineOptions) -> Self {
        self.options = options;
        self
    }
}

impl Default for LineChart {
    fn default() -> Self {
        Self::new(LineData::default(), LineOptions::default())
    }
}

impl Chart for LineChart {
    fn kind(&self) -> ChartKind {
        self.kind
    }

    fn plugins(&self) -> &[String] {
        &self.plugins
    }

    fn plugins_mut(&mut self) -> &mut Vec<String> {
        &mut self.plugins
    }

    fn is_drawable(&self) -> bool {
        log_undrawable(self.kind, self.data.has_plottable_data())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    #[serde(rename = "type")]
    kind: ChartKind,
    data: PieData,
    #[serde(skip_serializing_if = "is_default")]
    options: PieOptions,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    plugins: Vec<String>,
}

impl PieChart {
    #[must_use]
    pub fn new(data: PieData, options: PieOptions) -> Self {
        Self {
            kind: ChartKind::Pie,
            data,
            options,
            plugins: Vec::new(),
        }
    }

    /// A pie with its center cut out.
    #[must_use]
    pub fn doughnut(data: PieData, options: PieOptions) -> Self {
        Self {
            kind: ChartKind::Doughnut,
            ..Self::new(data, options)
        }
    }

    #[must_use]
    pub fn data(&self) -> &PieData {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut PieData {
        &mut self.data
    }

    #[must_use]
    pub fn with_data(mut self, data: PieData) -> Self {
        self.data = data;
        self
    }

    #[must_use]
    pub fn options(&self) -> &PieOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut PieOptions {
        &mut self.options
    }

    #[must_use]
    pub fn with_options(mut self, options: PieOptions) -> Self {
        self.options = options;
        self
    }
}

impl Default for PieChart {
    fn default() -> Self {
        Self::new(PieData::default(), PieOptions::default())
    }
}

impl Chart for PieChart {
    fn kind(&self) -> ChartKind {
        self.kind
    }

    fn plugins(&self) -> &[String] {
        &self.plugins
    }

    fn plugins_mut(&mut self) -> &mut Vec<String> {
        &mut self.plugins
    }

    fn is_drawable(&self) -> bool {
        log_undrawable(self.kind, self.data.has_plottable_data())
    }
}
