//! Rendering options: everything about a chart that is not data.
//!
//! [`BaseOptions`] holds the blocks every chart kind accepts. The per-kind
//! option structs flatten it and add their own fields; the shared builder
//! methods come from [`ChartOptions`].

mod animation;
mod interaction;
mod legend;
pub mod scales;

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use smallvec::SmallVec;

use crate::core::Event;
use crate::json::is_blank;

pub use animation::{Animation, Layout, Padding};
pub use interaction::{Hover, InteractionAxis, TooltipPosition, Tooltips};
pub use legend::{Legend, LegendLabels, Title};
pub use scales::{Axis, GridLines, ScaleLabel, Scales, Ticks};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    responsive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    responsive_animation_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    maintain_aspect_ratio: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    aspect_ratio: Option<Decimal>,
    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    events: SmallVec<[Event; 6]>,
    #[serde(skip_serializing_if = "is_blank")]
    title: Option<Title>,
    #[serde(skip_serializing_if = "is_blank")]
    legend: Option<Legend>,
    #[serde(skip_serializing_if = "is_blank")]
    tooltips: Option<Tooltips>,
    #[serde(skip_serializing_if = "is_blank")]
    hover: Option<Hover>,
    #[serde(skip_serializing_if = "is_blank")]
    animation: Option<Animation>,
    #[serde(skip_serializing_if = "is_blank")]
    layout: Option<Layout>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    plugins: IndexMap<String, Value>,
}

impl BaseOptions {
    #[must_use]
    pub fn title(&self) -> Option<&Title> {
        self.title.as_ref()
    }

    #[must_use]
    pub fn legend(&self) -> Option<&Legend> {
        self.legend.as_ref()
    }

    #[must_use]
    pub fn tooltips(&self) -> Option<&Tooltips> {
        self.tooltips.as_ref()
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Per-plugin configuration in insertion order.
    #[must_use]
    pub fn plugins(&self) -> &IndexMap<String, Value> {
        &self.plugins
    }
}

/// Builder surface shared by every options kind.
pub trait ChartOptions {
    fn base(&self) -> &BaseOptions;

    fn base_mut(&mut self) -> &mut BaseOptions;

    /// Resizes the chart canvas when its container resizes. Chart.js
    /// default: `true`.
    #[must_use]
    fn with_responsive(mut self, responsive: bool) -> Self
    where
        Self: Sized,
    {
        self.base_mut().responsive = Some(responsive);
        self
    }

    #[must_use]
    fn with_responsive_animation_duration(mut self, millis: u32) -> Self
    where
        Self: Sized,
    {
        self.base_mut().responsive_animation_duration = Some(millis);
        self
    }

    #[must_use]
    fn with_maintain_aspect_ratio(mut self, maintain: bool) -> Self
    where
        Self: Sized,
    {
        self.base_mut().maintain_aspect_ratio = Some(maintain);
        self
    }

    /// Canvas width divided by height. Chart.js default: `2`.
    #[must_use]
    fn with_aspect_ratio(mut self, ratio: impl Into<Decimal>) -> Self
    where
        Self: Sized,
    {
        self.base_mut().aspect_ratio = Some(ratio.into());
        self
    }

    /// Replaces the browser events the chart listens to.
    #[must_use]
    fn with_events(mut self, events: impl IntoIterator<Item = Event>) -> Self
    where
        Self: Sized,
    {
        self.base_mut().events = events.into_iter().collect();
        self
    }

    #[must_use]
    fn add_event(mut self, event: Event) -> Self
    where
        Self: Sized,
    {
        self.base_mut().events.push(event);
        self
    }

    #[must_use]
    fn with_title(mut self, title: Title) -> Self
    where
        Self: Sized,
    {
        self.base_mut().title = Some(title);
        self
    }

    #[must_use]
    fn with_legend(mut self, legend: Legend) -> Self
    where
        Self: Sized,
    {
        self.base_mut().legend = Some(legend);
        self
    }

    #[must_use]
    fn with_tooltips(mut self, tooltips: Tooltips) -> Self
    where
        Self: Sized,
    {
        self.base_mut().tooltips = Some(tooltips);
        self
    }

    #[must_use]
    fn with_hover(mut self, hover: Hover) -> Self
    where
        Self: Sized,
    {
        self.base_mut().hover = Some(hover);
        self
    }

    #[must_use]
    fn with_animation(mut self, animation: Animation) -> Self
    where
        Self: Sized,
    {
        self.base_mut().animation = Some(animation);
        self
    }

    #[must_use]
    fn with_layout(mut self, layout: Layout) -> Self
    where
        Self: Sized,
    {
        self.base_mut().layout = Some(layout);
        self
    }

    /// Sets the configuration object of one plugin, replacing any previous
    /// configuration under the same id.
    #[must_use]
    fn with_plugin_config(mut self, id: impl Into<String>, config: Value) -> Self
    where
        Self: Sized,
    {
        self.base_mut().plugins.insert(id.into(), config);
        self
    }

    /// Turns a globally registered plugin off for this chart.
    #[must_use]
    fn disable_plugin(self, id: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.with_plugin_config(id, Value::Bool(false))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BarOptions {
    #[serde(flatten)]
    base: BaseOptions,
    #[serde(skip_serializing_if = "is_blank")]
    scales: Option<Scales>,
}

impl BarOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn scales(&self) -> Option<&Scales> {
        self.scales.as_ref()
    }

    #[must_use]
    pub fn with_scales(mut self, scales: Scales) -> Self {
        self.scales = Some(scales);
        self
    }
}

impl ChartOptions for BarOptions {
    fn base(&self) -> &BaseOptions {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseOptions {
        &mut self.base
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineOptions {
    #[serde(flatten)]
    base: BaseOptions,
    #[serde(skip_serializing_if = "is_blank")]
    scales: Option<Scales>,
    #[serde(skip_serializing_if = "Option::is_none")]
    show_lines: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    span_gaps: Option<bool>,
}

impl LineOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn scales(&self) -> Option<&Scales> {
        self.scales.as_ref()
    }

    #[must_use]
    pub fn with_scales(mut self, scales: Scales) -> Self {
        self.scales = Some(scales);
        self
    }

    /// `false` draws only points, for every dataset.
    #[must_use]
    pub fn with_show_lines(mut self, show: bool) -> Self {
        self.show_lines = Some(show);
        self
    }

    #[must_use]
    pub fn with_span_gaps(mut self, span: bool) -> Self {
        self.span_gaps = Some(span);
        self
    }
}

impl ChartOptions for LineOptions {
    fn base(&self) -> &BaseOptions {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseOptions {
        &mut self.base
    }
}

/// Options for pie and doughnut charts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieOptions {
    #[serde(flatten)]
    base: BaseOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    cutout_percentage: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rotation: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    circumference: Option<Decimal>,
}

impl PieOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage of the radius cut out of the middle. Chart.js default:
    /// `0` for pie, `50` for doughnut.
    #[must_use]
    pub fn with_cutout_percentage(mut self, percentage: impl Into<Decimal>) -> Self {
        self.cutout_percentage = Some(percentage.into());
        self
    }

    /// Starting angle in radians.
    #[must_use]
    pub fn with_rotation(mut self, radians: impl Into<Decimal>) -> Self {
        self.rotation = Some(radians.into());
        self
    }

    /// Sweep in radians.
    #[must_use]
    pub fn with_circumference(mut self, radians: impl Into<Decimal>) -> Self {
        self.circumference = Some(radians.into());
        self
    }
}

impl ChartOptions for PieOptions {
    fn base(&self) -> &BaseOptions {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseOptions {
        &mut self.base
    }
}
