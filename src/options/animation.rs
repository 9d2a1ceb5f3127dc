use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::Easing;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    easing: Option<Easing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    animate_rotate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    animate_scale: Option<bool>,
}

impl Animation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Chart.js default: `1000` milliseconds.
    #[must_use]
    pub fn with_duration(mut self, millis: u32) -> Self {
        self.duration = Some(millis);
        self
    }

    /// Chart.js default: `easeOutQuart`.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    /// Pie and doughnut only: animate arcs sweeping in.
    #[must_use]
    pub fn with_animate_rotate(mut self, animate: bool) -> Self {
        self.animate_rotate = Some(animate);
        self
    }

    /// Pie and doughnut only: animate scaling from the center.
    #[must_use]
    pub fn with_animate_scale(mut self, animate: bool) -> Self {
        self.animate_scale = Some(animate);
        self
    }
}

/// Space around the chart area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Padding {
    Uniform(Decimal),
    Sides {
        left: Decimal,
        right: Decimal,
        top: Decimal,
        bottom: Decimal,
    },
}

impl Padding {
    #[must_use]
    pub fn uniform(pixels: impl Into<Decimal>) -> Self {
        Self::Uniform(pixels.into())
    }

    #[must_use]
    pub fn sides(
        left: impl Into<Decimal>,
        right: impl Into<Decimal>,
        top: impl Into<Decimal>,
        bottom: impl Into<Decimal>,
    ) -> Self {
        Self::Sides {
            left: left.into(),
            right: right.into(),
            top: top.into(),
            bottom: bottom.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    padding: Option<Padding>,
}

impl Layout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }
}
