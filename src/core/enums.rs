//! Symbolic keywords accepted by Chart.js, serialized with its exact casing.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Position {
    Top,
    Left,
    Bottom,
    Right,
    ChartArea,
}

/// Bar edge left without a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BorderSkipped {
    Bottom,
    Left,
    Top,
    Right,
}

/// Which elements take part in hover and tooltip interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InteractionMode {
    Point,
    Nearest,
    Index,
    Dataset,
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInExpo,
    EaseOutExpo,
    EaseInOutExpo,
    EaseInCirc,
    EaseOutCirc,
    EaseInOutCirc,
    EaseInElastic,
    EaseOutElastic,
    EaseInOutElastic,
    EaseInBack,
    EaseOutBack,
    EaseInOutBack,
    EaseInBounce,
    EaseOutBounce,
    EaseInOutBounce,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisType {
    Category,
    Linear,
    Logarithmic,
    Time,
    RadialLinear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FontStyle {
    Normal,
    Bold,
    Italic,
    #[serde(rename = "bold italic")]
    BoldItalic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PointStyle {
    Circle,
    Cross,
    CrossRot,
    Dash,
    Line,
    Rect,
    RectRounded,
    RectRot,
    Star,
    Triangle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BorderCapStyle {
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BorderJoinStyle {
    Bevel,
    Round,
    Miter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CubicInterpolationMode {
    Default,
    Monotone,
}

/// Stroke alignment of pie and doughnut arcs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BorderAlign {
    Center,
    Inner,
}

/// Browser events the chart listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Event {
    Mousemove,
    Mouseout,
    Click,
    Touchstart,
    Touchmove,
    Touchend,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{AxisType, Easing, FontStyle, InteractionMode, PointStyle, Position};

    #[test]
    fn keywords_use_chartjs_casing() {
        let values = serde_json::to_value((
            Position::ChartArea,
            Easing::EaseInOutQuad,
            AxisType::RadialLinear,
            PointStyle::RectRot,
            InteractionMode::X,
            FontStyle::BoldItalic,
        ))
        .expect("keywords");
        assert_eq!(
            values,
            json!(["chartArea", "easeInOutQuad", "radialLinear", "rectRot", "x", "bold italic"])
        );
    }
}
