use chartjs_config::core::{
    BorderCapStyle, Color, CubicInterpolationMode, Fill, PointStyle, SteppedLine, decimal_from_f64,
};
use chartjs_config::data::LineData;
use chartjs_config::dataset::{Dataset, LineDataset, StyledDataset};
use chartjs_config::options::{Axis, ChartOptions, LineOptions, Scales, Ticks};
use chartjs_config::{Chart, LineChart};
use rust_decimal::Decimal;
use serde_json::json;

fn yearly(label: &str, color: Color) -> LineDataset {
    LineDataset::new()
        .with_label(label)
        .with_border_color(color)
        .with_fill(false)
        .with_data([3, 1, 4, 1, 5])
}

#[test]
fn line_chart_serializes_datasets_and_labels_in_order() {
    let data = LineData::new()
        .add_dataset(yearly("2018", Color::RED))
        .add_dataset(yearly("2019", Color::GREEN))
        .add_labels(["January", "February", "March", "April", "May"]);
    let chart = LineChart::new(data, LineOptions::new());

    let value = chart.to_value().expect("chart value");
    assert_eq!(value["type"], json!("line"));
    assert_eq!(
        value["data"]["labels"],
        json!(["January", "February", "March", "April", "May"])
    );
    assert_eq!(
        value["data"]["datasets"][1],
        json!({
            "label": "2019",
            "data": [3, 1, 4, 1, 5],
            "borderColor": "rgba(0,128,0,1)",
            "fill": false
        })
    );
}

#[test]
fn float_data_keeps_short_decimal_digits() {
    let dataset = LineDataset::new()
        .try_with_data([0.1, 0.2, 1.5])
        .expect("float data")
        .try_add_data(0.3)
        .expect("float point")
        .try_add_data("12.50")
        .expect("string point");
    let chart = LineChart::default().with_data(LineData::new().add_dataset(dataset));

    let text = chart.to_json().expect("json");
    assert!(text.contains(r#""data":[0.1,0.2,1.5,0.3,12.50]"#), "{text}");
}

#[test]
fn malformed_float_input_fails_at_the_call_site() {
    assert!(LineDataset::new().try_with_data([1.0, f64::NAN]).is_err());
    assert!(LineDataset::new().try_add_data("twelve").is_err());
}

#[test]
fn point_styling_accepts_single_and_per_point_values() {
    let dataset = LineDataset::new()
        .with_point_radius(Decimal::from(4))
        .with_point_style(vec![PointStyle::Circle, PointStyle::RectRot])
        .add_point_background_color(Color::RED)
        .add_point_background_color(Color::BLUE)
        .with_border_dash([5, 5])
        .with_border_cap_style(BorderCapStyle::Round)
        .with_cubic_interpolation_mode(CubicInterpolationMode::Monotone)
        .with_line_tension(Decimal::ZERO)
        .with_stepped_line(SteppedLine::Before)
        .with_fill(Fill::Origin)
        .with_show_line(true)
        .with_y_axis_id("left");
    let chart = LineChart::default().with_data(LineData::new().add_dataset(dataset));

    let value = chart.to_value().expect("chart value");
    assert_eq!(
        value["data"]["datasets"][0],
        json!({
            "yAxisID": "left",
            "borderDash": [5, 5],
            "borderCapStyle": "round",
            "cubicInterpolationMode": "monotone",
            "fill": "origin",
            "lineTension": 0,
            "pointBackgroundColor": ["rgba(255,0,0,1)", "rgba(0,0,255,1)"],
            "pointRadius": 4,
            "pointStyle": ["circle", "rectRot"],
            "showLine": true,
            "steppedLine": "before"
        })
    );
}

#[test]
fn line_options_carry_scales_and_line_flags() {
    let scales = Scales::new().add_y_axis(
        Axis::new().with_ticks(
            Ticks::new()
                .with_suggested_min(0)
                .with_step_size(decimal_from_f64(0.5).expect("decimal")),
        ),
    );
    let options = LineOptions::new()
        .with_scales(scales)
        .with_span_gaps(true)
        .with_responsive(false);
    let chart = LineChart::default().with_options(options);

    let value = chart.to_value().expect("chart value");
    assert_eq!(
        value["options"],
        json!({
            "responsive": false,
            "scales": { "yAxes": [{ "ticks": { "suggestedMin": 0, "stepSize": 0.5 } }] },
            "spanGaps": true
        })
    );
    assert!(value["data"].as_object().expect("data object").is_empty());
    assert!(!chart.is_drawable());
}
