use chartjs_config::core::{BorderSkipped, Color, decimal_from_f64};
use chartjs_config::data::BarData;
use chartjs_config::dataset::{BarDataset, BarThickness, Dataset, StyledDataset};
use chartjs_config::options::{Axis, BarOptions, ChartOptions, GridLines, Scales, Ticks, Title};
use chartjs_config::{BarChart, Chart, ChartKind};
use serde_json::{Value, json};

fn stacked_dataset(label: &str, stack: &str, color: Color) -> BarDataset {
    BarDataset::new()
        .with_label(label)
        .with_data([1, 1, 1])
        .with_stack(stack)
        .with_background_color(color)
}

fn assert_no_empty_values(value: &Value, path: &str) {
    match value {
        Value::Null => panic!("null emitted at {path}"),
        Value::Array(items) => {
            assert!(!items.is_empty(), "empty array emitted at {path}");
            for (index, item) in items.iter().enumerate() {
                assert_no_empty_values(item, &format!("{path}[{index}]"));
            }
        }
        Value::Object(map) => {
            assert!(!map.is_empty(), "empty object emitted at {path}");
            for (key, item) in map {
                assert_no_empty_values(item, &format!("{path}.{key}"));
            }
        }
        _ => {}
    }
}

#[test]
fn single_stacked_dataset_serializes_only_set_fields() {
    let data = BarData::new()
        .add_labels(["A", "B", "C"])
        .add_dataset(stacked_dataset("First set", "Stack 1", Color::RED));
    let chart = BarChart::new(data, BarOptions::new());

    let value = chart.to_value().expect("chart value");
    assert_eq!(
        value,
        json!({
            "type": "bar",
            "data": {
                "labels": ["A", "B", "C"],
                "datasets": [{
                    "label": "First set",
                    "data": [1, 1, 1],
                    "backgroundColor": "rgba(255,0,0,1)",
                    "stack": "Stack 1"
                }]
            }
        })
    );
    assert!(value["data"]["datasets"][0].get("xAxisID").is_none());
    assert!(value.get("options").is_none());
    assert!(value.get("plugins").is_none());
}

#[test]
fn json_text_matches_value_form() {
    let chart = BarChart::default().with_data(
        BarData::new()
            .with_labels(["A"])
            .add_dataset(BarDataset::new().with_data([7])),
    );
    let text = chart.to_json().expect("json");
    assert_eq!(
        text,
        r#"{"type":"bar","data":{"labels":["A"],"datasets":[{"data":[7]}]}}"#
    );
    let pretty = chart.to_json_pretty().expect("pretty json");
    let reparsed: Value = serde_json::from_str(&pretty).expect("reparse");
    assert_eq!(reparsed, chart.to_value().expect("value"));
}

#[test]
fn shared_stack_and_stacked_axes_serialize_independently() {
    let data = BarData::new()
        .add_labels(["A", "B", "C"])
        .add_dataset(stacked_dataset("First set", "Stack 1", Color::RED))
        .add_dataset(stacked_dataset("Second set", "Stack 1", Color::GREEN))
        .add_dataset(stacked_dataset("Third set", "Stack 2", Color::BLUE));
    let scales = Scales::new()
        .add_x_axis(Axis::new().with_stacked(true))
        .add_y_axis(Axis::new().with_stacked(true));
    let chart = BarChart::new(data, BarOptions::new().with_scales(scales));

    let value = chart.to_value().expect("chart value");
    assert_eq!(
        value["options"],
        json!({
            "scales": {
                "xAxes": [{ "stacked": true }],
                "yAxes": [{ "stacked": true }]
            }
        })
    );
    let stacks: Vec<&str> = value["data"]["datasets"]
        .as_array()
        .expect("datasets")
        .iter()
        .map(|d| d["stack"].as_str().expect("stack"))
        .collect();
    assert_eq!(stacks, ["Stack 1", "Stack 1", "Stack 2"]);
}

#[test]
fn bar_thickness_variants_serialize_bare() {
    let fixed = BarDataset::new().with_bar_thickness(BarThickness::fixed(30).expect("fixed"));
    let flex = BarDataset::new().with_bar_thickness(BarThickness::flex());
    let chart = BarChart::default().with_data(BarData::new().with_datasets([fixed, flex]));

    let value = chart.to_value().expect("chart value");
    assert_eq!(value["data"]["datasets"][0]["barThickness"], json!(30));
    assert_eq!(value["data"]["datasets"][1]["barThickness"], json!("flex"));
}

#[test]
fn per_point_and_single_colors_serialize_distinctly() {
    let single = BarDataset::new().with_background_color(Color::RED);
    let per_point = BarDataset::new()
        .add_background_color(Color::RED)
        .add_background_color(Color::BLUE);
    let one_item_list = BarDataset::new().with_background_color(vec![Color::RED]);
    let chart = BarChart::default()
        .with_data(BarData::new().with_datasets([single, per_point, one_item_list]));

    let datasets = chart.to_value().expect("chart value")["data"]["datasets"].clone();
    assert_eq!(datasets[0]["backgroundColor"], json!("rgba(255,0,0,1)"));
    assert_eq!(
        datasets[1]["backgroundColor"],
        json!(["rgba(255,0,0,1)", "rgba(0,0,255,1)"])
    );
    assert_eq!(datasets[2]["backgroundColor"], json!(["rgba(255,0,0,1)"]));
}

#[test]
fn bar_specific_fields_use_chartjs_names() {
    let dataset = BarDataset::new()
        .with_x_axis_id("x-left")
        .with_y_axis_id("y-main")
        .add_border_skipped(BorderSkipped::Bottom)
        .add_border_skipped(BorderSkipped::Left)
        .with_bar_percentage(decimal_from_f64(0.9).expect("decimal"))
        .with_category_percentage(decimal_from_f64(0.8).expect("decimal"))
        .with_max_bar_thickness(40)
        .with_min_bar_length(2)
        .with_border_width(rust_decimal::Decimal::from(1))
        .with_hover_border_color(Color::BLACK);
    let chart = BarChart::horizontal(
        BarData::new().add_dataset(dataset),
        BarOptions::new(),
    );

    let value = chart.to_value().expect("chart value");
    assert_eq!(value["type"], json!("horizontalBar"));
    assert_eq!(
        value["data"]["datasets"][0],
        json!({
            "borderWidth": 1,
            "hoverBorderColor": "rgba(0,0,0,1)",
            "xAxisID": "x-left",
            "yAxisID": "y-main",
            "borderSkipped": ["bottom", "left"],
            "barPercentage": 0.9,
            "categoryPercentage": 0.8,
            "maxBarThickness": 40,
            "minBarLength": 2
        })
    );
}

#[test]
fn fully_configured_chart_never_emits_empty_or_null_values() {
    let data = BarData::new()
        .with_labels(["Q1", "Q2"])
        .add_dataset(
            BarDataset::new()
                .with_label("Revenue")
                .with_data([10, 20])
                .with_background_color(vec![Color::ORANGE, Color::PURPLE]),
        )
        .add_dataset(BarDataset::new().with_label("Empty"));
    let scales = Scales::new().add_y_axis(
        Axis::new()
            .with_id("y")
            .with_grid_lines(GridLines::new().with_border_dash(Vec::<i32>::new()))
            .with_ticks(Ticks::new().with_begin_at_zero(true)),
    );
    let options = BarOptions::new()
        .with_scales(scales)
        .with_title(Title::new())
        .with_events([]);
    let chart = BarChart::new(data, options)
        .with_plugins(Vec::<String>::new())
        .add_plugin("datalabels");

    let value = chart.to_value().expect("chart value");
    assert_no_empty_values(&value, "$");
    assert_eq!(value["plugins"], json!(["datalabels"]));
    assert!(value["options"].get("title").is_none());
    assert!(value["options"]["scales"]["yAxes"][0].get("gridLines").is_none());
    assert_eq!(
        value["options"]["scales"]["yAxes"][0]["ticks"],
        json!({ "beginAtZero": true })
    );
}

#[test]
fn drawability_requires_data_in_every_dataset() {
    assert!(!BarChart::default().is_drawable());

    let chart = BarChart::default().with_data(
        BarData::new().add_dataset(BarDataset::new().with_data([1])),
    );
    assert!(chart.is_drawable());
    assert_eq!(chart.kind(), ChartKind::Bar);
    assert_eq!(chart.kind().to_string(), "bar");
}
