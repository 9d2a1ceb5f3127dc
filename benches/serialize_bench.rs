use chartjs_config::core::Color;
use chartjs_config::data::{BarData, LineData};
use chartjs_config::dataset::{BarDataset, Dataset, LineDataset, StyledDataset};
use chartjs_config::options::{Axis, BarOptions, Scales};
use chartjs_config::{BarChart, Chart, LineChart};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_line_chart_json_10k(c: &mut Criterion) {
    let points: Vec<f64> = (0..10_000).map(|i| 100.0 + f64::from(i) * 0.05).collect();
    let dataset = LineDataset::new()
        .with_label("series")
        .with_border_color(Color::BLUE)
        .try_with_data(points)
        .expect("finite points");
    let chart = LineChart::default().with_data(
        LineData::new()
            .with_labels((0..10_000).map(|i| i.to_string()))
            .add_dataset(dataset),
    );

    c.bench_function("line_chart_json_10k", |b| {
        b.iter(|| {
            let _ = black_box(chart.to_json().expect("serialize"));
        })
    });
}

fn bench_float_ingestion_10k(c: &mut Criterion) {
    let points: Vec<f64> = (0..10_000).map(|i| f64::from(i) / 7.0).collect();

    c.bench_function("float_ingestion_10k", |b| {
        b.iter(|| {
            let _ = LineDataset::new()
                .try_with_data(black_box(&points).iter().copied())
                .expect("finite points");
        })
    });
}

fn bench_stacked_bar_chart_json(c: &mut Criterion) {
    let data = (0..12).fold(BarData::new(), |data, stack| {
        data.add_dataset(
            BarDataset::new()
                .with_label(format!("set {stack}"))
                .with_stack(format!("stack {}", stack % 3))
                .with_data((0..500).map(|i| i * stack))
                .with_background_color(Color::ORANGE),
        )
    });
    let scales = Scales::new()
        .add_x_axis(Axis::new().with_stacked(true))
        .add_y_axis(Axis::new().with_stacked(true));
    let chart = BarChart::new(data, BarOptions::new().with_scales(scales));

    c.bench_function("stacked_bar_chart_json", |b| {
        b.iter(|| {
            let _ = black_box(chart.to_json().expect("serialize"));
        })
    });
}

criterion_group!(
    benches,
    bench_line_chart_json_10k,
    bench_float_ingestion_10k,
    bench_stacked_bar_chart_json
);
criterion_main!(benches);
