use chartjs_config::data::BarData;
use chartjs_config::dataset::{BarDataset, Dataset};
use chartjs_config::{BarChart, Chart};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn decimals(values: &[i32]) -> Vec<Decimal> {
    values.iter().copied().map(Decimal::from).collect()
}

proptest! {
    #[test]
    fn with_data_replaces_and_add_data_appends(
        first in prop::collection::vec(any::<i32>(), 0..16),
        second in prop::collection::vec(any::<i32>(), 0..16),
        extra in prop::collection::vec(any::<i32>(), 0..16)
    ) {
        let mut dataset = BarDataset::new().with_data(first).with_data(second.clone());
        let replaced = decimals(&second);
        prop_assert_eq!(dataset.data(), replaced.as_slice());

        for value in &extra {
            dataset = dataset.add_data(*value);
        }
        let mut appended = second.clone();
        appended.extend(&extra);
        let expected = decimals(&appended);
        prop_assert_eq!(dataset.data(), expected.as_slice());
    }

    #[test]
    fn labels_follow_replace_and_append_semantics(
        first in prop::collection::vec("[a-z]{1,6}", 0..8),
        second in prop::collection::vec("[a-z]{1,6}", 0..8),
        extra in "[A-Z]{1,6}"
    ) {
        let data = BarData::new()
            .with_labels(first)
            .with_labels(second.clone())
            .add_label(extra.clone());
        let mut expected = second;
        expected.push(extra);
        prop_assert_eq!(data.labels(), expected.as_slice());
    }

    #[test]
    fn unset_dataset_fields_never_appear(
        values in prop::collection::vec(-1_000i32..1_000, 0..8),
        label in prop::option::of("[a-z]{1,8}")
    ) {
        let mut dataset = BarDataset::new().with_data(values.clone());
        if let Some(label) = &label {
            dataset = dataset.with_label(label.clone());
        }
        let chart = BarChart::default().with_data(BarData::new().add_dataset(dataset));
        let value = chart.to_value().expect("chart value");
        let emitted = value["data"]["datasets"][0].as_object().expect("dataset object");

        let mut keys: Vec<&str> = emitted.keys().map(String::as_str).collect();
        keys.sort_unstable();
        let mut expected = Vec::new();
        if !values.is_empty() {
            expected.push("data");
        }
        if label.is_some() {
            expected.push("label");
        }
        prop_assert_eq!(keys, expected);
        prop_assert!(value.get("options").is_none());
    }
}
