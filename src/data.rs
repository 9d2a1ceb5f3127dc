use serde::Serialize;
use tracing::trace;

use crate::dataset::{BarDataset, Dataset, LineDataset, PieDataset};

pub type BarData = Data<BarDataset>;
pub type LineData = Data<LineDataset>;
pub type PieData = Data<PieDataset>;

/// Category labels plus the datasets plotted against them.
///
/// Label count conventionally matches each dataset's point count; this is
/// not enforced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Data<D> {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    labels: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    datasets: Vec<D>,
}

impl<D> Default for Data<D> {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            datasets: Vec::new(),
        }
    }
}

impl<D: Dataset> Data<D> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Replaces every label.
    #[must_use]
    pub fn with_labels<I>(mut self, labels: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        trace!(
            previous_count = self.labels.len(),
            count = labels.len(),
            "replace labels"
        );
        self.labels = labels;
        self
    }

    /// Appends labels after the existing ones.
    #[must_use]
    pub fn add_labels<I>(mut self, labels: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.labels.extend(labels.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn add_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    #[must_use]
    pub fn datasets(&self) -> &[D] {
        &self.datasets
    }

    pub fn datasets_mut(&mut self) -> &mut [D] {
        &mut self.datasets
    }

    /// Replaces every dataset.
    #[must_use]
    pub fn with_datasets(mut self, datasets: impl IntoIterator<Item = D>) -> Self {
        let datasets: Vec<D> = datasets.into_iter().collect();
        trace!(
            previous_count = self.datasets.len(),
            count = datasets.len(),
            "replace datasets"
        );
        self.datasets = datasets;
        self
    }

    #[must_use]
    pub fn add_dataset(mut self, dataset: D) -> Self {
        self.datasets.push(dataset);
        self
    }

    /// At least one dataset, and every dataset has at least one point.
    #[must_use]
    pub fn has_plottable_data(&self) -> bool {
        !self.datasets.is_empty() && self.datasets.iter().all(|d| !d.data().is_empty())
    }
}
