//! chartjs-config: typed builders for Chart.js configuration objects.
//!
//! Build a chart graph with chained `with_*`/`add_*` calls, then serialize
//! it with [`Chart::to_json`]. Fields never set are left out of the output,
//! so Chart.js applies its own defaults.

pub mod chart;
pub mod core;
pub mod data;
pub mod dataset;
pub mod error;
pub mod json;
pub mod options;
pub mod telemetry;

pub use chart::{BarChart, Chart, ChartKind, LineChart, PieChart};
pub use error::{ChartError, ChartResult};

/// Types and builder traits needed by most callers.
pub mod prelude {
    pub use crate::chart::{BarChart, Chart, ChartKind, LineChart, PieChart};
    pub use crate::core::{
        BorderSkipped, Color, Fill, OneOrMany, PointStyle, Position, ToDecimal, decimal_from_f64,
        decimal_from_str,
    };
    pub use crate::data::{BarData, Data, LineData, PieData};
    pub use crate::dataset::{
        BarDataset, BarThickness, Dataset, LineDataset, PieDataset, StyledDataset,
    };
    pub use crate::error::{ChartError, ChartResult};
    pub use crate::options::{
        Axis, BarOptions, ChartOptions, GridLines, Legend, LegendLabels, LineOptions, PieOptions,
        Scales, Ticks, Title, Tooltips,
    };
}
