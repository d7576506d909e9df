use tracing::debug;

use crate::core::dataset::extent_of;
use crate::core::{Dimension, LinearScale, PlotArea, Record};
use crate::error::{ChartError, ChartResult};

/// Lower domain bound is the observed minimum shrunk by 20%.
pub const X_DOMAIN_MIN_FACTOR: f64 = 0.8;
/// Upper domain bound is the observed maximum grown by 20%.
pub const X_DOMAIN_MAX_FACTOR: f64 = 1.2;

/// Builds the horizontal scale for `dimension`.
///
/// Domain is `[min * 0.8, max * 1.2]`, range is `[0, plot width]`.
pub fn build_x_scale(
    records: &[Record],
    dimension: Dimension,
    plot_area: PlotArea,
) -> ChartResult<LinearScale> {
    let (min, max) =
        extent_of(records.iter().map(|record| record.value(dimension))).ok_or(ChartError::EmptyDataset)?;
    let domain_start = min * X_DOMAIN_MIN_FACTOR;
    let domain_end = max * X_DOMAIN_MAX_FACTOR;
    debug!(%dimension, domain_start, domain_end, "built x scale");

    LinearScale::new(domain_start, domain_end, 0.0, plot_area.width).map_err(|_| {
        ChartError::InvalidData(format!(
            "`{dimension}` values produce a degenerate domain [{domain_start}, {domain_end}]"
        ))
    })
}

/// Builds the vertical healthcare scale: `[0, max]` mapped onto
/// `[plot height, 0]` so larger values sit higher.
pub fn build_y_scale(records: &[Record], plot_area: PlotArea) -> ChartResult<LinearScale> {
    let (_, max) = extent_of(records.iter().map(|record| record.healthcare))
        .ok_or(ChartError::EmptyDataset)?;

    LinearScale::new(0.0, max, plot_area.height, 0.0).map_err(|_| {
        ChartError::InvalidData(format!(
            "healthcare values produce a degenerate domain [0, {max}]"
        ))
    })
}
