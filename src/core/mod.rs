pub mod dataset;
pub mod record;
pub mod scale;
pub mod types;

pub use dataset::Dataset;
pub use record::{Dimension, Record, RecordMeasures};
pub use scale::{LinearScale, TickValues};
pub use types::{Margins, PlotArea, Viewport};
