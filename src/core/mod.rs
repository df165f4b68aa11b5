pub mod dataset;
pub mod matrix_dataset;
pub mod series_dataset;
pub mod types;

pub use dataset::Dataset;
pub use matrix_dataset::MatrixDataset;
pub use series_dataset::{Series, SeriesDataset, XySeries};
pub use types::{DataPoint, MatrixValue};
