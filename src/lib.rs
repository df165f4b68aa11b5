//! chart-dataset: data and design model for chart authoring.
//!
//! Applications fill a [`SeriesDataset`] or a [`MatrixDataset`] and a
//! [`ChartDesign`]; a rendering backend then reads both, picking colors from
//! a [`ColorIndex`] wherever the design leaves them unspecified.

pub mod core;
pub mod error;
pub mod render;
pub mod style;
pub mod telemetry;

pub use crate::core::{Dataset, MatrixDataset, Series, SeriesDataset};
pub use error::{ChartError, ChartResult};
pub use style::{ChartDesign, Color, ColorIndex, Palette};
