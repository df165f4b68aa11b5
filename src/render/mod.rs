//! Seam between the data model and a rendering engine.
//!
//! Painting lives outside this crate. A backend receives a dataset together
//! with its [`ChartDesign`] and reads them through the public accessors only.

mod null_renderer;

pub use null_renderer::NullRenderer;

use crate::core::{MatrixDataset, Series, SeriesDataset};
use crate::error::ChartResult;
use crate::style::ChartDesign;

/// Contract implemented by any rendering backend.
pub trait Renderer {
    fn render_series<S: Series>(
        &mut self,
        dataset: &SeriesDataset<S>,
        design: &ChartDesign,
    ) -> ChartResult<()>;

    fn render_matrix<T>(
        &mut self,
        dataset: &MatrixDataset<T>,
        design: &ChartDesign,
    ) -> ChartResult<()>;
}
