use tracing::debug;

use crate::core::{Dataset, MatrixDataset, Series, SeriesDataset};
use crate::error::ChartResult;
use crate::render::Renderer;
use crate::style::{ChartDesign, Color};

/// No-op renderer used by tests and headless pipelines.
///
/// It validates the design and walks the dataset exactly as a painting
/// backend would, recording what it read.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_title: Option<String>,
    pub last_series_titles: Vec<Option<String>>,
    pub last_series_colors: Vec<Option<Color>>,
    pub last_extent: (usize, usize),
    pub last_filled_cells: usize,
}

impl Renderer for NullRenderer {
    fn render_series<S: Series>(
        &mut self,
        dataset: &SeriesDataset<S>,
        design: &ChartDesign,
    ) -> ChartResult<()> {
        design.validate()?;
        let series = dataset.series_list();
        self.last_title = dataset.title().map(str::to_owned);
        self.last_series_titles = series
            .iter()
            .map(|s| s.title().map(str::to_owned))
            .collect();
        self.last_series_colors = (0..series.len())
            .map(|index| design.color_for(index, None))
            .collect();
        debug!(series = series.len(), "null render series dataset");
        Ok(())
    }

    fn render_matrix<T>(
        &mut self,
        dataset: &MatrixDataset<T>,
        design: &ChartDesign,
    ) -> ChartResult<()> {
        design.validate()?;
        let (rows, cols) = (dataset.row_size(), dataset.col_size());
        let filled = dataset.filled_cells();

        self.last_title = dataset.title().map(str::to_owned);
        self.last_extent = (rows, cols);
        self.last_filled_cells = filled;
        debug!(rows, cols, filled, "null render matrix dataset");
        Ok(())
    }
}
