use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{DataPoint, Dataset};

/// A single plotted unit of a series chart, e.g. one line.
pub trait Series {
    fn title(&self) -> Option<&str>;
}

/// Named sequence of points backing one line/bar/area series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XySeries {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub points: Vec<DataPoint>,
}

impl XySeries {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            points: Vec::new(),
        }
    }

    #[must_use]
    pub fn untitled() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_points(mut self, points: Vec<DataPoint>) -> Self {
        self.points = points;
        self
    }

    pub fn push(&mut self, point: DataPoint) {
        self.points.push(point);
    }
}

impl Series for XySeries {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// Ordered collection of series.
///
/// Insertion order is the legend and z order. The collection only grows:
/// there is no removal or reordering, and duplicates are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDataset<S> {
    #[serde(default)]
    title: Option<String>,
    series: Vec<S>,
}

impl<S> Default for SeriesDataset<S> {
    fn default() -> Self {
        Self {
            title: None,
            series: Vec::new(),
        }
    }
}

impl<S: Series> SeriesDataset<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            series: Vec::new(),
        }
    }

    pub fn add_series(&mut self, series: S) {
        trace!(
            index = self.series.len(),
            title = series.title().unwrap_or_default(),
            "add series"
        );
        self.series.push(series);
    }

    /// Series in insertion order.
    #[must_use]
    pub fn series_list(&self) -> &[S] {
        &self.series
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl<S> Dataset for SeriesDataset<S> {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }
}
