use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::style::primitives::ensure_positive;
use crate::style::{ElementBase, ElementStyle};

/// Plot-kind specific options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartKind {
    Line {
        #[serde(default)]
        line_width_px: Option<f64>,
        #[serde(default)]
        show_markers: Option<bool>,
    },
    Bar {
        /// Share of the category slot covered by bars, in `(0, 1]`.
        #[serde(default)]
        width_ratio: Option<f64>,
        #[serde(default)]
        stacked: Option<bool>,
    },
    Heatmap {
        #[serde(default)]
        cell_gap_px: Option<f64>,
    },
}

/// Style of the plot area for one chart type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTypeStyle {
    #[serde(flatten)]
    pub base: ElementBase,
    pub kind: Option<ChartKind>,
}

impl ChartTypeStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ChartKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.base.validate()?;
        match self.kind {
            Some(ChartKind::Line {
                line_width_px: Some(width),
                ..
            }) => ensure_positive(width, "line.line_width_px"),
            Some(ChartKind::Bar {
                width_ratio: Some(ratio),
                ..
            }) => {
                if !ratio.is_finite() || ratio <= 0.0 || ratio > 1.0 {
                    return Err(ChartError::InvalidData(
                        "bar width ratio must be finite and in (0, 1]".to_owned(),
                    ));
                }
                Ok(())
            }
            Some(ChartKind::Heatmap {
                cell_gap_px: Some(gap),
            }) => {
                if !gap.is_finite() || gap < 0.0 {
                    return Err(ChartError::InvalidData(
                        "heatmap cell gap must be finite and >= 0".to_owned(),
                    ));
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl ElementStyle for ChartTypeStyle {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }
}
