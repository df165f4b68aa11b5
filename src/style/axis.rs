use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::style::{ElementBase, ElementStyle, Position, Stroke};

/// Style of one axis: line, labels, grid and optional caption.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisStyle {
    #[serde(flatten)]
    pub base: ElementBase,
    pub position: Option<Position>,
    /// Caption drawn along the axis.
    pub caption: Option<String>,
    /// Label format pattern handed verbatim to the renderer's formatter,
    /// e.g. `"0.00"` or `"%Y-%m-%d"`.
    pub label_format: Option<String>,
    /// Label rotation in degrees, within `[-90, 90]`.
    pub label_angle_deg: Option<f64>,
    pub grid: Option<Stroke>,
}

impl AxisStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    #[must_use]
    pub fn with_label_format(mut self, pattern: impl Into<String>) -> Self {
        self.label_format = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn with_label_angle(mut self, degrees: f64) -> Self {
        self.label_angle_deg = Some(degrees);
        self
    }

    #[must_use]
    pub fn with_grid(mut self, grid: Stroke) -> Self {
        self.grid = Some(grid);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.base.validate()?;
        if let Some(angle) = self.label_angle_deg {
            if !angle.is_finite() || !(-90.0..=90.0).contains(&angle) {
                return Err(ChartError::InvalidData(
                    "axis label angle must be finite and in [-90, 90]".to_owned(),
                ));
            }
        }
        if self.label_format.as_deref().is_some_and(str::is_empty) {
            return Err(ChartError::InvalidData(
                "axis label format must not be empty".to_owned(),
            ));
        }
        if let Some(grid) = &self.grid {
            grid.validate()?;
        }
        Ok(())
    }
}

impl ElementStyle for AxisStyle {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }
}
