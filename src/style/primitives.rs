use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::style::Color;

fn ensure_non_negative(value: f64, name: &str) -> ChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidData(format!(
            "`{name}` must be finite and >= 0"
        )));
    }
    Ok(())
}

pub(crate) fn ensure_positive(value: f64, name: &str) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "`{name}` must be finite and > 0"
        )));
    }
    Ok(())
}

/// Side of the chart a title-like element is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Top,
    Bottom,
    Left,
    Right,
}

/// Alignment of text along the side it is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Start,
    Center,
    End,
}

/// Font request; resolution against installed fonts is up to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub size_px: f64,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

impl Font {
    #[must_use]
    pub fn new(family: impl Into<String>, size_px: f64) -> Self {
        Self {
            family: family.into(),
            size_px,
            bold: false,
            italic: false,
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.family.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "font family must not be empty".to_owned(),
            ));
        }
        ensure_positive(self.size_px, "font.size_px")
    }
}

/// Line style for frames, grid lines and series outlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub width_px: f64,
    pub color: Color,
    /// Alternating on/off lengths in pixels; empty means solid.
    #[serde(default)]
    pub dash: Vec<f64>,
}

impl Stroke {
    #[must_use]
    pub fn solid(width_px: f64, color: Color) -> Self {
        Self {
            width_px,
            color,
            dash: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_dash(mut self, dash: Vec<f64>) -> Self {
        self.dash = dash;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        ensure_positive(self.width_px, "stroke.width_px")?;
        for &length in &self.dash {
            ensure_positive(length, "stroke.dash")?;
        }
        self.color.validate()
    }
}

/// Per-side spacing in pixels, used for both margin and padding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (value, name) in [
            (self.top, "insets.top"),
            (self.right, "insets.right"),
            (self.bottom, "insets.bottom"),
            (self.left, "insets.left"),
        ] {
            ensure_non_negative(value, name)?;
        }
        Ok(())
    }
}
