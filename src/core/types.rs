use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One sample of a series in data space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a point whose x is the unix time in seconds (millisecond precision).
    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Ok(Self {
            x: time.timestamp_millis() as f64 / 1000.0,
            y: decimal_to_f64(value, "value")?,
        })
    }
}

/// Payload of one matrix cell, e.g. a heatmap intensity with an optional caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixValue {
    pub value: f64,
    #[serde(default)]
    pub label: Option<String>,
}

impl MatrixValue {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self { value, label: None }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn from_decimal(value: Decimal) -> ChartResult<Self> {
        Ok(Self::new(decimal_to_f64(value, "cell value")?))
    }
}

fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} {value} cannot be represented as f64"))
    })
}
