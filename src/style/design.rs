use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::style::{
    AxisStyle, ChartTypeStyle, Color, ColorIndex, Insets, LegendStyle, Stroke, TitleStyle,
};

/// Everything a renderer needs to know about how a chart looks.
///
/// The bundle is plain data: every part is optional and is read back exactly
/// as it was set. This type is serializable so host applications can persist
/// chart looks alongside their data; see [`ChartDesign::to_json_contract_v1_pretty`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartDesign {
    pub title: Option<TitleStyle>,
    pub legend: Option<LegendStyle>,
    pub x_axis: Option<AxisStyle>,
    pub y_axis: Option<AxisStyle>,
    pub chart: Option<ChartTypeStyle>,
    pub background: Option<Color>,
    pub frame: Option<Stroke>,
    pub margin: Option<Insets>,
    pub padding: Option<Insets>,
    /// Palette used when a series or cell has no explicit color.
    pub colors: Option<ColorIndex>,
}

impl ChartDesign {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: TitleStyle) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendStyle) -> Self {
        self.legend = Some(legend);
        self
    }

    #[must_use]
    pub fn with_x_axis(mut self, axis: AxisStyle) -> Self {
        self.x_axis = Some(axis);
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, axis: AxisStyle) -> Self {
        self.y_axis = Some(axis);
        self
    }

    #[must_use]
    pub fn with_chart(mut self, chart: ChartTypeStyle) -> Self {
        self.chart = Some(chart);
        self
    }

    #[must_use]
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    #[must_use]
    pub fn with_frame(mut self, frame: Stroke) -> Self {
        self.frame = Some(frame);
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Insets) -> Self {
        self.margin = Some(margin);
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = Some(padding);
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: impl Into<ColorIndex>) -> Self {
        self.colors = Some(colors.into());
        self
    }

    /// Resolves the color of the element at `index`.
    ///
    /// An explicit color wins; otherwise the design palette (or the default
    /// built-in palette) is cycled. `None` only when the palette is empty.
    #[must_use]
    pub fn color_for(&self, index: usize, explicit: Option<Color>) -> Option<Color> {
        explicit.or_else(|| match &self.colors {
            Some(colors) => colors.cycle(index),
            None => ColorIndex::default().cycle(index),
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        if let Some(title) = &self.title {
            title.validate()?;
        }
        if let Some(legend) = &self.legend {
            legend.validate()?;
        }
        for axis in [&self.x_axis, &self.y_axis].into_iter().flatten() {
            axis.validate()?;
        }
        if let Some(chart) = &self.chart {
            chart.validate()?;
        }
        if let Some(background) = self.background {
            background.validate()?;
        }
        if let Some(frame) = &self.frame {
            frame.validate()?;
        }
        for insets in [self.margin, self.padding].into_iter().flatten() {
            insets.validate()?;
        }
        if let Some(colors) = &self.colors {
            colors.validate()?;
        }
        Ok(())
    }
}
