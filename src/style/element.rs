use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::style::primitives::ensure_positive;
use crate::style::{Color, Font, Insets, Position, Stroke, TextAlign};

/// Properties every chart element carries.
///
/// Each field is independently optional; `None` asks the renderer for its
/// default. Values are stored as given and never recomputed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementBase {
    pub display: Option<bool>,
    pub font: Option<Font>,
    pub stroke: Option<Stroke>,
    pub color: Option<Color>,
    pub background: Option<Color>,
    pub margin: Option<Insets>,
    pub padding: Option<Insets>,
}

impl ElementBase {
    pub fn validate(&self) -> ChartResult<()> {
        if let Some(font) = &self.font {
            font.validate()?;
        }
        if let Some(stroke) = &self.stroke {
            stroke.validate()?;
        }
        for color in [self.color, self.background].into_iter().flatten() {
            color.validate()?;
        }
        for insets in [self.margin, self.padding].into_iter().flatten() {
            insets.validate()?;
        }
        Ok(())
    }
}

/// Read/write contract shared by title, legend, axis and chart-type styles.
///
/// Accessors read the embedded [`ElementBase`] and return stored values
/// unchanged. An implementation may override one only to point at a different
/// storage location, never to compute a value.
pub trait ElementStyle {
    fn base(&self) -> &ElementBase;

    fn base_mut(&mut self) -> &mut ElementBase;

    fn is_display(&self) -> Option<bool> {
        self.base().display
    }

    fn font(&self) -> Option<&Font> {
        self.base().font.as_ref()
    }

    fn stroke(&self) -> Option<&Stroke> {
        self.base().stroke.as_ref()
    }

    fn color(&self) -> Option<Color> {
        self.base().color
    }

    fn background(&self) -> Option<Color> {
        self.base().background
    }

    fn margin(&self) -> Option<Insets> {
        self.base().margin
    }

    fn padding(&self) -> Option<Insets> {
        self.base().padding
    }

    #[must_use]
    fn with_display(mut self, display: bool) -> Self
    where
        Self: Sized,
    {
        self.base_mut().display = Some(display);
        self
    }

    #[must_use]
    fn with_font(mut self, font: Font) -> Self
    where
        Self: Sized,
    {
        self.base_mut().font = Some(font);
        self
    }

    #[must_use]
    fn with_stroke(mut self, stroke: Stroke) -> Self
    where
        Self: Sized,
    {
        self.base_mut().stroke = Some(stroke);
        self
    }

    #[must_use]
    fn with_color(mut self, color: Color) -> Self
    where
        Self: Sized,
    {
        self.base_mut().color = Some(color);
        self
    }

    #[must_use]
    fn with_background(mut self, background: Color) -> Self
    where
        Self: Sized,
    {
        self.base_mut().background = Some(background);
        self
    }

    #[must_use]
    fn with_margin(mut self, margin: Insets) -> Self
    where
        Self: Sized,
    {
        self.base_mut().margin = Some(margin);
        self
    }

    #[must_use]
    fn with_padding(mut self, padding: Insets) -> Self
    where
        Self: Sized,
    {
        self.base_mut().padding = Some(padding);
        self
    }
}

/// Style of the chart title.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleStyle {
    #[serde(flatten)]
    pub base: ElementBase,
    pub position: Option<Position>,
    pub align: Option<TextAlign>,
}

impl TitleStyle {
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
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.base.validate()
    }
}

impl ElementStyle for TitleStyle {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }
}

/// Style of the legend box.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendStyle {
    #[serde(flatten)]
    pub base: ElementBase,
    pub position: Option<Position>,
    /// Gap between consecutive legend entries.
    pub item_spacing_px: Option<f64>,
    /// Size of the color swatch drawn before each entry.
    pub swatch_size_px: Option<f64>,
}

impl LegendStyle {
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
    pub fn with_item_spacing(mut self, spacing_px: f64) -> Self {
        self.item_spacing_px = Some(spacing_px);
        self
    }

    #[must_use]
    pub fn with_swatch_size(mut self, size_px: f64) -> Self {
        self.swatch_size_px = Some(size_px);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.base.validate()?;
        if let Some(spacing) = self.item_spacing_px {
            ensure_positive(spacing, "legend.item_spacing_px")?;
        }
        if let Some(size) = self.swatch_size_px {
            ensure_positive(size, "legend.swatch_size_px")?;
        }
        Ok(())
    }
}

impl ElementStyle for LegendStyle {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }
}
