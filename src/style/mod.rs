//! Chart design: colors, palettes and per-element style records.
//!
//! Style records are read by renderers and never interpreted here beyond
//! validation.

mod axis;
mod chart_type;
mod color;
pub mod color_index;
mod design;
mod element;
mod json_contract;
mod primitives;

pub use axis::AxisStyle;
pub use chart_type::{ChartKind, ChartTypeStyle};
pub use color::Color;
pub use color_index::{ColorIndex, Palette};
pub use design::ChartDesign;
pub use element::{ElementBase, ElementStyle, LegendStyle, TitleStyle};
pub use json_contract::{CHART_DESIGN_JSON_SCHEMA_V1, ChartDesignJsonContractV1};
pub use primitives::{Font, Insets, Position, Stroke, TextAlign};
