//! Ordered color palettes used to give series and cells consistent colors by position.
//!
//! Built-in palettes are `'static` constants: a [`ColorIndex`] built from one
//! borrows them instead of copying, so any number of threads can read them
//! without synchronization.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::style::Color;

const fn hex(rgb: u32) -> Color {
    Color::from_rgb8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Muted categorical set; adjacent entries differ in hue and lightness.
pub const COLORFUL_1: [Color; 10] = [
    hex(0x4E79A7),
    hex(0xF28E2B),
    hex(0xE15759),
    hex(0x76B7B2),
    hex(0x59A14F),
    hex(0xEDC948),
    hex(0xB07AA1),
    hex(0xFF9DA7),
    hex(0x9C755F),
    hex(0xBAB0AC),
];

/// Saturated categorical set.
pub const COLORFUL_2: [Color; 10] = [
    hex(0x1F77B4),
    hex(0xFF7F0E),
    hex(0x2CA02C),
    hex(0xD62728),
    hex(0x9467BD),
    hex(0x8C564B),
    hex(0xE377C2),
    hex(0x7F7F7F),
    hex(0xBCBD22),
    hex(0x17BECF),
];

/// Light/dark pairs per hue, for series that come in related couples.
pub const COLORFUL_3: [Color; 12] = [
    hex(0xA6CEE3),
    hex(0x1F78B4),
    hex(0xB2DF8A),
    hex(0x33A02C),
    hex(0xFB9A99),
    hex(0xE31A1C),
    hex(0xFDBF6F),
    hex(0xFF7F00),
    hex(0xCAB2D6),
    hex(0x6A3D9A),
    hex(0xFFFF99),
    hex(0xB15928),
];

/// Office-suite series colors.
pub const OFFICE: [Color; 10] = [
    hex(0x4472C4),
    hex(0xED7D31),
    hex(0xA5A5A5),
    hex(0xFFC000),
    hex(0x5B9BD5),
    hex(0x70AD47),
    hex(0x264478),
    hex(0x9E480E),
    hex(0x636363),
    hex(0x997300),
];

pub const PASTEL: [Color; 12] = [
    hex(0x8DD3C7),
    hex(0xFFFFB3),
    hex(0xBEBADA),
    hex(0xFB8072),
    hex(0x80B1D3),
    hex(0xFDB462),
    hex(0xB3DE69),
    hex(0xFCCDE5),
    hex(0xD9D9D9),
    hex(0xBC80BD),
    hex(0xCCEBC5),
    hex(0xFFED6F),
];

/// Light-to-dark ramps, suited to ordered values such as heatmap intensity.
pub const BLUE: [Color; 10] = [
    hex(0xF7FBFF),
    hex(0xDEEBF7),
    hex(0xC6DBEF),
    hex(0x9ECAE1),
    hex(0x6BAED6),
    hex(0x4292C6),
    hex(0x2171B5),
    hex(0x08519C),
    hex(0x08306B),
    hex(0x041F4A),
];

pub const GREEN: [Color; 10] = [
    hex(0xF7FCF5),
    hex(0xE5F5E0),
    hex(0xC7E9C0),
    hex(0xA1D99B),
    hex(0x74C476),
    hex(0x41AB5D),
    hex(0x238B45),
    hex(0x006D2C),
    hex(0x00441B),
    hex(0x002910),
];

pub const RED: [Color; 10] = [
    hex(0xFFF5F0),
    hex(0xFEE0D2),
    hex(0xFCBBA1),
    hex(0xFC9272),
    hex(0xFB6A4A),
    hex(0xEF3B2C),
    hex(0xCB181D),
    hex(0xA50F15),
    hex(0x67000D),
    hex(0x40000A),
];

pub const GRAY: [Color; 10] = [
    hex(0xFFFFFF),
    hex(0xF0F0F0),
    hex(0xD9D9D9),
    hex(0xBDBDBD),
    hex(0x969696),
    hex(0x737373),
    hex(0x525252),
    hex(0x353535),
    hex(0x252525),
    hex(0x000000),
];

/// Names of the built-in palettes.
///
/// Serialized by [`Palette::name`]; deserialized through [`Palette::from_name`],
/// so configuration names are case-insensitive everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Palette {
    #[default]
    Colorful1,
    Colorful2,
    Colorful3,
    Office,
    Pastel,
    Blue,
    Green,
    Red,
    Gray,
}

impl Palette {
    pub const ALL: [Palette; 9] = [
        Palette::Colorful1,
        Palette::Colorful2,
        Palette::Colorful3,
        Palette::Office,
        Palette::Pastel,
        Palette::Blue,
        Palette::Green,
        Palette::Red,
        Palette::Gray,
    ];

    #[must_use]
    pub const fn colors(self) -> &'static [Color] {
        match self {
            Palette::Colorful1 => &COLORFUL_1,
            Palette::Colorful2 => &COLORFUL_2,
            Palette::Colorful3 => &COLORFUL_3,
            Palette::Office => &OFFICE,
            Palette::Pastel => &PASTEL,
            Palette::Blue => &BLUE,
            Palette::Green => &GREEN,
            Palette::Red => &RED,
            Palette::Gray => &GRAY,
        }
    }

    /// Configuration name, identical to the serialized form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Palette::Colorful1 => "colorful1",
            Palette::Colorful2 => "colorful2",
            Palette::Colorful3 => "colorful3",
            Palette::Office => "office",
            Palette::Pastel => "pastel",
            Palette::Blue => "blue",
            Palette::Green => "green",
            Palette::Red => "red",
            Palette::Gray => "gray",
        }
    }

    /// Case-insensitive lookup by configuration name.
    pub fn from_name(name: &str) -> ChartResult<Self> {
        Self::ALL
            .into_iter()
            .find(|palette| palette.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| ChartError::InvalidArgument(format!("unknown palette `{name}`")))
    }
}

impl TryFrom<String> for Palette {
    type Error = ChartError;

    fn try_from(name: String) -> ChartResult<Self> {
        Self::from_name(&name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum ColorSource {
    Builtin(Palette),
    Custom(Vec<Color>),
}

/// Fixed, ordered list of colors looked up by position.
///
/// Out-of-range lookups yield `None`, meaning "no explicit color": callers
/// fall back to a default rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorIndex {
    source: ColorSource,
}

impl ColorIndex {
    #[must_use]
    pub const fn builtin(palette: Palette) -> Self {
        Self {
            source: ColorSource::Builtin(palette),
        }
    }

    /// Application-defined palette. An empty list is allowed; every lookup then misses.
    #[must_use]
    pub fn from_colors(colors: Vec<Color>) -> Self {
        Self {
            source: ColorSource::Custom(colors),
        }
    }

    /// The built-in palette backing this index, if any.
    #[must_use]
    pub fn palette(&self) -> Option<Palette> {
        match self.source {
            ColorSource::Builtin(palette) => Some(palette),
            ColorSource::Custom(_) => None,
        }
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        match &self.source {
            ColorSource::Builtin(palette) => palette.colors(),
            ColorSource::Custom(colors) => colors,
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.colors().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors().is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors().get(index).copied()
    }

    /// Wraps `index` around the palette so consecutive series keep cycling colors.
    #[must_use]
    pub fn cycle(&self, index: usize) -> Option<Color> {
        match self.size() {
            0 => None,
            size => self.get(index % size),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.colors().iter().try_for_each(|color| color.validate())
    }
}

impl Default for ColorIndex {
    fn default() -> Self {
        Self::builtin(Palette::default())
    }
}

impl From<Palette> for ColorIndex {
    fn from(palette: Palette) -> Self {
        Self::builtin(palette)
    }
}
