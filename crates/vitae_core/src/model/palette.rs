//! Fixed twelve-swatch color palette for timeline blocks.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One named color a record can be rendered with.
///
/// Serialized by its CSS class value (`bg-blue-500`), which is what the
/// presentation layer applies to a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Swatch {
    #[default]
    #[serde(rename = "bg-blue-500")]
    Blue,
    #[serde(rename = "bg-red-500")]
    Red,
    #[serde(rename = "bg-green-500")]
    Green,
    #[serde(rename = "bg-purple-500")]
    Purple,
    #[serde(rename = "bg-yellow-500")]
    Yellow,
    #[serde(rename = "bg-pink-500")]
    Pink,
    #[serde(rename = "bg-indigo-500")]
    Indigo,
    #[serde(rename = "bg-teal-500")]
    Teal,
    #[serde(rename = "bg-orange-500")]
    Orange,
    #[serde(rename = "bg-cyan-500")]
    Cyan,
    #[serde(rename = "bg-emerald-500")]
    Emerald,
    #[serde(rename = "bg-violet-500")]
    Violet,
}

/// All swatches in picker order.
pub const PALETTE: [Swatch; 12] = [
    Swatch::Blue,
    Swatch::Red,
    Swatch::Green,
    Swatch::Purple,
    Swatch::Yellow,
    Swatch::Pink,
    Swatch::Indigo,
    Swatch::Teal,
    Swatch::Orange,
    Swatch::Cyan,
    Swatch::Emerald,
    Swatch::Violet,
];

impl Swatch {
    /// User-facing name shown under the picker.
    pub fn name(self) -> &'static str {
        match self {
            Self::Blue => "Blue",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Purple => "Purple",
            Self::Yellow => "Yellow",
            Self::Pink => "Pink",
            Self::Indigo => "Indigo",
            Self::Teal => "Teal",
            Self::Orange => "Orange",
            Self::Cyan => "Cyan",
            Self::Emerald => "Emerald",
            Self::Violet => "Violet",
        }
    }

    /// Stable class value used on the wire and by the renderer.
    pub fn class_value(self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-500",
            Self::Red => "bg-red-500",
            Self::Green => "bg-green-500",
            Self::Purple => "bg-purple-500",
            Self::Yellow => "bg-yellow-500",
            Self::Pink => "bg-pink-500",
            Self::Indigo => "bg-indigo-500",
            Self::Teal => "bg-teal-500",
            Self::Orange => "bg-orange-500",
            Self::Cyan => "bg-cyan-500",
            Self::Emerald => "bg-emerald-500",
            Self::Violet => "bg-violet-500",
        }
    }
}

/// Parses one swatch from its class value.
pub fn parse_swatch(value: &str) -> Result<Swatch, SwatchParseError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(SwatchParseError::Empty);
    }

    PALETTE
        .into_iter()
        .find(|swatch| swatch.class_value() == normalized)
        .ok_or_else(|| SwatchParseError::Unknown(normalized.to_string()))
}

/// Swatch parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwatchParseError {
    Empty,
    Unknown(String),
}

impl Display for SwatchParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "color must not be empty"),
            Self::Unknown(value) => write!(f, "unknown color `{value}`"),
        }
    }
}

impl Error for SwatchParseError {}

#[cfg(test)]
mod tests {
    use super::{parse_swatch, Swatch, SwatchParseError, PALETTE};
    use std::collections::HashSet;

    #[test]
    fn class_values_are_unique_and_parse_back() {
        let classes: HashSet<_> = PALETTE.iter().map(|s| s.class_value()).collect();
        assert_eq!(classes.len(), PALETTE.len());
        for swatch in PALETTE {
            assert_eq!(parse_swatch(swatch.class_value()), Ok(swatch));
        }
    }

    #[test]
    fn parse_rejects_blank_and_unknown() {
        assert_eq!(parse_swatch("  "), Err(SwatchParseError::Empty));
        assert_eq!(
            parse_swatch("bg-black-500"),
            Err(SwatchParseError::Unknown("bg-black-500".to_string()))
        );
    }

    #[test]
    fn default_is_blue() {
        assert_eq!(Swatch::default(), Swatch::Blue);
        assert_eq!(Swatch::default().name(), "Blue");
    }
}
