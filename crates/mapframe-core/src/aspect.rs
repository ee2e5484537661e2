//! Frame aspect-ratio presets and the padding percentage used to reserve
//! layout space before the embedded frame loads.
//!
//! Reserving `(height / width) * 100` percent of vertical padding on the
//! frame's wrapper is the standard trick to keep the page from shifting
//! while a cross-origin iframe is still loading. The ratio set is closed:
//! callers pick one of the presets, and every preset maps to a defined
//! percentage.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when parsing an [`AspectRatio`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized aspect ratio `{0}` (expected one of 16:9, 4:3, 1:1, 21:9)")]
pub struct ParseAspectRatioError(String);

/// Closed set of frame aspect ratios supported by the map component.
///
/// # Examples
///
/// ```
/// use mapframe_core::AspectRatio;
///
/// assert_eq!(AspectRatio::Widescreen.padding_percent(), "56.25%");
/// assert_eq!("4:3".parse::<AspectRatio>(), Ok(AspectRatio::Standard));
/// assert_eq!(AspectRatio::default().to_string(), "16:9");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AspectRatio {
    /// 16:9, the component default.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "16:9"))]
    Widescreen,
    /// 4:3, the classic display ratio.
    #[cfg_attr(feature = "serde", serde(rename = "4:3"))]
    Standard,
    /// 1:1.
    #[cfg_attr(feature = "serde", serde(rename = "1:1"))]
    Square,
    /// 21:9, cinematic ultrawide.
    #[cfg_attr(feature = "serde", serde(rename = "21:9"))]
    Ultrawide,
}

impl AspectRatio {
    /// Every supported ratio, in catalog display order.
    pub const ALL: [AspectRatio; 4] = [
        AspectRatio::Widescreen,
        AspectRatio::Standard,
        AspectRatio::Square,
        AspectRatio::Ultrawide,
    ];

    /// Width and height terms of the ratio.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Self::Widescreen => (16, 9),
            Self::Standard => (4, 3),
            Self::Square => (1, 1),
            Self::Ultrawide => (21, 9),
        }
    }

    /// Height divided by width.
    pub fn ratio(self) -> f64 {
        let (width, height) = self.dimensions();
        f64::from(height) / f64::from(width)
    }

    /// Canonical `width:height` label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Widescreen => "16:9",
            Self::Standard => "4:3",
            Self::Square => "1:1",
            Self::Ultrawide => "21:9",
        }
    }

    /// CSS percentage reserving vertical space for the frame.
    ///
    /// Computed as `(height / width) * 100`, rounded to at most four
    /// decimal places; trailing zeros are not emitted. `16:9` yields
    /// `"56.25%"`, `4:3` yields `"75%"`.
    pub fn padding_percent(self) -> String {
        let percent = self.ratio() * 100.0;
        let rounded = (percent * 10_000.0).round() / 10_000.0;
        format!("{rounded}%")
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = ParseAspectRatioError;

    /// Parse a `width:height` label. Surrounding whitespace is ignored;
    /// anything outside the closed set is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "16:9" => Ok(Self::Widescreen),
            "4:3" => Ok(Self::Standard),
            "1:1" => Ok(Self::Square),
            "21:9" => Ok(Self::Ultrawide),
            other => Err(ParseAspectRatioError(other.to_string())),
        }
    }
}
