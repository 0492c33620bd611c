//! Error types for color operations.

use thiserror::Error;

use crate::color::{Component, Space};

/// Color operation error.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested target is the color's own space or is not a known
    /// space.
    #[error("unsupported color space conversion: {from} to {to}")]
    UnsupportedConversion {
        /// Space of the color being converted.
        from: Space,
        /// The requested target, as given by the caller.
        to: String,
    },

    /// A hue falls outside the six sectors of the hue wheel.
    #[error("invalid hue: {0} is outside [0, 360)")]
    InvalidHue(Component),

    /// Text that is not a `#rgb` or `#rrggbb` hex color.
    #[error("malformed hex color: {0:?}")]
    MalformedHex(String),

    /// Hex serialization was requested for a color that is not RGB.
    #[error("hex serialization requires an rgb color, found {0}")]
    HexRequiresRgb(Space),
}

/// Result type for color operations.
pub type Result<T> = std::result::Result<T, Error>;
