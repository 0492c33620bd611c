//! Each representation is modeled with its own type. Conversions are only
//! implemented toward the other representations, so a model can never be
//! asked to convert to itself.
//!
//! ```rust
//! use tinct::models::Rgb;
//! let hsl = Rgb::new(255.0, 0.0, 0.0).to_hsv().to_hsl();
//! assert_eq!((hsl.hue, hsl.saturation, hsl.lightness), (0.0, 1.0, 0.5));
//! ```

use crate::color::Color;

pub mod hsl;
pub mod hsv;
pub mod rgb;

pub use hsl::Hsl;
pub use hsv::Hsv;
pub use rgb::Rgb;

/// A trait implemented for color models that can be converted to and from a
/// generic [`Color`].
pub trait Model: Sized {
    /// Convert a model to a generic [`Color`].
    fn to_color(&self) -> Color;

    /// Convert a generic [`Color`] to a model, if the color is in the model's
    /// space.
    fn from_color(color: &Color) -> Option<Self>;
}
