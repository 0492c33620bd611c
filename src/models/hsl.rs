//! Model a color with the HSL notation.

use crate::{
    color::{Component, HasSpace, Space},
    convert,
    models::{Hsv, Rgb},
};

tinct_macros::gen_model! {
    /// A color specified with the HSL (hue, saturation, lightness) notation.
    pub struct Hsl {
        /// The hue component of the color, in degrees.
        hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The lightness component of the color.
        lightness: Component,
    }
}

impl HasSpace for Hsl {
    const SPACE: Space = Space::Hsl;
}

impl Hsl {
    /// Convert this color to RGB channels.
    pub fn to_rgb(&self) -> Rgb {
        convert::hsl_to_rgb(&self.to_components()).into()
    }

    /// Convert this color to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        convert::hsl_to_hsv(&self.to_components()).into()
    }
}
