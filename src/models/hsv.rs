//! Model a color with the HSV notation.

use crate::{
    color::{Component, HasSpace, Space},
    convert,
    error::Result,
    models::{Hsl, Rgb},
};

tinct_macros::gen_model! {
    /// A color specified with the HSV (hue, saturation, value) notation.
    pub struct Hsv {
        /// The hue component of the color, in degrees.
        hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The value component of the color.
        value: Component,
    }
}

impl HasSpace for Hsv {
    const SPACE: Space = Space::Hsv;
}

impl Hsv {
    /// Convert this color to RGB channels. Fails if the hue is outside
    /// [0, 360).
    pub fn to_rgb(&self) -> Result<Rgb> {
        convert::hsv_to_rgb(&self.to_components()).map(Rgb::from)
    }

    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        convert::hsv_to_hsl(&self.to_components()).into()
    }
}
