//! Model a color with red, green and blue channels.

use std::str::FromStr;

use crate::{
    color::{Component, HasSpace, Space},
    convert,
    error::Error,
    hex,
    models::{Hsl, Hsv},
};

tinct_macros::gen_model! {
    /// A color specified with red, green and blue channels in [0, 255].
    pub struct Rgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl HasSpace for Rgb {
    const SPACE: Space = Space::Rgb;
}

impl Rgb {
    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        convert::rgb_to_hsl(&self.to_components()).into()
    }

    /// Convert this color to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        convert::rgb_to_hsv(&self.to_components()).into()
    }

    /// Serialize the channels as a lowercase `#rrggbb` string.
    pub fn to_hex(&self) -> String {
        hex::format_hex(self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex::parse_hex(s)
    }
}
