//! tinct converts colors between the RGB, HSL and HSV representations and
//! parses and formats hex color codes.

#![deny(missing_docs)]

mod color;
pub mod convert;
mod error;
pub mod hex;
mod math;
pub mod models;

pub use color::{Color, Component, Components, HasSpace, Space};
pub use error::{Error, Result};
pub use hex::{format_hex, parse_hex};
pub use math::normalize_hue;
pub use models::{Hsl, Hsv, Model, Rgb};
