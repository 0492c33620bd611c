//! A [`Color`] represents a color that was specified in any of the supported
//! representations, tagged with its [`Space`].

use std::{fmt, str::FromStr};

use crate::{
    error::{Error, Result},
    hex,
    models::{Hsl, Hsv, Model, Rgb},
};

#[cfg(feature = "f32")]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(not(feature = "f32"))]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// The representations a [`Color`] can be specified in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Space {
    /// Red, green and blue channels in the range [0, 255].
    Rgb = 0,
    /// Hue in degrees, saturation and lightness in the range [0, 1].
    Hsl = 1,
    /// Hue in degrees, saturation and value in the range [0, 1].
    Hsv = 2,
}

impl Space {
    /// All supported spaces.
    pub const ALL: [Space; 3] = [Space::Rgb, Space::Hsl, Space::Hsv];

    /// The lowercase identifier of the space.
    pub fn name(&self) -> &'static str {
        match self {
            Space::Rgb => "rgb",
            Space::Hsl => "hsl",
            Space::Hsv => "hsv",
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Space {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        Space::ALL
            .into_iter()
            .find(|space| space.name().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// Implemented by each model to name the [`Space`] it represents.
pub trait HasSpace {
    /// The space of the model.
    const SPACE: Space;
}

/// Struct that can hold a color of any supported space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// The three components that make up the color.
    pub components: Components,
    /// The space in which the components are set.
    pub space: Space,
}

impl Color {
    /// Create a new [`Color`] in the given space.
    /// ```rust
    /// use tinct::{Color, Components, Space};
    /// let c = Color::new(Space::Rgb, Components(170.0, 187.0, 204.0));
    /// assert_eq!(c, Color::rgb(170.0, 187.0, 204.0));
    /// ```
    pub fn new(space: Space, components: Components) -> Self {
        Self { components, space }
    }

    /// Create a color from red, green and blue channels.
    pub fn rgb(red: Component, green: Component, blue: Component) -> Self {
        Self::new(Space::Rgb, Components(red, green, blue))
    }

    /// Create a color from hue, saturation and lightness.
    pub fn hsl(hue: Component, saturation: Component, lightness: Component) -> Self {
        Self::new(Space::Hsl, Components(hue, saturation, lightness))
    }

    /// Create a color from hue, saturation and value.
    pub fn hsv(hue: Component, saturation: Component, value: Component) -> Self {
        Self::new(Space::Hsv, Components(hue, saturation, value))
    }

    /// Return the components of this color as the given model, if the color
    /// is in the model's space.
    pub fn as_model<T: Model>(&self) -> Option<T> {
        T::from_color(self)
    }

    /// Serialize this color as a `#rrggbb` string. Only colors in the RGB
    /// space can be serialized.
    pub fn to_hex(&self) -> Result<String> {
        self.as_model::<Rgb>()
            .map(|rgb| rgb.to_hex())
            .ok_or(Error::HexRequiresRgb(self.space))
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        hex::parse_hex(s).map(Color::from)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Components(c0, c1, c2) = self.components;
        match self.space {
            Space::Rgb => write!(f, "rgb({}, {}, {})", c0, c1, c2),
            Space::Hsl | Space::Hsv => write!(
                f,
                "{}({}, {}%, {}%)",
                self.space,
                c0,
                c1 * 100.0,
                c2 * 100.0
            ),
        }
    }
}

impl From<Color> for Components {
    fn from(value: Color) -> Self {
        value.components
    }
}

/// Typed access to a color that is known to be in a specific space.
macro_rules! typed_view {
    ($($name:ident => $model:ty),* $(,)?) => {
        impl Color {
            $(
                #[doc = concat!("Return this color as [`", stringify!($model), "`] if it is in that space.")]
                pub fn $name(&self) -> Option<$model> {
                    self.as_model::<$model>()
                }
            )*
        }
    };
}

typed_view! {
    as_rgb => Rgb,
    as_hsl => Hsl,
    as_hsv => Hsv,
}
