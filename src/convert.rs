//! Conversions between the RGB, HSL and HSV representations.
//!
//! Each ordered pair of distinct spaces has exactly one conversion function.
//! The functions operate on the 3 color components and are pure. Only
//! conversions that produce RGB round their output, to whole channel values.
//!
//! ```rust
//! use tinct::{Color, Space};
//! let hsv = Color::rgb(170.0, 187.0, 204.0)
//!     .convert(Space::Hsl)?   // convert to hsl.
//!     .convert(Space::Hsv)?;  // convert to hsv without going back to rgb.
//! assert_eq!(hsv.space, Space::Hsv);
//! # Ok::<(), tinct::Error>(())
//! ```

use crate::{
    color::{Color, Component, Components, Space},
    error::{Error, Result},
    math::{normalize_hue, to_channel},
};

impl Color {
    /// Convert this color from its current space to the specified space.
    ///
    /// Converting a color to its own space is not supported.
    pub fn convert(&self, target: Space) -> Result<Self> {
        use Space as S;

        let Self { components, space } = *self;

        let converted = match (space, target) {
            (S::Rgb, S::Hsl) => rgb_to_hsl(&components),
            (S::Rgb, S::Hsv) => rgb_to_hsv(&components),
            (S::Hsl, S::Rgb) => hsl_to_rgb(&components),
            (S::Hsl, S::Hsv) => hsl_to_hsv(&components),
            (S::Hsv, S::Rgb) => hsv_to_rgb(&components)?,
            (S::Hsv, S::Hsl) => hsv_to_hsl(&components),
            (S::Rgb, S::Rgb) | (S::Hsl, S::Hsl) | (S::Hsv, S::Hsv) => {
                tracing::debug!(from = %space, to = %target, "rejected conversion to own space");
                return Err(Error::UnsupportedConversion {
                    from: space,
                    to: target.to_string(),
                });
            }
        };

        tracing::trace!(from = %space, to = %target, ?components, ?converted, "converted color");

        Ok(Self::new(target, converted))
    }

    /// Convert this color to the space identified by `target`, e.g. `"hsl"`.
    pub fn convert_named(&self, target: &str) -> Result<Self> {
        match target.parse::<Space>() {
            Ok(space) => self.convert(space),
            Err(()) => {
                tracing::debug!(from = %self.space, to = target, "rejected conversion to unknown space");
                Err(Error::UnsupportedConversion {
                    from: self.space,
                    to: target.to_owned(),
                })
            }
        }
    }
}

/// Calculate the hue from RGB components normalized to [0, 1] and return it
/// along with the min and max of the components.
fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
    let Components(red, green, blue) = *from;

    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);

    let delta = max - min;

    let hue = if delta == 0.0 {
        0.0
    } else if max == red {
        60.0 * (green - blue) / delta + if green < blue { 360.0 } else { 0.0 }
    } else if max == green {
        60.0 * (blue - red) / delta + 120.0
    } else {
        60.0 * (red - green) / delta + 240.0
    };

    (normalize_hue(hue), min, max)
}

/// Convert from RGB channels in [0, 255] to HSL.
pub fn rgb_to_hsl(from: &Components) -> Components {
    let (hue, min, max) = rgb_to_hue_with_min_max(&from.map(|c| c / 255.0));

    let lightness = (max + min) / 2.0;
    let delta = max - min;

    let saturation = if lightness == 0.0 || delta == 0.0 {
        0.0
    } else if lightness <= 0.5 {
        delta / (2.0 * lightness)
    } else {
        delta / (2.0 - 2.0 * lightness)
    };

    Components(hue, saturation, lightness)
}

/// Convert from HSL to RGB channels in [0, 255], rounded to whole values.
pub fn hsl_to_rgb(from: &Components) -> Components {
    let Components(hue, saturation, lightness) = *from;

    if saturation == 0.0 {
        let gray = to_channel(lightness);
        return Components(gray, gray, gray);
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;
    let hk = hue / 360.0;

    let channel = |t: Component| {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };

        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * 6.0 * (2.0 / 3.0 - t)
        } else {
            p
        }
    };

    Components(
        channel(hk + 1.0 / 3.0),
        channel(hk),
        channel(hk - 1.0 / 3.0),
    )
    .map(to_channel)
}

/// Convert from RGB channels in [0, 255] to HSV.
pub fn rgb_to_hsv(from: &Components) -> Components {
    let (hue, min, max) = rgb_to_hue_with_min_max(&from.map(|c| c / 255.0));

    let saturation = if max == 0.0 { 0.0 } else { 1.0 - min / max };

    Components(hue, saturation, max)
}

/// Convert from HSV to RGB channels in [0, 255], rounded to whole values.
///
/// Fails with [`Error::InvalidHue`] if the hue does not land in one of the six
/// 60 degree sectors of [0, 360).
pub fn hsv_to_rgb(from: &Components) -> Result<Components> {
    let Components(hue, saturation, value) = *from;

    let sector = (hue / 60.0).floor();
    let f = hue / 60.0 - sector;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - f * saturation);
    let t = value * (1.0 - (1.0 - f) * saturation);

    let rgb = match sector {
        s if s == 0.0 => Components(value, t, p),
        s if s == 1.0 => Components(q, value, p),
        s if s == 2.0 => Components(p, value, t),
        s if s == 3.0 => Components(p, q, value),
        s if s == 4.0 => Components(t, p, value),
        s if s == 5.0 => Components(value, p, q),
        _ => return Err(Error::InvalidHue(hue)),
    };

    Ok(rgb.map(to_channel))
}

/// Convert from HSL to HSV. The hue is unchanged.
pub fn hsl_to_hsv(from: &Components) -> Components {
    let Components(hue, saturation, lightness) = *from;

    let value = lightness + saturation * lightness.min(1.0 - lightness);
    let saturation = if value == 0.0 {
        0.0
    } else {
        2.0 * (1.0 - lightness / value)
    };

    Components(hue, saturation, value)
}

/// Convert from HSV to HSL. The hue is unchanged.
pub fn hsv_to_hsl(from: &Components) -> Components {
    let Components(hue, saturation, value) = *from;

    let lightness = value * (1.0 - saturation / 2.0);
    let saturation = if lightness == 0.0 || lightness == 1.0 {
        0.0
    } else {
        (value - lightness) / lightness.min(1.0 - lightness)
    };

    Components(hue, saturation, lightness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn test_conversions() {
        use Space as S;

        #[rustfmt::skip]
        #[allow(clippy::type_complexity)]
        const TESTS: &[(Space, Component, Component, Component, Space, Component, Component, Component)] = &[
            (S::Rgb, 170.0, 187.0, 204.0, S::Hsl, 210.0, 0.25, 0.73),
            (S::Rgb, 170.0, 187.0, 204.0, S::Hsv, 210.0, 0.17, 0.80),
            (S::Hsl, 33.0, 0.22, 0.44, S::Rgb, 137.0, 115.0, 88.0),
            (S::Hsl, 33.0, 0.22, 0.44, S::Hsv, 33.0, 0.36, 0.54),
            (S::Hsv, 33.0, 0.22, 0.44, S::Rgb, 112.0, 101.0, 88.0),
            (S::Hsv, 33.0, 0.22, 0.44, S::Hsl, 33.0, 0.12, 0.39),
            (S::Rgb, 255.0, 0.0, 0.0, S::Hsl, 0.0, 1.0, 0.5),
            (S::Rgb, 0.0, 255.0, 0.0, S::Hsl, 120.0, 1.0, 0.5),
            (S::Rgb, 0.0, 0.0, 255.0, S::Hsv, 240.0, 1.0, 1.0),
            (S::Rgb, 255.0, 0.0, 255.0, S::Hsv, 300.0, 1.0, 1.0),
            (S::Hsl, 60.0, 1.0, 0.5, S::Rgb, 255.0, 255.0, 0.0),
            (S::Hsl, 180.0, 1.0, 0.5, S::Rgb, 0.0, 255.0, 255.0),
            (S::Hsv, 300.0, 1.0, 1.0, S::Rgb, 255.0, 0.0, 255.0),
            (S::Hsv, 200.0, 0.5, 0.8, S::Rgb, 102.0, 170.0, 204.0),
        ];

        for &(source_space, source_0, source_1, source_2, dest_space, dest_0, dest_1, dest_2) in
            TESTS
        {
            println!("{:?} -> {:?}", source_space, dest_space);
            let source = Color::new(source_space, Components(source_0, source_1, source_2));
            let dest = source.convert(dest_space).unwrap();
            assert_eq!(dest.space, dest_space);
            assert_component_eq!(dest.components.0, dest_0, 0.01);
            assert_component_eq!(dest.components.1, dest_1, 0.01);
            assert_component_eq!(dest.components.2, dest_2, 0.01);
        }
    }

    #[test]
    fn converting_to_own_space_is_unsupported() {
        for space in Space::ALL {
            let color = Color::new(space, Components(0.0, 0.0, 0.0));
            match color.convert(space) {
                Err(Error::UnsupportedConversion { from, to }) => {
                    assert_eq!(from, space);
                    assert_eq!(to, space.to_string());
                }
                other => panic!("expected unsupported conversion, got {:?}", other),
            }
        }
    }

    #[test]
    fn converting_by_name() {
        let rgb = Color::rgb(170.0, 187.0, 204.0);
        assert_eq!(
            rgb.convert_named("hsv").unwrap(),
            rgb.convert(Space::Hsv).unwrap()
        );
        assert!(matches!(
            rgb.convert_named("rgb"),
            Err(Error::UnsupportedConversion { from: Space::Rgb, .. })
        ));
        match rgb.convert_named("lab") {
            Err(Error::UnsupportedConversion { from, to }) => {
                assert_eq!(from, Space::Rgb);
                assert_eq!(to, "lab");
            }
            other => panic!("expected unsupported conversion, got {:?}", other),
        }
    }

    #[test]
    fn conversion_leaves_source_untouched() {
        let source = Color::hsl(33.0, 0.22, 0.44);
        let _ = source.convert(Space::Rgb).unwrap();
        assert_eq!(source, Color::hsl(33.0, 0.22, 0.44));
    }

    #[test]
    fn hue_is_zero_if_there_is_no_chroma() {
        assert_eq!(rgb_to_hsl(&Components(255.0, 255.0, 255.0)).0, 0.0);
        assert_eq!(rgb_to_hsl(&Components(0.0, 0.0, 0.0)).0, 0.0);
        assert_eq!(rgb_to_hsv(&Components(128.0, 128.0, 128.0)).0, 0.0);
    }

    #[test]
    fn hue_of_red_dominant_colors_stays_below_a_full_turn() {
        let Components(hue, _, _) = rgb_to_hsl(&Components(255.0, 0.0, 1.0));
        assert!((0.0..360.0).contains(&hue));
        assert_component_eq!(hue, 359.76, 0.01);
    }

    #[test]
    fn zero_saturation_is_gray() {
        assert_eq!(
            hsl_to_rgb(&Components(123.0, 0.0, 0.5)),
            Components(128.0, 128.0, 128.0)
        );
        assert_eq!(
            hsv_to_rgb(&Components(123.0, 0.0, 0.5)).unwrap(),
            Components(128.0, 128.0, 128.0)
        );
    }

    #[test]
    fn hsl_extremes_have_no_saturation() {
        assert_eq!(rgb_to_hsl(&Components(0.0, 0.0, 0.0)).1, 0.0);
        assert_eq!(rgb_to_hsl(&Components(255.0, 255.0, 255.0)).1, 0.0);
        // Black and white in hsv map to lightness 0 and 1.
        assert_eq!(hsv_to_hsl(&Components(10.0, 0.7, 0.0)).1, 0.0);
        assert_eq!(hsv_to_hsl(&Components(10.0, 0.0, 1.0)).1, 0.0);
        assert_eq!(hsl_to_hsv(&Components(10.0, 0.7, 0.0)), Components(10.0, 0.0, 0.0));
    }

    #[test]
    fn hsv_hue_outside_the_wheel_is_invalid() {
        for hue in [360.0, 420.0, -0.5, Component::NAN] {
            assert!(
                matches!(
                    hsv_to_rgb(&Components(hue, 0.5, 0.5)),
                    Err(Error::InvalidHue(_))
                ),
                "hue {} should be rejected",
                hue
            );
        }
        assert!(Color::hsv(360.0, 1.0, 1.0).convert(Space::Rgb).is_err());
        assert!(hsv_to_rgb(&Components(359.9, 1.0, 1.0)).is_ok());
    }

    #[test]
    fn hsl_hue_is_passed_through_to_hsv() {
        let hsv = hsl_to_hsv(&Components(400.0, 0.5, 0.5));
        assert_eq!(hsv.0, 400.0);
        let hsl = hsv_to_hsl(&Components(-20.0, 0.5, 0.5));
        assert_eq!(hsl.0, -20.0);
    }
}
