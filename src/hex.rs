//! Parse and format hex color codes.

use crate::{
    color::Component,
    error::{Error, Result},
    models::Rgb,
};

/// Parse a hex color into an [`Rgb`] color.
///
/// The allowed formats are:
/// * #RGB
/// * #RRGGBB
///
/// The leading `#` is optional and digits may be in either case.
pub fn parse_hex(text: &str) -> Result<Rgb> {
    let malformed = || {
        tracing::debug!(text, "malformed hex color");
        Error::MalformedHex(text.to_owned())
    };

    let nibble = |c: u8| -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            b'A'..=b'F' => Some(c - b'A' + 10),
            _ => None,
        }
    };

    let body = text.strip_prefix('#').unwrap_or(text);
    let bytes = body.as_bytes();

    let [r, g, b] = match bytes.len() {
        3 => {
            // #RGB
            let mut channels = [0; 3];
            for (channel, &c) in channels.iter_mut().zip(bytes) {
                *channel = nibble(c).ok_or_else(malformed)? * 17;
            }
            channels
        }
        6 => {
            // #RRGGBB
            let mut channels = [0; 3];
            for (channel, pair) in channels.iter_mut().zip(bytes.chunks_exact(2)) {
                let hi = nibble(pair[0]).ok_or_else(malformed)?;
                let lo = nibble(pair[1]).ok_or_else(malformed)?;
                *channel = hi << 4 | lo;
            }
            channels
        }
        _ => return Err(malformed()),
    };

    Ok(Rgb::new(r.into(), g.into(), b.into()))
}

/// Format RGB channels as a lowercase `#rrggbb` string. Channels are rounded
/// to the nearest integer and clamped to [0, 255].
pub fn format_hex(red: Component, green: Component, blue: Component) -> String {
    let [r, g, b] = [red, green, blue].map(|c| {
        let c = c.round();
        if c.is_nan() {
            0
        } else {
            c.clamp(0.0, 255.0) as u8
        }
    });
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_long_form() {
        assert_eq!(parse_hex("#aabbcc").unwrap(), Rgb::new(170.0, 187.0, 204.0));
        assert_eq!(parse_hex("#000000").unwrap(), Rgb::new(0.0, 0.0, 0.0));
        assert_eq!(parse_hex("#FFfF00").unwrap(), Rgb::new(255.0, 255.0, 0.0));
        assert_eq!(parse_hex("0a1b2c").unwrap(), Rgb::new(10.0, 27.0, 44.0));
    }

    #[test]
    fn short_form_expands_each_digit() {
        let short = parse_hex("#abc").unwrap();
        assert_eq!(short, Rgb::new(170.0, 187.0, 204.0));
        assert_eq!(short, parse_hex("#aabbcc").unwrap());
        assert_eq!(short, parse_hex("abc").unwrap());
        assert_eq!(parse_hex("#F0A").unwrap(), Rgb::new(255.0, 0.0, 170.0));
    }

    #[test]
    fn malformed_input_is_rejected() {
        for text in [
            "", "#", "#ab", "#abcd", "#abcde", "#abcdefa", "##abc", "#xyz", "#12345g", " #abc",
            "#ab c", "#ÿÿÿ",
        ] {
            match parse_hex(text) {
                Err(Error::MalformedHex(t)) => assert_eq!(t, text),
                other => panic!("{:?} should be malformed, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn format_pads_and_lowercases() {
        assert_eq!(format_hex(170.0, 187.0, 204.0), "#aabbcc");
        assert_eq!(format_hex(0.0, 1.0, 16.0), "#000110");
        assert_eq!(format_hex(127.5, 0.49, 254.5), "#8000ff");
    }

    #[test]
    fn format_clamps_out_of_range_channels() {
        assert_eq!(format_hex(300.0, -4.0, Component::NAN), "#ff0000");
    }

    #[test]
    fn parse_then_format() {
        for text in ["#000000", "#ffffff", "#1e90ff", "#aabbcc"] {
            assert_eq!(parse_hex(text).unwrap().to_hex(), text);
        }
    }
}
