//! Math utility functions.

use num_traits::Float;

/// The full turn of the hue wheel, in degrees.
pub const FULL_TURN: f64 = 360.0;

fn full_turn<T: Float>() -> T {
    T::from(FULL_TURN).unwrap_or_else(T::nan)
}

/// Wrap a hue in degrees into the range [0, 360).
pub fn normalize_hue<T: Float>(hue: T) -> T {
    let turn = full_turn::<T>();
    let hue = hue % turn;
    let hue = if hue < T::zero() { hue + turn } else { hue };
    // A tiny negative remainder can round up to exactly a full turn.
    if hue >= turn {
        T::zero()
    } else {
        hue
    }
}

/// Scale a channel from [0, 1] to [0, 255] and round half away from zero.
pub fn to_channel<T: Float>(value: T) -> T {
    (value * T::from(255.0).unwrap_or_else(T::nan)).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_wraps_into_a_single_turn() {
        assert_eq!(normalize_hue(0.0_f64), 0.0);
        assert_eq!(normalize_hue(359.5_f64), 359.5);
        assert_eq!(normalize_hue(360.0_f64), 0.0);
        assert_eq!(normalize_hue(450.0_f64), 90.0);
        assert_eq!(normalize_hue(-90.0_f64), 270.0);
        assert_eq!(normalize_hue(-1e-20_f64), 0.0);
        assert!(normalize_hue(f64::NAN).is_nan());
    }

    #[test]
    fn channels_round_half_away_from_zero() {
        assert_eq!(to_channel(0.0_f64), 0.0);
        assert_eq!(to_channel(1.0_f64), 255.0);
        assert_eq!(to_channel(0.5_f64), 128.0);
        assert_eq!(to_channel(0.5_f32), 128.0);
    }
}
