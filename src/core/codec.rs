//! Channel Codec - physical values <-> 8-bit channel storage
//!
//! Unit channels (temperature, density) store `s/255` for `s in 0..=255`.
//! Velocity channels are signed: non-negative values occupy `0..=127`,
//! negative values are folded into `128..=254` by adding 255 after the
//! floor, which is the texture convention the field is uploaded with:
//! `(0 -> 127 = 0.0 -> 1.0, 128 -> 255 = -1.0 -> 0.0)`.
//!
//! Both encoders truncate (floor) after clamping and map NaN to the zero
//! byte, so any f32 fed to them yields a storable value.

/// Byte that decodes to 0.0 on every channel.
pub const ZERO: u8 = 0;

/// Scale applied before flooring a signed value.
const SIGNED_SCALE: f32 = 127.0;

/// Encode a unit-range value (temperature, density).
#[inline]
pub fn encode_unit(x: f32) -> u8 {
    if x.is_nan() {
        return ZERO;
    }
    (x.clamp(0.0, 1.0) * 255.0).floor() as u8
}

/// Decode a unit-range channel.
#[inline]
pub fn decode_unit(s: u8) -> f32 {
    s as f32 / 255.0
}

/// Encode a signed velocity component in `[-1, 1]`.
#[inline]
pub fn encode_signed(v: f32) -> u8 {
    if v.is_nan() {
        return ZERO;
    }
    let v = v.clamp(-1.0, 1.0);
    let s = (v * SIGNED_SCALE).floor() as i32;
    if v < 0.0 {
        (s + 255) as u8
    } else {
        s as u8
    }
}

/// Decode a signed velocity channel.
#[inline]
pub fn decode_signed(s: u8) -> f32 {
    let x = s as f32 / 255.0;
    if x >= 0.5 {
        (x - 1.0) * 2.0
    } else {
        x * 2.0
    }
}

/// Decode a velocity pair (green/blue channels).
#[inline]
pub fn decode_velocity(gx: u8, gy: u8) -> (f32, f32) {
    (decode_signed(gx), decode_signed(gy))
}

/// Encode a velocity pair (green/blue channels).
#[inline]
pub fn encode_velocity(vx: f32, vy: f32) -> (u8, u8) {
    (encode_signed(vx), encode_signed(vy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_encodes_to_zero_byte() {
        assert_eq!(encode_unit(0.0), ZERO);
        assert_eq!(encode_signed(0.0), ZERO);
        assert_eq!(decode_signed(ZERO), 0.0);
        assert_eq!(decode_unit(ZERO), 0.0);
    }

    #[test]
    fn unit_clamps_and_truncates() {
        assert_eq!(encode_unit(1.0), 255);
        assert_eq!(encode_unit(4.0), 255);
        assert_eq!(encode_unit(-3.0), 0);
        // 0.5 * 255 = 127.5 -> floor
        assert_eq!(encode_unit(0.5), 127);
    }

    #[test]
    fn signed_uses_folded_floor() {
        assert_eq!(encode_signed(1.0), 127);
        assert_eq!(encode_signed(-1.0), 128);
        // floor(-0.001 * 127) = -1 -> 254
        assert_eq!(encode_signed(-0.001), 254);
        // floor(-63.5) = -64 -> 191
        assert_eq!(encode_signed(-0.5), 191);
        assert_eq!(encode_signed(0.5), 63);
        assert_eq!(encode_signed(7.0), 127);
        assert_eq!(encode_signed(-7.0), 128);
    }

    #[test]
    fn signed_decode_splits_at_half() {
        assert!(decode_signed(127) > 0.99);
        assert!(decode_signed(128) < -0.99);
        assert!(decode_signed(254) < 0.0);
        assert!(decode_signed(254) > -0.01);
        assert_eq!(decode_signed(255), 0.0);
    }

    #[test]
    fn nan_is_absorbed() {
        assert_eq!(encode_unit(f32::NAN), ZERO);
        assert_eq!(encode_signed(f32::NAN), ZERO);
        assert_eq!(encode_unit(f32::INFINITY), 255);
        assert_eq!(encode_signed(f32::NEG_INFINITY), 128);
    }
}
