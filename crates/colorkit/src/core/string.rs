use super::conversion::to_8bit;
use crate::error::ColorFormatError;
use crate::Float;

/// Strip leading and trailing white space as well as an optional leading `#`
/// from the string.
fn strip_hashed(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix('#').map_or(s, str::trim)
}

/// Parse a single ASCII hexadecimal digit.
#[inline]
fn parse_digit(digit: u8) -> Result<u8, ColorFormatError> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        _ => Err(ColorFormatError::InvalidHexFormat),
    }
}

/// Parse exactly `N` bytes written as `2 * N` hexadecimal digits.
///
/// The length check operates on UTF-8 bytes, not characters. A string with
/// non-ASCII characters may thus pass the length check, but it then fails on
/// the first byte that is not a hexadecimal digit.
fn parse_bytes<const N: usize>(digits: &str) -> Result<[u8; N], ColorFormatError> {
    let digits = digits.as_bytes();
    if digits.len() != 2 * N {
        return Err(ColorFormatError::InvalidHexFormat);
    }

    let mut bytes = [0; N];
    for (byte, pair) in bytes.iter_mut().zip(digits.chunks_exact(2)) {
        *byte = (parse_digit(pair[0])? << 4) | parse_digit(pair[1])?;
    }
    Ok(bytes)
}

/// Parse a color in hashed hexadecimal format.
///
/// After trimming white space and an optional leading `#`, the string must
/// contain exactly six hexadecimal digits if `expect_alpha` is `false` and
/// exactly eight if it is `true`. In the former case, the color is opaque. In
/// the latter case, the last two digits are the opacity. This function never
/// substitutes a default color; anything else is an
/// [`InvalidHexFormat`](ColorFormatError::InvalidHexFormat) error.
pub fn parse_hex(s: &str, expect_alpha: bool) -> Result<[Float; 4], ColorFormatError> {
    let digits = strip_hashed(s);

    let [r, g, b, a] = if expect_alpha {
        parse_bytes::<4>(digits)?
    } else {
        let [r, g, b] = parse_bytes::<3>(digits)?;
        [r, g, b, 0xff]
    };

    Ok([
        r as Float / 255.0,
        g as Float / 255.0,
        b as Float / 255.0,
        a as Float / 255.0,
    ])
}

/// Parse a color in hashed hexadecimal format with or without opacity.
///
/// This function determines whether to expect opacity based on the number of
/// digits, accepting six or eight digits.
pub fn parse_any_hex(s: &str) -> Result<[Float; 4], ColorFormatError> {
    let digits = strip_hashed(s);
    parse_hex(digits, digits.len() == 8)
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the coordinates in hashed hexadecimal format.
///
/// This function clamps each coordinate to `0..=1`, scales it by 255, rounds
/// half away from zero, and formats the result as two uppercase hexadecimal
/// digits. The digits for opacity are only included if `include_alpha` is
/// `true`.
pub fn format_hex(coordinates: &[Float; 4], include_alpha: bool) -> String {
    let [r, g, b, a] = *coordinates;
    if include_alpha {
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            to_8bit(r),
            to_8bit(g),
            to_8bit(b),
            to_8bit(a)
        )
    } else {
        format!("#{:02X}{:02X}{:02X}", to_8bit(r), to_8bit(g), to_8bit(b))
    }
}

// ====================================================================================================================
