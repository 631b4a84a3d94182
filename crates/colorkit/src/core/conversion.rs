use super::math::{clamp_unit, multiply, wrap};
use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert the coordinate to its 8-bit representation.
///
/// This function clamps the coordinate to `0..=1` before scaling it by 255 and
/// rounding half away from zero.
#[inline]
pub(crate) fn to_8bit(value: Float) -> u8 {
    (clamp_unit(value) * 255.0).round() as u8
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from gamma-corrected sRGB to linear sRGB. This is a
/// one-hop, direct conversion.
fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.04045 {
            value / 12.92
        } else {
            ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

/// Convert coordinates from linear sRGB to gamma-corrected sRGB. This is a
/// one-hop, direct conversion.
fn linear_rgb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.0031308 {
            value * 12.92
        } else {
            magnitude
                .powf(1.0 / 2.4)
                .mul_add(1.055, -0.055)
                .copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/srgb-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2409699419045226,  -1.537383177570094,   -0.4986107602930034  ],
    [ -0.9692436362808796,   1.8759675015077202,   0.04155505740717559 ],
    [  0.05563007969699366, -0.20397695888897652,  1.0569715142428786  ],
];

/// The D65 reference white in XYZ.
///
/// The white point is derived from the sRGB primaries, i.e., it is the XYZ
/// representation of linear sRGB white. That way, sRGB white maps to L\*=100
/// and a\*=b\*=0 without residual error.
pub(crate) const D65_WHITE: [Float; 3] = [
    LINEAR_SRGB_TO_XYZ[0][0] + LINEAR_SRGB_TO_XYZ[0][1] + LINEAR_SRGB_TO_XYZ[0][2],
    LINEAR_SRGB_TO_XYZ[1][0] + LINEAR_SRGB_TO_XYZ[1][1] + LINEAR_SRGB_TO_XYZ[1][2],
    LINEAR_SRGB_TO_XYZ[2][0] + LINEAR_SRGB_TO_XYZ[2][1] + LINEAR_SRGB_TO_XYZ[2][2],
];

/// Convert coordinates for sRGB to XYZ. This is a two-hop conversion.
#[inline]
fn srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let linear_srgb = rgb_to_linear_rgb(value);
    multiply(&LINEAR_SRGB_TO_XYZ, &linear_srgb)
}

/// Convert coordinates for XYZ to sRGB. This is a two-hop conversion. It does
/// not clamp the result.
#[inline]
fn xyz_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let linear_srgb = multiply(&XYZ_TO_LINEAR_SRGB, value);
    linear_rgb_to_rgb(&linear_srgb)
}

// --------------------------------------------------------------------------------------------------------------------

mod cielab {
    use super::D65_WHITE;
    use crate::Float;

    const DELTA: Float = 6.0 / 29.0;
    const EPSILON: Float = DELTA * DELTA * DELTA;
    const OFFSET: Float = 4.0 / 29.0;

    #[inline]
    fn f(t: Float) -> Float {
        if t > EPSILON {
            t.cbrt()
        } else {
            t / (3.0 * DELTA * DELTA) + OFFSET
        }
    }

    #[inline]
    fn f_inverse(t: Float) -> Float {
        if t > DELTA {
            t * t * t
        } else {
            3.0 * DELTA * DELTA * (t - OFFSET)
        }
    }

    /// Convert coordinates for XYZ to CIE L\*a\*b\*. This is a one-hop, direct
    /// conversion.
    pub(crate) fn xyz_to_lab(value: &[Float; 3]) -> [Float; 3] {
        let [x, y, z] = *value;
        let [xn, yn, zn] = D65_WHITE;
        let (fx, fy, fz) = (f(x / xn), f(y / yn), f(z / zn));

        [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
    }

    /// Convert coordinates for CIE L\*a\*b\* to XYZ. This is a one-hop, direct
    /// conversion.
    #[allow(non_snake_case)]
    pub(crate) fn lab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
        let [L, a, b] = *value;
        let [xn, yn, zn] = D65_WHITE;

        let fy = (L + 16.0) / 116.0;
        let fx = fy + a / 500.0;
        let fz = fy - b / 200.0;

        [xn * f_inverse(fx), yn * f_inverse(fy), zn * f_inverse(fz)]
    }

    /// The chroma below which hue is considered indeterminate.
    const ACHROMATIC_EPSILON: Float = 1e-8;

    /// Convert coordinates for CIE L\*a\*b\* to CIE LCH. This is a one-hop,
    /// direct conversion. Hue is in degrees `0..360` and zero for achromatic
    /// colors.
    #[allow(non_snake_case)]
    pub fn lab_to_lch(value: &[Float; 3]) -> [Float; 3] {
        let [L, a, b] = *value;

        let C = a.hypot(b);
        if C < ACHROMATIC_EPSILON {
            return [L, C, 0.0];
        }

        let h = super::wrap(b.atan2(a).to_degrees(), 360.0);
        [L, C, h]
    }

    /// Convert coordinates for CIE LCH to CIE L\*a\*b\*. This is a one-hop,
    /// direct conversion.
    #[allow(non_snake_case)]
    pub fn lch_to_lab(value: &[Float; 3]) -> [Float; 3] {
        let [L, C, h] = *value;

        if h.is_nan() {
            [L, 0.0, 0.0]
        } else {
            let hue_radian = h.to_radians();
            [L, C * hue_radian.cos(), C * hue_radian.sin()]
        }
    }
}

use cielab::{lab_to_xyz, xyz_to_lab};
pub use cielab::{lab_to_lch, lch_to_lab};

// --------------------------------------------------------------------------------------------------------------------

/// Convert gamma-corrected sRGB coordinates to CIE L\*a\*b\*.
///
/// The conversion linearizes the coordinates, transforms them to XYZ with
/// sRGB's primaries, and then applies the CIE nonlinearity relative to the D65
/// white point. It does not clamp its input.
///
/// ```
/// # use colorkit::transform::rgb_to_lab;
/// let [l, a, b] = rgb_to_lab(&[1.0, 1.0, 1.0]);
/// assert!((l - 100.0).abs() < 1e-9);
/// assert!(a.abs() < 1e-9 && b.abs() < 1e-9);
/// ```
pub fn rgb_to_lab(value: &[Float; 3]) -> [Float; 3] {
    xyz_to_lab(&srgb_to_xyz(value))
}

/// Convert CIE L\*a\*b\* coordinates to gamma-corrected sRGB.
///
/// Colors outside the sRGB gamut are clamped to `0..=1` per coordinate, with
/// not-a-number coordinates becoming zero. Hence the result always is a valid
/// sRGB color, even if it is not exactly the requested one.
pub fn lab_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = xyz_to_srgb(&lab_to_xyz(value));
    [clamp_unit(r), clamp_unit(g), clamp_unit(b)]
}

/// Convert gamma-corrected sRGB coordinates to CIE LCH. This is a three-hop
/// conversion.
pub fn rgb_to_lch(value: &[Float; 3]) -> [Float; 3] {
    lab_to_lch(&rgb_to_lab(value))
}

/// Convert CIE LCH coordinates to gamma-corrected sRGB, clamping the result.
/// This is a three-hop conversion.
pub fn lch_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    lab_to_rgb(&lch_to_lab(value))
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert gamma-corrected sRGB coordinates to HSB.
///
/// Hue is a fraction of a full turn in `0..1` and zero for grays. Saturation
/// is zero for black.
pub fn rgb_to_hsb(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue = if delta <= 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    let saturation = if max <= 0.0 { 0.0 } else { delta / max };

    [wrap(hue / 6.0, 1.0), saturation, max]
}

/// Convert HSB coordinates to gamma-corrected sRGB.
///
/// Hue wraps around, so that 1.25 is the same as 0.25. The resulting
/// coordinates are clamped to `0..=1`.
pub fn hsb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [hue, saturation, brightness] = *value;
    let hue = if hue.is_nan() { 0.0 } else { wrap(hue, 1.0) };

    let sector = hue * 6.0;
    let index = sector.floor();
    let fraction = sector - index;

    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * fraction);
    let t = brightness * (1.0 - saturation * (1.0 - fraction));
    let v = brightness;

    let [r, g, b] = match index as u8 % 6 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    };

    [clamp_unit(r), clamp_unit(g), clamp_unit(b)]
}

// ====================================================================================================================

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod test {
    use super::*;
    use crate::assert_close_enough;

    fn assert_within(actual: &[Float; 3], expected: &[Float; 3], tolerance: Float) {
        for index in 0..3 {
            assert!(
                (actual[index] - expected[index]).abs() <= tolerance,
                "coordinates differ at {}:\n{:?}\n{:?}",
                index,
                actual,
                expected
            );
        }
    }

    #[test]
    fn test_gamma() {
        for value in [0.0, 0.01, 0.04045, 0.2, 0.5, 0.9, 1.0] {
            let [linear, _, _] = rgb_to_linear_rgb(&[value, 0.0, 0.0]);
            let [back, _, _] = linear_rgb_to_rgb(&[linear, 0.0, 0.0]);
            assert!((back - value).abs() < 1e-6, "{} != {}", back, value);
        }
    }

    #[test]
    fn test_white_point() {
        assert_close_enough!(D65_WHITE[0], 0.9504559270516717);
        assert_close_enough!(D65_WHITE[1], 1.0);
        assert_close_enough!(D65_WHITE[2], 1.0890577507598784);

        assert_within(&rgb_to_lab(&[1.0, 1.0, 1.0]), &[100.0, 0.0, 0.0], 1e-9);
        assert_within(&rgb_to_lab(&[0.0, 0.0, 0.0]), &[0.0, 0.0, 0.0], 1e-9);
    }

    #[cfg(feature = "f64")]
    const LAB_TOLERANCE: Float = 1e-4;
    #[cfg(not(feature = "f64"))]
    const LAB_TOLERANCE: Float = 1e-3;

    #[test]
    fn test_lab_references() {
        // Computed with the matrices above and the white point derived from them.
        for (rgb, lab) in [
            ([1.0, 0.0, 0.0], [53.237116, 80.090114, 67.203264]),
            ([0.0, 1.0, 0.0], [87.735519, -86.181597, 83.186620]),
            ([0.0, 0.0, 1.0], [32.300873, 79.195270, -107.855466]),
            ([0.5, 0.5, 0.5], [53.388965, 0.0, 0.0]),
            ([1.0, 0.5, 0.25], [67.231044, 44.365771, 55.365269]),
            ([0.2, 0.4, 0.6], [42.009163, -0.145938, -32.845134]),
        ] {
            assert_within(&rgb_to_lab(&rgb), &lab, LAB_TOLERANCE);
        }
    }

    #[test]
    fn test_lch_references() {
        for (rgb, lch) in [
            ([1.0, 0.0, 0.0], [53.237116, 104.550012, 39.999865]),
            ([0.0, 1.0, 0.0], [87.735519, 119.780138, 136.013069]),
            ([0.0, 0.0, 1.0], [32.300873, 133.808416, 306.288803]),
            ([1.0, 0.5, 0.25], [67.231044, 70.948112, 51.293807]),
            ([0.2, 0.4, 0.6], [42.009163, 32.845458, 269.745425]),
        ] {
            assert_within(&rgb_to_lch(&rgb), &lch, LAB_TOLERANCE);
        }
    }

    #[test]
    fn test_lab_round_trip() {
        for lab in [
            [50.0, 0.0, 0.0],
            [60.0, 30.0, 20.0],
            [75.0, -20.0, 30.0],
            [30.0, 20.0, -40.0],
            [5.0, 1.0, -1.0],
        ] {
            let rgb = lab_to_rgb(&lab);
            assert_within(&rgb_to_lab(&rgb), &lab, 1e-4);
        }
    }

    #[test]
    fn test_out_of_gamut() {
        for lab in [
            [50.0, 250.0, -250.0],
            [100.0, -128.0, 128.0],
            [-10.0, 0.0, 0.0],
            [150.0, 0.0, 0.0],
            [Float::NAN, 0.0, 0.0],
        ] {
            let rgb = lab_to_rgb(&lab);
            for c in rgb {
                assert!((0.0..=1.0).contains(&c), "{:?} yields {:?}", lab, rgb);
            }

            let [l, a, b] = rgb_to_lab(&rgb);
            assert!(!l.is_nan() && !a.is_nan() && !b.is_nan());
            assert!((-1e-9..=100.0 + 1e-9).contains(&l));
        }
    }

    #[test]
    fn test_lch() {
        let [l, c, h] = lab_to_lch(&[50.0, 0.0, 10.0]);
        assert_eq!(l, 50.0);
        assert_close_enough!(c, 10.0);
        assert_close_enough!(h, 90.0);

        let [_, _, h] = lab_to_lch(&[50.0, 0.0, -10.0]);
        assert_close_enough!(h, 270.0);

        assert_eq!(lab_to_lch(&[50.0, 0.0, 0.0]), [50.0, 0.0, 0.0]);
        assert_eq!(lab_to_lch(&[50.0, -0.0, -0.0])[2], 0.0);

        let lab = lch_to_lab(&[60.0, 40.0, 135.0]);
        assert_within(&lab_to_lch(&lab), &[60.0, 40.0, 135.0], 1e-9);
        assert_eq!(lch_to_lab(&[60.0, 40.0, Float::NAN]), [60.0, 0.0, 0.0]);
    }

    #[test]
    fn test_hsb() {
        assert_eq!(rgb_to_hsb(&[0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(rgb_to_hsb(&[1.0, 1.0, 1.0]), [0.0, 0.0, 1.0]);
        assert_eq!(rgb_to_hsb(&[1.0, 0.0, 0.0]), [0.0, 1.0, 1.0]);
        assert_within(&rgb_to_hsb(&[0.0, 1.0, 0.0]), &[1.0 / 3.0, 1.0, 1.0], 1e-12);
        assert_within(&rgb_to_hsb(&[0.0, 0.0, 1.0]), &[2.0 / 3.0, 1.0, 1.0], 1e-12);
        assert_within(&rgb_to_hsb(&[1.0, 0.0, 0.5]), &[11.0 / 12.0, 1.0, 1.0], 1e-12);

        assert_within(&hsb_to_rgb(&[0.3, 0.5, 0.8]), &[0.48, 0.8, 0.4], 1e-12);
        assert_within(&rgb_to_hsb(&[0.48, 0.8, 0.4]), &[0.3, 0.5, 0.8], 1e-12);
        assert_within(&hsb_to_rgb(&[1.3, 0.5, 0.8]), &[0.48, 0.8, 0.4], 1e-12);
        assert_within(&hsb_to_rgb(&[0.5, 2.0, 1.0]), &[0.0, 1.0, 1.0], 1e-12);
    }
}
