#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// The enumeration of color spaces an attribute can belong to.
///
/// # RGB
///
/// [`Color`](crate::Color) stores gamma-corrected sRGB coordinates plus
/// opacity. RGB therefore is the identity space: reading a tuple is a plain
/// field access and reconstructing a color from a modified tuple only clamps
/// coordinates to the unit range.
///
/// # HSB
///
/// HSB (also known as HSV) is the hexcone model over the very same sRGB
/// coordinates. Unlike many graphics libraries, this crate follows the
/// convention of Apple's frameworks and expresses hue as a fraction of a full
/// turn, i.e., `0..1`, not in degrees.
///
/// # LCH
///
/// CIE LCH is the polar form of CIE L\*a\*b\* relative to the D65 white point,
/// which is also sRGB's white point. Lightness ranges `0..=100`, chroma starts
/// at zero and in practice stays below 135 for sRGB colors, and hue is
/// measured in degrees `0..360`. Because CIE L\*a\*b\* is (approximately)
/// perceptually uniform, LCH is well-suited to nudging colors, e.g., making
/// them lighter without shifting their hue.
///
/// # Opacity
///
/// Opacity has no colorimetric meaning. It passes unchanged through all
/// conversions and hence is not associated with any color space.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "colorkit")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Rgb,
    Hsb,
    Lch,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorSpace {
    /// Determine whether this color space has a hue coordinate.
    pub const fn is_polar(&self) -> bool {
        matches!(*self, Self::Hsb | Self::Lch)
    }

    /// Get the period of this color space's hue.
    ///
    /// HSB measures hue in fractions of a turn, LCH in degrees. RGB has no
    /// hue and hence no period.
    pub const fn hue_period(&self) -> Option<crate::Float> {
        match *self {
            Self::Rgb => None,
            Self::Hsb => Some(1.0),
            Self::Lch => Some(360.0),
        }
    }

    /// Get this color space's human-readable name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Rgb => "RGB",
            Self::Hsb => "HSB",
            Self::Lch => "LCH",
        }
    }

    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::ColorSpace::*;

    #[test]
    fn test_space_properties() {
        assert!(!Rgb.is_polar());
        assert!(Hsb.is_polar());
        assert!(Lch.is_polar());

        assert_eq!(Rgb.hue_period(), None);
        assert_eq!(Hsb.hue_period(), Some(1.0));
        assert_eq!(Lch.hue_period(), Some(360.0));

        assert_eq!(Lch.to_string(), "LCH");
    }
}
