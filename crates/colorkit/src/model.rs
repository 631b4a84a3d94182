//! Derived color models.
//!
//! [`Color`] only stores sRGB coordinates plus opacity. The types in this
//! module are snapshots of the same color in one of the derived models. They
//! are computed on demand, never cached, and carry opacity along unchanged.
//! Their fields are public, since any combination of values is a valid
//! request; converting back to a [`Color`] clamps to the sRGB gamut.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{hsb_to_rgb, lab_to_lch, lab_to_rgb, lch_to_lab, lch_to_rgb, to_eq_bits};
use crate::{Color, Float};

/// Implement `PartialEq`, `Eq`, and `Hash` by normalizing each named field with
/// [`to_eq_bits`].
macro_rules! impl_eq_by_bits {
    ($type:ty; $($field:ident),+) => {
        impl PartialEq for $type {
            fn eq(&self, other: &Self) -> bool {
                $(to_eq_bits(self.$field) == to_eq_bits(other.$field))&&+
            }
        }

        impl Eq for $type {}

        impl std::hash::Hash for $type {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                $(to_eq_bits(self.$field).hash(state);)+
            }
        }
    };
}

// --------------------------------------------------------------------------------------------------------------------

/// A color in CIE L\*a\*b\* relative to the D65 white point.
///
/// Lightness ranges `0..=100`, whereas a\* and b\* are opponent axes without
/// fixed bounds. For sRGB colors, they stay within `-128..=128`.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, get_all, module = "colorkit")
)]
#[derive(Copy, Clone, Debug)]
pub struct Lab {
    pub lightness: Float,
    pub a: Float,
    pub b: Float,
    pub opacity: Float,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Lab {
    /// Create a new CIE L\*a\*b\* color.
    #[cfg(feature = "pyffi")]
    #[new]
    pub const fn new(lightness: Float, a: Float, b: Float, opacity: Float) -> Self {
        Self {
            lightness,
            a,
            b,
            opacity,
        }
    }

    /// Create a new CIE L\*a\*b\* color.
    #[cfg(not(feature = "pyffi"))]
    pub const fn new(lightness: Float, a: Float, b: Float, opacity: Float) -> Self {
        Self {
            lightness,
            a,
            b,
            opacity,
        }
    }

    /// Get the coordinates without opacity.
    pub const fn coordinates(&self) -> [Float; 3] {
        [self.lightness, self.a, self.b]
    }

    /// Convert to the polar form.
    pub fn to_lch(&self) -> Lch {
        let [luminance, chroma, hue] = lab_to_lch(&self.coordinates());
        Lch::new(hue, luminance, chroma, self.opacity)
    }

    /// Convert back to a color, clamping to the sRGB gamut.
    pub fn to_color(&self) -> Color {
        let [r, g, b] = lab_to_rgb(&self.coordinates());
        Color::new(r, g, b, self.opacity)
    }

    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl_eq_by_bits!(Lab; lightness, a, b, opacity);

// --------------------------------------------------------------------------------------------------------------------

/// A color in CIE LCH, the polar form of CIE L\*a\*b\*.
///
/// Hue is measured in degrees `0..360`, luminance (i.e., L\*) ranges
/// `0..=100`, and chroma starts at zero. In practice, chroma stays below 135
/// for sRGB colors. Hue is zero for achromatic colors.
///
/// ```
/// # use colorkit::{Color, Lch};
/// let white = Color::new(1.0, 1.0, 1.0, 1.0).to_lch();
/// assert!((white.luminance - 100.0).abs() < 1e-9);
/// assert_eq!(white.hue, 0.0);
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, get_all, module = "colorkit")
)]
#[derive(Copy, Clone, Debug)]
pub struct Lch {
    pub hue: Float,
    pub luminance: Float,
    pub chroma: Float,
    pub opacity: Float,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Lch {
    /// Create a new CIE LCH color.
    #[cfg(feature = "pyffi")]
    #[new]
    pub const fn new(hue: Float, luminance: Float, chroma: Float, opacity: Float) -> Self {
        Self {
            hue,
            luminance,
            chroma,
            opacity,
        }
    }

    /// Create a new CIE LCH color.
    #[cfg(not(feature = "pyffi"))]
    pub const fn new(hue: Float, luminance: Float, chroma: Float, opacity: Float) -> Self {
        Self {
            hue,
            luminance,
            chroma,
            opacity,
        }
    }

    /// Get the coordinates in L, C, h order, i.e., without opacity.
    pub const fn coordinates(&self) -> [Float; 3] {
        [self.luminance, self.chroma, self.hue]
    }

    /// Convert to the cartesian form.
    pub fn to_lab(&self) -> Lab {
        let [lightness, a, b] = lch_to_lab(&self.coordinates());
        Lab::new(lightness, a, b, self.opacity)
    }

    /// Convert back to a color, clamping to the sRGB gamut.
    pub fn to_color(&self) -> Color {
        let [r, g, b] = lch_to_rgb(&self.coordinates());
        Color::new(r, g, b, self.opacity)
    }

    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl_eq_by_bits!(Lch; hue, luminance, chroma, opacity);

// --------------------------------------------------------------------------------------------------------------------

/// A color in HSB, also known as HSV.
///
/// All three coordinates have unit range. In particular, hue is a fraction of
/// a full turn, not degrees.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, get_all, module = "colorkit")
)]
#[derive(Copy, Clone, Debug)]
pub struct Hsb {
    pub hue: Float,
    pub saturation: Float,
    pub brightness: Float,
    pub opacity: Float,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Hsb {
    /// Create a new HSB color.
    #[cfg(feature = "pyffi")]
    #[new]
    pub const fn new(hue: Float, saturation: Float, brightness: Float, opacity: Float) -> Self {
        Self {
            hue,
            saturation,
            brightness,
            opacity,
        }
    }

    /// Create a new HSB color.
    #[cfg(not(feature = "pyffi"))]
    pub const fn new(hue: Float, saturation: Float, brightness: Float, opacity: Float) -> Self {
        Self {
            hue,
            saturation,
            brightness,
            opacity,
        }
    }

    /// Get the coordinates without opacity.
    pub const fn coordinates(&self) -> [Float; 3] {
        [self.hue, self.saturation, self.brightness]
    }

    /// Convert back to a color, clamping to the sRGB gamut.
    pub fn to_color(&self) -> Color {
        let [r, g, b] = hsb_to_rgb(&self.coordinates());
        Color::new(r, g, b, self.opacity)
    }

    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl_eq_by_bits!(Hsb; hue, saturation, brightness, opacity);

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Hsb, Lab, Lch};
    use crate::{assert_same_color, Color};

    #[test]
    fn test_opacity_passes_through() {
        let color = Color::new(0.2, 0.4, 0.6, 0.25);

        let lab = color.to_lab();
        let lch = lab.to_lch();
        let hsb = color.to_hsb();
        assert_eq!(lab.opacity, 0.25);
        assert_eq!(lch.opacity, 0.25);
        assert_eq!(hsb.opacity, 0.25);

        assert_eq!(lch.to_lab(), lab);
        assert_same_color!(lab.to_color(), color);
        assert_same_color!(lch.to_color(), color);
        assert_same_color!(hsb.to_color(), color);
    }

    #[test]
    fn test_equality() {
        assert_eq!(Lch::new(120.0, 50.0, 30.0, 1.0), Lch::new(120.0 + 1e-14, 50.0, 30.0, 1.0));
        assert_ne!(Hsb::new(0.5, 0.5, 0.5, 1.0), Hsb::new(0.5, 0.5, 0.5, 0.5));
        assert_eq!(Lab::new(50.0, -0.0, 0.0, 1.0), Lab::new(50.0, 0.0, -0.0, 1.0));
    }

    #[test]
    fn test_out_of_gamut() {
        let color = Lch::new(140.0, 90.0, 130.0, 1.0).to_color();
        for component in color.as_ref() {
            assert!((0.0..=1.0).contains(component));
        }
    }
}
