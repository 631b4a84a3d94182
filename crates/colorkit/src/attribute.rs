//! Reading and changing a single attribute of a color.
//!
//! Every [`ColorAttribute`] other than opacity is a coordinate of one of the
//! [`ColorSpace`]s. Changing an attribute converts the color to that space,
//! overwrites the one coordinate while holding the other two fixed, and
//! converts back. The result is clamped to the sRGB gamut. Hues wrap around,
//! so that a hue of 1.05 in HSB is the same as 0.05 and a hue of 370 in LCH is
//! the same as 10.
//!
//! ```
//! # use colorkit::{Color, ColorAttribute};
//! let red = Color::new(1.0, 0.0, 0.0, 1.0);
//! let green = red.change_by(ColorAttribute::HueHsb, 1.0 / 3.0);
//! assert_eq!(green.to_hex_string(false), "#00FF00");
//! ```

use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{clamp_unit, hsb_to_rgb, lch_to_rgb, rgb_to_hsb, rgb_to_lch, wrap, ColorSpace};
use crate::error::ColorFormatError;
use crate::Float;

/// The attributes of a color.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "colorkit")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorAttribute {
    Red,
    Green,
    Blue,
    HueHsb,
    Saturation,
    Brightness,
    HueLch,
    Luminance,
    Chroma,
    Opacity,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorAttribute {
    /// Parse an attribute from its name. <i class=python-only>Python
    /// only!</i>
    ///
    /// This method implements the same functionality as [`ColorAttribute as
    /// FromStr`](enum.ColorAttribute.html#impl-FromStr-for-ColorAttribute) and
    /// is available in Python only.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(name: &str) -> Result<Self, ColorFormatError> {
        Self::from_str(name)
    }

    /// Get the color space this attribute belongs to.
    ///
    /// Opacity is shared by all color spaces and hence belongs to none.
    pub const fn space(&self) -> Option<ColorSpace> {
        use ColorAttribute::*;

        match *self {
            Red | Green | Blue => Some(ColorSpace::Rgb),
            HueHsb | Saturation | Brightness => Some(ColorSpace::Hsb),
            HueLch | Luminance | Chroma => Some(ColorSpace::Lch),
            Opacity => None,
        }
    }

    /// Determine whether this attribute is a hue.
    pub const fn is_hue(&self) -> bool {
        matches!(*self, Self::HueHsb | Self::HueLch)
    }

    /// Get this attribute's name.
    pub const fn name(&self) -> &'static str {
        use ColorAttribute::*;

        match *self {
            Red => "red",
            Green => "green",
            Blue => "blue",
            HueHsb => "hueHSB",
            Saturation => "saturation",
            Brightness => "brightness",
            HueLch => "hueLCH",
            Luminance => "luminance",
            Chroma => "chroma",
            Opacity => "opacity",
        }
    }

    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("ColorAttribute.{:?}", self)
    }

    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        self.name().to_string()
    }
}

impl ColorAttribute {
    const ALL: [ColorAttribute; 10] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::HueHsb,
        Self::Saturation,
        Self::Brightness,
        Self::HueLch,
        Self::Luminance,
        Self::Chroma,
        Self::Opacity,
    ];

    /// Get an iterator over all attributes in declaration order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    /// Get the index of this attribute's coordinate within its color space.
    ///
    /// The coordinate order is r, g, b for RGB, h, s, b for HSB, and L, C, h
    /// for LCH. Opacity is the fourth component of a color.
    const fn index(&self) -> usize {
        use ColorAttribute::*;

        match *self {
            Red | HueHsb | Luminance => 0,
            Green | Saturation | Chroma => 1,
            Blue | Brightness | HueLch => 2,
            Opacity => 3,
        }
    }
}

impl FromStr for ColorAttribute {
    type Err = ColorFormatError;

    /// Parse an attribute from its case-sensitive name, i.e., `red`, `green`,
    /// `blue`, `hueHSB`, `saturation`, `brightness`, `hueLCH`, `luminance`,
    /// `chroma`, or `opacity`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .find(|attribute| attribute.name() == s)
            .ok_or(ColorFormatError::UnknownAttribute)
    }
}

impl std::fmt::Display for ColorAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the RGB coordinates into the given color space.
fn from_rgb(space: ColorSpace, rgb: &[Float; 3]) -> [Float; 3] {
    match space {
        ColorSpace::Rgb => *rgb,
        ColorSpace::Hsb => rgb_to_hsb(rgb),
        ColorSpace::Lch => rgb_to_lch(rgb),
    }
}

/// Convert the coordinates in the given color space back into RGB, clamping
/// the result.
fn to_rgb(space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    match space {
        ColorSpace::Rgb => {
            let [r, g, b] = *coordinates;
            [clamp_unit(r), clamp_unit(g), clamp_unit(b)]
        }
        ColorSpace::Hsb => hsb_to_rgb(coordinates),
        ColorSpace::Lch => lch_to_rgb(coordinates),
    }
}

/// Read the attribute from the RGBA components.
pub(crate) fn read(components: &[Float; 4], attribute: ColorAttribute) -> Float {
    let [r, g, b, a] = *components;
    match attribute.space() {
        None => a,
        Some(space) => from_rgb(space, &[r, g, b])[attribute.index()],
    }
}

/// Overwrite the attribute of the RGBA components with the given value.
///
/// This function holds the other coordinates of the attribute's color space
/// fixed. It wraps hues and clamps the resulting RGB coordinates. It sets
/// opacity as is.
pub(crate) fn write(
    components: &[Float; 4],
    attribute: ColorAttribute,
    value: Float,
) -> [Float; 4] {
    let [r, g, b, a] = *components;
    let Some(space) = attribute.space() else {
        return [r, g, b, value];
    };

    let value = match space.hue_period() {
        Some(period) if attribute.is_hue() => wrap(value, period),
        _ => value,
    };

    let mut coordinates = from_rgb(space, &[r, g, b]);
    coordinates[attribute.index()] = value;
    let [r, g, b] = to_rgb(space, &coordinates);
    [r, g, b, a]
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::ColorAttribute::{self, *};
    use crate::core::ColorSpace;
    use crate::error::ColorFormatError;
    use crate::{assert_same_color, Color, Hsb, Lch};

    #[test]
    fn test_names() -> Result<(), ColorFormatError> {
        for attribute in ColorAttribute::all() {
            assert_eq!(attribute.to_string().parse::<ColorAttribute>()?, attribute);
        }

        assert_eq!("hueLCH".parse::<ColorAttribute>()?, HueLch);
        assert_eq!(
            "hue".parse::<ColorAttribute>(),
            Err(ColorFormatError::UnknownAttribute)
        );
        assert_eq!(
            "Red".parse::<ColorAttribute>(),
            Err(ColorFormatError::UnknownAttribute)
        );
        Ok(())
    }

    #[test]
    fn test_spaces() {
        assert_eq!(Blue.space(), Some(ColorSpace::Rgb));
        assert_eq!(Saturation.space(), Some(ColorSpace::Hsb));
        assert_eq!(Chroma.space(), Some(ColorSpace::Lch));
        assert_eq!(Opacity.space(), None);
        assert_eq!(ColorAttribute::all().count(), 10);
    }

    #[test]
    fn test_change_saturation_keeps_hue() {
        let color = Hsb::new(0.3, 0.5, 0.8, 1.0).to_color();
        let changed = color.change(Saturation, 0.9);

        let hsb = changed.to_hsb();
        assert!((hsb.hue - 0.3).abs() < 1e-6);
        assert!((hsb.saturation - 0.9).abs() < 1e-6);
        assert!((hsb.brightness - 0.8).abs() < 1e-6);
        assert_eq!(hsb.opacity, 1.0);
    }

    #[test]
    fn test_hue_wraps() {
        let color = Hsb::new(0.95, 0.5, 0.8, 1.0).to_color();
        let changed = color.change_by(HueHsb, 1.1);
        assert!((changed.attribute(HueHsb) - 0.05).abs() < 1e-9);

        let color = Lch::new(350.0, 60.0, 20.0, 1.0).to_color();
        let hue = color.attribute(HueLch);
        let changed = color.change_by(HueLch, 30.0);
        let expected = Lch::new(hue + 30.0 - 360.0, 60.0, 20.0, 1.0).to_color();
        for (actual, expected) in changed.as_ref().iter().zip(expected.as_ref()) {
            assert!((actual - expected).abs() < 1e-9);
        }
        assert!(changed.attribute(HueLch) < 30.0);
    }

    #[test]
    fn test_change_clamps() {
        let color = Color::new(0.5, 0.5, 0.5, 1.0);
        assert_same_color!(color.change(Red, 1.5), Color::new(1.0, 0.5, 0.5, 1.0));
        assert_same_color!(color.change_by(Green, -2.0), Color::new(0.5, 0.0, 0.5, 1.0));

        let bright = color.change(Luminance, 150.0);
        for component in bright.as_ref() {
            assert!((0.0..=1.0).contains(component));
        }
    }

    #[test]
    fn test_change_opacity() {
        let color = Color::new(0.1, 0.2, 0.3, 1.0);
        let changed = color.change(Opacity, 0.4);
        assert_eq!(changed.as_ref(), &[0.1, 0.2, 0.3, 0.4]);
        assert_eq!(changed.change_by(Opacity, 0.1).attribute(Opacity), 0.5);
    }

    #[test]
    fn test_change_luminance_holds_hue() {
        let color = Color::new(0.2, 0.4, 0.6, 1.0);
        let before = color.to_lch();
        let after = color.change_by(Luminance, 5.0).to_lch();

        assert!((after.luminance - before.luminance - 5.0).abs() < 1e-4);
        assert!((after.chroma - before.chroma).abs() < 1e-4);
        assert!((after.hue - before.hue).abs() < 1e-4);
    }
}
