use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::attribute::{self, ColorAttribute};
use crate::core::{
    clamp_unit, format_hex, from_24bit, parse_any_hex, parse_hex, rgb_to_hsb, rgb_to_lab, to_8bit,
    to_eq_components,
};
use crate::error::ColorFormatError;
use crate::model::{Hsb, Lab, Lch};
use crate::Float;

/// Create a new opaque color from 24-bit integer coordinates.
///
/// Like [`Color::from_24bit`], this macro creates a new color from 24-bit
/// integer coordinates. However, it also is safe to use in const expressions.
///
/// Rust currently does not allow floating point operations in const functions.
/// That makes it impossible to write a const function that constructs a new
/// color object from integer coordinates. However, Rust does currently allow
/// floating point operations in const expressions, notably as arguments to a
/// const function such as a constructor. Hence, a macro can convert and
/// normalize the integer coordinates before passing them to the const
/// function. That's just what this macro does.
#[macro_export]
macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        $crate::Color::new(
            $r as $crate::Float / 255.0,
            $g as $crate::Float / 255.0,
            $b as $crate::Float / 255.0,
            1.0,
        )
    };
}

/// A framework-independent color.
///
/// Every color object has four components, the gamma-corrected sRGB
/// coordinates red, green, and blue plus opacity. All four components
/// logically have unit range. However, the constructor does not clamp them;
/// only operations that produce new colors, such as [`Color::change`] or
/// [`Color::lighter`], do.
///
/// Colors are immutable values. All transformations return a new color.
///
/// # Conversions
///
/// [`Color::to_lab`], [`Color::to_lch`], and [`Color::to_hsb`] derive the
/// color's coordinates in CIE L\*a\*b\*, CIE LCH, and HSB, respectively.
/// [`Lab::to_color`], [`Lch::to_color`], and [`Hsb::to_color`] go back again,
/// clamping the result to the sRGB gamut. Opacity passes through unchanged.
///
/// # Equality Testing and Hashing
///
/// Colors compare equal and hash the same after normalizing each component:
///
///   * To turn components into comparable entities, replace not-a-numbers
///     with positive zero;
///   * To allow for floating point error, multiply by 1e12/1e4 (depending on
///     `Float`'s type) and then round;
///   * To make zeros comparable, replace negative zero with positive zero (but
///     only after rounding, which may produce zeros);
///   * To convince Rust that components are comparable, convert to bits.
///
/// # Component Access
///
/// Both Rust and Python code can access individual components by indexing a
/// color object with integers `0..4`.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, sequence, module = "colorkit")
)]
#[derive(Copy, Clone)]
pub struct Color {
    components: [Float; 4],
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Color {
    // The following constructors come in pairs, once for pyffi and once without
    // pyffi, because #[new] and #[staticmethod] do not work with #[cfg_attr()].

    /// Instantiate a new color with the given red, green, blue, and opacity
    /// components.
    ///
    /// ```
    /// # use colorkit::Color;
    /// let teal = Color::new(0.0, 0.5, 0.5, 1.0);
    /// assert_eq!(teal.as_ref(), &[0.0, 0.5, 0.5, 1.0]);
    /// ```
    #[cfg(feature = "pyffi")]
    #[new]
    #[inline]
    pub const fn new(red: Float, green: Float, blue: Float, opacity: Float) -> Self {
        Self {
            components: [red, green, blue, opacity],
        }
    }

    /// Instantiate a new color with the given red, green, blue, and opacity
    /// components.
    ///
    /// ```
    /// # use colorkit::Color;
    /// let teal = Color::new(0.0, 0.5, 0.5, 1.0);
    /// assert_eq!(teal.as_ref(), &[0.0, 0.5, 0.5, 1.0]);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    #[inline]
    pub const fn new(red: Float, green: Float, blue: Float, opacity: Float) -> Self {
        Self {
            components: [red, green, blue, opacity],
        }
    }

    /// Parse a color in hashed hexadecimal notation.
    ///
    /// After trimming white space and an optional `#`, the string must have
    /// exactly six hexadecimal digits if `expect_alpha` is `false` and exactly
    /// eight if it is `true`. Digits may be upper or lower case.
    ///
    /// ```
    /// # use colorkit::{Color, error::ColorFormatError};
    /// let red = Color::from_hex("#FF0000", false)?;
    /// assert_eq!(red, Color::new(1.0, 0.0, 0.0, 1.0));
    ///
    /// let veiled = Color::from_hex(" ff000080 ", true)?;
    /// assert_eq!(veiled.opacity(), 128.0 / 255.0);
    ///
    /// assert!(Color::from_hex("#FF0000", true).is_err());
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_hex(s: &str, expect_alpha: bool) -> Result<Self, ColorFormatError> {
        parse_hex(s, expect_alpha).map(Self::from)
    }

    /// Parse a color in hashed hexadecimal notation.
    ///
    /// After trimming white space and an optional `#`, the string must have
    /// exactly six hexadecimal digits if `expect_alpha` is `false` and exactly
    /// eight if it is `true`. Digits may be upper or lower case.
    ///
    /// ```
    /// # use colorkit::{Color, error::ColorFormatError};
    /// let red = Color::from_hex("#FF0000", false)?;
    /// assert_eq!(red, Color::new(1.0, 0.0, 0.0, 1.0));
    ///
    /// let veiled = Color::from_hex(" ff000080 ", true)?;
    /// assert_eq!(veiled.opacity(), 128.0 / 255.0);
    ///
    /// assert!(Color::from_hex("#FF0000", true).is_err());
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn from_hex(s: &str, expect_alpha: bool) -> Result<Self, ColorFormatError> {
        parse_hex(s, expect_alpha).map(Self::from)
    }

    /// Parse a color in hashed hexadecimal notation with or without opacity.
    /// <i class=python-only>Python only!</i>
    ///
    /// This method implements the same functionality as [`Color as
    /// FromStr`](struct.Color.html#impl-FromStr-for-Color) and is available in
    /// Python only.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Self, ColorFormatError> {
        Self::from_str(s)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Access the red component.
    #[inline]
    pub const fn red(&self) -> Float {
        self.components[0]
    }

    /// Access the green component.
    #[inline]
    pub const fn green(&self) -> Float {
        self.components[1]
    }

    /// Access the blue component.
    #[inline]
    pub const fn blue(&self) -> Float {
        self.components[2]
    }

    /// Access the opacity.
    #[inline]
    pub const fn opacity(&self) -> Float {
        self.components[3]
    }

    /// Determine whether this color is fully opaque.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        1.0 <= self.opacity()
    }

    /// Access the components. <i class=python-only>Python only!</i>
    ///
    /// This method returns the components by value, whereas [`AsRef<[Float;
    /// 4]> as Color`](struct.Color.html) returns them by reference.
    #[cfg(feature = "pyffi")]
    pub fn components(&self) -> [Float; 4] {
        self.components
    }

    /// Get this color's length, which is 4. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __len__(&self) -> usize {
        4
    }

    /// Read components by index. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __getitem__(&self, index: isize) -> PyResult<Float> {
        match index {
            -4..=-1 => Ok(self.components[(4 + index) as usize]),
            0..=3 => Ok(self.components[index as usize]),
            _ => Err(pyo3::exceptions::PyIndexError::new_err(
                "Invalid component index",
            )),
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to CIE L\*a\*b\*.
    pub fn to_lab(&self) -> Lab {
        let [r, g, b, a] = self.components;
        let [lightness, a_star, b_star] = rgb_to_lab(&[r, g, b]);
        Lab::new(lightness, a_star, b_star, a)
    }

    /// Convert this color to CIE LCH.
    ///
    /// ```
    /// # use colorkit::Color;
    /// let red = Color::new(1.0, 0.0, 0.0, 1.0).to_lch();
    /// assert!((red.luminance - 53.24).abs() < 0.05);
    /// assert!((red.chroma - 104.55).abs() < 0.05);
    /// assert!((red.hue - 40.0).abs() < 0.1);
    /// ```
    pub fn to_lch(&self) -> Lch {
        self.to_lab().to_lch()
    }

    /// Convert this color to HSB.
    pub fn to_hsb(&self) -> Hsb {
        let [r, g, b, a] = self.components;
        let [hue, saturation, brightness] = rgb_to_hsb(&[r, g, b]);
        Hsb::new(hue, saturation, brightness, a)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Read the given attribute.
    ///
    /// Reading an attribute other than red, green, blue, or opacity converts
    /// this color to the attribute's color space.
    pub fn attribute(&self, attribute: ColorAttribute) -> Float {
        attribute::read(&self.components, attribute)
    }

    /// Change the given attribute to the given value.
    ///
    /// This method converts this color to the attribute's color space, updates
    /// the one coordinate while holding the others fixed, and converts back.
    /// Hues wrap around. Other out-of-range values are not rejected but clamped
    /// when converting back to RGB. Opacity is set as is.
    ///
    /// ```
    /// # use colorkit::{Color, ColorAttribute};
    /// let gray = Color::new(0.5, 0.5, 0.5, 1.0);
    /// let pinkish = gray.change(ColorAttribute::Red, 0.75);
    /// assert_eq!(pinkish, Color::new(0.75, 0.5, 0.5, 1.0));
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn change(&self, attribute: ColorAttribute, value: Float) -> Self {
        Self::from(attribute::write(&self.components, attribute, value))
    }

    /// Change the given attribute by the given amount.
    ///
    /// This method reads the attribute's current value, adds the delta, and
    /// then delegates to [`Color::change`].
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn change_by(&self, attribute: ColorAttribute, delta: Float) -> Self {
        self.change(attribute, self.attribute(attribute) + delta)
    }

    /// Lighten this color by the given percentage.
    ///
    /// This method adds the percentage's magnitude divided by 100 to each of
    /// red, green, and blue and clamps the result. It leaves opacity
    /// unchanged. The conventional percentage is
    /// [`Color::DEFAULT_ADJUSTMENT`].
    ///
    /// ```
    /// # use colorkit::Color;
    /// let gray = Color::new(0.5, 0.5, 0.5, 1.0);
    /// assert_eq!(gray.lighter(30.0), Color::new(0.8, 0.8, 0.8, 1.0));
    /// assert_eq!(gray.lighter(-30.0), gray.lighter(30.0));
    /// assert_eq!(gray.lighter(80.0), Color::new(1.0, 1.0, 1.0, 1.0));
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn lighter(&self, percentage: Float) -> Self {
        self.adjust_by(percentage.abs() / 100.0)
    }

    /// Darken this color by the given percentage.
    ///
    /// This method is the dual of [`Color::lighter`], subtracting the
    /// percentage's magnitude divided by 100 from each of red, green, and blue.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn darker(&self, percentage: Float) -> Self {
        self.adjust_by(-percentage.abs() / 100.0)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Format this color in hashed hexadecimal notation.
    ///
    /// The result always starts with `#` and uses uppercase digits. It includes
    /// two digits for opacity only if `include_alpha` is `true`. Components are
    /// clamped before formatting.
    ///
    /// ```
    /// # use colorkit::Color;
    /// let color = Color::new(0.2, 0.4, 0.6, 0.5);
    /// assert_eq!(color.to_hex_string(false), "#336699");
    /// assert_eq!(color.to_hex_string(true), "#33669980");
    /// ```
    pub fn to_hex_string(&self, include_alpha: bool) -> String {
        format_hex(&self.components, include_alpha)
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to its hexadecimal representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

// --------------------------------------------------------------------------------------------------------------------

// Use separate block, so that methods are not exposed to Python.
impl Color {
    /// The fully transparent black color.
    pub const CLEAR: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    /// The conventional percentage for [`Color::lighter`] and
    /// [`Color::darker`].
    pub const DEFAULT_ADJUSTMENT: Float = 30.0;

    /// Instantiate a new opaque color from its 24-bit representation.
    ///
    /// This function scales the red, green, and blue coordinates by 1/255. The
    /// [`rgb`] macro does the same thing but is safe to use inside const
    /// expressions.
    ///
    /// ```
    /// # use colorkit::{rgb, Color};
    /// let tangerine = Color::from_24bit(0xff, 0x93, 0x00);
    /// assert_eq!(tangerine, rgb!(0xff, 0x93, 0x00));
    /// assert_eq!(tangerine.to_hex_string(false), "#FF9300");
    /// ```
    #[inline]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        let [r, g, b] = from_24bit(r, g, b);
        Self::new(r, g, b, 1.0)
    }

    /// Convert this color's red, green, and blue to their 24-bit
    /// representation, clamping as necessary.
    pub fn to_24bit(&self) -> [u8; 3] {
        let [r, g, b, _] = self.components;
        [to_8bit(r), to_8bit(g), to_8bit(b)]
    }

    /// Parse a color in hashed hexadecimal notation with six or eight digits.
    ///
    /// Six digits denote an opaque color, eight digits one with opacity.
    pub fn from_hex_any(s: &str) -> Result<Self, ColorFormatError> {
        parse_any_hex(s).map(Self::from)
    }

    /// Create a new, uniformly random opaque color.
    #[cfg(feature = "random")]
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    /// Create a new, uniformly random opaque color with the given random
    /// number generator.
    #[cfg(feature = "random")]
    pub fn random_with<R: rand::Rng>(rng: &mut R) -> Self {
        Self::new(rng.random(), rng.random(), rng.random(), 1.0)
    }

    fn adjust_by(&self, delta: Float) -> Self {
        let [r, g, b, a] = self.components;
        Self::new(
            clamp_unit(r + delta),
            clamp_unit(g + delta),
            clamp_unit(b + delta),
            a,
        )
    }
}

impl Default for Color {
    /// Create an instance of the default color, [`Color::CLEAR`].
    ///
    /// ```
    /// # use colorkit::Color;
    /// assert_eq!(Color::default().as_ref(), &[0.0, 0.0, 0.0, 0.0]);
    /// ```
    #[inline]
    fn default() -> Self {
        Self::CLEAR
    }
}

impl From<[Float; 4]> for Color {
    fn from(value: [Float; 4]) -> Self {
        Self { components: value }
    }
}

impl FromStr for Color {
    type Err = ColorFormatError;

    /// Instantiate a color from its hashed hexadecimal notation with six or
    /// eight digits.
    ///
    /// ```
    /// # use colorkit::{Color, error::ColorFormatError};
    /// let navy: Color = "#000080".parse()?;
    /// assert_eq!(navy.to_24bit(), [0, 0, 0x80]);
    ///
    /// let ghost: Color = "#FFFFFF33".parse()?;
    /// assert_eq!(ghost.opacity(), 0.2);
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_any(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_str(value)
    }
}

impl AsRef<[Float; 4]> for Color {
    fn as_ref(&self) -> &[Float; 4] {
        &self.components
    }
}

impl std::ops::Index<usize> for Color {
    type Output = Float;

    /// Access the component with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `3 < index`.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        to_eq_components(&self.components).hash(state);
    }
}

impl PartialEq for Color {
    /// Determine whether this color equals the other color.
    ///
    /// ```
    /// # use colorkit::{Color, Float};
    /// assert_eq!(
    ///     Color::new(Float::NAN, 0.5, 0.25 + 1e-15, 1.0),
    ///     Color::new(-0.0, 0.5, 0.25, 1.0)
    /// );
    /// ```
    fn eq(&self, other: &Self) -> bool {
        if self.components == other.components {
            return true;
        }

        to_eq_components(&self.components) == to_eq_components(&other.components)
    }
}

impl Eq for Color {}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b, a] = self.components;
        f.write_fmt(format_args!("Color({}, {}, {}, {})", r, g, b, a))
    }
}

impl std::fmt::Display for Color {
    /// Format this color in hashed hexadecimal notation.
    ///
    /// This method includes opacity only if it does not round to `FF`.
    ///
    /// ```
    /// # use colorkit::Color;
    /// assert_eq!(format!("{}", Color::new(1.0, 0.5, 0.0, 1.0)), "#FF8000");
    /// assert_eq!(format!("{}", Color::CLEAR), "#00000000");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let include_alpha = to_8bit(self.opacity()) < 0xff;
        f.write_str(&self.to_hex_string(include_alpha))
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::Color;
    use crate::error::ColorFormatError;
    use crate::{assert_same_color, Float};
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn test_hex_round_trip() -> Result<(), ColorFormatError> {
        let mut rng = StdRng::seed_from_u64(665);

        for _ in 0..100 {
            let color = Color::new(rng.random(), rng.random(), rng.random(), rng.random());
            let hex = color.to_hex_string(true);
            let parsed = Color::from_hex(&hex, true)?;

            for (actual, expected) in parsed.as_ref().iter().zip(color.as_ref()) {
                assert!(
                    (actual - expected).abs() <= 0.5 / 255.0 + 1e-12,
                    "{} does not round trip",
                    hex
                );
            }
        }
        Ok(())
    }

    #[test]
    fn test_invalid_hex() {
        for invalid in ["#12345", "#1234567", "zzzzzz", "#GG0000", "#+F0000"] {
            assert_eq!(
                Color::from_hex(invalid, false),
                Err(ColorFormatError::InvalidHexFormat)
            );
            assert!(invalid.parse::<Color>().is_err());
        }
    }

    #[test]
    fn test_lighter_darker() {
        let color = rgb!(0x80, 0x40, 0xf0);
        let lighter = color.lighter(Color::DEFAULT_ADJUSTMENT);
        let darker = color.darker(Color::DEFAULT_ADJUSTMENT);

        assert_same_color!(
            lighter,
            Color::new(0x80 as Float / 255.0 + 0.3, 0x40 as Float / 255.0 + 0.3, 1.0, 1.0)
        );
        assert_same_color!(
            darker,
            Color::new(0x80 as Float / 255.0 - 0.3, 0.0, 0xf0 as Float / 255.0 - 0.3, 1.0)
        );
        assert_eq!(color.darker(-10.0), color.darker(10.0));

        let veiled = Color::new(0.5, 0.5, 0.5, 0.25);
        assert_eq!(veiled.lighter(10.0).opacity(), 0.25);
    }

    #[test]
    fn test_display() -> Result<(), ColorFormatError> {
        let color = Color::from_hex("#ab12CD", false)?;
        assert_eq!(format!("{}", color), "#AB12CD");
        assert_eq!(
            format!("{:?}", Color::new(1.0, 0.5, 0.0, 1.0)),
            "Color(1, 0.5, 0, 1)"
        );
        assert_eq!(Color::default(), Color::CLEAR);
        assert_eq!(Color::CLEAR.to_string(), "#00000000");
        Ok(())
    }

    #[cfg(feature = "random")]
    #[test]
    fn test_random() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            let color = Color::random_with(&mut rng);
            assert!(color.is_opaque());
            assert!(color.as_ref().iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn test_hash() {
        let mut colors = HashSet::new();
        colors.insert(Color::new(0.1, 0.2, 0.3, 1.0));
        colors.insert(Color::new(0.1, 0.2, 0.3 + 1e-15, 1.0));
        colors.insert(Color::new(0.1, 0.2, 0.3, 0.5));
        assert_eq!(colors.len(), 2);
    }
}
