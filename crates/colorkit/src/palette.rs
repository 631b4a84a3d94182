//! Shade palettes with light and dark variants.
//!
//! A [`ShadeVariationColor`] is a ramp of five [`ShadeStep`]s, each with a
//! light and a dark [`AdaptiveColor`]. The [`UtilityPalette`] bundles the
//! ramps for the five [`UtilityCategory`]s:
//!
//! ```
//! # use colorkit::palette::{ShadeStep, UtilityCategory, UtilityPalette};
//! # use colorkit::provider::{Appearance, ReferenceResolver};
//! let error = UtilityPalette::get().shade(UtilityCategory::Error);
//! let color = error.resolve(ShadeStep::SevenHundred, Appearance::Dark, &ReferenceResolver);
//! assert_eq!(color.to_string(), "#FDA29B");
//! ```

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use once_cell::sync::Lazy;

use crate::error::ColorFormatError;
use crate::provider::{Appearance, ColorResolver};
use crate::Color;

/// The steps of a shade ramp.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "colorkit")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShadeStep {
    Fifty,
    OneHundred,
    TwoHundred,
    FiveHundred,
    SevenHundred,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ShadeStep {
    /// Get this step's weight, e.g., 500 for [`ShadeStep::FiveHundred`].
    pub const fn weight(&self) -> u16 {
        match *self {
            Self::Fifty => 50,
            Self::OneHundred => 100,
            Self::TwoHundred => 200,
            Self::FiveHundred => 500,
            Self::SevenHundred => 700,
        }
    }
}

impl ShadeStep {
    /// Get an iterator over all steps, from lightest to darkest.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::Fifty,
            Self::OneHundred,
            Self::TwoHundred,
            Self::FiveHundred,
            Self::SevenHundred,
        ]
        .into_iter()
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A pair of colors for light and dark appearance.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AdaptiveColor {
    pub light: Color,
    pub dark: Color,
}

impl AdaptiveColor {
    /// Create a new adaptive color.
    pub const fn new(light: Color, dark: Color) -> Self {
        Self { light, dark }
    }

    /// Select the color for the given appearance.
    ///
    /// This method picks the dark color for [`Appearance::Dark`] and the light
    /// color otherwise.
    pub const fn select(&self, appearance: Appearance) -> Color {
        if appearance.is_dark() {
            self.dark
        } else {
            self.light
        }
    }
}

/// A shade ramp with light and dark variants.
///
/// Steps that have not been defined are [clear](Color::CLEAR) in both
/// appearances.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ShadeVariationColor {
    shades: [AdaptiveColor; 5],
}

impl ShadeVariationColor {
    /// Build a new ramp from steps with light and dark colors in six-digit
    /// hexadecimal notation.
    ///
    /// Later entries for the same step replace earlier ones.
    ///
    /// ```
    /// # use colorkit::{Color, error::ColorFormatError};
    /// # use colorkit::palette::{ShadeStep, ShadeVariationColor};
    /// let ramp = ShadeVariationColor::build(&[
    ///     (ShadeStep::Fifty, "#F5F5F5", "#141414"),
    /// ])?;
    /// assert_eq!(ramp[ShadeStep::Fifty].light.to_string(), "#F5F5F5");
    /// assert_eq!(ramp[ShadeStep::OneHundred].light, Color::CLEAR);
    ///
    /// assert!(ShadeVariationColor::build(&[(ShadeStep::Fifty, "#F5F5F", "#141414")]).is_err());
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    pub fn build(entries: &[(ShadeStep, &str, &str)]) -> Result<Self, ColorFormatError> {
        let mut ramp = Self::default();
        for (step, light, dark) in entries {
            ramp.shades[*step as usize] = AdaptiveColor::new(
                Color::from_hex(light, false)?,
                Color::from_hex(dark, false)?,
            );
        }
        Ok(ramp)
    }

    /// Resolve the given step for the given appearance.
    pub fn resolve<R>(&self, step: ShadeStep, appearance: Appearance, resolver: &R) -> Color
    where
        R: ColorResolver + ?Sized,
    {
        let shade = &self[step];
        resolver.resolve_light_dark(&shade.light, &shade.dark, appearance)
    }
}

impl std::ops::Index<ShadeStep> for ShadeVariationColor {
    type Output = AdaptiveColor;

    fn index(&self, index: ShadeStep) -> &Self::Output {
        &self.shades[index as usize]
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The categories of the utility palette.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "colorkit")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UtilityCategory {
    Orange,
    Success,
    Error,
    Warning,
    BlueLight,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl UtilityCategory {
    /// Get this category's name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Orange => "orange",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::BlueLight => "blueLight",
        }
    }
}

impl UtilityCategory {
    /// Get an iterator over all categories.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::Orange,
            Self::Success,
            Self::Error,
            Self::Warning,
            Self::BlueLight,
        ]
        .into_iter()
    }
}

type ShadeTable = [(ShadeStep, &'static str, &'static str); 4];

#[rustfmt::skip]
const UTILITY_SHADES: [(UtilityCategory, ShadeTable); 5] = {
    use ShadeStep::*;
    use UtilityCategory::*;

    [
        (Orange, [
            (Fifty,        "#FFF4ED", "#57130A"),
            (TwoHundred,   "#FFD6AE", "#97180C"),
            (FiveHundred,  "#FF4405", "#FF4405"),
            (SevenHundred, "#BC1B06", "#FF9C66"),
        ]),
        (Success, [
            (Fifty,        "#ECFDF3", "#053321"),
            (TwoHundred,   "#ABEFC6", "#085D3A"),
            (FiveHundred,  "#17B26A", "#17B26A"),
            (SevenHundred, "#067647", "#75E0A7"),
        ]),
        (Error, [
            (Fifty,        "#FEF3F2", "#55160C"),
            (TwoHundred,   "#FECDCA", "#912018"),
            (FiveHundred,  "#F04438", "#F04438"),
            (SevenHundred, "#B42318", "#FDA29B"),
        ]),
        (Warning, [
            (Fifty,        "#FFFAEB", "#4E1D09"),
            (TwoHundred,   "#FEDF89", "#93370D"),
            (FiveHundred,  "#F79009", "#F79009"),
            (SevenHundred, "#B54708", "#FEC84B"),
        ]),
        (BlueLight, [
            (Fifty,        "#F0F9FF", "#062C41"),
            (TwoHundred,   "#B9E6FE", "#065986"),
            (FiveHundred,  "#0BA5EC", "#0BA5EC"),
            (SevenHundred, "#026AA2", "#7CD4FD"),
        ]),
    ]
};

static UTILITY_PALETTE: Lazy<UtilityPalette> = Lazy::new(UtilityPalette::build);

/// The utility palette.
///
/// The palette is built once, upon first access, and is read-only
/// afterwards.
#[derive(Debug)]
pub struct UtilityPalette {
    shades: [ShadeVariationColor; 5],
}

impl UtilityPalette {
    /// Get the process-wide utility palette.
    pub fn get() -> &'static UtilityPalette {
        &UTILITY_PALETTE
    }

    fn build() -> Self {
        let mut shades: [ShadeVariationColor; 5] = Default::default();
        for (category, table) in UTILITY_SHADES {
            shades[category as usize] =
                ShadeVariationColor::build(&table).unwrap_or_else(|error| {
                    log::error!("could not build {} shades: {}", category.name(), error);
                    ShadeVariationColor::default()
                });
        }

        log::debug!("built utility palette");
        Self { shades }
    }

    /// Get the shade ramp for the given category.
    pub fn shade(&self, category: UtilityCategory) -> &ShadeVariationColor {
        &self.shades[category as usize]
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{AdaptiveColor, ShadeStep, ShadeVariationColor, UtilityCategory, UtilityPalette};
    use crate::error::ColorFormatError;
    use crate::provider::{Appearance, FakeResolver, ReferenceResolver};
    use crate::Color;

    #[test]
    fn test_weights() {
        let weights: Vec<_> = ShadeStep::all().map(|step| step.weight()).collect();
        assert_eq!(weights, vec![50, 100, 200, 500, 700]);
    }

    #[test]
    fn test_select() {
        let light = Color::new(1.0, 1.0, 1.0, 1.0);
        let dark = Color::new(0.0, 0.0, 0.0, 1.0);
        let adaptive = AdaptiveColor::new(light, dark);

        assert_eq!(adaptive.select(Appearance::Light), light);
        assert_eq!(adaptive.select(Appearance::Dark), dark);
        assert_eq!(adaptive.select(Appearance::Unspecified), light);
    }

    #[test]
    fn test_build() {
        assert_eq!(
            ShadeVariationColor::build(&[(ShadeStep::Fifty, "#FFFFFF", "#00000000")]),
            Err(ColorFormatError::InvalidHexFormat)
        );
        assert_eq!(
            ShadeVariationColor::build(&[]),
            Ok(ShadeVariationColor::default())
        );
    }

    #[test]
    fn test_utility_palette() {
        let palette = UtilityPalette::get();
        assert!(std::ptr::eq(palette, UtilityPalette::get()));

        for category in UtilityCategory::all() {
            let shade = palette.shade(category);
            assert_eq!(shade[ShadeStep::OneHundred], AdaptiveColor::default());
            for step in [
                ShadeStep::Fifty,
                ShadeStep::TwoHundred,
                ShadeStep::FiveHundred,
                ShadeStep::SevenHundred,
            ] {
                assert!(shade[step].light.is_opaque());
                assert!(shade[step].dark.is_opaque());
            }

            let base = &shade[ShadeStep::FiveHundred];
            assert_eq!(base.light, base.dark);
        }

        let orange = palette.shade(UtilityCategory::Orange);
        assert_eq!(orange[ShadeStep::Fifty].light.to_string(), "#FFF4ED");
        assert_eq!(orange[ShadeStep::SevenHundred].dark.to_string(), "#FF9C66");

        let blue = palette.shade(UtilityCategory::BlueLight);
        assert_eq!(blue[ShadeStep::TwoHundred].dark.to_string(), "#065986");
    }

    #[test]
    fn test_resolve() {
        let warning = UtilityPalette::get().shade(UtilityCategory::Warning);

        assert_eq!(
            warning
                .resolve(ShadeStep::Fifty, Appearance::Light, &ReferenceResolver)
                .to_string(),
            "#FFFAEB"
        );
        assert_eq!(
            warning
                .resolve(ShadeStep::Fifty, Appearance::Dark, &FakeResolver::new(Appearance::Light))
                .to_string(),
            "#4E1D09"
        );
        assert_eq!(
            warning.resolve(ShadeStep::OneHundred, Appearance::Dark, &ReferenceResolver),
            Color::CLEAR
        );
    }
}
