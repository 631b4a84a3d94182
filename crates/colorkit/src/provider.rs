//! Persistable references to colors.
//!
//! A [`ColorProvider`] names a color by its identity rather than its value,
//! e.g., as a hexadecimal literal, an asset in some host bundle, or a semantic
//! system color. It serializes to a single line of the form `<tag>|<payload>`:
//!
//! ```
//! # use colorkit::{error::ColorFormatError, provider::{ColorProvider, SemanticColor}};
//! let provider: ColorProvider = "hexRGB|FF0000".parse()?;
//! assert_eq!(provider, ColorProvider::HexRgb("FF0000".to_string()));
//! assert_eq!(provider.raw_value(), "hexRGB|FF0000");
//!
//! let provider: ColorProvider = "appleColor|systemTeal".parse()?;
//! assert_eq!(provider, ColorProvider::SemanticColor(SemanticColor::SystemTeal));
//! # Ok::<(), ColorFormatError>(())
//! ```
//!
//! Resolving a provider to a [`Color`] requires a [`ColorResolver`], which the
//! host application implements to look up named assets and to resolve the
//! current appearance. Resolution never fails. It substitutes
//! [`Color::CLEAR`] for colors that cannot be found and logs a warning.

use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::ColorFormatError;
use crate::palette::AdaptiveColor;
use crate::{rgb, Color};

/// The appearance of the user interface.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "colorkit")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Appearance {
    Light,
    Dark,
    /// No particular appearance. The reference resolution treats it like
    /// [`Appearance::Light`].
    #[default]
    Unspecified,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Appearance {
    /// Determine whether this appearance is dark.
    pub const fn is_dark(&self) -> bool {
        matches!(*self, Self::Dark)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The semantic system colors.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "colorkit")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SemanticColor {
    SystemRed,
    SystemOrange,
    SystemYellow,
    SystemGreen,
    SystemTeal,
    SystemBlue,
    SystemIndigo,
    SystemPurple,
    SystemBrown,
}

/// The reference values of semantic colors in light mode.
const LIGHT_REFERENCE: [Color; 9] = [
    rgb!(0xff, 0x3b, 0x30), // Red
    rgb!(0xff, 0x95, 0x00), // Orange
    rgb!(0xff, 0xcc, 0x00), // Yellow
    rgb!(0x34, 0xc7, 0x59), // Green
    rgb!(0x30, 0xb0, 0xc7), // Teal
    rgb!(0x00, 0x7a, 0xff), // Blue
    rgb!(0x58, 0x56, 0xd6), // Indigo
    rgb!(0xaf, 0x52, 0xde), // Purple
    rgb!(0xa2, 0x84, 0x5e), // Brown
];

/// The reference values of semantic colors in dark mode.
const DARK_REFERENCE: [Color; 9] = [
    rgb!(0xff, 0x45, 0x3a), // Red
    rgb!(0xff, 0x9f, 0x0a), // Orange
    rgb!(0xff, 0xd6, 0x0a), // Yellow
    rgb!(0x30, 0xd1, 0x58), // Green
    rgb!(0x40, 0xc8, 0xe0), // Teal
    rgb!(0x0a, 0x84, 0xff), // Blue
    rgb!(0x5e, 0x5c, 0xe6), // Indigo
    rgb!(0xbf, 0x5a, 0xf2), // Purple
    rgb!(0xac, 0x8e, 0x68), // Brown
];

#[cfg_attr(feature = "pyffi", pymethods)]
impl SemanticColor {
    /// Get this semantic color's identifier.
    pub const fn name(&self) -> &'static str {
        use SemanticColor::*;

        match *self {
            SystemRed => "systemRed",
            SystemOrange => "systemOrange",
            SystemYellow => "systemYellow",
            SystemGreen => "systemGreen",
            SystemTeal => "systemTeal",
            SystemBlue => "systemBlue",
            SystemIndigo => "systemIndigo",
            SystemPurple => "systemPurple",
            SystemBrown => "systemBrown",
        }
    }

    /// Get the reference value for the given appearance.
    ///
    /// The reference values are the system colors of the popular platform
    /// this identifier set originates from. An unspecified appearance resolves
    /// to the light value.
    ///
    /// ```
    /// # use colorkit::provider::{Appearance, SemanticColor};
    /// let blue = SemanticColor::SystemBlue;
    /// assert_eq!(blue.reference(Appearance::Light).to_string(), "#007AFF");
    /// assert_eq!(blue.reference(Appearance::Dark).to_string(), "#0A84FF");
    /// ```
    pub const fn reference(&self, appearance: Appearance) -> Color {
        let table = if appearance.is_dark() {
            &DARK_REFERENCE
        } else {
            &LIGHT_REFERENCE
        };
        table[*self as usize]
    }

    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("SemanticColor.{:?}", self)
    }

    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        self.name().to_string()
    }
}

impl SemanticColor {
    const ALL: [SemanticColor; 9] = [
        Self::SystemRed,
        Self::SystemOrange,
        Self::SystemYellow,
        Self::SystemGreen,
        Self::SystemTeal,
        Self::SystemBlue,
        Self::SystemIndigo,
        Self::SystemPurple,
        Self::SystemBrown,
    ];

    /// Get an iterator over all semantic colors in declaration order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    /// Look up the semantic color with the given identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().find(|color| color.name() == name)
    }
}

impl std::fmt::Display for SemanticColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The tags of color providers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProviderTag {
    HexRgb,
    HexRgba,
    Local,
    AppleColor,
}

impl ProviderTag {
    /// Get this tag's serialized form.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::HexRgb => "hexRGB",
            Self::HexRgba => "hexRGBA",
            Self::Local => "local",
            Self::AppleColor => "appleColor",
        }
    }
}

impl FromStr for ProviderTag {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hexRGB" => Ok(Self::HexRgb),
            "hexRGBA" => Ok(Self::HexRgba),
            "local" => Ok(Self::Local),
            "appleColor" => Ok(Self::AppleColor),
            _ => Err(ColorFormatError::UnknownProviderTag),
        }
    }
}

impl std::fmt::Display for ProviderTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The host capabilities needed for resolving colors.
///
/// Only named assets have no reasonable default. The default semantic color
/// resolution uses the [light reference values](SemanticColor::reference) and
/// the default light/dark resolution uses [`AdaptiveColor::select`].
pub trait ColorResolver {
    /// Look up the named color asset, optionally in the given bundle.
    fn lookup_named_asset(&self, name: &str, bundle: Option<&str>) -> Option<Color>;

    /// Resolve the semantic color.
    fn resolve_semantic_color(&self, color: SemanticColor) -> Color {
        color.reference(Appearance::Unspecified)
    }

    /// Resolve the pair of light and dark colors for the given appearance.
    fn resolve_light_dark(&self, light: &Color, dark: &Color, appearance: Appearance) -> Color {
        AdaptiveColor::new(*light, *dark).select(appearance)
    }
}

/// A resolver without named assets.
///
/// This resolver uses the built-in reference values for semantic colors as
/// well as light/dark pairs and fails to find any named asset.
#[derive(Copy, Clone, Debug, Default)]
pub struct ReferenceResolver;

impl ColorResolver for ReferenceResolver {
    fn lookup_named_asset(&self, _name: &str, _bundle: Option<&str>) -> Option<Color> {
        None
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A persistable reference to a color.
///
/// Providers are equal and hash the same exactly when their
/// [raw values](ColorProvider::raw_value) are the same.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorProvider {
    /// A color in hexadecimal notation with six digits.
    HexRgb(String),
    /// A color in hexadecimal notation with eight digits.
    HexRgba(String),
    /// A named color asset.
    Local(String),
    /// A semantic system color.
    SemanticColor(SemanticColor),
}

impl ColorProvider {
    /// Parse the raw value, returning `None` on malformed input.
    ///
    /// See [`ColorProvider as
    /// FromStr`](enum.ColorProvider.html#impl-FromStr-for-ColorProvider) for
    /// details.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::from_str(raw).ok()
    }

    /// Get providers for all semantic colors in declaration order.
    pub fn all_semantic_colors() -> impl Iterator<Item = Self> {
        SemanticColor::all().map(Self::SemanticColor)
    }

    /// Get this provider's tag.
    pub const fn tag(&self) -> ProviderTag {
        match self {
            Self::HexRgb(_) => ProviderTag::HexRgb,
            Self::HexRgba(_) => ProviderTag::HexRgba,
            Self::Local(_) => ProviderTag::Local,
            Self::SemanticColor(_) => ProviderTag::AppleColor,
        }
    }

    /// Get this provider's payload.
    pub fn payload(&self) -> &str {
        match self {
            Self::HexRgb(value) | Self::HexRgba(value) | Self::Local(value) => value,
            Self::SemanticColor(color) => color.name(),
        }
    }

    /// Get this provider's serialized form `<tag>|<payload>`.
    pub fn raw_value(&self) -> String {
        format!("{}|{}", self.tag(), self.payload())
    }

    /// Resolve this provider to a color.
    ///
    /// Hexadecimal providers are parsed with six or eight digits,
    /// respectively. Named assets are looked up in the given bundle, and
    /// semantic colors are resolved by the resolver. Hexadecimal literals that
    /// fail to parse and named assets that cannot be found resolve to
    /// [`Color::CLEAR`].
    ///
    /// ```
    /// # use colorkit::Color;
    /// # use colorkit::provider::{ColorProvider, ReferenceResolver};
    /// let resolver = ReferenceResolver;
    /// let provider = ColorProvider::HexRgba("FF000080".to_string());
    /// assert_eq!(provider.resolve(&resolver, None).to_string(), "#FF000080");
    ///
    /// let provider = ColorProvider::Local("accent".to_string());
    /// assert_eq!(provider.resolve(&resolver, Some("main")), Color::CLEAR);
    /// ```
    pub fn resolve<R>(&self, resolver: &R, bundle: Option<&str>) -> Color
    where
        R: ColorResolver + ?Sized,
    {
        let result = match self {
            Self::HexRgb(value) => Color::from_hex(value, false).ok(),
            Self::HexRgba(value) => Color::from_hex(value, true).ok(),
            Self::Local(name) => resolver.lookup_named_asset(name, bundle),
            Self::SemanticColor(color) => Some(resolver.resolve_semantic_color(*color)),
        };

        result.unwrap_or_else(|| {
            log::warn!("could not resolve color provider {}, using clear", self);
            Color::CLEAR
        })
    }
}

impl FromStr for ColorProvider {
    type Err = ColorFormatError;

    /// Parse a color provider from its serialized form `<tag>|<payload>`.
    ///
    /// The tag must be one of `hexRGB`, `hexRGBA`, `local`, or `appleColor`.
    /// The payload is the text between the first and second `|`; anything
    /// after a second `|` is ignored. The payload of hexadecimal providers is
    /// only validated upon resolution. An unknown semantic color falls back to
    /// [`SemanticColor::SystemBlue`].
    ///
    /// ```
    /// # use colorkit::{error::ColorFormatError, provider::{ColorProvider, SemanticColor}};
    /// let provider: ColorProvider = "appleColor|bogus".parse()?;
    /// assert_eq!(provider, ColorProvider::SemanticColor(SemanticColor::SystemBlue));
    ///
    /// assert_eq!("hexRGB".parse::<ColorProvider>(), Err(ColorFormatError::MissingProviderPayload));
    /// assert_eq!("rgb|FF0000".parse::<ColorProvider>(), Err(ColorFormatError::UnknownProviderTag));
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut components = s.split('|');
        let tag = components.next().unwrap_or_default();
        let payload = components
            .next()
            .ok_or(ColorFormatError::MissingProviderPayload)?;

        let provider = match ProviderTag::from_str(tag)? {
            ProviderTag::HexRgb => Self::HexRgb(payload.to_string()),
            ProviderTag::HexRgba => Self::HexRgba(payload.to_string()),
            ProviderTag::Local => Self::Local(payload.to_string()),
            ProviderTag::AppleColor => {
                Self::SemanticColor(SemanticColor::from_name(payload).unwrap_or_else(|| {
                    log::warn!("unknown semantic color {:?}, using systemBlue", payload);
                    SemanticColor::SystemBlue
                }))
            }
        };

        Ok(provider)
    }
}

impl std::fmt::Display for ColorProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}", self.tag(), self.payload())
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Appearance, ColorProvider, ColorResolver, ProviderTag, SemanticColor};
    use crate::error::ColorFormatError;
    use crate::Color;
    use std::collections::{HashMap, HashSet};
    use std::str::FromStr;

    /// A resolver with named assets in bundles and a fixed appearance.
    pub(crate) struct FakeResolver {
        appearance: Appearance,
        assets: HashMap<(Option<String>, String), Color>,
    }

    impl FakeResolver {
        pub(crate) fn new(appearance: Appearance) -> Self {
            Self {
                appearance,
                assets: HashMap::new(),
            }
        }

        pub(crate) fn with_asset(mut self, bundle: Option<&str>, name: &str, color: Color) -> Self {
            self.assets
                .insert((bundle.map(str::to_string), name.to_string()), color);
            self
        }
    }

    impl ColorResolver for FakeResolver {
        fn lookup_named_asset(&self, name: &str, bundle: Option<&str>) -> Option<Color> {
            self.assets
                .get(&(bundle.map(str::to_string), name.to_string()))
                .copied()
        }

        fn resolve_semantic_color(&self, color: SemanticColor) -> Color {
            color.reference(self.appearance)
        }
    }

    #[test]
    fn test_parse_and_serialize() -> Result<(), ColorFormatError> {
        let provider: ColorProvider = "hexRGB|FF0000".parse()?;
        assert_eq!(provider, ColorProvider::HexRgb("FF0000".to_string()));
        assert_eq!(provider.raw_value(), "hexRGB|FF0000");
        assert_eq!(provider.to_string(), "hexRGB|FF0000");

        for raw in ["hexRGBA|FF000080", "local|brand", "appleColor|systemIndigo"] {
            assert_eq!(ColorProvider::from_str(raw)?.raw_value(), raw);
        }

        let provider: ColorProvider = "local|accent|ignored".parse()?;
        assert_eq!(provider, ColorProvider::Local("accent".to_string()));

        let provider: ColorProvider = "local|".parse()?;
        assert_eq!(provider, ColorProvider::Local(String::new()));
        Ok(())
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            ColorProvider::from_str(""),
            Err(ColorFormatError::MissingProviderPayload)
        );
        assert_eq!(
            ColorProvider::from_str("HEXRGB|FF0000"),
            Err(ColorFormatError::UnknownProviderTag)
        );
        assert_eq!(ColorProvider::parse("local"), None);
        assert_eq!(
            ColorProvider::parse("appleColor|bogus"),
            Some(ColorProvider::SemanticColor(SemanticColor::SystemBlue))
        );
        assert_eq!(ProviderTag::from_str("appleColor"), Ok(ProviderTag::AppleColor));
    }

    #[test]
    fn test_appearance() {
        assert_eq!(Appearance::default(), Appearance::Unspecified);
        assert!(Appearance::Dark.is_dark());
        assert!(!Appearance::default().is_dark());
    }

    #[test]
    fn test_semantic_colors() {
        let providers: Vec<_> = ColorProvider::all_semantic_colors().collect();
        assert_eq!(providers.len(), 9);
        assert_eq!(providers[0].raw_value(), "appleColor|systemRed");
        assert_eq!(providers[8].raw_value(), "appleColor|systemBrown");

        let unique: HashSet<_> = providers.iter().cloned().collect();
        assert_eq!(unique.len(), 9);

        for color in SemanticColor::all() {
            assert_eq!(SemanticColor::from_name(color.name()), Some(color));
            assert!(color.reference(Appearance::Light).is_opaque());
            assert_ne!(
                color.reference(Appearance::Light),
                color.reference(Appearance::Dark)
            );
            assert_eq!(
                color.reference(Appearance::Unspecified),
                color.reference(Appearance::Light)
            );
        }
    }

    #[test]
    fn test_resolve() {
        let brand = Color::new(0.1, 0.2, 0.3, 1.0);
        let resolver = FakeResolver::new(Appearance::Dark).with_asset(Some("app"), "brand", brand);

        let local = ColorProvider::Local("brand".to_string());
        assert_eq!(local.resolve(&resolver, Some("app")), brand);
        assert_eq!(local.resolve(&resolver, None), Color::CLEAR);

        let red = ColorProvider::HexRgb("#ff0000".to_string());
        assert_eq!(red.resolve(&resolver, None), Color::new(1.0, 0.0, 0.0, 1.0));

        let wrong_length = ColorProvider::HexRgba("FF0000".to_string());
        assert_eq!(wrong_length.resolve(&resolver, None), Color::CLEAR);

        let teal = ColorProvider::SemanticColor(SemanticColor::SystemTeal);
        assert_eq!(teal.resolve(&resolver, None).to_string(), "#40C8E0");

        let dyn_resolver: &dyn ColorResolver = &resolver;
        assert_eq!(local.resolve(dyn_resolver, Some("app")), brand);
    }
}

#[cfg(test)]
pub(crate) use test::FakeResolver;
