//! Utility module with colorkit's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An erroneous color format.
///
/// All strict parsers in this crate, i.e., the hexadecimal codec, the
/// attribute names, and the color provider format, fail with this error. The
/// lenient resolvers never do; they substitute a default color instead.
///
/// Like PyO3 enumerations, the variants carry no further state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorFormatError {
    /// A hexadecimal color with the wrong number of digits or a character that
    /// is not a hexadecimal digit. For example, `#12345` is missing a digit,
    /// `#1234567` has one too many for an opaque color, and `zzzzzz` has the
    /// correct length but is not hexadecimal.
    InvalidHexFormat,

    /// A color provider with an unknown tag. For example, `rgb|FF0000` uses a
    /// tag that is not one of `hexRGB`, `hexRGBA`, `local`, or `appleColor`.
    UnknownProviderTag,

    /// A color provider without the `|` separating tag and payload. For
    /// example, `hexRGB` is missing its payload.
    MissingProviderPayload,

    /// A color attribute with an unknown name. For example, `hue` is ambiguous
    /// and hence neither `hueHSB` nor `hueLCH`.
    UnknownAttribute,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            InvalidHexFormat => {
                f.write_str("hexadecimal color should have 6 or 8 hex digits after optional `#`")
            }
            UnknownProviderTag => f.write_str(
                "color provider tag should be `hexRGB`, `hexRGBA`, `local`, or `appleColor`",
            ),
            MissingProviderPayload => {
                f.write_str("color provider should have `|` between tag and payload but has none")
            }
            UnknownAttribute => f.write_str("color attribute should have known name but does not"),
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
