//! # colorkit
//!
//! Colorkit represents colors independently of any user interface framework,
//! converts them between hexadecimal strings, sRGB, HSB, and CIE LCH, and
//! transforms them deterministically.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Colorkit's main abstractions are:
//!
//!   * [`Color`] is an immutable value with red, green, blue, and opacity
//!     components. It parses from and formats to **hashed hexadecimal
//!     notation** and converts to the derived models [`Lab`], [`Lch`], and
//!     [`Hsb`]. The [`transform`] module exposes the underlying coordinate
//!     conversions and the [`hex`] module the underlying codec.
//!   * [`ColorAttribute`] names one **attribute** of a color, i.e., a
//!     coordinate in RGB, HSB, or LCH or the opacity.
//!     [`Color::change`] and [`Color::change_by`] modify that one attribute
//!     while holding the other coordinates of its [`ColorSpace`] fixed.
//!   * The [`provider`] module defines the **persistable color references**
//!     [`ColorProvider`](provider::ColorProvider) and
//!     [`SemanticColor`](provider::SemanticColor) as well as the
//!     [`ColorResolver`](provider::ColorResolver) trait, which host
//!     applications implement to look up named assets and to pick between
//!     light and dark appearance.
//!   * The [`palette`] module defines **shade ramps** with light and dark
//!     variants and the read-only
//!     [`UtilityPalette`](palette::UtilityPalette).
//!
//!
//! ## 2. Hexadecimal Colors, Attributes, and Providers
//!
//! Parsing is strict. Hexadecimal notation must have exactly six digits
//! without and exactly eight digits with opacity:
//!
//! ```
//! # use colorkit::{Color, ColorAttribute, error::ColorFormatError};
//! let coral = Color::from_hex("#FF7F50", false)?;
//! assert!(Color::from_hex("#FF7F5", false).is_err());
//!
//! // Reduce chroma in CIE LCH, holding lightness and hue fixed.
//! let muted = coral.change_by(ColorAttribute::Chroma, -10.0);
//! assert!(muted.to_lch().chroma < coral.to_lch().chroma);
//!
//! // Lighten and format again.
//! assert_eq!(coral.lighter(20.0).to_hex_string(false), "#FFB283");
//! # Ok::<(), ColorFormatError>(())
//! ```
//!
//! Resolution is lenient. A [`ColorProvider`](provider::ColorProvider) that
//! cannot be resolved yields [`Color::CLEAR`] and logs a warning through the
//! [log](https://crates.io/crates/log) facade. Colorkit never installs a
//! logger itself.
//!
//! ```
//! # use colorkit::{Color, error::ColorFormatError};
//! # use colorkit::provider::{ColorProvider, ReferenceResolver};
//! let provider: ColorProvider = "hexRGB|not a color".parse()?;
//! assert_eq!(provider.resolve(&ReferenceResolver, None), Color::CLEAR);
//! # Ok::<(), ColorFormatError>(())
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Colorkit supports three feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`random`** enables `Color::random` and `Color::random_with` through
//!     the [rand](https://crates.io/crates/rand) crate. This feature is
//!     disabled by default.
//!   - **`pyffi`** controls colorkit's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Throughout the API documentation, items that are only available in Rust are
//! decorated with <i class=rust-only>Rust only!</i>.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]
//!
//!
//! ## 4. Acknowledgements
//!
//! The matrices for converting between linear sRGB and XYZ are those of the
//! [Color.js](https://colorjs.io) library.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod attribute;
mod core;
pub mod error;
mod model;
mod object;
pub mod palette;
pub mod provider;

pub mod transform {
    //! Conversions between coordinates in sRGB, CIE L\*a\*b\*, CIE LCH, and
    //! HSB.
    //!
    //! All functions operate on three coordinates without opacity. CIE LCH
    //! coordinates are ordered L, C, h. Conversions that produce sRGB
    //! coordinates clamp them to `0..=1`.
    pub use crate::core::{
        hsb_to_rgb, lab_to_lch, lab_to_rgb, lch_to_lab, lch_to_rgb, rgb_to_hsb, rgb_to_lab,
        rgb_to_lch,
    };
}

pub mod hex {
    //! The hashed hexadecimal codec.
    //!
    //! ```
    //! # use colorkit::{hex, error::ColorFormatError};
    //! let components = hex::parse_hex("#33669980", true)?;
    //! assert_eq!(hex::format_hex(&components, false), "#336699");
    //! assert_eq!(hex::parse_any_hex("336699")?[3], 1.0);
    //! # Ok::<(), ColorFormatError>(())
    //! ```
    pub use crate::core::{format_hex, parse_any_hex, parse_hex};
}

#[cfg(feature = "pyffi")]
pub use core::close_enough;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use attribute::ColorAttribute;
pub use core::ColorSpace;
pub use model::{Hsb, Lab, Lch};
pub use object::Color;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn colorkit(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(close_enough, m)?)?;

    m.add_class::<Color>()?;
    m.add_class::<ColorAttribute>()?;
    m.add_class::<ColorSpace>()?;
    m.add_class::<Hsb>()?;
    m.add_class::<Lab>()?;
    m.add_class::<Lch>()?;

    m.add_class::<provider::Appearance>()?;
    m.add_class::<provider::SemanticColor>()?;
    m.add_class::<palette::ShadeStep>()?;
    m.add_class::<palette::UtilityCategory>()?;

    m.add("CLEAR", Color::CLEAR)?;

    Ok(())
}
