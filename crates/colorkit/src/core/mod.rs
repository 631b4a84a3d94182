mod conversion;
mod equality;
mod math;
mod space;
mod string;

// conversion
pub(crate) use conversion::{from_24bit, to_8bit};
pub use conversion::{
    hsb_to_rgb, lab_to_lch, lab_to_rgb, lch_to_lab, lch_to_rgb, rgb_to_hsb, rgb_to_lab,
    rgb_to_lch,
};

// equality
#[cfg(feature = "pyffi")]
pub use equality::close_enough;
pub use equality::to_eq_bits;
pub(crate) use equality::to_eq_components;

// math
pub(crate) use math::{clamp_unit, wrap};

// space
pub use space::ColorSpace;

// string
pub use string::{format_hex, parse_any_hex, parse_hex};
