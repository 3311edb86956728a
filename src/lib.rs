//! husl converts colors between sRGB, CIE-XYZ, CIE-LUV, CIE-LCHuv and the
//! HUSL/HUSLp notations, which express a color as hue, saturation and
//! lightness where saturation is relative to what sRGB can display.

#![deny(missing_docs)]

mod color;
mod constants;
mod convert;
pub mod gamut;
mod hex;
mod math;
pub mod models;

#[cfg(test)]
mod test;

pub use color::{Color, Component, Components, Flags, HasSpace, Space};
pub use constants::{EPSILON, KAPPA, M, M_INV, REF_U, REF_V};
pub use convert::{
    hex_to_husl, hex_to_huslp, husl_to_hex, husl_to_lch, husl_to_rgb, husl_to_rgb8, huslp_to_hex,
    huslp_to_lch, huslp_to_rgb, huslp_to_rgb8, lch_to_husl, lch_to_huslp, lch_to_luv, luv_to_lch,
    luv_to_xyz, rgb8_to_husl, rgb8_to_huslp, rgb_to_husl, rgb_to_huslp, rgb_to_xyz, xyz_to_luv,
    xyz_to_rgb,
};
pub use hex::{format_hex, parse_hex, ParseHexError};
pub use models::{Husl, Huslp, Lchuv, Luv, Model, Srgb, SrgbLinear, ToXyz, Xyz};
