//! Conversions between color spaces.
//!
//! Each model converts to and from its neighbours in the chain
//!
//! ```text
//! sRGB <-> linear sRGB <-> XYZ <-> LUV <-> LCHuv <-> HUSL / HUSLp
//! ```
//!
//! [`Color::to_space`] converts a generic color between any two spaces, and
//! the free functions below compose the chain for plain components. They take
//! anything that converts into [`Components`], so a 3-tuple or a 3-element
//! array both work.
//!
//! ```rust
//! let husl = husl::hex_to_husl("#fabada").unwrap();
//! assert_eq!(husl::husl_to_hex((husl.0, husl.1, husl.2)), "#fabada");
//! ```

use num_traits::AsPrimitive;

use crate::{
    color::{Color, Component, Components, Space},
    hex::ParseHexError,
    models::{Husl, Huslp, Lchuv, Luv, Model, Srgb, SrgbLinear, ToXyz, Xyz},
};

impl Color {
    /// Convert this color from its current color space/notation to the
    /// specified color space/notation. Powerless components of the result are
    /// marked in its flags.
    pub fn to_space(&self, space: Space) -> Self {
        use Space as S;

        if self.space == space {
            return self.clone();
        }

        log::trace!("converting color from {:?} to {:?}", self.space, space);

        // Handle direct conversions.
        match (self.space, space) {
            (S::Srgb, S::SrgbLinear) => return Srgb::from_color(self).to_linear_light().to_color(),
            (S::SrgbLinear, S::Srgb) => {
                return SrgbLinear::from_color(self).to_gamma_encoded().to_color()
            }
            (S::Luv, S::Lchuv) => return Luv::from_color(self).to_polar().to_color(),
            (S::Lchuv, S::Luv) => return Lchuv::from_color(self).to_rectangular().to_color(),
            (S::Lchuv, S::Husl) => return Husl::from_lch(&Lchuv::from_color(self)).to_color(),
            (S::Lchuv, S::Huslp) => return Huslp::from_lch(&Lchuv::from_color(self)).to_color(),
            (S::Husl, S::Lchuv) => return Husl::from_color(self).to_lch().to_color(),
            (S::Huslp, S::Lchuv) => return Huslp::from_color(self).to_lch().to_color(),
            (S::Husl, S::Huslp) => {
                return Huslp::from_lch(&Husl::from_color(self).to_lch()).to_color()
            }
            (S::Huslp, S::Husl) => {
                return Husl::from_lch(&Huslp::from_color(self).to_lch()).to_color()
            }
            _ => {}
        }

        macro_rules! to_xyz {
            ($m:ident) => {{
                $m::from_color(self).to_xyz()
            }};
        }

        // The rest goes through XYZ.
        let xyz = match self.space {
            S::Srgb => to_xyz!(Srgb),
            S::SrgbLinear => to_xyz!(SrgbLinear),
            S::XyzD65 => Xyz::from_color(self),
            S::Luv => to_xyz!(Luv),
            S::Lchuv => to_xyz!(Lchuv),
            S::Husl => to_xyz!(Husl),
            S::Huslp => to_xyz!(Huslp),
        };

        match space {
            S::Srgb => Srgb::from(xyz).to_color(),
            S::SrgbLinear => SrgbLinear::from(xyz).to_color(),
            S::XyzD65 => xyz.to_color(),
            S::Luv => Luv::from(xyz).to_color(),
            S::Lchuv => Lchuv::from(xyz).to_color(),
            S::Husl => Husl::from(xyz).to_color(),
            S::Huslp => Huslp::from(xyz).to_color(),
        }
    }
}

/// Convert gamma encoded sRGB in [0..1] to CIE-XYZ.
pub fn rgb_to_xyz(rgb: impl Into<Components>) -> Components {
    let rgb: Components = rgb.into();
    Srgb::from(rgb).to_xyz().to_components()
}

/// Convert CIE-XYZ to gamma encoded sRGB. Out of gamut colors are not
/// clipped.
pub fn xyz_to_rgb(xyz: impl Into<Components>) -> Components {
    let xyz: Components = xyz.into();
    Srgb::from(Xyz::from(xyz)).to_components()
}

/// Convert CIE-XYZ to CIE-LUV.
pub fn xyz_to_luv(xyz: impl Into<Components>) -> Components {
    let xyz: Components = xyz.into();
    Luv::from(Xyz::from(xyz)).to_components()
}

/// Convert CIE-LUV to CIE-XYZ.
pub fn luv_to_xyz(luv: impl Into<Components>) -> Components {
    let luv: Components = luv.into();
    Luv::from(luv).to_xyz().to_components()
}

/// Convert CIE-LUV to its cylindrical form (lightness, chroma, hue).
pub fn luv_to_lch(luv: impl Into<Components>) -> Components {
    let luv: Components = luv.into();
    Luv::from(luv).to_polar().to_components()
}

/// Convert the cylindrical form of CIE-LUV to CIE-LUV.
pub fn lch_to_luv(lch: impl Into<Components>) -> Components {
    let lch: Components = lch.into();
    Lchuv::from(lch).to_rectangular().to_components()
}

/// Convert (lightness, chroma, hue) to HUSL (hue, saturation, lightness).
pub fn lch_to_husl(lch: impl Into<Components>) -> Components {
    let lch: Components = lch.into();
    Husl::from_lch(&Lchuv::from(lch)).to_components()
}

/// Convert HUSL (hue, saturation, lightness) to (lightness, chroma, hue).
pub fn husl_to_lch(husl: impl Into<Components>) -> Components {
    let husl: Components = husl.into();
    Husl::from(husl).to_lch().to_components()
}

/// Convert (lightness, chroma, hue) to HUSLp (hue, saturation, lightness).
pub fn lch_to_huslp(lch: impl Into<Components>) -> Components {
    let lch: Components = lch.into();
    Huslp::from_lch(&Lchuv::from(lch)).to_components()
}

/// Convert HUSLp (hue, saturation, lightness) to (lightness, chroma, hue).
pub fn huslp_to_lch(huslp: impl Into<Components>) -> Components {
    let huslp: Components = huslp.into();
    Huslp::from(huslp).to_lch().to_components()
}

/// Convert gamma encoded sRGB in [0..1] to HUSL.
pub fn rgb_to_husl(rgb: impl Into<Components>) -> Components {
    lch_to_husl(luv_to_lch(xyz_to_luv(rgb_to_xyz(rgb))))
}

/// Convert HUSL to gamma encoded sRGB in [0..1].
pub fn husl_to_rgb(husl: impl Into<Components>) -> Components {
    xyz_to_rgb(luv_to_xyz(lch_to_luv(husl_to_lch(husl))))
}

/// Convert gamma encoded sRGB in [0..1] to HUSLp.
pub fn rgb_to_huslp(rgb: impl Into<Components>) -> Components {
    lch_to_huslp(luv_to_lch(xyz_to_luv(rgb_to_xyz(rgb))))
}

/// Convert HUSLp to gamma encoded sRGB in [0..1].
pub fn huslp_to_rgb(huslp: impl Into<Components>) -> Components {
    xyz_to_rgb(luv_to_xyz(lch_to_luv(huslp_to_lch(huslp))))
}

/// Convert 8-bit sRGB channels in [0..255], integers or floats, to HUSL.
pub fn rgb8_to_husl<T: AsPrimitive<Component>>([red, green, blue]: [T; 3]) -> Components {
    rgb_to_husl(Srgb::from_rgb8(red, green, blue).to_components())
}

/// Convert 8-bit sRGB channels in [0..255], integers or floats, to HUSLp.
pub fn rgb8_to_huslp<T: AsPrimitive<Component>>([red, green, blue]: [T; 3]) -> Components {
    rgb_to_huslp(Srgb::from_rgb8(red, green, blue).to_components())
}

/// Convert HUSL to 8-bit sRGB channels, each rounded to the nearest integer.
pub fn husl_to_rgb8(husl: impl Into<Components>) -> [u8; 3] {
    Srgb::from(husl_to_rgb(husl)).to_rgb8()
}

/// Convert HUSLp to 8-bit sRGB channels, each rounded to the nearest integer.
pub fn huslp_to_rgb8(huslp: impl Into<Components>) -> [u8; 3] {
    Srgb::from(huslp_to_rgb(huslp)).to_rgb8()
}

/// Convert a hex color string (`#rrggbb` or `#rgb`) to HUSL.
pub fn hex_to_husl(hex: &str) -> Result<Components, ParseHexError> {
    let srgb: Srgb = hex.parse()?;
    Ok(rgb_to_husl(srgb.to_components()))
}

/// Convert a hex color string (`#rrggbb` or `#rgb`) to HUSLp.
pub fn hex_to_huslp(hex: &str) -> Result<Components, ParseHexError> {
    let srgb: Srgb = hex.parse()?;
    Ok(rgb_to_huslp(srgb.to_components()))
}

/// Convert HUSL to a lower case `#rrggbb` hex string.
pub fn husl_to_hex(husl: impl Into<Components>) -> String {
    Srgb::from(husl_to_rgb(husl)).to_hex()
}

/// Convert HUSLp to a lower case `#rrggbb` hex string.
pub fn huslp_to_hex(huslp: impl Into<Components>) -> String {
    Srgb::from(huslp_to_rgb(huslp)).to_hex()
}
