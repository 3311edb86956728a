//! Model a color in the sRGB color space.

use num_traits::AsPrimitive;

use crate::{
    color::{Component, HasSpace, Space},
    constants::{LINEAR_SRGB_TO_XYZ, XYZ_TO_LINEAR_SRGB},
    math::transform,
    models::xyz::{ToXyz, Xyz},
};

pub mod encoding {
    //! Tags that specify the gamma encoding of an [`super::Rgb`] model.

    /// This trait is used to identity tags that specify gamma encoding.
    pub trait Encoding {}

    /// Components are gamma encoded with the sRGB transfer function.
    #[derive(Clone, Debug)]
    pub struct GammaEncoded;
    impl Encoding for GammaEncoded {}

    /// Components are linear in light intensity.
    #[derive(Clone, Debug)]
    pub struct LinearLight;
    impl Encoding for LinearLight {}
}

/// Decode one gamma encoded sRGB component to linear light.
pub fn to_linear(value: Component) -> Component {
    if value > 0.04045 {
        ((value + 0.055) / 1.055).powf(2.4)
    } else {
        value / 12.92
    }
}

/// Encode one linear light component with the sRGB transfer function.
pub fn from_linear(value: Component) -> Component {
    if value <= 0.0031308 {
        12.92 * value
    } else {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    }
}

husl_macros::gen_model! {
    /// A color specified in the sRGB color space.
    pub struct Rgb<E: encoding::Encoding> {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

/// Model for a color in the sRGB color space with gamma encoding.
pub type Srgb = Rgb<encoding::GammaEncoded>;

impl HasSpace for Srgb {
    const SPACE: Space = Space::Srgb;
}

/// Model for a color in the sRGB color space with no gamma encoding.
pub type SrgbLinear = Rgb<encoding::LinearLight>;

impl HasSpace for SrgbLinear {
    const SPACE: Space = Space::SrgbLinear;
}

impl Srgb {
    /// Create a color from 8-bit channels in [0..255]. Integers and floats
    /// are both accepted.
    pub fn from_rgb8<T: AsPrimitive<Component>>(red: T, green: T, blue: T) -> Self {
        Self::new(red.as_() / 255.0, green.as_() / 255.0, blue.as_() / 255.0)
    }

    /// Return the 8-bit channels of this color, each rounded to the nearest
    /// integer. Out of gamut components saturate to 0 or 255.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let to_u8 = |value: Component| (value * 255.0).round().clamp(0.0, 255.0) as u8;
        [to_u8(self.red), to_u8(self.green), to_u8(self.blue)]
    }

    /// Convert this model from gamma encoded to linear light.
    pub fn to_linear_light(&self) -> SrgbLinear {
        self.to_components().map(to_linear).into()
    }
}

impl SrgbLinear {
    /// Convert this model from linear light to gamma encoded.
    pub fn to_gamma_encoded(&self) -> Srgb {
        self.to_components().map(from_linear).into()
    }
}

impl From<Xyz> for SrgbLinear {
    fn from(value: Xyz) -> Self {
        transform(&XYZ_TO_LINEAR_SRGB, value.to_components()).into()
    }
}

impl ToXyz for SrgbLinear {
    fn to_xyz(&self) -> Xyz {
        transform(&LINEAR_SRGB_TO_XYZ, self.to_components()).into()
    }
}

impl ToXyz for Srgb {
    fn to_xyz(&self) -> Xyz {
        self.to_linear_light().to_xyz()
    }
}

impl From<Xyz> for Srgb {
    fn from(value: Xyz) -> Self {
        SrgbLinear::from(value).to_gamma_encoded()
    }
}

impl From<[u8; 3]> for Srgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::from_rgb8(red, green, blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn transfer_function_segments() {
        assert_eq!(to_linear(0.0), 0.0);
        assert_eq!(to_linear(0.04045), 0.04045 / 12.92);
        assert_component_eq!(to_linear(1.0), 1.0);
        assert_component_eq!(to_linear(0.5), 0.21404114048223255);

        assert_eq!(from_linear(0.0), 0.0);
        assert_eq!(from_linear(0.0031308), 12.92 * 0.0031308);
        assert_component_eq!(from_linear(1.0), 1.0);
        assert_component_eq!(from_linear(0.21404114048223255), 0.5);
    }

    #[test]
    fn transfer_functions_are_inverse() {
        for i in 0..=100 {
            let value = i as Component / 100.0;
            assert_component_eq!(from_linear(to_linear(value)), value);
        }
    }

    #[test]
    fn rgb8_accepts_integers_and_floats() {
        let from_ints = Srgb::from_rgb8(250, 186, 218);
        let from_floats = Srgb::from_rgb8(250.0, 186.0, 218.0);
        let from_bytes = Srgb::from([250u8, 186, 218]);

        assert_eq!(from_ints.to_components(), from_floats.to_components());
        assert_eq!(from_ints.to_components(), from_bytes.to_components());
        assert_component_eq!(from_ints.red, 0.98039215686274);
        assert_component_eq!(from_ints.green, 0.72941176470589);
        assert_component_eq!(from_ints.blue, 0.85490196078433);
    }

    #[test]
    fn rgb8_rounds_and_saturates() {
        let fabada = Srgb::new(0.98039215686274, 0.72941176470589, 0.85490196078433);
        assert_eq!(fabada.to_rgb8(), [250, 186, 218]);
        assert_eq!(Srgb::new(0.5, 0.499, 0.0).to_rgb8(), [128, 127, 0]);
        assert_eq!(Srgb::new(-0.1, 1.2, 1.0).to_rgb8(), [0, 255, 255]);
    }

    #[test]
    fn white_maps_to_reference_white() {
        let xyz = Srgb::new(1.0, 1.0, 1.0).to_xyz();
        assert_component_eq!(xyz.x, 0.9504559270516717);
        assert_component_eq!(xyz.y, 1.0);
        assert_component_eq!(xyz.z, 1.0890577507598784);

        let back = Srgb::from(xyz);
        assert_component_eq!(back.red, 1.0);
        assert_component_eq!(back.green, 1.0);
        assert_component_eq!(back.blue, 1.0);
    }

    #[test]
    fn xyz_round_trip() {
        let srgb = Srgb::new(0.823529, 0.411765, 0.117647);
        let xyz = srgb.to_xyz();
        assert_component_eq!(xyz.x, 0.3186339952218123);
        assert_component_eq!(xyz.y, 0.23900587318813304);
        assert_component_eq!(xyz.z, 0.04163695781187604);

        let back = Srgb::from(xyz);
        assert_component_eq!(back.red, srgb.red);
        assert_component_eq!(back.green, srgb.green);
        assert_component_eq!(back.blue, srgb.blue);
    }
}
