//! Models for the rectangular and polar forms of the CIE-LUV color space.

use crate::{
    color::{Component, Flags, HasSpace, Space},
    constants::{EPSILON, KAPPA, REF_U, REF_V},
    math::{almost_zero, normalize_hue},
    models::xyz::{ToXyz, Xyz},
};

husl_macros::gen_model! {
    /// The model for a color specified in the CIE-LUV color space with the
    /// rectangular orthogonal form. `lightness` is in [0..100].
    pub struct Luv {
        /// The lightness component.
        pub lightness: Component,
        /// The u component.
        pub u: Component,
        /// The v component.
        pub v: Component,
    }
}

impl HasSpace for Luv {
    const SPACE: Space = Space::Luv;
}

impl Luv {
    /// Convert this orthogonal rectangular model into its cylindrical polar
    /// form. The hue of a color without chroma is 0.
    pub fn to_polar(&self) -> Lchuv {
        let chroma = (self.u * self.u + self.v * self.v).sqrt();
        let hue = if almost_zero(chroma) {
            0.0
        } else {
            normalize_hue(self.v.atan2(self.u).to_degrees())
        };

        Lchuv::new(self.lightness, chroma, hue)
    }
}

impl From<Xyz> for Luv {
    fn from(value: Xyz) -> Self {
        let Xyz { x, y, z, .. } = value;

        // Black, and u' v' are undefined.
        if y == 0.0 {
            return Luv::new(0.0, 0.0, 0.0);
        }

        let lightness = if y <= EPSILON {
            y * KAPPA
        } else {
            116.0 * y.cbrt() - 16.0
        };

        let denominator = x + 15.0 * y + 3.0 * z;
        let var_u = 4.0 * x / denominator;
        let var_v = 9.0 * y / denominator;

        Luv::new(
            lightness,
            13.0 * lightness * (var_u - REF_U),
            13.0 * lightness * (var_v - REF_V),
        )
    }
}

impl ToXyz for Luv {
    fn to_xyz(&self) -> Xyz {
        let Luv {
            lightness, u, v, ..
        } = *self;

        if lightness == 0.0 {
            return Xyz::new(0.0, 0.0, 0.0);
        }

        let var_u = u / (13.0 * lightness) + REF_U;
        let var_v = v / (13.0 * lightness) + REF_V;

        let y = if lightness <= 8.0 {
            lightness / KAPPA
        } else {
            let f = (lightness + 16.0) / 116.0;
            f * f * f
        };

        // Solve var_u = 4x / (x + 15y + 3z) and var_v = 9y / (x + 15y + 3z)
        // for x and z.
        let x = 0.0 - (9.0 * y * var_u) / ((var_u - 4.0) * var_v - var_u * var_v);
        let z = (9.0 * y - 15.0 * var_v * y - var_v * x) / (3.0 * var_v);

        Xyz::new(x, y, z)
    }
}

husl_macros::gen_model! {
    /// The model for a color specified in the CIE-LUV color space with the
    /// cylindrical polar form. `hue` is in degrees, [0..360).
    pub struct Lchuv {
        /// The lightness component.
        pub lightness: Component,
        /// The chroma component.
        pub chroma: Component,
        /// The hue component.
        pub hue: Component,
    }
}

impl HasSpace for Lchuv {
    const SPACE: Space = Space::Lchuv;

    fn powerless(&self) -> Flags {
        if almost_zero(self.chroma) {
            Flags::C2_IS_POWERLESS
        } else {
            Flags::empty()
        }
    }
}

impl Lchuv {
    /// Convert this cylindrical polar model into its orthogonal rectangular
    /// form.
    pub fn to_rectangular(&self) -> Luv {
        let hue = self.hue.to_radians();
        let u = self.chroma * hue.cos();
        let v = self.chroma * hue.sin();

        Luv::new(self.lightness, u, v)
    }
}

impl ToXyz for Lchuv {
    fn to_xyz(&self) -> Xyz {
        self.to_rectangular().to_xyz()
    }
}

impl From<Xyz> for Lchuv {
    fn from(value: Xyz) -> Self {
        Luv::from(value).to_polar()
    }
}
