//! Model a color with the HUSL and HUSLp notations.
//!
//! Both are CIE-LCHuv with the chroma replaced by a saturation in [0..100]
//! relative to a chroma bound from [`crate::gamut`]. They only differ in the
//! bound, so they share one model type parameterized by a bound tag.

use crate::{
    color::{Component, Flags, HasSpace, Space},
    math::almost_zero,
    models::{
        luv::Lchuv,
        xyz::{ToXyz, Xyz},
    },
};

pub mod bound {
    //! Tags that select the chroma a saturation of 100 corresponds to.

    use crate::{color::Component, gamut};

    /// The maximum chroma for a lightness and hue.
    pub trait ChromaBound {
        /// Return the chroma a saturation of 100 corresponds to.
        fn max_chroma(lightness: Component, hue: Component) -> Component;
    }

    /// Bound by the sRGB gamut edge along the hue, so every saturation in
    /// [0..100] is displayable and 100 is the most chromatic color of that hue.
    #[derive(Clone, Debug)]
    pub struct HueSpecific;

    impl ChromaBound for HueSpecific {
        fn max_chroma(lightness: Component, hue: Component) -> Component {
            gamut::max_chroma_for_lh(lightness, hue)
        }
    }

    /// Bound by the largest chroma that is displayable for every hue, giving
    /// pastel colors at a saturation of 100.
    #[derive(Clone, Debug)]
    pub struct HueIndependent;

    impl ChromaBound for HueIndependent {
        fn max_chroma(lightness: Component, _hue: Component) -> Component {
            gamut::max_safe_chroma_for_l(lightness)
        }
    }
}

/// Above this lightness a color is white.
const WHITE_LIGHTNESS: Component = 99.9999999;

/// Below this lightness a color is black.
const BLACK_LIGHTNESS: Component = 0.00000001;

/// Chroma (and so saturation) is meaningless for white and black.
#[allow(clippy::manual_range_contains)]
fn is_white_or_black(lightness: Component) -> bool {
    lightness > WHITE_LIGHTNESS || lightness < BLACK_LIGHTNESS
}

husl_macros::gen_model! {
    /// A color specified by hue, saturation relative to the chroma bound `B`,
    /// and lightness.
    pub struct Hsluv<B: bound::ChromaBound> {
        /// The hue component of the color, in degrees [0..360).
        pub hue: Component,
        /// The saturation component of the color, [0..100] when in gamut.
        pub saturation: Component,
        /// The lightness component of the color, [0..100].
        pub lightness: Component,
    }
}

/// HUSL, saturation relative to the sRGB gamut edge of the hue.
pub type Husl = Hsluv<bound::HueSpecific>;

impl HasSpace for Husl {
    const SPACE: Space = Space::Husl;

    fn powerless(&self) -> Flags {
        self.powerless_components()
    }
}

/// HUSLp, saturation relative to the chroma displayable at every hue.
pub type Huslp = Hsluv<bound::HueIndependent>;

impl HasSpace for Huslp {
    const SPACE: Space = Space::Huslp;

    fn powerless(&self) -> Flags {
        self.powerless_components()
    }
}

impl<B: bound::ChromaBound> Hsluv<B> {
    /// Convert from the cylindrical form of CIE-LUV. White and black get a
    /// saturation of 0.
    pub fn from_lch(lch: &Lchuv) -> Self {
        let Lchuv {
            lightness,
            chroma,
            hue,
            ..
        } = *lch;

        let saturation = if is_white_or_black(lightness) {
            0.0
        } else {
            chroma / B::max_chroma(lightness, hue) * 100.0
        };

        Self::new(hue, saturation, lightness)
    }

    /// Convert to the cylindrical form of CIE-LUV. White and black get a
    /// chroma of 0.
    pub fn to_lch(&self) -> Lchuv {
        let chroma = if is_white_or_black(self.lightness) {
            0.0
        } else {
            B::max_chroma(self.lightness, self.hue) / 100.0 * self.saturation
        };

        Lchuv::new(self.lightness, chroma, self.hue)
    }

    fn powerless_components(&self) -> Flags {
        if is_white_or_black(self.lightness) {
            Flags::C0_IS_POWERLESS | Flags::C1_IS_POWERLESS
        } else if almost_zero(self.saturation) {
            Flags::C0_IS_POWERLESS
        } else {
            Flags::empty()
        }
    }
}

impl<B: bound::ChromaBound> ToXyz for Hsluv<B> {
    fn to_xyz(&self) -> Xyz {
        self.to_lch().to_xyz()
    }
}

impl<B: bound::ChromaBound> From<Xyz> for Hsluv<B> {
    fn from(value: Xyz) -> Self {
        Self::from_lch(&Lchuv::from(value))
    }
}
