//! Models are structs that represent a color in a specified color space or
//! form. They represent a type safe way to convert between different color
//! spaces and forms.

use crate::color::Color;

pub mod husl;
pub mod luv;
pub mod rgb;
pub mod xyz;

pub use husl::{Hsluv, Husl, Huslp};
pub use luv::{Lchuv, Luv};
pub use rgb::{Rgb, Srgb, SrgbLinear};
pub use xyz::{ToXyz, Xyz};

/// A trait implemented for color models that can be converted to and from a
/// generic [`Color`].
pub trait Model {
    /// Convert a model to a generic [`Color`].
    fn to_color(&self) -> Color;

    /// Convert a generic [`Color`] to a model. The space of the color is not
    /// checked.
    fn from_color(color: &Color) -> Self;
}
