//! Model a color in the CIE-XYZ color space.

use crate::color::{Component, HasSpace, Space};

/// Specify that a color model supports conversion to CIE-XYZ.
pub trait ToXyz {
    /// Convert this color to CIE-XYZ.
    fn to_xyz(&self) -> Xyz;
}

husl_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space with a D65 white point
    /// reference. `y` is in [0..1].
    pub struct Xyz {
        /// The X component of the color.
        pub x: Component,
        /// The Y component of the color.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}

impl HasSpace for Xyz {
    const SPACE: Space = Space::XyzD65;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::Components, models::Model, Color};

    #[test]
    fn to_and_from_color() {
        let model = Xyz::new(0.1, 0.2, 0.3);
        let color = model.to_color();
        assert_eq!(color.components, Components(0.1, 0.2, 0.3));
        assert_eq!(color.space, Space::XyzD65);
        assert!(color.flags.is_empty());

        let back = Xyz::from_color(&Color::new(Space::XyzD65, 0.4, 0.5, 0.6));
        assert_eq!(back.x, 0.4);
        assert_eq!(back.y, 0.5);
        assert_eq!(back.z, 0.6);
    }
}
