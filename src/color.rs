//! A [`Color`] represents a color that was specified in any of the supported
//! color spaces.

use bitflags::bitflags;

/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// Return the components as an array.
    pub fn to_array(&self) -> [Component; 3] {
        [self.0, self.1, self.2]
    }
}

impl From<[Component; 3]> for Components {
    fn from([c0, c1, c2]: [Component; 3]) -> Self {
        Self(c0, c1, c2)
    }
}

impl From<(Component, Component, Component)> for Components {
    fn from((c0, c1, c2): (Component, Component, Component)) -> Self {
        Self(c0, c1, c2)
    }
}

impl From<Components> for [Component; 3] {
    fn from(value: Components) -> Self {
        value.to_array()
    }
}

impl From<Components> for (Component, Component, Component) {
    fn from(value: Components) -> Self {
        (value.0, value.1, value.2)
    }
}

bitflags! {
    /// Flags to mark components of a [`Color`] that are powerless, i.e. that
    /// hold a conventional value because they have no effect on the color.
    #[derive(Clone, Copy, Debug, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Flags : u8 {
        /// Set when the first component of a [`Color`] is powerless.
        const C0_IS_POWERLESS = 1 << 0;
        /// Set when the second component of a [`Color`] is powerless.
        const C1_IS_POWERLESS = 1 << 1;
        /// Set when the third component of a [`Color`] is powerless.
        const C2_IS_POWERLESS = 1 << 2;
    }
}

/// The color spaces and notations supported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Space {
    /// The gamma encoded sRGB color space, components in [0..1].
    Srgb = 0,
    /// The sRGB color space with no gamma encoding.
    SrgbLinear = 1,
    /// CIE-XYZ with a D65 white point.
    XyzD65 = 2,
    /// CIE-LUV (lightness, u, v).
    Luv = 3,
    /// The cylindrical form of CIE-LUV (lightness, chroma, hue).
    Lchuv = 4,
    /// HUSL (hue, saturation, lightness), saturation relative to the most
    /// chromatic sRGB color of the same hue and lightness.
    Husl = 5,
    /// HUSLp (hue, saturation, lightness), saturation relative to the most
    /// chromatic sRGB color of the same lightness that is available at every
    /// hue.
    Huslp = 6,
}

/// Implemented by every color model to tie it to a [`Space`].
pub trait HasSpace {
    /// The space the model's components are specified in.
    const SPACE: Space;

    /// Return the components of this color that are powerless.
    fn powerless(&self) -> Flags {
        Flags::empty()
    }
}

/// Struct that can hold a color of any color space.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// The three components that make up any color.
    pub components: Components,
    /// Marks components that are powerless.
    pub flags: Flags,
    /// The color space in which the components are set.
    pub space: Space,
}

impl Color {
    /// Create a new [`Color`] from its three components.
    /// ```rust
    /// use husl::{Color, Space};
    /// let c = Color::new(Space::Srgb, 0.98, 0.73, 0.85);
    /// ```
    pub fn new(space: Space, c0: Component, c1: Component, c2: Component) -> Self {
        Self {
            components: Components(c0, c1, c2),
            flags: Flags::empty(),
            space,
        }
    }

    /// Return the first component of the color, or `None` if it is
    /// powerless.
    pub fn c0(&self) -> Option<Component> {
        if self.flags.contains(Flags::C0_IS_POWERLESS) {
            None
        } else {
            Some(self.components.0)
        }
    }

    /// Return the second component of the color, or `None` if it is
    /// powerless.
    pub fn c1(&self) -> Option<Component> {
        if self.flags.contains(Flags::C1_IS_POWERLESS) {
            None
        } else {
            Some(self.components.1)
        }
    }

    /// Return the third component of the color, or `None` if it is
    /// powerless.
    pub fn c2(&self) -> Option<Component> {
        if self.flags.contains(Flags::C2_IS_POWERLESS) {
            None
        } else {
            Some(self.components.2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_color_with_correct_components() {
        let c = Color::new(Space::Srgb, 0.1, 0.2, 0.3);
        assert_eq!(c.components, Components(0.1, 0.2, 0.3));
        assert_eq!(c.flags, Flags::empty());
        assert_eq!(c.space, Space::Srgb);
    }

    #[test]
    fn powerless_components_read_as_none() {
        let mut c = Color::new(Space::Lchuv, 50.0, 0.0, 0.0);
        c.flags = Flags::C2_IS_POWERLESS;
        assert_eq!(c.c0(), Some(50.0));
        assert_eq!(c.c1(), Some(0.0));
        assert_eq!(c.c2(), None);
        assert_eq!(c.components.2, 0.0);
    }

    #[test]
    fn components_from_array_and_tuple() {
        assert_eq!(Components::from([1.0, 2.0, 3.0]), Components(1.0, 2.0, 3.0));
        assert_eq!(Components::from((1.0, 2.0, 3.0)), Components(1.0, 2.0, 3.0));

        let array: [Component; 3] = Components(4.0, 5.0, 6.0).into();
        assert_eq!(array, [4.0, 5.0, 6.0]);

        let tuple: (Component, Component, Component) = Components(4.0, 5.0, 6.0).into();
        assert_eq!(tuple, (4.0, 5.0, 6.0));
    }

    #[test]
    fn map_applies_to_every_component() {
        let c = Components(1.0, 2.0, 3.0).map(|v| v * 2.0);
        assert_eq!(c, Components(2.0, 4.0, 6.0));
    }
}
