//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};

use crate::color::{Component, Components};

pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a transform that multiplies a vector by the 3x3 matrix given as
/// rows, so that each output component is the dot product of the matching
/// row with the input.
#[rustfmt::skip]
pub const fn transform_from_rows(rows: [[Component; 3]; 3]) -> Transform {
    let [r0, r1, r2] = rows;
    Transform::new(
        r0[0], r1[0], r2[0], 0.0,
        r0[1], r1[1], r2[1], 0.0,
        r0[2], r1[2], r2[2], 0.0,
        0.0,   0.0,   0.0,   1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Components(x, y, z) = components;
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    Components(x, y, z)
}

/// Chroma below this is treated as no chroma at all.
const CHROMA_EPSILON: Component = 1.0e-8;

pub fn almost_zero(value: Component) -> bool {
    value.abs() < CHROMA_EPSILON
}

/// Bring a hue in degrees from the (-180..180] range of `atan2` into
/// [0..360).
pub fn normalize_hue(hue: Component) -> Component {
    if hue < 0.0 {
        hue + 360.0
    } else {
        hue
    }
}
