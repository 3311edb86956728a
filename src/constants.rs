//! Reference constants for sRGB with a D65 white point and CIE-LUV.
//!
//! All values are given with 17 significant digits so they round trip to the
//! exact same `f64`. They are fitted values; do not round them.

use crate::{
    color::Component,
    math::{transform_from_rows, Transform},
};

/// Rows of the matrix converting CIE-XYZ to linear light sRGB (R, G, B).
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub const M: [[Component; 3]; 3] = [
    [ 3.2409699419045214,   -1.5373831775700935,  -0.49861076029300328],
    [-0.96924363628087983,   1.8759675015077207,   0.041555057407175613],
    [ 0.055630079696993609, -0.20397695888897657,  1.0569715142428786],
];

/// Rows of the matrix converting linear light sRGB to CIE-XYZ (X, Y, Z).
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub const M_INV: [[Component; 3]; 3] = [
    [0.41239079926595948,  0.35758433938387796, 0.18048078840183429],
    [0.21263900587151036,  0.71516867876775593, 0.072192315360733715],
    [0.019330818715591851, 0.11919477979462599, 0.95053215224966058],
];

pub(crate) const XYZ_TO_LINEAR_SRGB: Transform = transform_from_rows(M);
pub(crate) const LINEAR_SRGB_TO_XYZ: Transform = transform_from_rows(M_INV);

/// u' chromaticity of the D65 reference white.
#[allow(clippy::excessive_precision)]
pub const REF_U: Component = 0.19783000664283681;

/// v' chromaticity of the D65 reference white.
#[allow(clippy::excessive_precision)]
pub const REF_V: Component = 0.468319994938791;

/// CIE-LUV slope of the linear segment of lightness.
#[allow(clippy::excessive_precision)]
pub const KAPPA: Component = 903.2962962962963;

/// CIE-LUV luminance where the linear segment of lightness ends.
#[allow(clippy::excessive_precision)]
pub const EPSILON: Component = 0.0088564516790356308;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::excessive_precision)]
    fn constants_match_reference_literals() {
        assert_eq!(M[0][0], 3.2409699419045214);
        assert_eq!(M[1][1], 1.8759675015077207);
        assert_eq!(M[2][2], 1.0569715142428786);
        assert_eq!(M_INV[0][0], 0.41239079926595948);
        assert_eq!(M_INV[1][1], 0.71516867876775593);
        assert_eq!(M_INV[2][2], 0.95053215224966058);

        assert_eq!(REF_U, 0.19783000664283681);
        assert_eq!(REF_V, 0.468319994938791);
        assert_eq!(KAPPA, 903.2962962962963);
        assert_eq!(EPSILON, 0.0088564516790356308);
    }

    #[test]
    fn constants_match_their_definitions() {
        // kappa = (29/3)^3 and epsilon = (6/29)^3 up to rounding of the fit.
        approx::assert_relative_eq!(KAPPA, 24389.0 / 27.0, max_relative = 1.0e-15);
        approx::assert_relative_eq!(EPSILON, 216.0 / 24389.0, max_relative = 1.0e-15);
    }

    #[test]
    fn matrices_are_inverses() {
        let identity = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        for (row, identity_row) in M.iter().zip(identity) {
            for (j, expected) in identity_row.into_iter().enumerate() {
                let cell: Component = row.iter().zip(M_INV.iter()).map(|(m, n)| m * n[j]).sum();
                approx::assert_abs_diff_eq!(cell, expected, epsilon = 1.0e-12);
            }
        }
    }

    #[test]
    fn reference_white_matches_the_matrix() {
        // The white point is linear sRGB (1, 1, 1).
        let x: Component = M_INV[0].iter().sum();
        let y: Component = M_INV[1].iter().sum();
        let z: Component = M_INV[2].iter().sum();

        let denominator = x + 15.0 * y + 3.0 * z;
        approx::assert_abs_diff_eq!(4.0 * x / denominator, REF_U, epsilon = 1.0e-12);
        approx::assert_abs_diff_eq!(9.0 * y / denominator, REF_V, epsilon = 1.0e-12);
    }
}
