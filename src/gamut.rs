//! Bounds of the sRGB gamut in the CIE-LUV chroma plane.
//!
//! At a fixed lightness the colors reachable in sRGB project onto the (u, v)
//! plane as a convex hexagon around the origin. Each edge is where one of the
//! linear light channels is clamped at 0 or at 1. The edges are returned as
//! lines in slope-intercept form and intersected with rays from the origin to
//! find the largest chroma that stays inside the gamut.

use crate::{
    color::Component,
    constants::{EPSILON, KAPPA, M},
};

/// A line `v = slope * u + intercept` in the (u, v) plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    /// The slope of the line.
    pub slope: Component,
    /// Where the line crosses the v axis.
    pub intercept: Component,
}

/// Return the 6 edges of the sRGB gamut at the given `lightness`, stepping
/// over which pushes a color out of gamut. The lines are ordered by channel
/// (red, green, blue) and then by clamp value (0, 1).
pub fn get_bounds(lightness: Component) -> [Line; 6] {
    let sub1 = (lightness + 16.0).powi(3) / 1560896.0;
    let sub2 = if sub1 > EPSILON {
        sub1
    } else {
        lightness / KAPPA
    };

    std::array::from_fn(|index| {
        let [m1, m2, m3] = M[index / 2];
        let t = (index % 2) as Component;

        let top1 = (284517.0 * m1 - 94839.0 * m3) * sub2;
        let top2 = (838422.0 * m3 + 769860.0 * m2 + 731718.0 * m1) * lightness * sub2
            - 769860.0 * t * lightness;
        let bottom = (632260.0 * m3 - 126452.0 * m2) * sub2 + 126452.0 * t;

        Line {
            slope: top1 / bottom,
            intercept: top2 / bottom,
        }
    })
}

/// Return the u coordinate where the two lines cross.
pub fn intersect_line_line(line1: &Line, line2: &Line) -> Component {
    (line1.intercept - line2.intercept) / (line2.slope - line1.slope)
}

/// Return the distance of the point (`u`, `v`) from the origin.
pub fn distance_from_pole(u: Component, v: Component) -> Component {
    (u * u + v * v).sqrt()
}

/// Return the length of the ray leaving the origin at angle `theta` (radians)
/// until it hits `line`, or `None` if it never does going forward. Rays
/// parallel to the line also yield `None`.
pub fn length_of_ray_until_intersect(theta: Component, line: &Line) -> Option<Component> {
    // A point on the ray is (len * cos(theta), len * sin(theta)). Putting it
    // on the line gives len = b / (sin(theta) - m * cos(theta)).
    let length = line.intercept / (theta.sin() - line.slope * theta.cos());

    if length.is_finite() && length >= 0.0 {
        Some(length)
    } else {
        None
    }
}

/// Return the largest chroma at `lightness` that is inside the sRGB gamut
/// for every hue.
pub fn max_safe_chroma_for_l(lightness: Component) -> Component {
    get_bounds(lightness)
        .iter()
        .map(|line| {
            // Closest point of the line to the origin is where it crosses the
            // perpendicular through the origin.
            let perpendicular = Line {
                slope: -1.0 / line.slope,
                intercept: 0.0,
            };
            let u = intersect_line_line(line, &perpendicular);
            distance_from_pole(u, line.intercept + u * line.slope)
        })
        .fold(Component::INFINITY, Component::min)
}

/// Return the largest chroma at `lightness` and `hue` (degrees) that is
/// inside the sRGB gamut.
///
/// Edges parallel to the hue ray are skipped. If no edge is hit at all the
/// result is [`Component::INFINITY`]; a hexagon around the origin always has
/// one, so this only happens for non-finite input.
pub fn max_chroma_for_lh(lightness: Component, hue: Component) -> Component {
    let theta = hue.to_radians();

    let max = get_bounds(lightness)
        .iter()
        .filter_map(|line| length_of_ray_until_intersect(theta, line))
        .fold(Component::INFINITY, Component::min);

    if max == Component::INFINITY {
        log::warn!("no sRGB gamut edge along hue {hue} at lightness {lightness}");
    }

    max
}
