use super::*;

use core::f64::consts::{PI, TAU};
use nalgebra::{ComplexField, RealField};

/// Angle (in radians) between the ray going from `from` to the point of `mirror`
/// at abscissa `x`, and the mirror's normal at that point.
///
/// The normal's angle is `atan2(1, -f'(x))`, the ray's is the angle of `P - from`.
/// When their difference exceeds `π` in magnitude, the reflex form
/// `|(2π + ray) - normal|` is returned instead.
///
/// Only overflow in one direction is corrected: when the ray angle is far
/// above the normal's, the returned value can still exceed `π`.
#[inline]
#[must_use]
pub fn ray_angle(from: &Point, mirror: &Polynomial, x: Float) -> Float {
    let p = mirror.point_at(x);

    let normal = RealField::atan2(1., -mirror.slope_at(x));

    let d = p - from;
    let ray = RealField::atan2(d.y, d.x);

    let diff = normal - ray;

    if ComplexField::abs(diff) <= PI {
        ComplexField::abs(diff)
    } else {
        ComplexField::abs((TAU + ray) - normal)
    }
}

/// `g(x)`: angle of incidence minus angle of reflection at abscissa `x`.
///
/// The reflection point is a root of this function.
#[inline]
#[must_use]
pub fn angle_difference(source: &Point, camera: &Point, mirror: &Polynomial, x: Float) -> Float {
    ray_angle(source, mirror, x) - ray_angle(camera, mirror, x)
}
