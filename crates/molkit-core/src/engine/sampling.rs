use nalgebra::Vector3;
use rand::Rng;
use std::f64::consts::PI;

/// Maps two uniform draws in `[0, 1)` to a point on the unit sphere.
///
/// `u1` sets the azimuth `θ = 2π·u1` and `u2` the polar angle `φ = acos(2·u2 - 1)`, which
/// makes the resulting directions uniformly distributed over the sphere.
pub fn direction_from_uniforms(u1: f64, u2: f64) -> Vector3<f64> {
    let theta = u1 * 2.0 * PI;
    let phi = (2.0 * u2 - 1.0).acos();
    Vector3::new(
        phi.sin() * theta.cos(),
        phi.sin() * theta.sin(),
        phi.cos(),
    )
}

/// Samples a uniformly distributed unit vector from `rng`.
///
/// The azimuth draw is taken before the polar draw, so a seeded generator always yields
/// the same direction.
pub fn random_unit_direction(rng: &mut impl Rng) -> Vector3<f64> {
    let u1 = rng.gen_range(0.0..1.0);
    let u2 = rng.gen_range(0.0..1.0);
    direction_from_uniforms(u1, u2)
}
