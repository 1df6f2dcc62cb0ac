/// Hookean restoring force magnitude for a bond stretched to `dist`.
///
/// Positive when the bond is longer than `target` (the endpoints attract), negative when
/// it is compressed.
#[inline]
pub fn harmonic_bond_force(dist: f64, target: f64, spring_constant: f64) -> f64 {
    spring_constant * (dist - target)
}

/// Lennard-Jones 12-6 force magnitude, `-dV/dr` of `4ε((σ/r)^12 - (σ/r)^6)`.
///
/// Positive values push the pair apart.
#[inline]
pub fn lennard_jones_force(dist: f64, sigma: f64, epsilon: f64) -> f64 {
    let r6 = (sigma / dist).powi(6);
    let r12 = r6 * r6;
    (24.0 * epsilon / dist) * (2.0 * r12 - r6)
}
