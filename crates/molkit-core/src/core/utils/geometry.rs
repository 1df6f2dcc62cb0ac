use nalgebra::{Point3, Vector3};

const MIN_DIRECTION_NORM: f64 = 1e-12;

/// Arithmetic mean of a set of points, or `None` for an empty set.
pub fn centroid<'a>(points: impl IntoIterator<Item = &'a Point3<f64>>) -> Option<Point3<f64>> {
    let mut sum = Vector3::zeros();
    let mut count = 0usize;
    for p in points {
        sum += p.coords;
        count += 1;
    }
    (count > 0).then(|| Point3::from(sum / count as f64))
}

/// Unit vector along `v`, or `None` when `v` is (numerically) zero.
pub fn unit_direction(v: &Vector3<f64>) -> Option<Vector3<f64>> {
    v.try_normalize(MIN_DIRECTION_NORM)
}

pub fn calculate_rmsd(coords1: &[Point3<f64>], coords2: &[Point3<f64>]) -> Option<f64> {
    if coords1.len() != coords2.len() || coords1.is_empty() {
        return None;
    }
    let n = coords1.len() as f64;
    let squared_dist_sum: f64 = coords1
        .iter()
        .zip(coords2.iter())
        .map(|(p1, p2)| (p1 - p2).norm_squared())
        .sum();
    Some((squared_dist_sum / n).sqrt())
}
