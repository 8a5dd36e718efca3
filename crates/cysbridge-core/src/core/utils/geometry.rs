use nalgebra::{Point3, Vector3};

/// Normals shorter than this are treated as collinear input.
const DEGENERATE_NORMAL_EPSILON: f64 = 1e-10;

pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    nalgebra::distance(a, b)
}

/// Signed torsion angle about the `p2`-`p3` axis, in degrees within [-180, 180].
///
/// Uses the normals of the `p1-p2-p3` and `p2-p3-p4` planes; the sign comes
/// from the triple product with the central bond. Returns `NaN` when three or
/// more points are (nearly) collinear, so that range checks downstream fail.
pub fn dihedral(p1: &Point3<f64>, p2: &Point3<f64>, p3: &Point3<f64>, p4: &Point3<f64>) -> f64 {
    let b1: Vector3<f64> = p2 - p1;
    let b2: Vector3<f64> = p3 - p2;
    let b3: Vector3<f64> = p4 - p3;

    let n1 = b1.cross(&b2);
    let n2 = b2.cross(&b3);
    if n1.norm() < DEGENERATE_NORMAL_EPSILON || n2.norm() < DEGENERATE_NORMAL_EPSILON {
        return f64::NAN;
    }

    let x = n1.dot(&n2);
    let y = n1.cross(&n2).dot(&b2.normalize());

    y.atan2(x).to_degrees()
}
