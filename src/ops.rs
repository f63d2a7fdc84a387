use crate::{Result, Vector, VectorError, DEFAULT_TOLERANCE};
use bigdecimal::{BigDecimal, Signed, ToPrimitive, Zero};
use std::f64::consts::PI;

/// Sum of pairwise coordinate products. Fails with `DimensionMismatch` when
/// the dimensions differ.
pub fn dot(v1: &Vector, v2: &Vector) -> Result<BigDecimal> {
    v1.check_dimension(v2)?;
    Ok(v1
        .coordinates()
        .iter()
        .zip(v2.coordinates())
        .fold(BigDecimal::zero(), |acc, (a, b)| acc + a * b))
}

/// Angle between two vectors in radians.
///
/// The unit dot product is rounded to 3 decimal places before the arc-cosine
/// so accumulated error cannot push it outside [-1, 1]. The arc-cosine itself
/// runs in f64; this is the one place decimal precision is not carried.
pub fn angle(v1: &Vector, v2: &Vector) -> Result<f64> {
    let u1 = v1.normalize()?;
    let u2 = v2.normalize()?;
    let cosine = dot(&u1, &u2)?.round(3).to_f64().ok_or_else(|| {
        VectorError::InvalidInput("cosine does not fit in an f64".to_string())
    })?;
    Ok(cosine.acos())
}

/// Angle between two vectors in degrees.
pub fn angle_degrees(v1: &Vector, v2: &Vector) -> Result<f64> {
    Ok(angle(v1, v2)?.to_degrees())
}

pub fn is_orthogonal(v1: &Vector, v2: &Vector) -> Result<bool> {
    is_orthogonal_within(v1, v2, DEFAULT_TOLERANCE)
}

pub fn is_orthogonal_within(v1: &Vector, v2: &Vector, tolerance: f64) -> Result<bool> {
    Ok(dot(v1, v2)?.abs() < decimal_tolerance(tolerance)?)
}

/// True when either vector is zero, or the angle between them is within
/// `DEFAULT_TOLERANCE` of 0 or pi.
pub fn is_parallel(v1: &Vector, v2: &Vector) -> Result<bool> {
    v1.check_dimension(v2)?;
    if v1.is_zero() || v2.is_zero() {
        return Ok(true);
    }
    let theta = angle(v1, v2)?;
    Ok(theta.abs() < DEFAULT_TOLERANCE || (theta - PI).abs() < DEFAULT_TOLERANCE)
}

/// Right-handed cross product. Both inputs must be 3-dimensional.
pub fn cross_product(v1: &Vector, v2: &Vector) -> Result<Vector> {
    if v1.dimension() != 3 || v2.dimension() != 3 {
        return Err(VectorError::Dimension(format!(
            "cross product requires 3-dimensional vectors, got {} and {}",
            v1.dimension(),
            v2.dimension()
        )));
    }
    let a = v1.coordinates();
    let b = v2.coordinates();
    Vector::new(vec![
        &a[1] * &b[2] - &a[2] * &b[1],
        &a[2] * &b[0] - &a[0] * &b[2],
        &a[0] * &b[1] - &a[1] * &b[0],
    ])
}

/// Magnitude of the difference between two same-dimension vectors.
pub fn euclidean_distance(v1: &Vector, v2: &Vector) -> Result<BigDecimal> {
    Ok(v1.subtract(v2)?.magnitude())
}

/// Random vectors with coordinates uniform in [-1, 1). Handy for tests and
/// benchmarks.
pub fn generate_random_vectors(dim: usize, num: usize) -> Result<Vec<Vector>> {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    (0..num)
        .map(|_| {
            let values: Vec<f64> = (0..dim).map(|_| rng.gen_range(-1.0..1.0)).collect();
            Vector::from_f64s(&values)
        })
        .collect()
}

pub(crate) fn decimal_tolerance(tolerance: f64) -> Result<BigDecimal> {
    BigDecimal::try_from(tolerance).map_err(|e| {
        VectorError::InvalidInput(format!("tolerance {} is not a decimal: {}", tolerance, e))
    })
}
