use crate::{ops, Result, VectorError, DEFAULT_TOLERANCE, PRECISION};
use bigdecimal::{BigDecimal, One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable fixed-dimension tuple of decimal coordinates. Every operation
/// returns a fresh `Vector`; nothing mutates in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vector {
    coordinates: Vec<BigDecimal>,
}

impl Vector {
    pub fn new(coordinates: Vec<BigDecimal>) -> Result<Self> {
        if coordinates.is_empty() {
            return Err(VectorError::InvalidInput(
                "coordinates must be nonempty".to_string(),
            ));
        }
        Ok(Self { coordinates })
    }

    pub fn from_f64s(values: &[f64]) -> Result<Self> {
        let coordinates = values
            .iter()
            .map(|v| {
                BigDecimal::try_from(*v).map_err(|e| {
                    VectorError::InvalidInput(format!("coordinate {} is not a decimal: {}", v, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(coordinates)
    }

    pub fn from_strs(values: &[&str]) -> Result<Self> {
        let coordinates = values
            .iter()
            .map(|v| {
                v.parse::<BigDecimal>().map_err(|e| {
                    VectorError::InvalidInput(format!("coordinate {:?} is not a decimal: {}", v, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(coordinates)
    }

    /// All-zero vector of the given dimension.
    pub fn zero(dimension: usize) -> Result<Self> {
        Self::new(vec![BigDecimal::zero(); dimension])
    }

    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    pub fn coordinates(&self) -> &[BigDecimal] {
        &self.coordinates
    }

    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.check_dimension(other)?;
        Ok(Vector {
            coordinates: self
                .coordinates
                .iter()
                .zip(&other.coordinates)
                .map(|(a, b)| a + b)
                .collect(),
        })
    }

    pub fn subtract(&self, other: &Vector) -> Result<Vector> {
        self.check_dimension(other)?;
        Ok(Vector {
            coordinates: self
                .coordinates
                .iter()
                .zip(&other.coordinates)
                .map(|(a, b)| a - b)
                .collect(),
        })
    }

    pub fn scale(&self, scalar: &BigDecimal) -> Vector {
        Vector {
            coordinates: self.coordinates.iter().map(|c| c * scalar).collect(),
        }
    }

    /// Euclidean length, as a decimal square root carried to `PRECISION`
    /// significant digits.
    pub fn magnitude(&self) -> BigDecimal {
        let sum_of_squares = self
            .coordinates
            .iter()
            .fold(BigDecimal::zero(), |acc, c| acc + c * c);
        // sqrt of a non-negative sum cannot fail
        sum_of_squares
            .sqrt()
            .map(|m| m.with_prec(PRECISION))
            .unwrap_or_else(BigDecimal::zero)
    }

    pub fn normalize(&self) -> Result<Vector> {
        let magnitude = self.magnitude();
        if magnitude.is_zero() {
            return Err(VectorError::ZeroVector(
                "cannot normalize the zero vector".to_string(),
            ));
        }
        let inverse = (BigDecimal::one() / &magnitude).with_prec(PRECISION);
        Ok(self.scale(&inverse))
    }

    pub fn is_zero(&self) -> bool {
        self.is_zero_within(DEFAULT_TOLERANCE).unwrap_or(false)
    }

    pub fn is_zero_within(&self, tolerance: f64) -> Result<bool> {
        Ok(self.magnitude() < ops::decimal_tolerance(tolerance)?)
    }

    /// New vector with every coordinate rounded to `precision` decimal places.
    pub fn round(&self, precision: i64) -> Vector {
        Vector {
            coordinates: self.coordinates.iter().map(|c| c.round(precision)).collect(),
        }
    }

    /// Component of `self` parallel to `basis`.
    pub fn projection(&self, basis: &Vector) -> Result<Vector> {
        let unit = basis.normalize().map_err(|_| {
            VectorError::NoParallelComponent(
                "projection onto the zero vector is undefined".to_string(),
            )
        })?;
        let length = ops::dot(self, &unit)?;
        Ok(unit.scale(&length))
    }

    /// Component of `self` orthogonal to `basis`.
    pub fn rejection(&self, basis: &Vector) -> Result<Vector> {
        let parallel = self.projection(basis)?;
        self.subtract(&parallel)
    }

    pub(crate) fn check_dimension(&self, other: &Vector) -> Result<()> {
        if self.dimension() != other.dimension() {
            return Err(VectorError::DimensionMismatch {
                expected: self.dimension(),
                actual: other.dimension(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.coordinates.iter().map(|c| c.to_string()).collect();
        write!(f, "Vector: ({})", parts.join(", "))
    }
}
