//! Ordered eigenvalue sequences.

use crate::error::{ConductionError, Result};
use crate::geometry::Geometry;

/// Strictly increasing positive eigenvalues for one (geometry, Biot) pair.
///
/// Produced by [`EigenvalueSolver`](super::EigenvalueSolver) or wrapped from
/// values computed elsewhere with [`EigenvalueSet::from_values`]. Immutable
/// once built, so it can be shared across any number of field evaluations
/// for the same body.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EigenvalueSet {
    geometry: Geometry,
    biot: f64,
    values: Vec<f64>,
}

impl EigenvalueSet {
    pub(crate) fn new_unchecked(geometry: Geometry, biot: f64, values: Vec<f64>) -> Self {
        Self {
            geometry,
            biot,
            values,
        }
    }

    /// Wraps externally computed eigenvalues.
    ///
    /// # Errors
    /// `InvalidInput` if `values` is empty, contains a non-finite or
    /// non-positive value, or is not strictly increasing.
    ///
    /// # Examples
    /// ```
    /// use conduction_models::{EigenvalueSet, Geometry};
    ///
    /// let set = EigenvalueSet::from_values(Geometry::Wall, 5.0, vec![1.3138, 4.0336]).unwrap();
    /// assert_eq!(set.len(), 2);
    /// assert!(EigenvalueSet::from_values(Geometry::Wall, 5.0, vec![2.0, 1.0]).is_err());
    /// ```
    pub fn from_values(geometry: Geometry, biot: f64, values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(ConductionError::invalid_input("no eigenvalues provided"));
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v <= 0.0) {
            return Err(ConductionError::invalid_input(format!(
                "eigenvalues must be finite and positive, got {}",
                bad
            )));
        }
        if let Some(pair) = values.windows(2).find(|pair| pair[1] <= pair[0]) {
            return Err(ConductionError::invalid_input(format!(
                "eigenvalues must be strictly increasing, got {} then {}",
                pair[0], pair[1]
            )));
        }
        Ok(Self::new_unchecked(geometry, biot, values))
    }

    /// Geometry the eigenvalues belong to.
    #[inline]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Biot number the eigenvalues solve.
    #[inline]
    pub fn biot(&self) -> f64 {
        self.biot
    }

    /// Eigenvalues in increasing order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of eigenvalues.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false` for sets built through the public constructors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterator over the eigenvalues.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    /// Consumes the set, returning the raw values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

impl AsRef<[f64]> for EigenvalueSet {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl<'a> IntoIterator for &'a EigenvalueSet {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
