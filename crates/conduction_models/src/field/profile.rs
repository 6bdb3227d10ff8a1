//! Sampled temperature profiles.

use crate::error::{ConductionError, Result};

/// Temperatures sampled from the centre (coordinate 0) outward.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemperatureProfile {
    coordinates: Vec<f64>,
    temperatures: Vec<f64>,
}

impl TemperatureProfile {
    /// Pairs coordinates with temperatures.
    ///
    /// # Errors
    /// `InvalidInput` if the lengths differ, or coordinates are negative,
    /// non-finite or not strictly increasing.
    pub fn new(coordinates: Vec<f64>, temperatures: Vec<f64>) -> Result<Self> {
        if coordinates.len() != temperatures.len() {
            return Err(ConductionError::invalid_input(format!(
                "{} coordinates but {} temperatures",
                coordinates.len(),
                temperatures.len()
            )));
        }
        validate_coordinates(&coordinates)?;
        Ok(Self {
            coordinates,
            temperatures,
        })
    }

    pub(crate) fn new_unchecked(coordinates: Vec<f64>, temperatures: Vec<f64>) -> Self {
        Self {
            coordinates,
            temperatures,
        }
    }

    /// Sample positions.
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// Sample temperatures.
    pub fn temperatures(&self) -> &[f64] {
        &self.temperatures
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// `true` when the profile has no samples.
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Iterator over `(coordinate, temperature)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.coordinates
            .iter()
            .copied()
            .zip(self.temperatures.iter().copied())
    }

    /// Temperature of the outermost sample.
    pub fn surface_temperature(&self) -> Option<f64> {
        self.temperatures.last().copied()
    }

    /// Temperature of the innermost sample.
    pub fn centre_temperature(&self) -> Option<f64> {
        self.temperatures.first().copied()
    }

    /// Full profile across the body, reflected about the centre.
    ///
    /// Coordinates on the far side are negated. A sample at the centre is
    /// not repeated.
    ///
    /// # Examples
    /// ```
    /// use conduction_models::TemperatureProfile;
    ///
    /// let half = TemperatureProfile::new(vec![0.0, 1.0, 2.0], vec![10.0, 20.0, 30.0]).unwrap();
    /// let full = half.mirrored();
    /// assert_eq!(full.coordinates(), &[-2.0, -1.0, 0.0, 1.0, 2.0]);
    /// assert_eq!(full.temperatures(), &[30.0, 20.0, 10.0, 20.0, 30.0]);
    /// ```
    pub fn mirrored(&self) -> MirroredProfile {
        let skip = usize::from(self.coordinates.first() == Some(&0.0));
        let mut coordinates: Vec<f64> = self.coordinates[skip..].iter().rev().map(|x| -x).collect();
        let mut temperatures: Vec<f64> = self.temperatures[skip..].iter().rev().copied().collect();
        coordinates.extend_from_slice(&self.coordinates);
        temperatures.extend_from_slice(&self.temperatures);
        MirroredProfile {
            coordinates,
            temperatures,
        }
    }
}

/// Profile spanning the whole body, coordinates from `-L` to `L`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MirroredProfile {
    coordinates: Vec<f64>,
    temperatures: Vec<f64>,
}

impl MirroredProfile {
    /// Sample positions, negative on the mirrored side.
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// Sample temperatures.
    pub fn temperatures(&self) -> &[f64] {
        &self.temperatures
    }
}

/// Temperatures at shared coordinates for several times.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileSeries {
    coordinates: Vec<f64>,
    times: Vec<f64>,
    temperatures: Vec<Vec<f64>>,
}

impl ProfileSeries {
    pub(crate) fn new(coordinates: Vec<f64>, times: Vec<f64>, temperatures: Vec<Vec<f64>>) -> Self {
        Self {
            coordinates,
            times,
            temperatures,
        }
    }

    /// Sample positions shared by every time.
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// Times (or Fourier numbers) in input order.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// One temperature row per time.
    pub fn temperatures(&self) -> &[Vec<f64>] {
        &self.temperatures
    }

    /// Number of times.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// `true` when no times were evaluated.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Profile at the `index`-th time.
    pub fn profile(&self, index: usize) -> Option<TemperatureProfile> {
        self.temperatures
            .get(index)
            .map(|row| TemperatureProfile::new_unchecked(self.coordinates.clone(), row.clone()))
    }
}

/// Uniform grid `0, dx, 2dx, …` strictly below `length`, closed by `length`.
///
/// # Errors
/// `InvalidInput` unless both `length` and `dx` are finite and positive.
///
/// # Examples
/// ```
/// use conduction_models::field::coordinate_grid;
///
/// let grid = coordinate_grid(0.02, 0.005).unwrap();
/// assert_eq!(grid.len(), 5);
/// assert_eq!(grid[4], 0.02);
/// ```
pub fn coordinate_grid(length: f64, dx: f64) -> Result<Vec<f64>> {
    if !(length.is_finite() && length > 0.0) {
        return Err(ConductionError::invalid_input(format!(
            "length must be positive, got {}",
            length
        )));
    }
    if !(dx.is_finite() && dx > 0.0) {
        return Err(ConductionError::invalid_input(format!(
            "coordinate step must be positive, got {}",
            dx
        )));
    }
    // Points closer than this to the surface collapse onto it.
    let snap = length * 1e-9;
    let mut grid: Vec<f64> = (0_usize..)
        .map(|i| i as f64 * dx)
        .take_while(|&x| x < length - snap)
        .collect();
    grid.push(length);
    Ok(grid)
}

pub(crate) fn validate_coordinates(coordinates: &[f64]) -> Result<()> {
    if let Some(bad) = coordinates.iter().find(|x| !x.is_finite() || **x < 0.0) {
        return Err(ConductionError::invalid_input(format!(
            "coordinates must be finite and non-negative, got {}",
            bad
        )));
    }
    if let Some(pair) = coordinates.windows(2).find(|pair| pair[1] <= pair[0]) {
        return Err(ConductionError::invalid_input(format!(
            "coordinates must be strictly increasing, got {} then {}",
            pair[0], pair[1]
        )));
    }
    Ok(())
}

/// [`validate_coordinates`], with every position inside a body of
/// characteristic `length`.
pub(crate) fn validate_positions(coordinates: &[f64], length: f64) -> Result<()> {
    validate_coordinates(coordinates)?;
    match coordinates.last() {
        Some(&outer) if outer > length => Err(ConductionError::invalid_input(format!(
            "coordinate {} lies beyond the surface at {}",
            outer, length
        ))),
        _ => Ok(()),
    }
}
