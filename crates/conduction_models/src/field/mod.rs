//! Temperature fields from Fourier-Bessel series.
//!
//! - [`TemperatureField`]: direct evaluation at any position and time
//! - [`SpatialCoefficients`]: cached position weights for multi-time scans
//! - [`ProfileRequest`]: physical inputs to sampled profiles

mod coefficients;
mod profile;
mod request;
mod temperature;

pub use coefficients::SpatialCoefficients;
pub use profile::{coordinate_grid, MirroredProfile, ProfileSeries, TemperatureProfile};
pub use request::{ProfileRequest, ProfileSolution, DEFAULT_EIGENVALUE_COUNT};
pub use temperature::TemperatureField;

pub(crate) use profile::validate_positions;
