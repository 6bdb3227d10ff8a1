//! Dimensionless groups and temperature conversions.
//!
//! `length` is always the characteristic length of the series solution:
//! half the thickness of a wall, the radius of a cylinder or sphere.

/// Biot number `Bi = h·L / k`.
///
/// # Arguments
/// * `convection` - Convective coefficient `h` (W/m²K)
/// * `length` - Characteristic length `L` (m)
/// * `conductivity` - Thermal conductivity `k` (W/mK)
///
/// # Examples
/// ```
/// use conduction_models::params::biot_number;
///
/// let bi = biot_number(120.0, 0.02, 110.0);
/// assert!((bi - 0.021818).abs() < 1e-6);
/// ```
#[inline]
pub fn biot_number(convection: f64, length: f64, conductivity: f64) -> f64 {
    convection / conductivity * length
}

/// Fourier number `τ = α·t / L²`.
#[inline]
pub fn fourier_number(diffusivity: f64, time: f64, length: f64) -> f64 {
    diffusivity * time / (length * length)
}

/// Thermal diffusivity `α = k / (ρ·cp)`.
#[inline]
pub fn thermal_diffusivity(conductivity: f64, density: f64, specific_heat: f64) -> f64 {
    conductivity / (specific_heat * density)
}

/// Temperature from the dimensionless gradient:
/// `T = θ·(T_start − T_ambient) + T_ambient`.
#[inline]
pub fn temperature_from_gradient(gradient: f64, start: f64, ambient: f64) -> f64 {
    gradient * (start - ambient) + ambient
}

/// Dimensionless gradient `θ = (T − T_ambient) / (T_start − T_ambient)`.
///
/// Returns `None` when start and ambient coincide.
#[inline]
pub fn gradient_from_temperature(temperature: f64, start: f64, ambient: f64) -> Option<f64> {
    let span = start - ambient;
    if span == 0.0 {
        None
    } else {
        Some((temperature - ambient) / span)
    }
}
