//! Body and material arguments shared by `profile` and `heat`.

use clap::Args;
use conduction_models::{Geometry, ProfileRequest};

use crate::config::TransientConfig;
use crate::{CliError, Result};

/// Body exposed to a fluid.
#[derive(Debug, Clone, Args)]
pub struct BodyArgs {
    /// Geometry: wall (p), cylinder (c) or sphere (e)
    pub geometry: Geometry,

    /// Initial uniform body temperature
    #[arg(long)]
    pub start: f64,

    /// Fluid temperature
    #[arg(long)]
    pub ambient: f64,

    /// Half thickness of a wall, radius of a cylinder or sphere (m)
    #[arg(short = 'L', long)]
    pub length: f64,

    /// Biot number; overrides --convection
    #[arg(long)]
    pub biot: Option<f64>,

    /// Convective coefficient h (W/m²K)
    #[arg(long)]
    pub convection: Option<f64>,

    /// Thermal conductivity k (W/mK)
    #[arg(short = 'k', long)]
    pub conductivity: Option<f64>,

    /// Thermal diffusivity α (m²/s); overrides density and specific heat
    #[arg(short = 'a', long)]
    pub diffusivity: Option<f64>,

    /// Density (kg/m³)
    #[arg(long)]
    pub density: Option<f64>,

    /// Specific heat (J/kgK)
    #[arg(long)]
    pub specific_heat: Option<f64>,

    /// Number of series terms [default: from configuration]
    #[arg(short = 'n', long)]
    pub eigenvalues: Option<usize>,
}

impl BodyArgs {
    /// Profile request for this body, sampled at `coordinates` or every
    /// `step` from the centre.
    pub fn request(
        &self,
        config: &TransientConfig,
        coordinates: Option<Vec<f64>>,
        step: Option<f64>,
    ) -> Result<ProfileRequest> {
        let mut request = ProfileRequest::new(self.geometry, self.start, self.ambient, self.length)
            .with_eigenvalue_count(self.eigenvalues.unwrap_or(config.output.eigenvalues))
            .with_solver_config(config.solver_config());

        if let Some(biot) = self.biot {
            request = request.with_biot(biot);
        }
        if let Some(h) = self.convection {
            request = request.with_convection(h);
        }
        if let Some(k) = self.conductivity {
            request = request.with_conductivity(k);
        }
        if let Some(alpha) = self.diffusivity {
            request = request.with_diffusivity(alpha);
        }
        match (self.density, self.specific_heat) {
            (Some(rho), Some(cp)) => request = request.with_material(rho, cp),
            (None, None) => {}
            _ => {
                return Err(CliError::InvalidArgument(
                    "--density and --specific-heat must be given together".to_string(),
                ))
            }
        }
        if let Some(coordinates) = coordinates {
            request = request.with_coordinates(coordinates);
        }
        if let Some(dx) = step {
            request = request.with_step(dx);
        }
        Ok(request)
    }

    /// Density and specific heat, both required.
    pub fn material(&self) -> Result<(f64, f64)> {
        match (self.density, self.specific_heat) {
            (Some(rho), Some(cp)) => Ok((rho, cp)),
            _ => Err(CliError::InvalidArgument(
                "--density and --specific-heat are required".to_string(),
            )),
        }
    }
}
