//! Root walk over a characteristic equation.

use conduction_core::math::solvers::{BrentSolver, NewtonRaphsonSolver, SolverConfig};
use conduction_core::types::SolverError;
use tracing::{debug, trace};

use super::EigenvalueSet;
use crate::error::{ConductionError, Result};
use crate::geometry::{BodyShape, Geometry, GeometrySpec};

/// Produces the ordered eigenvalues of one geometry.
///
/// The first root is searched from the geometry seed; root `k + 1` from
/// root `k` plus the step (π by default), which usually lands on the next
/// branch of the characteristic function. Because each root only depends on
/// its own branch and the previous root, asking for more eigenvalues never
/// changes those already found.
///
/// # Examples
/// ```
/// use conduction_models::{EigenvalueSolver, Geometry};
///
/// let solver = EigenvalueSolver::new(Geometry::Wall);
/// let set = solver.solve(5.0, 3).unwrap();
/// assert!((set.values()[0] - 1.3138).abs() < 1e-3);
/// assert!(set.values().windows(2).all(|w| w[1] > w[0]));
/// ```
#[derive(Debug, Clone)]
pub struct EigenvalueSolver {
    geometry: Geometry,
    spec: GeometrySpec,
    config: SolverConfig<f64>,
}

impl EigenvalueSolver {
    /// Solver with the geometry's default spec and Newton configuration.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            spec: geometry.spec(),
            config: SolverConfig::default(),
        }
    }

    /// Replaces the Newton tolerance and iteration cap.
    pub fn with_config(mut self, config: SolverConfig<f64>) -> Self {
        self.config = config;
        self
    }

    /// Replaces the offset between a root and the next starting guess.
    pub fn with_step(mut self, step: f64) -> Self {
        self.spec.step = step;
        self
    }

    /// Geometry being solved.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Effective spec (bounds, seed, step, cap).
    pub fn spec(&self) -> &GeometrySpec {
        &self.spec
    }

    /// Checks Biot number and count without solving.
    ///
    /// # Errors
    /// - `BiotOutOfRange` if `biot` is negative, non-finite or above the bound
    /// - `TooManyEigenvalues` if `count` exceeds the geometry cap
    /// - `InvalidInput` if `count` is zero or the step is not positive
    pub fn validate(&self, biot: f64, count: usize) -> Result<()> {
        if !self.spec.accepts_biot(biot) {
            return Err(ConductionError::BiotOutOfRange {
                geometry: self.geometry,
                biot,
                max: self.spec.max_biot,
            });
        }
        if !self.spec.accepts_count(count) {
            return Err(ConductionError::TooManyEigenvalues {
                geometry: self.geometry,
                requested: count,
                max: self.spec.max_eigenvalues.unwrap_or(usize::MAX),
            });
        }
        if count == 0 {
            return Err(ConductionError::invalid_input(
                "at least one eigenvalue must be requested",
            ));
        }
        if !(self.spec.step.is_finite() && self.spec.step > 0.0) {
            return Err(ConductionError::invalid_input(format!(
                "root step must be positive, got {}",
                self.spec.step
            )));
        }
        Ok(())
    }

    /// Solves for the first `count` eigenvalues at `biot`.
    ///
    /// Each Newton root must land on its own branch of the characteristic
    /// function (see [`BodyShape::branch`]). When Newton fails or jumps to
    /// another branch, the root is searched again with Brent's method inside
    /// the branch.
    ///
    /// # Errors
    /// Domain and input errors from [`EigenvalueSolver::validate`], then
    /// `NonConvergence` if a root cannot be placed on its branch.
    pub fn solve(&self, biot: f64, count: usize) -> Result<EigenvalueSet> {
        self.validate(biot, count)?;
        debug!(geometry = %self.geometry, biot, count, "solving eigenvalues");

        let newton = NewtonRaphsonSolver::new(self.config);
        let brent = BrentSolver::new(self.config);
        let geometry = self.geometry;
        let characteristic = |lambda: f64| geometry.characteristic(lambda, biot);
        let mut values: Vec<f64> = Vec::with_capacity(count);

        for index in 0..count {
            let guess = values
                .last()
                .map_or(self.spec.seed, |previous| previous + self.spec.step);
            let newton_root = newton.solve(
                characteristic,
                |lambda| geometry.characteristic_derivative(lambda),
                guess,
            );

            let root = match (newton_root, geometry.branch(index)) {
                (Ok(result), Some(branch)) if on_branch(result.root, branch) => {
                    trace!(
                        index,
                        root = result.root,
                        iterations = result.iterations,
                        "eigenvalue converged"
                    );
                    result.root
                }
                (newton_root, Some((lower, upper))) => {
                    debug!(
                        index,
                        guess,
                        newton = ?newton_root.map(|result| result.root),
                        lower,
                        upper,
                        "Newton left the branch, bracketing"
                    );
                    brent
                        .find_root(characteristic, lower, upper)
                        .map_err(|source| ConductionError::NonConvergence { index, source })?
                }
                (Err(source), None) => {
                    return Err(ConductionError::NonConvergence { index, source });
                }
                (Ok(result), None) => result.root,
            };

            let floor = values.last().copied().unwrap_or(0.0);
            if root <= floor {
                return Err(ConductionError::NonConvergence {
                    index,
                    source: SolverError::NumericalInstability(format!(
                        "root {} from guess {} does not exceed {}",
                        root, guess, floor
                    )),
                });
            }
            values.push(root);
        }

        Ok(EigenvalueSet::new_unchecked(self.geometry, biot, values))
    }
}

/// Tolerance on the branch ends, where a root at Bi = 0 sits exactly.
const BRANCH_SLACK: f64 = 1e-6;

fn on_branch(root: f64, (lower, upper): (f64, f64)) -> bool {
    root >= lower - BRANCH_SLACK && root <= upper
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wall_reference() {
        let set = EigenvalueSolver::new(Geometry::Wall).solve(5.0, 6).unwrap();
        let expected = [1.313837, 4.033567, 6.909595, 9.892752, 12.935222, 16.010658];
        for (got, want) in set.values().iter().zip(expected) {
            assert_relative_eq!(*got, want, max_relative = 1e-4);
        }
        assert_eq!(set.geometry(), Geometry::Wall);
        assert_eq!(set.biot(), 5.0);
    }

    #[test]
    fn test_cylinder_cap_and_bound() {
        let solver = EigenvalueSolver::new(Geometry::Cylinder);
        assert!(matches!(
            solver.solve(1.0, 8),
            Err(ConductionError::TooManyEigenvalues {
                requested: 8,
                max: 7,
                ..
            })
        ));
        assert!(matches!(
            solver.solve(100.01, 1),
            Err(ConductionError::BiotOutOfRange { .. })
        ));
        assert_eq!(solver.solve(1.0, 7).unwrap().len(), 7);
    }

    #[test]
    fn test_cylinder_root_stays_on_its_branch() {
        // Newton from λ₆ + π lands on the eighth branch at Bi = 50
        let set = EigenvalueSolver::new(Geometry::Cylinder).solve(50.0, 7).unwrap();
        let expected = [2.35724, 5.41120, 8.48399, 11.56208, 14.64331, 17.72718, 20.81361];
        for (got, want) in set.values().iter().zip(expected) {
            assert_relative_eq!(*got, want, max_relative = 1e-5);
        }
    }

    #[test]
    fn test_cylinder_high_biot_last_roots() {
        let solver = EigenvalueSolver::new(Geometry::Cylinder);
        for (biot, last) in [(52.48, 20.83050), (75.86, 20.94060), (91.2, 20.98428)] {
            let set = solver.solve(biot, 7).unwrap();
            assert_relative_eq!(set.values()[6], last, max_relative = 1e-5);
            for (index, root) in set.iter().enumerate() {
                let (lower, upper) = Geometry::Cylinder.branch(index).unwrap();
                assert!(*root >= lower && *root <= upper, "root {} off branch {}", root, index);
            }
        }
    }

    #[test]
    fn test_zero_biot_roots_sit_on_branch_ends() {
        let set = EigenvalueSolver::new(Geometry::Wall).solve(0.0, 4).unwrap();
        for (index, root) in set.iter().enumerate().skip(1) {
            assert_relative_eq!(*root, index as f64 * std::f64::consts::PI, max_relative = 1e-6);
        }
    }

    #[test]
    fn test_negative_biot_is_domain_error() {
        let err = EigenvalueSolver::new(Geometry::Sphere)
            .solve(-1.0, 3)
            .unwrap_err();
        assert!(err.is_domain_error());
    }

    #[test]
    fn test_zero_count_is_input_error() {
        let err = EigenvalueSolver::new(Geometry::Wall).solve(1.0, 0).unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_non_positive_step_is_input_error() {
        let err = EigenvalueSolver::new(Geometry::Wall)
            .with_step(0.0)
            .solve(1.0, 2)
            .unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_iteration_budget_is_surfaced() {
        let solver = EigenvalueSolver::new(Geometry::Wall).with_config(SolverConfig::new(1e-6, 1));
        match solver.solve(5.0, 3).unwrap_err() {
            ConductionError::NonConvergence { index, source } => {
                assert_eq!(index, 0);
                assert!(source.is_max_iterations());
            }
            other => panic!("Expected NonConvergence, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_does_not_solve() {
        let solver = EigenvalueSolver::new(Geometry::Cylinder);
        assert!(solver.validate(50.0, 7).is_ok());
        assert!(solver.validate(50.0, 8).is_err());
    }

    #[test]
    fn test_tighter_tolerance_refines_roots() {
        let coarse = EigenvalueSolver::new(Geometry::Sphere).solve(5.0, 2).unwrap();
        let fine = EigenvalueSolver::new(Geometry::Sphere)
            .with_config(SolverConfig::high_precision())
            .solve(5.0, 2)
            .unwrap();
        for (a, b) in coarse.iter().zip(fine.iter()) {
            assert_relative_eq!(*a, *b, max_relative = 1e-5);
            assert!(Geometry::Sphere.characteristic(*b, 5.0).abs() <= 1e-12);
        }
    }
}
