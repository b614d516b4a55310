//! Definition of the lattice solver state and its lifecycle

mod fields;
mod lbm;
mod obstacles;
mod tracers;

use crate::{
    error::{Result, SolverError},
    lattice::{clamp_viscosity, equilibrium, omega, Q},
    params::{Params, MAX_STEPS_PER_FRAME},
    shape::{Shape, ShapeExt},
    xor128::Xor128,
};

use self::tracers::new_tracers;

/// D2Q9 Lattice Boltzmann solver on a periodic `width x height` grid.
///
/// The populations are the only independent state; density and velocity are derived from them on
/// every [`step`](LatticeSolver::step). Obstacle cells keep their populations and reflect them in
/// place (bounce-back) instead of colliding.
pub struct LatticeSolver {
    shape: Shape,
    /// Populations, `Q` consecutive values per cell
    f: Vec<f32>,
    /// Streaming target, swapped with `f` every step
    f_next: Vec<f32>,
    rho: Vec<f32>,
    ux: Vec<f32>,
    uy: Vec<f32>,
    obstacle: Vec<bool>,
    omega: f32,
    params: Params,
    tracers: Vec<[f32; 2]>,
    xor128: Xor128,
    /// In-memory buffers to avoid reallocating derived fields every frame
    vorticity_buf: Vec<f32>,
    speed_buf: Vec<f32>,
}

impl LatticeSolver {
    pub fn new(width: usize, height: usize, viscosity: f32, inflow: f32) -> Result<Self> {
        Self::with_params(width, height, Params::new(viscosity, inflow))
    }

    pub fn with_params(width: usize, height: usize, params: Params) -> Result<Self> {
        let invalid = || SolverError::InvalidDimensions {
            width: i64::try_from(width).unwrap_or(i64::MAX),
            height: i64::try_from(height).unwrap_or(i64::MAX),
        };
        if width == 0 || height == 0 {
            return Err(invalid());
        }

        let shape: Shape = (
            isize::try_from(width).map_err(|_| invalid())?,
            isize::try_from(height).map_err(|_| invalid())?,
        );
        // Populations need Q slots per cell
        let cells = shape
            .cells()
            .filter(|cells| cells.checked_mul(Q).is_some())
            .ok_or_else(invalid)?;
        let viscosity = clamp_viscosity(params.viscosity);
        let params = Params {
            viscosity,
            ..params
        };

        let mut xor128 = Xor128::new(params.seed);
        let tracers = new_tracers(&mut xor128, shape, params.tracer_count);

        let mut solver = Self {
            shape,
            f: vec![0.; cells * Q],
            f_next: vec![0.; cells * Q],
            rho: vec![0.; cells],
            ux: vec![0.; cells],
            uy: vec![0.; cells],
            obstacle: vec![false; cells],
            omega: omega(viscosity),
            params,
            tracers,
            xor128,
            vorticity_buf: vec![0.; cells],
            speed_buf: vec![0.; cells],
        };
        solver.fill_equilibrium();
        Ok(solver)
    }

    /// Uniform density 1 and velocity `(inflow, 0)` in every cell
    fn fill_equilibrium(&mut self) {
        let inflow = self.params.inflow;
        let feq = equilibrium(1., inflow, 0.);
        for cell in self.f.chunks_exact_mut(Q) {
            cell.copy_from_slice(&feq);
        }
        self.f_next.copy_from_slice(&self.f);
        self.rho.iter_mut().for_each(|v| *v = 1.);
        self.ux.iter_mut().for_each(|v| *v = inflow);
        self.uy.iter_mut().for_each(|v| *v = 0.);
        self.zero_obstacle_velocity();
    }

    /// Reinitialize populations and tracers to equilibrium at the given inflow velocity.
    /// Obstacles and viscosity are kept.
    pub fn reset(&mut self, inflow: f32) {
        self.params.inflow = inflow;
        self.fill_equilibrium();
        self.tracers = new_tracers(&mut self.xor128, self.shape, self.params.tracer_count);
    }

    /// Takes effect on the next step; the current populations are not touched.
    pub fn set_viscosity(&mut self, viscosity: f32) {
        self.params.viscosity = clamp_viscosity(viscosity);
        self.omega = omega(self.params.viscosity);
    }

    /// Velocity imposed on the leftmost column from the next step on
    pub fn set_inflow(&mut self, inflow: f32) {
        self.params.inflow = inflow;
    }

    /// Non-finite values are ignored and the previous multiplier is kept.
    pub fn set_tracer_step(&mut self, tracer_step: f32) {
        if tracer_step.is_finite() {
            self.params.tracer_step = tracer_step;
        }
    }

    /// Clamped to [`MAX_STEPS_PER_FRAME`]
    pub fn set_steps_per_frame(&mut self, steps_per_frame: u32) {
        self.params.steps_per_frame = steps_per_frame.min(MAX_STEPS_PER_FRAME);
    }

    pub fn set_redistribute_tracers(&mut self, redistribute: bool) {
        self.params.redistribute_tracers = redistribute;
    }

    pub fn width(&self) -> usize {
        self.shape.0 as usize
    }

    pub fn height(&self) -> usize {
        self.shape.1 as usize
    }

    pub fn viscosity(&self) -> f32 {
        self.params.viscosity
    }

    pub fn omega(&self) -> f32 {
        self.omega
    }

    pub fn inflow(&self) -> f32 {
        self.params.inflow
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Raw populations, `Q` values per cell in row-major cell order
    pub fn populations(&self) -> &[f32] {
        &self.f
    }

    /// Density per cell. Values at obstacle cells are stale and carry no flow information.
    pub fn density(&self) -> &[f32] {
        &self.rho
    }

    pub fn velocity_x(&self) -> &[f32] {
        &self.ux
    }

    pub fn velocity_y(&self) -> &[f32] {
        &self.uy
    }

    pub fn obstacle_mask(&self) -> &[bool] {
        &self.obstacle
    }

    pub fn tracer_positions(&self) -> &[[f32; 2]] {
        &self.tracers
    }
}
