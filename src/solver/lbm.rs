//! Lattice Boltzmann update: inlet, streaming, moments, collision

use super::LatticeSolver;
use crate::{
    lattice::{equilibrium, moments, OPPOSITE, Q, VELOCITIES},
    shape::Idx,
};

impl LatticeSolver {
    /// Advance the flow by one lattice time unit, then move the tracers.
    ///
    /// The phases must run in this order; swapping streaming and collision yields a different
    /// scheme.
    pub fn step(&mut self) {
        self.apply_inlet();
        self.stream();
        self.compute_moments();
        self.collide();
        self.advect_tracers();
    }

    /// Force the leftmost column to density 1 and velocity `(inflow, 0)`
    pub(super) fn apply_inlet(&mut self) {
        let inflow = self.params.inflow;
        let feq = equilibrium(1., inflow, 0.);
        for y in 0..self.shape.1 {
            let cell = self.shape.idx(0, y);
            if self.obstacle[cell] {
                continue;
            }
            self.rho[cell] = 1.;
            self.ux[cell] = inflow;
            self.uy[cell] = 0.;
            self.f[cell * Q..(cell + 1) * Q].copy_from_slice(&feq);
        }
    }

    /// Move every population one cell along its direction, wrapping at all four edges
    pub(super) fn stream(&mut self) {
        let shape = self.shape;
        for y in 0..shape.1 {
            for x in 0..shape.0 {
                let src = shape.idx(x, y) * Q;
                for (k, &[vx, vy]) in VELOCITIES.iter().enumerate() {
                    let dst = shape.idx(x + vx, y + vy) * Q;
                    self.f_next[dst + k] = self.f[src + k];
                }
            }
        }
        std::mem::swap(&mut self.f, &mut self.f_next);
    }

    /// Density and velocity of every fluid cell. Obstacle cells keep their previous values.
    pub(super) fn compute_moments(&mut self) {
        for (cell, f) in self.f.chunks_exact(Q).enumerate() {
            if self.obstacle[cell] {
                continue;
            }
            let (rho, ux, uy) = moments(f);
            self.rho[cell] = rho;
            self.ux[cell] = ux;
            self.uy[cell] = uy;
        }
    }

    /// BGK relaxation for fluid cells, full bounce-back for obstacle cells
    pub(super) fn collide(&mut self) {
        let omega = self.omega;
        for (cell, f) in self.f.chunks_exact_mut(Q).enumerate() {
            if self.obstacle[cell] {
                let mut reflected = [0.; Q];
                for (k, r) in reflected.iter_mut().enumerate() {
                    *r = f[OPPOSITE[k]];
                }
                f.copy_from_slice(&reflected);
            } else {
                let feq = equilibrium(self.rho[cell], self.ux[cell], self.uy[cell]);
                for (fk, feqk) in f.iter_mut().zip(feq.iter()) {
                    *fk += omega * (feqk - *fk);
                }
            }
        }
    }
}
