use super::LatticeSolver;
use crate::{lattice::Q, shape::Idx};

impl LatticeSolver {
    /// Discrete curl `duy/dx - dux/dy` by central differences, computed into the solver's working
    /// memory. The one-cell border is zero. Obstacle cells are not masked; combine with
    /// [`obstacle_mask`](LatticeSolver::obstacle_mask) before display.
    ///
    /// Takes `&mut self` only to reuse the scratch buffer; the flow state is not modified and the
    /// returned slice is a snapshot that stays valid until the next call.
    pub fn vorticity(&mut self) -> &[f32] {
        let shape = self.shape;
        self.vorticity_buf.iter_mut().for_each(|v| *v = 0.);
        for y in 1..shape.1 - 1 {
            for x in 1..shape.0 - 1 {
                let duy_dx = self.uy[shape.idx(x + 1, y)] - self.uy[shape.idx(x - 1, y)];
                let dux_dy = self.ux[shape.idx(x, y + 1)] - self.ux[shape.idx(x, y - 1)];
                self.vorticity_buf[shape.idx(x, y)] = 0.5 * (duy_dx - dux_dy);
            }
        }
        &self.vorticity_buf
    }

    /// Length of the velocity vector per cell, computed into the solver's working memory.
    /// Like [`vorticity`](LatticeSolver::vorticity), mutable only for the scratch buffer.
    pub fn speed(&mut self) -> &[f32] {
        self.speed_buf
            .iter_mut()
            .zip(self.ux.iter().zip(self.uy.iter()))
            .for_each(|(dest, (x, y))| *dest = libm::sqrtf(x * x + y * y));
        &self.speed_buf
    }

    /// Sum of all populations over fluid cells, accumulated in f64
    pub fn total_mass(&self) -> f64 {
        self.f
            .chunks_exact(Q)
            .zip(self.obstacle.iter())
            .filter(|(_, solid)| !**solid)
            .map(|(f, _)| f.iter().map(|&v| v as f64).sum::<f64>())
            .sum()
    }
}
