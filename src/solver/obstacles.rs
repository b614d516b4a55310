use super::LatticeSolver;
use crate::shape::Idx;

impl LatticeSolver {
    /// Mark (or with `erase`, unmark) every cell whose index lies strictly inside the circle.
    ///
    /// Populations are left alone; bounce-back takes over at the next step. Parts of the circle
    /// outside the grid are ignored.
    pub fn add_obstacle(&mut self, cx: f32, cy: f32, radius: f32, erase: bool) {
        if !(0. < radius) {
            return;
        }
        let shape = self.shape;
        let x0 = ((cx - radius).floor() as isize).max(0);
        let x1 = ((cx + radius).ceil() as isize).min(shape.0 - 1);
        let y0 = ((cy - radius).floor() as isize).max(0);
        let y1 = ((cy + radius).ceil() as isize).min(shape.1 - 1);
        let radius2 = radius * radius;

        for j in y0..=y1 {
            for i in x0..=x1 {
                let (dx, dy) = (i as f32 - cx, j as f32 - cy);
                if dx * dx + dy * dy < radius2 {
                    let cell = shape.idx(i, j);
                    self.obstacle[cell] = !erase;
                    if !erase {
                        self.ux[cell] = 0.;
                        self.uy[cell] = 0.;
                    }
                }
            }
        }
    }

    /// Unmark every cell. Populations at former obstacle cells are not restored; they relax back
    /// into the flow over the following steps.
    pub fn clear_obstacles(&mut self) {
        self.obstacle.iter_mut().for_each(|v| *v = false);
    }

    /// Solid cells report zero velocity so that speed and vorticity reads stay meaningful next to
    /// walls.
    pub(super) fn zero_obstacle_velocity(&mut self) {
        for ((solid, ux), uy) in self
            .obstacle
            .iter()
            .zip(self.ux.iter_mut())
            .zip(self.uy.iter_mut())
        {
            if *solid {
                *ux = 0.;
                *uy = 0.;
            }
        }
    }
}
