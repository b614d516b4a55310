use cgmath::Vector2;

use super::LatticeSolver;
use crate::{
    shape::{Idx, Shape, ShapeExt},
    xor128::Xor128,
};

/// Edge length in cells of the coarse bins used for redistribution
const BIN_SIZE: usize = 10;

pub(super) fn new_tracers(xor128: &mut Xor128, shape: Shape, count: usize) -> Vec<[f32; 2]> {
    let (fwidth, fheight) = (shape.0 as f32, shape.1 as f32);
    (0..count)
        .map(|_| shape.wrap_position([xor128.next_f32() * fwidth, xor128.next_f32() * fheight]))
        .collect()
}

impl LatticeSolver {
    /// Move each tracer by the velocity of the cell it sits in, wrapping at the grid edges
    pub(super) fn advect_tracers(&mut self) {
        if self.params.redistribute_tracers {
            self.redistribute_tracers();
        }

        let shape = self.shape;
        let step = self.params.tracer_step;
        for tracer in &mut self.tracers {
            let position = Vector2::from(*tracer);
            let cell = shape.idx(position.x as isize, position.y as isize);
            let velocity = Vector2::new(self.ux[cell], self.uy[cell]);
            *tracer = shape.wrap_position((position + velocity * step).into());
        }
    }

    /// Move tracers from crowded areas into sparse ones, since the flow tends to gather them
    /// in wakes and stagnation zones.
    ///
    /// The grid is split into coarse bins; while a bin holds fewer than half of the expected
    /// count, a tracer from the most crowded bin is moved to a random spot inside it.
    fn redistribute_tracers(&mut self) {
        let bin_columns = self.shape.0 as usize / BIN_SIZE;
        let bin_rows = self.shape.1 as usize / BIN_SIZE;
        if bin_columns == 0 || bin_rows == 0 {
            return;
        }
        let min_density = self.tracers.len() / (bin_columns * bin_rows) / 2;

        // The remainder strip past the last full bin belongs to the last bin
        let bin_of = |tracer: &[f32; 2]| -> usize {
            let x = (tracer[0] as usize / BIN_SIZE).min(bin_columns - 1);
            let y = (tracer[1] as usize / BIN_SIZE).min(bin_rows - 1);
            x + y * bin_columns
        };

        let mut bins = vec![0usize; bin_columns * bin_rows];
        for tracer in &self.tracers {
            bins[bin_of(tracer)] += 1;
        }

        for i in 0..bins.len() {
            let mut moved = 0;
            while bins[i] < min_density && moved < min_density {
                let src = match bins.iter().enumerate().max_by_key(|v| v.1) {
                    Some((src, _)) if src != i => src,
                    _ => break,
                };
                let dst_bin = (i % bin_columns, i / bin_columns);
                let xor128 = &mut self.xor128;
                let found = self
                    .tracers
                    .iter_mut()
                    .find(|tracer| bin_of(&**tracer) == src)
                    .map(|tracer| {
                        *tracer = [
                            (dst_bin.0 * BIN_SIZE) as f32 + xor128.next_f32() * BIN_SIZE as f32,
                            (dst_bin.1 * BIN_SIZE) as f32 + xor128.next_f32() * BIN_SIZE as f32,
                        ];
                    })
                    .is_some();

                if !found {
                    break;
                }
                bins[i] += 1;
                bins[src] -= 1;
                moved += 1;
            }
        }
    }
}
