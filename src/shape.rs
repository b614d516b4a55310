pub(crate) trait Idx {
    fn idx(&self, x: isize, y: isize) -> usize;
}

/// Grid dimensions in cells, `(width, height)`
pub(crate) type Shape = (isize, isize);

impl Idx for Shape {
    /// Index into a flat row-major array, wrapping both coordinates around the grid edges
    fn idx(&self, x: isize, y: isize) -> usize {
        let (width, height) = self;
        (x.rem_euclid(*width) + y.rem_euclid(*height) * width) as usize
    }
}

pub(crate) trait ShapeExt {
    fn cells(&self) -> Option<usize>;
    fn wrap_position(&self, position: [f32; 2]) -> [f32; 2];
}

impl ShapeExt for Shape {
    /// Number of cells, or `None` if it does not fit the index type
    fn cells(&self) -> Option<usize> {
        self.0.checked_mul(self.1).map(|cells| cells as usize)
    }

    /// Wrap a continuous position into `[0, width) x [0, height)`
    fn wrap_position(&self, position: [f32; 2]) -> [f32; 2] {
        let (fwidth, fheight) = (self.0 as f32, self.1 as f32);
        let wrap = |v: f32, size: f32| {
            let r = v.rem_euclid(size);
            // rem_euclid can round up to `size` for tiny negative inputs
            if r >= size {
                0.
            } else {
                r
            }
        };
        [wrap(position[0], fwidth), wrap(position[1], fheight)]
    }
}

#[test]
fn test_idx_wraps() {
    let shape: Shape = (5, 3);
    assert_eq!(shape.idx(0, 0), 0);
    assert_eq!(shape.idx(4, 2), 14);
    assert_eq!(shape.idx(5, 0), 0);
    assert_eq!(shape.idx(-1, 0), 4);
    assert_eq!(shape.idx(0, -1), 10);
    assert_eq!(shape.idx(-1, -1), 14);
}

#[test]
fn test_cells_overflow() {
    let shape: Shape = (64, 32);
    assert_eq!(shape.cells(), Some(2048));
    let huge: Shape = (isize::MAX / 2, 3);
    assert_eq!(huge.cells(), None);
}

#[test]
fn test_wrap_position() {
    let shape: Shape = (10, 4);
    assert_eq!(shape.wrap_position([10.5, 1.]), [0.5, 1.]);
    assert_eq!(shape.wrap_position([-0.5, 4.]), [9.5, 0.]);
    let [x, y] = shape.wrap_position([-1e-9, -1e-9]);
    assert!(x < 10. && y < 4.);
}
