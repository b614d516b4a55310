//! D2Q9 lattice constants and the BGK equilibrium

/// Number of discrete velocities
pub const Q: usize = 9;

/// Discrete velocities. Index 0 is the rest vector, 1-4 the axes, 5-8 the diagonals.
pub const VELOCITIES: [[isize; 2]; Q] = [
    [0, 0],
    [1, 0],
    [0, 1],
    [-1, 0],
    [0, -1],
    [1, 1],
    [-1, 1],
    [-1, -1],
    [1, -1],
];

pub const WEIGHTS: [f32; Q] = [
    4. / 9.,
    1. / 9.,
    1. / 9.,
    1. / 9.,
    1. / 9.,
    1. / 36.,
    1. / 36.,
    1. / 36.,
    1. / 36.,
];

/// Reverse direction of each velocity, used by bounce-back
pub const OPPOSITE: [usize; Q] = [0, 3, 4, 1, 2, 7, 8, 5, 6];

/// Lower bound applied to viscosity before deriving the relaxation rate
pub const MIN_VISCOSITY: f32 = 0.005;

/// Clamp viscosity to the positive floor. NaN maps to the floor as well.
pub fn clamp_viscosity(viscosity: f32) -> f32 {
    viscosity.max(MIN_VISCOSITY)
}

/// BGK relaxation rate for an already clamped viscosity
pub fn omega(viscosity: f32) -> f32 {
    1. / (3. * viscosity + 0.5)
}

/// Second order equilibrium populations for the given density and velocity
pub fn equilibrium(rho: f32, ux: f32, uy: f32) -> [f32; Q] {
    let u2 = 1.5 * (ux * ux + uy * uy);
    let mut feq = [0.; Q];
    for (k, f) in feq.iter_mut().enumerate() {
        let [vx, vy] = VELOCITIES[k];
        let vu = vx as f32 * ux + vy as f32 * uy;
        *f = WEIGHTS[k] * rho * (1. + 3. * vu + 4.5 * vu * vu - u2);
    }
    feq
}

/// Density and velocity of a single cell's populations
pub fn moments(f: &[f32]) -> (f32, f32, f32) {
    let mut rho = 0.;
    let mut mx = 0.;
    let mut my = 0.;
    for (k, &fk) in f.iter().enumerate().take(Q) {
        rho += fk;
        mx += VELOCITIES[k][0] as f32 * fk;
        my += VELOCITIES[k][1] as f32 * fk;
    }
    if 0. < rho {
        (rho, mx / rho, my / rho)
    } else {
        (rho, 0., 0.)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-5, "{} != {}", a, b);
    }

    #[test]
    fn weights_sum_to_one() {
        assert_near(WEIGHTS.iter().sum(), 1.);
    }

    #[test]
    fn opposite_directions_cancel() {
        for k in 0..Q {
            let o = OPPOSITE[k];
            assert_eq!(VELOCITIES[k][0] + VELOCITIES[o][0], 0);
            assert_eq!(VELOCITIES[k][1] + VELOCITIES[o][1], 0);
            assert_eq!(OPPOSITE[o], k);
        }
    }

    #[test]
    fn second_moment_isotropy() {
        // sum w_k v_ka v_kb = delta_ab / 3
        let mut xx = 0.;
        let mut xy = 0.;
        let mut yy = 0.;
        for k in 0..Q {
            let [vx, vy] = VELOCITIES[k];
            xx += WEIGHTS[k] * (vx * vx) as f32;
            xy += WEIGHTS[k] * (vx * vy) as f32;
            yy += WEIGHTS[k] * (vy * vy) as f32;
        }
        assert_near(xx, 1. / 3.);
        assert_near(xy, 0.);
        assert_near(yy, 1. / 3.);
    }

    #[test]
    fn equilibrium_reproduces_moments() {
        let feq = equilibrium(1.2, 0.08, -0.03);
        let (rho, ux, uy) = moments(&feq);
        assert_near(rho, 1.2);
        assert_near(ux, 0.08);
        assert_near(uy, -0.03);
    }

    #[test]
    fn viscosity_clamp() {
        assert_eq!(clamp_viscosity(0.02), 0.02);
        assert_eq!(clamp_viscosity(0.), MIN_VISCOSITY);
        assert_eq!(clamp_viscosity(-1.), MIN_VISCOSITY);
        assert_eq!(clamp_viscosity(f32::NAN), MIN_VISCOSITY);
        let w = omega(clamp_viscosity(0.));
        assert!(0. < w && w < 2.);
        assert_near(omega(0.5), 0.5);
    }
}
