//! Obstacle shapes built from circular stamps.
//!
//! The solver only knows how to stamp a circle. Everything with more structure (airfoils,
//! teardrops, wings) is expressed here as a sequence of circles along a center line, which
//! [`apply`] feeds to [`LatticeSolver::add_obstacle`].
//!
//! Shapes are defined in a local frame with the chord along +x and centered on the origin, then
//! rotated by the angle of attack and moved to the requested center. Grid rows grow downward, so
//! a positive angle lifts the leading edge on screen.

use std::str::FromStr;

use cgmath::{Basis2, Rad, Rotation, Rotation2, Vector2};

use crate::{
    error::{Result, SolverError},
    solver::LatticeSolver,
};

/// Distance between consecutive stamp centers along a shape's center line
const STAMP_SPACING: f32 = 0.5;

/// Smallest stamp radius emitted, so thin trailing edges still cover at least one cell
const MIN_STAMP_RADIUS: f32 = 0.75;

/// Cap on stamps per shape; anything longer than this many spacings is far larger than any grid
const MAX_STAMPS: usize = 4096;

/// Chordwise position of maximum camber for [`ObstacleShape::Wing`]
const CAMBER_POSITION: f32 = 0.4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stamp {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ObstacleShape {
    Circle {
        radius: f32,
    },
    /// Symmetric NACA 4-digit profile; `thickness` is the maximum thickness over chord
    Airfoil {
        chord: f32,
        thickness: f32,
    },
    /// Round head at the leading end tapering linearly to a point over `length`
    Teardrop {
        radius: f32,
        length: f32,
    },
    /// Cambered plate following the NACA 4-digit mean line; `camber` is maximum camber over chord
    Wing {
        chord: f32,
        camber: f32,
        thickness: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Airfoil,
    Teardrop,
    Wing,
}

impl FromStr for ShapeKind {
    type Err = SolverError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" => Ok(Self::Circle),
            "airfoil" => Ok(Self::Airfoil),
            "teardrop" => Ok(Self::Teardrop),
            "wing" => Ok(Self::Wing),
            _ => Err(SolverError::UnknownShape(s.to_string())),
        }
    }
}

impl ShapeKind {
    /// Shape with default proportions whose overall length is `size` cells
    pub fn with_size(self, size: f32) -> Result<ObstacleShape> {
        if !(size.is_finite() && 0. < size) {
            return Err(SolverError::InvalidShapeSize(size));
        }
        Ok(match self {
            Self::Circle => ObstacleShape::Circle { radius: size / 2. },
            Self::Airfoil => ObstacleShape::Airfoil {
                chord: size,
                thickness: 0.12,
            },
            Self::Teardrop => ObstacleShape::Teardrop {
                radius: size / 4.,
                length: size,
            },
            Self::Wing => ObstacleShape::Wing {
                chord: size,
                camber: 0.06,
                thickness: 0.06,
            },
        })
    }
}

/// Number of samples along a center line of the given length, endpoints included
fn sample_count(length: f32) -> usize {
    // Float to int casts saturate, NaN becomes 0
    ((length / STAMP_SPACING).ceil() as usize).clamp(1, MAX_STAMPS - 1) + 1
}

/// Half thickness of a symmetric NACA 4-digit section at chordwise fraction `t`
fn naca_half_thickness(t: f32, thickness: f32, chord: f32) -> f32 {
    5. * thickness
        * chord
        * (0.2969 * t.sqrt() - 0.1260 * t - 0.3516 * t * t + 0.2843 * t * t * t
            - 0.1015 * t * t * t * t)
}

/// NACA 4-digit mean line height at chordwise fraction `t`
fn naca_camber(t: f32, camber: f32, chord: f32) -> f32 {
    let p = CAMBER_POSITION;
    let y = if t < p {
        camber / (p * p) * (2. * p * t - t * t)
    } else {
        camber / ((1. - p) * (1. - p)) * ((1. - 2. * p) + 2. * p * t - t * t)
    };
    y * chord
}

impl ObstacleShape {
    /// Stamps in local coordinates: `(x, y, radius)` with the chord along +x
    fn local_stamps(&self) -> Vec<(Vector2<f32>, f32)> {
        match *self {
            Self::Circle { radius } => vec![(Vector2::new(0., 0.), radius)],
            Self::Airfoil { chord, thickness } => {
                let n = sample_count(chord);
                (0..n)
                    .map(|i| {
                        let t = i as f32 / (n - 1) as f32;
                        let r = naca_half_thickness(t, thickness, chord);
                        (
                            Vector2::new((t - 0.5) * chord, 0.),
                            r.max(MIN_STAMP_RADIUS),
                        )
                    })
                    .collect()
            }
            Self::Teardrop { radius, length } => {
                if length <= 2. * radius {
                    return vec![(Vector2::new(0., 0.), radius)];
                }
                let head = -length / 2. + radius;
                let tail = length / 2.;
                let n = sample_count(tail - head);
                (0..n)
                    .map(|i| {
                        let t = i as f32 / (n - 1) as f32;
                        let r = radius * (1. - t);
                        (
                            Vector2::new(head + t * (tail - head), 0.),
                            r.max(MIN_STAMP_RADIUS),
                        )
                    })
                    .collect()
            }
            Self::Wing {
                chord,
                camber,
                thickness,
            } => {
                let n = sample_count(chord);
                let r = (thickness * chord / 2.).max(MIN_STAMP_RADIUS);
                (0..n)
                    .map(|i| {
                        let t = i as f32 / (n - 1) as f32;
                        // Rows grow downward, so camber is drawn toward -y
                        (
                            Vector2::new((t - 0.5) * chord, -naca_camber(t, camber, chord)),
                            r,
                        )
                    })
                    .collect()
            }
        }
    }

    /// Circular stamps covering this shape centered at `center` and rotated by `angle` radians
    pub fn stamps(&self, center: [f32; 2], angle: f32) -> Vec<Stamp> {
        let rotation: Basis2<f32> = Rotation2::from_angle(Rad(angle));
        let center = Vector2::from(center);
        self.local_stamps()
            .into_iter()
            .map(|(local, radius)| {
                let p = center + rotation.rotate_vector(local);
                Stamp {
                    cx: p.x,
                    cy: p.y,
                    radius,
                }
            })
            .collect()
    }
}

/// Stamp every circle into the solver's obstacle mask, or erase it
pub fn apply(stamps: &[Stamp], solver: &mut LatticeSolver, erase: bool) {
    for stamp in stamps {
        solver.add_obstacle(stamp.cx, stamp.cy, stamp.radius, erase);
    }
}
