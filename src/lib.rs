//! 2D Lattice Boltzmann (D2Q9, BGK) flow solver with obstacles and passive tracers.
//!
//! [`LatticeSolver`] is usable directly from Rust; [`FlowSimulation`] exposes the same
//! operations to JavaScript through `wasm-bindgen`.

mod wasm_util;

pub mod api;
pub mod error;
pub mod lattice;
pub mod params;
mod shape;
pub mod shapes;
pub mod solver;
mod xor128;

pub use crate::{
    api::FlowSimulation,
    error::SolverError,
    params::Params,
    shapes::{ObstacleShape, ShapeKind, Stamp},
    solver::LatticeSolver,
};
