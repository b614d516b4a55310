//! JS-facing wrapper around [`LatticeSolver`]
//!
//! Rendering and command interpretation live on the JS side; this module only forwards calls and
//! copies field snapshots into typed arrays.

use std::panic;

use js_sys::{Float32Array, Uint8Array};
use slice_of_array::prelude::*;
use wasm_bindgen::prelude::*;

use crate::{
    error::SolverError,
    params::MAX_STEPS_PER_FRAME,
    shapes::{self, ShapeKind},
    solver::LatticeSolver,
    wasm_util::{console_log, console_warn},
};

#[wasm_bindgen]
pub struct FlowSimulation {
    solver: LatticeSolver,
    frame: u64,
}

#[wasm_bindgen]
impl FlowSimulation {
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: i32,
        height: i32,
        viscosity: f32,
        inflow: f32,
    ) -> Result<FlowSimulation, JsValue> {
        panic::set_hook(Box::new(console_error_panic_hook::hook));

        if width <= 0 || height <= 0 {
            return Err(SolverError::InvalidDimensions {
                width: width as i64,
                height: height as i64,
            }
            .into());
        }
        let solver = LatticeSolver::new(width as usize, height as usize, viscosity, inflow)?;
        console_log!(
            "Created {} x {} lattice, viscosity: {}, omega: {}, inflow: {}",
            width,
            height,
            solver.viscosity(),
            solver.omega(),
            inflow
        );
        Ok(Self { solver, frame: 0 })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.solver.width() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.solver.height() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> f64 {
        self.frame as f64
    }

    #[wasm_bindgen(getter, js_name = totalMass)]
    pub fn total_mass(&self) -> f64 {
        self.solver.total_mass()
    }

    pub fn step(&mut self) {
        self.solver.step();
    }

    /// Run the configured number of steps for one rendered frame
    #[wasm_bindgen(js_name = advanceFrame)]
    pub fn advance_frame(&mut self) {
        for _ in 0..self.solver.params().steps_per_frame {
            self.solver.step();
        }
        self.frame += 1;
    }

    #[wasm_bindgen(js_name = addObstacle)]
    pub fn add_obstacle(&mut self, x: f32, y: f32, radius: f32, erase: bool) {
        self.solver.add_obstacle(x, y, radius, erase);
    }

    /// Stamp a named shape (`circle`, `airfoil`, `teardrop`, `wing`) of overall length `size`
    #[wasm_bindgen(js_name = addShape)]
    pub fn add_shape(
        &mut self,
        kind: &str,
        x: f32,
        y: f32,
        size: f32,
        angle: f32,
        erase: bool,
    ) -> Result<(), JsValue> {
        let kind: ShapeKind = kind.parse()?;
        let stamps = kind.with_size(size)?.stamps([x, y], angle);
        shapes::apply(&stamps, &mut self.solver, erase);
        Ok(())
    }

    #[wasm_bindgen(js_name = clearObstacles)]
    pub fn clear_obstacles(&mut self) {
        self.solver.clear_obstacles();
        console_log!("Obstacles cleared");
    }

    #[wasm_bindgen(js_name = setViscosity)]
    pub fn set_viscosity(&mut self, viscosity: f32) {
        self.solver.set_viscosity(viscosity);
        console_log!(
            "viscosity: {}, omega: {}",
            self.solver.viscosity(),
            self.solver.omega()
        );
    }

    #[wasm_bindgen(js_name = setInflow)]
    pub fn set_inflow(&mut self, inflow: f32) {
        self.solver.set_inflow(inflow);
    }

    pub fn reset(&mut self, inflow: f32) {
        self.solver.reset(inflow);
        self.frame = 0;
        console_log!("Reset with inflow {}", inflow);
    }

    pub fn vorticity(&mut self) -> Float32Array {
        Float32Array::from(self.solver.vorticity())
    }

    pub fn speed(&mut self) -> Float32Array {
        Float32Array::from(self.solver.speed())
    }

    /// 1 for solid cells, 0 for fluid
    #[wasm_bindgen(js_name = obstacleMask)]
    pub fn obstacle_mask(&self) -> Uint8Array {
        let mask: Vec<u8> = self
            .solver
            .obstacle_mask()
            .iter()
            .map(|solid| *solid as u8)
            .collect();
        Uint8Array::from(&mask as &[u8])
    }

    /// Interleaved `x, y` pairs
    #[wasm_bindgen(js_name = tracerPositions)]
    pub fn tracer_positions(&self) -> Float32Array {
        Float32Array::from(self.solver.tracer_positions().flat())
    }

    /// Apply any of `viscosity`, `inflow`, `stepsPerFrame`, `tracerStep` and
    /// `redistributeTracers` found on the given object. Missing properties are left unchanged.
    pub fn configure(&mut self, config: &JsValue) {
        let solver = &mut self.solver;
        let assign_state = |name: &str, setter: &mut dyn FnMut(f64)| {
            if let Ok(new_val) = js_sys::Reflect::get(config, &JsValue::from(name)) {
                if let Some(the_val) = new_val.as_f64() {
                    setter(the_val);
                } else if !new_val.is_undefined() {
                    console_warn!("{} should be a number", name);
                }
            }
        };
        let assign_check = |name: &str, setter: &mut dyn FnMut(bool)| {
            if let Ok(new_val) = js_sys::Reflect::get(config, &JsValue::from(name)) {
                if let Some(the_val) = new_val.as_bool() {
                    setter(the_val);
                } else if !new_val.is_undefined() {
                    console_warn!("{} should be a boolean", name);
                }
            }
        };

        assign_state("viscosity", &mut |value| solver.set_viscosity(value as f32));
        assign_state("inflow", &mut |value| solver.set_inflow(value as f32));
        assign_state("stepsPerFrame", &mut |value| {
            if !(0. ..=MAX_STEPS_PER_FRAME as f64).contains(&value) {
                console_warn!(
                    "stepsPerFrame {} clamped to 0..={}",
                    value,
                    MAX_STEPS_PER_FRAME
                );
            }
            solver.set_steps_per_frame(value as u32)
        });
        assign_state("tracerStep", &mut |value| {
            if !value.is_finite() {
                console_warn!("tracerStep should be finite, got {}", value);
            }
            solver.set_tracer_step(value as f32)
        });
        assign_check("redistributeTracers", &mut |value| {
            solver.set_redistribute_tracers(value)
        });

        console_log!("Configured: {:?}", solver.params());
    }
}
