/// Upper bound on `steps_per_frame`, so that one frame cannot stall the page
pub const MAX_STEPS_PER_FRAME: u32 = 1000;

/// Solver configuration. Values that only make sense at construction time (tracer count, seed)
/// are read once; the rest can be changed between steps.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Params {
    pub viscosity: f32,
    pub inflow: f32,
    pub tracer_count: usize,
    /// Multiplier applied to the local velocity when moving a tracer each step
    pub tracer_step: f32,
    /// Number of `step()` calls per rendered frame
    pub steps_per_frame: u32,
    pub redistribute_tracers: bool,
    pub seed: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            viscosity: 0.02,
            inflow: 0.1,
            tracer_count: 1000,
            tracer_step: 1.,
            steps_per_frame: 1,
            redistribute_tracers: false,
            seed: 123,
        }
    }
}

impl Params {
    pub fn new(viscosity: f32, inflow: f32) -> Self {
        Self {
            viscosity,
            inflow,
            ..Self::default()
        }
    }
}
