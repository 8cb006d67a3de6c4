use springnet::{
    Integrator, NoOpStepObserver, Seed, SimConfig, Simulation, Vec2, MAX_PARTICLES,
};
use wasm_bindgen::prelude::*;

const PICK_TOLERANCE: f32 = 0.01;
const STIFFNESS_NUDGE: f32 = 0.1;
const DAMPING_NUDGE: f32 = 0.01;

fn to_js(err: springnet::PhysicsError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ---- Spring Network Demo ----

/// Browser-facing wrapper: the page owns the canvas, timing and input, and
/// trades flat `f32` buffers with the simulation.
#[wasm_bindgen]
pub struct SpringNetworkDemo {
    sim: Simulation<Vec2<f32>>,
    dragging: Option<usize>,
    pending_attach: Option<usize>,
}

#[wasm_bindgen]
impl SpringNetworkDemo {
    /// Seed the default triangle and settle it inside a canvas of the given
    /// aspect ratio.
    #[wasm_bindgen(constructor)]
    pub fn new(aspect: f32) -> Result<SpringNetworkDemo, JsValue> {
        let sim = Simulation::new(Seed::triangle(), SimConfig::new(), aspect).map_err(to_js)?;
        Ok(SpringNetworkDemo {
            sim,
            dragging: None,
            pending_attach: None,
        })
    }

    /// Feed elapsed seconds and the canvas aspect ratio. Returns true when a
    /// simulation frame ran.
    pub fn tick(&mut self, delta: f32, aspect: f32) -> Result<bool, JsValue> {
        let report = self.sim.tick(delta, aspect, &mut NoOpStepObserver).map_err(to_js)?;
        Ok(report.is_some())
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.sim.toggle_pause()
    }

    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.dragging = None;
        self.pending_attach = None;
        self.sim.reset().map_err(to_js)
    }

    pub fn toggle_gravity(&mut self) -> bool {
        let config = self.sim.config_mut();
        config.use_gravity = !config.use_gravity;
        config.use_gravity
    }

    pub fn toggle_point_damping(&mut self) -> bool {
        let config = self.sim.config_mut();
        config.point_damping = !config.point_damping;
        config.point_damping
    }

    pub fn toggle_damped_spring(&mut self) -> bool {
        let config = self.sim.config_mut();
        config.damped_spring = !config.damped_spring;
        config.damped_spring
    }

    /// 0 = explicit Euler, 1 = semi-implicit Euler, 2 = midpoint.
    pub fn set_method(&mut self, method: u8) {
        self.sim.config_mut().method = match method {
            0 => Integrator::ExplicitEuler,
            2 => Integrator::Midpoint,
            _ => Integrator::SemiImplicitEuler,
        };
    }

    pub fn set_sub_steps(&mut self, sub_steps: usize) {
        self.sim.config_mut().sub_steps = sub_steps.max(1);
    }

    /// Raise (`up = true`) or lower the spring stiffness scale; returns it.
    pub fn nudge_stiffness(&mut self, up: bool) -> f32 {
        let delta = if up { STIFFNESS_NUDGE } else { -STIFFNESS_NUDGE };
        self.sim.network_mut().nudge_stiffness_scale(delta)
    }

    /// Raise or lower the damping coefficient; returns it.
    pub fn nudge_damping(&mut self, up: bool) -> f32 {
        let delta = if up { DAMPING_NUDGE } else { -DAMPING_NUDGE };
        self.sim.config_mut().nudge_damping(delta)
    }

    pub fn toggle_constrained(&mut self, index: usize) -> Result<bool, JsValue> {
        self.sim.network_mut().toggle_constrained(index).map_err(to_js)
    }

    /// Drop a new particle at world coordinates.
    pub fn add_particle(&mut self, x: f32, y: f32) -> Result<usize, JsValue> {
        self.sim.network_mut().add_particle(Vec2::new(x, y)).map_err(to_js)
    }

    /// Click-to-attach: the first click picks one end, the second click on a
    /// different particle creates the spring. Returns the new spring index.
    pub fn attach_click(&mut self, x: f32, y: f32) -> Result<Option<usize>, JsValue> {
        let Some(hit) = self.sim.network().pick(Vec2::new(x, y), PICK_TOLERANCE) else {
            return Ok(None);
        };
        match self.pending_attach.take() {
            None => {
                self.pending_attach = Some(hit);
                Ok(None)
            }
            Some(first) => self.sim.network_mut().attach(first, hit).map(Some).map_err(to_js),
        }
    }

    pub fn begin_drag(&mut self, x: f32, y: f32) -> bool {
        self.dragging = self.sim.network().pick(Vec2::new(x, y), PICK_TOLERANCE);
        self.dragging.is_some()
    }

    pub fn drag_to(&mut self, x: f32, y: f32) -> Result<(), JsValue> {
        match self.dragging {
            Some(index) => self.sim.network_mut().move_particle(index, Vec2::new(x, y)).map_err(to_js),
            None => Ok(()),
        }
    }

    pub fn end_drag(&mut self) {
        self.dragging = None;
    }

    /// Returns flat [x0, y0, x1, y1, ...] positions
    pub fn positions(&self) -> Vec<f32> {
        let pos = self.sim.network().positions();
        let mut out = Vec::with_capacity(pos.len() * 2);
        for p in &pos {
            out.push(p.x);
            out.push(p.y);
        }
        out
    }

    /// Returns flat [a0, b0, a1, b1, ...] spring endpoints
    pub fn edges(&self) -> Vec<u32> {
        let edges = self.sim.network().edges();
        let mut out = Vec::with_capacity(edges.len() * 2);
        for &(a, b) in &edges {
            out.push(a as u32);
            out.push(b as u32);
        }
        out
    }

    pub fn is_constrained(&self, index: usize) -> bool {
        self.sim.network().is_constrained(index)
    }

    pub fn particle_count(&self) -> usize {
        self.sim.network().particle_count()
    }

    pub fn particle_capacity(&self) -> usize {
        MAX_PARTICLES
    }

    pub fn radius(&self) -> f32 {
        self.sim.config().radius
    }
}
