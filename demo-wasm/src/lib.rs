use drape::{
    Cloth, ClothConfig, FixedTimestep, Grab, NoOpStepObserver, Rope, RopeConfig, Simulation, SolverConfig, Vec2,
    Viewport,
};
use wasm_bindgen::prelude::*;

/// Pick radius around a pinned particle, in CSS pixels.
const POINT_RADIUS: f32 = 5.0;

/// Clock, pointer and coordinate mapping shared by every demo.
struct Driver<S: Simulation<f32>> {
    sim: S,
    config: SolverConfig<f32>,
    clock: FixedTimestep<f32>,
    viewport: Viewport<f32>,
    cursor: Vec2<f32>,
    grab: Option<Grab<f32>>,
}

impl<S: Simulation<f32>> Driver<S> {
    fn new(sim: S, width: f32, height: f32) -> Self {
        let config = SolverConfig::new();
        Driver {
            sim,
            clock: FixedTimestep::new(&config),
            config,
            viewport: Viewport::square(width, height),
            cursor: Vec2::zero(),
            grab: None,
        }
    }

    fn frame(&mut self, dt: f32) -> usize {
        let drag = self.grab.map(|g| g.target(self.cursor));
        self.clock
            .advance_with_drag(&mut self.sim, dt, drag.as_ref(), &self.config, &mut NoOpStepObserver)
    }

    fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        let px = Vec2::new(x, y);
        self.cursor = self.viewport.screen_to_world(px);
        self.grab = self
            .viewport
            .pick_fixed(self.sim.particles(), px, POINT_RADIUS)
            .and_then(|i| Grab::begin(self.sim.particles(), i, self.cursor).ok());
        self.grab.is_some()
    }

    fn pointer_move(&mut self, x: f32, y: f32) {
        self.cursor = self.viewport.screen_to_world(Vec2::new(x, y));
    }

    fn pointer_up(&mut self) {
        self.grab = None;
    }

    /// Flat [x0, y0, x1, y1, ...] in screen pixels.
    fn screen_positions(&self, fixed_only: bool) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.sim.particles().len() * 2);
        for p in self.sim.particles().iter().filter(|p| p.fixed || !fixed_only) {
            let s = self.viewport.world_to_screen(p.position);
            out.push(s.x);
            out.push(s.y);
        }
        out
    }
}

// ---- Rope Demo ----

#[wasm_bindgen]
pub struct RopeDemo {
    driver: Driver<Rope<f32>>,
}

#[wasm_bindgen]
impl RopeDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(segments: usize, width: f32, height: f32) -> Result<RopeDemo, JsError> {
        let rope = Rope::new(
            Vec2::new(0.0f32, 0.8),
            Vec2::new(0.9, 0.8),
            segments,
            &RopeConfig::default(),
        )
        .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(RopeDemo { driver: Driver::new(rope, width, height) })
    }

    /// Advance by one animation frame. Returns the number of fixed steps run.
    pub fn update(&mut self, dt: f32) -> usize {
        self.driver.frame(dt)
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.driver.pointer_down(x, y)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.driver.pointer_move(x, y);
    }

    pub fn pointer_up(&mut self) {
        self.driver.pointer_up();
    }

    /// Returns flat [x0, y0, x1, y1, ...] positions in pixels
    pub fn positions(&self) -> Vec<f32> {
        self.driver.screen_positions(false)
    }

    pub fn anchors(&self) -> Vec<f32> {
        self.driver.screen_positions(true)
    }

    pub fn particle_count(&self) -> usize {
        self.driver.sim.len()
    }
}

// ---- Cloth Demo ----

#[wasm_bindgen]
pub struct ClothDemo {
    driver: Driver<Cloth<f32>>,
}

#[wasm_bindgen]
impl ClothDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(cols: usize, rows: usize, width: f32, height: f32) -> Result<ClothDemo, JsError> {
        let cloth = Cloth::new(
            Vec2::new(-0.75f32, 0.75),
            Vec2::new(1.5, 1.5),
            cols,
            rows,
            &ClothConfig::default(),
        )
        .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(ClothDemo { driver: Driver::new(cloth, width, height) })
    }

    pub fn update(&mut self, dt: f32) -> usize {
        self.driver.frame(dt)
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.driver.pointer_down(x, y)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.driver.pointer_move(x, y);
    }

    pub fn pointer_up(&mut self) {
        self.driver.pointer_up();
    }

    /// Returns flat [x0, y0, x1, y1, ...] in row-major order, in pixels
    pub fn positions(&self) -> Vec<f32> {
        self.driver.screen_positions(false)
    }

    pub fn anchors(&self) -> Vec<f32> {
        self.driver.screen_positions(true)
    }

    /// Triangle list over `positions`. Constant for the lifetime of the demo.
    pub fn indices(&self) -> Vec<u32> {
        self.driver.sim.triangle_indices()
    }

    /// Flat [u0, v0, u1, v1, ...] matching `positions`.
    pub fn uvs(&self) -> Vec<f32> {
        self.driver
            .sim
            .uv_coordinates()
            .iter()
            .flat_map(|uv| [uv.x, uv.y])
            .collect()
    }

    pub fn cols(&self) -> usize {
        self.driver.sim.width()
    }

    pub fn rows(&self) -> usize {
        self.driver.sim.height()
    }
}
