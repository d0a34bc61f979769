//! Mapping between simulation space and screen pixels.

use crate::float::Float;
use crate::interaction;
use crate::particle::Particle;
use crate::vec::Vec2;

/// An axis-aligned world box shown on an axis-aligned screen box.
///
/// Either box may be flipped on an axis; `square` flips y so that screen y grows downward.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport<F: Float> {
    pub world_min: Vec2<F>,
    pub world_max: Vec2<F>,
    pub screen_min: Vec2<F>,
    pub screen_max: Vec2<F>,
}

impl<F: Float> Viewport<F> {
    pub fn new(world_min: Vec2<F>, world_max: Vec2<F>, screen_min: Vec2<F>, screen_max: Vec2<F>) -> Self {
        Viewport { world_min, world_max, screen_min, screen_max }
    }

    /// World spans `[-aspect, aspect] x [-1, 1]` on a `width x height` pixel window.
    pub fn square(width: F, height: F) -> Self {
        let aspect = width / height;
        Viewport {
            world_min: Vec2::new(-aspect, -F::one()),
            world_max: Vec2::new(aspect, F::one()),
            screen_min: Vec2::new(F::zero(), height),
            screen_max: Vec2::new(width, F::zero()),
        }
    }

    pub fn world_to_screen(&self, p: Vec2<F>) -> Vec2<F> {
        p.map(self.world_min, self.world_max, self.screen_min, self.screen_max)
    }

    pub fn screen_to_world(&self, p: Vec2<F>) -> Vec2<F> {
        p.map(self.screen_min, self.screen_max, self.world_min, self.world_max)
    }

    /// Nearest fixed particle within `radius_px` of the cursor, measured on screen.
    pub fn pick_fixed(&self, particles: &[Particle<F>], cursor_px: Vec2<F>, radius_px: F) -> Option<usize> {
        interaction::nearest_fixed_by(particles, radius_px, |p| self.world_to_screen(p).distance(cursor_px))
    }
}
