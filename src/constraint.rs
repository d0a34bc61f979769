//! Distance constraints between pairs of particles.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::Particle;

/// A constraint that can be applied to a set of particles.
#[derive(Clone, Debug, PartialEq)]
pub enum Constraint<F: Float> {
    Distance(DistanceConstraint<F>),
    Tension(TensionConstraint<F>),
}

/// Keeps the separation of particles `a` and `b` inside `[min_dist, max_dist]`.
///
/// `a` and `b` index into the particle array owned by the same solver.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraint<F: Float> {
    pub a: usize,
    pub b: usize,
    pub min_dist: F,
    pub max_dist: F,
}

/// Distance limit between two pinned anchors.
///
/// Solved as if neither anchor were fixed, so the anchors pull on each other while
/// staying pinned for integration and for every other constraint.
#[derive(Clone, Debug, PartialEq)]
pub struct TensionConstraint<F: Float> {
    pub link: DistanceConstraint<F>,
}

impl<F: Float> Constraint<F> {
    /// Apply one relaxation step.
    ///
    /// # Panics
    ///
    /// If either endpoint is out of range for `particles`.
    pub fn solve(&self, particles: &mut [Particle<F>]) {
        match self {
            Constraint::Distance(c) => c.solve(particles),
            Constraint::Tension(c) => c.solve(particles),
        }
    }

    pub fn link(&self) -> &DistanceConstraint<F> {
        match self {
            Constraint::Distance(c) => c,
            Constraint::Tension(c) => &c.link,
        }
    }

    pub fn endpoints(&self) -> (usize, usize) {
        let link = self.link();
        (link.a, link.b)
    }
}

impl<F: Float> From<DistanceConstraint<F>> for Constraint<F> {
    fn from(c: DistanceConstraint<F>) -> Self {
        Constraint::Distance(c)
    }
}

impl<F: Float> From<TensionConstraint<F>> for Constraint<F> {
    fn from(c: TensionConstraint<F>) -> Self {
        Constraint::Tension(c)
    }
}

impl<F: Float> DistanceConstraint<F> {
    pub fn new(a: usize, b: usize, min_dist: F, max_dist: F) -> Result<Self, PhysicsError> {
        if a == b {
            return Err(PhysicsError::DegenerateConstraint { index: a });
        }
        if !min_dist.is_finite() || !max_dist.is_finite() || min_dist < F::zero() || min_dist > max_dist {
            return Err(PhysicsError::InvalidDistance);
        }
        Ok(DistanceConstraint { a, b, min_dist, max_dist })
    }

    /// Fixed separation: `min_dist == max_dist == length`.
    pub fn rigid(a: usize, b: usize, length: F) -> Result<Self, PhysicsError> {
        Self::new(a, b, length, length)
    }

    /// Free to compress, capped at `max_dist`.
    pub fn slack(a: usize, b: usize, max_dist: F) -> Result<Self, PhysicsError> {
        Self::new(a, b, F::zero(), max_dist)
    }

    /// Signed violation for a separation of `dist`.
    ///
    /// Negative when too close, positive when too far, zero inside the bounds.
    pub fn error(&self, dist: F) -> F {
        if dist < self.min_dist {
            dist - self.min_dist
        } else if dist > self.max_dist {
            dist - self.max_dist
        } else {
            F::zero()
        }
    }

    /// Current violation of this constraint, as an absolute distance.
    ///
    /// # Panics
    ///
    /// If `a` or `b` is out of range for `particles`. `ConstraintSolver::add_constraint`
    /// checks this for constraints it owns.
    pub fn violation(&self, particles: &[Particle<F>]) -> F {
        let dist = particles[self.a].position.distance(particles[self.b].position);
        self.error(dist).abs()
    }

    /// One relaxation step honoring fixed flags.
    ///
    /// A fixed endpoint never moves and its partner takes the whole correction.
    /// Otherwise each endpoint moves by its partner's share of the total mass.
    ///
    /// # Panics
    ///
    /// If `a` or `b` is out of range for `particles`. `ConstraintSolver::add_constraint`
    /// checks this for constraints it owns.
    pub fn solve(&self, particles: &mut [Particle<F>]) {
        let a = &particles[self.a];
        let b = &particles[self.b];
        let (a_weight, b_weight) = match (a.fixed, b.fixed) {
            (true, true) => return,
            (true, false) => (F::zero(), F::one()),
            (false, true) => (F::one(), F::zero()),
            (false, false) => mass_shares(a.mass, b.mass),
        };
        self.project(particles, a_weight, b_weight);
    }

    /// One relaxation step that moves both endpoints by mass share, fixed or not.
    ///
    /// # Panics
    ///
    /// Same as [`solve`](Self::solve).
    pub fn solve_free(&self, particles: &mut [Particle<F>]) {
        let (a_weight, b_weight) = mass_shares(particles[self.a].mass, particles[self.b].mass);
        self.project(particles, a_weight, b_weight);
    }

    fn project(&self, particles: &mut [Particle<F>], a_weight: F, b_weight: F) {
        let delta = particles[self.a].position - particles[self.b].position;
        let error = self.error(delta.length());
        if error == F::zero() {
            return;
        }

        let dir = delta.normalize();
        if dir.length_sq() == F::zero() {
            return; // coincident endpoints, no usable direction
        }

        let correction = dir * error;
        if a_weight > F::zero() {
            particles[self.a].position -= correction * a_weight;
        }
        if b_weight > F::zero() {
            particles[self.b].position += correction * b_weight;
        }
    }
}

impl<F: Float> TensionConstraint<F> {
    /// Caps the separation of anchors `a` and `b` at `max_dist`.
    pub fn new(a: usize, b: usize, max_dist: F) -> Result<Self, PhysicsError> {
        Ok(TensionConstraint { link: DistanceConstraint::slack(a, b, max_dist)? })
    }

    /// # Panics
    ///
    /// If either anchor is out of range for `particles`.
    pub fn solve(&self, particles: &mut [Particle<F>]) {
        self.link.solve_free(particles);
    }
}

/// Each endpoint's share of a correction: the fraction of total mass held by its partner.
fn mass_shares<F: Float>(mass_a: F, mass_b: F) -> (F, F) {
    let total = mass_a + mass_b;
    if total > F::zero() && total.is_finite() {
        (F::one() - mass_a / total, F::one() - mass_b / total)
    } else {
        (F::half(), F::half())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec2;

    fn free(x: f32, y: f32) -> Particle<f32> {
        Particle::new(Vec2::new(x, y), Vec2::zero())
    }

    #[test]
    fn rejects_self_links_and_inverted_bounds() {
        assert_eq!(
            DistanceConstraint::<f32>::rigid(3, 3, 1.0),
            Err(PhysicsError::DegenerateConstraint { index: 3 })
        );
        assert_eq!(DistanceConstraint::<f32>::new(0, 1, 2.0, 1.0), Err(PhysicsError::InvalidDistance));
        assert_eq!(DistanceConstraint::<f32>::slack(0, 1, -1.0), Err(PhysicsError::InvalidDistance));
    }

    #[test]
    fn error_sign_follows_bounds() {
        let c = DistanceConstraint::new(0, 1, 1.0f32, 2.0).unwrap();
        assert_eq!(c.error(0.5), -0.5);
        assert_eq!(c.error(1.5), 0.0);
        assert_eq!(c.error(3.0), 1.0);
    }

    #[test]
    fn slack_allows_compression() {
        let mut particles = [free(0.0, 0.0), free(0.25, 0.0)];
        DistanceConstraint::slack(0, 1, 1.0).unwrap().solve(&mut particles);
        assert_eq!(particles[1].position, Vec2::new(0.25, 0.0));
    }

    #[test]
    fn fixed_partner_takes_no_correction() {
        let mut particles = [Particle::pinned(Vec2::new(0.0f32, 0.0), Vec2::zero()), free(3.0, 0.0)];
        DistanceConstraint::rigid(0, 1, 1.0).unwrap().solve(&mut particles);
        assert_eq!(particles[0].position, Vec2::new(0.0, 0.0));
        assert!((particles[1].position.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn both_fixed_is_a_no_op() {
        let mut particles = [
            Particle::pinned(Vec2::new(0.0f32, 0.0), Vec2::zero()),
            Particle::pinned(Vec2::new(3.0f32, 0.0), Vec2::zero()),
        ];
        DistanceConstraint::rigid(0, 1, 1.0).unwrap().solve(&mut particles);
        assert_eq!(particles[0].position, Vec2::new(0.0, 0.0));
        assert_eq!(particles[1].position, Vec2::new(3.0, 0.0));
    }

    #[test]
    fn tension_moves_pinned_anchors_but_keeps_them_pinned() {
        let mut particles = [
            Particle::pinned(Vec2::new(0.0f32, 0.0), Vec2::zero()),
            Particle::pinned(Vec2::new(2.0f32, 0.0), Vec2::zero()),
        ];
        let c: Constraint<f32> = TensionConstraint::new(0, 1, 1.0).unwrap().into();
        c.solve(&mut particles);
        assert!((particles[0].position.x - 0.5).abs() < 1e-6);
        assert!((particles[1].position.x - 1.5).abs() < 1e-6);
        assert!(particles[0].fixed && particles[1].fixed);
    }

    #[test]
    #[should_panic]
    fn solve_panics_on_a_slice_missing_an_endpoint() {
        let mut particles = [free(0.0, 0.0)];
        DistanceConstraint::rigid(0, 1, 1.0).unwrap().solve(&mut particles);
    }

    #[test]
    #[should_panic]
    fn violation_panics_on_a_slice_missing_an_endpoint() {
        let particles = [free(0.0, 0.0)];
        DistanceConstraint::rigid(0, 1, 1.0).unwrap().violation(&particles);
    }

    #[test]
    fn endpoints_report_link_indices() {
        let c: Constraint<f32> = DistanceConstraint::rigid(4, 7, 1.0).unwrap().into();
        assert_eq!(c.endpoints(), (4, 7));
    }
}
