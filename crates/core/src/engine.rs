//! The physics engine: force summation, Euler integration, and boundary
//! collision resolution.
//!
//! [`PhysicsEngine`] owns the ball's position and velocity, the domain
//! bounds, and the ordered list of field sources. Callers toggle source
//! activity between steps and drive the simulation at their own cadence;
//! the engine performs no timing, scheduling, or I/O of its own. One engine
//! instance serves one simulated episode; concurrent access from multiple
//! owners is not supported.

use glam::DVec2;
use serde_json::{json, Value};

use crate::error::SimError;
use crate::params::{
    PhysicsParams, DEFAULT_FRICTION, DEFAULT_MAX_REFLECTION_PASSES, DEFAULT_MAX_STRENGTH,
};
use crate::source::{corner_positions, FieldSource};

/// Continuous-state simulation of a ball on a bounded plane.
///
/// The ball starts at the domain center with zero velocity. Each [`step`]
/// sums forces from active sources, applies velocity-proportional friction,
/// integrates with explicit Euler, and reflects the hypothetical new
/// position back inside the open rectangle `(0,0)–(width,height)`.
///
/// [`step`]: Self::step
#[derive(Debug, Clone)]
pub struct PhysicsEngine {
    domain_size: DVec2,
    position: DVec2,
    velocity: DVec2,
    sources: Vec<FieldSource>,
    params: PhysicsParams,
}

impl PhysicsEngine {
    /// Creates an engine with one inactive source per entry of
    /// `source_positions`, in that order.
    ///
    /// Returns [`SimError::InvalidDomain`] if either extent is non-positive
    /// or non-finite.
    pub fn new(
        domain_size: DVec2,
        source_positions: &[DVec2],
        params: PhysicsParams,
    ) -> Result<Self, SimError> {
        if !domain_size.x.is_finite()
            || !domain_size.y.is_finite()
            || domain_size.x <= 0.0
            || domain_size.y <= 0.0
        {
            return Err(SimError::InvalidDomain {
                width: domain_size.x,
                height: domain_size.y,
            });
        }
        let sources = source_positions
            .iter()
            .map(|&position| FieldSource::new(position, params.max_strength))
            .collect();
        Ok(Self {
            domain_size,
            position: domain_size / 2.0,
            velocity: DVec2::ZERO,
            sources,
            params,
        })
    }

    /// Creates an engine from a JSON params object.
    ///
    /// Extracts `friction`, `max_strength`, and `max_reflection_passes`,
    /// falling back to defaults for missing keys.
    pub fn from_json(
        domain_size: DVec2,
        source_positions: &[DVec2],
        json_params: &Value,
    ) -> Result<Self, SimError> {
        Self::new(
            domain_size,
            source_positions,
            PhysicsParams::from_json(json_params),
        )
    }

    /// Creates an engine with the standard four-source quarter-point
    /// arrangement for the given domain.
    pub fn corner_layout(domain_size: DVec2, params: PhysicsParams) -> Result<Self, SimError> {
        Self::new(domain_size, &corner_positions(domain_size), params)
    }

    /// The ball's current position.
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// The ball's current velocity.
    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    /// The fixed domain extent.
    pub fn domain_size(&self) -> DVec2 {
        self.domain_size
    }

    /// Read-only access to the sources, in construction order.
    pub fn sources(&self) -> &[FieldSource] {
        &self.sources
    }

    /// Assigns each source's activity by positional index.
    ///
    /// Returns [`SimError::ActivityLengthMismatch`] unless `activities`
    /// carries exactly one flag per source.
    pub fn set_source_activity(&mut self, activities: &[bool]) -> Result<(), SimError> {
        if activities.len() != self.sources.len() {
            return Err(SimError::ActivityLengthMismatch {
                expected: self.sources.len(),
                got: activities.len(),
            });
        }
        for (source, &active) in self.sources.iter_mut().zip(activities) {
            source.set_active(active);
        }
        Ok(())
    }

    /// Advances the simulation by one time step.
    ///
    /// The hypothetical post-step position is tested against all four
    /// boundaries; every violated one reflects the offending coordinate back
    /// inside and negates the matching velocity component. Corner hits
    /// violate two boundaries in the same pass and both are corrected before
    /// re-testing. The loop is capped at `max_reflection_passes`.
    ///
    /// Returns [`SimError::InvalidTimeStep`] for non-positive or non-finite
    /// `dt`, and [`SimError::CollisionDivergence`] if the reflection loop
    /// exceeds its cap (e.g. when `dt * |velocity|` spans the domain many
    /// times over, or the reflected position lands exactly on a boundary).
    pub fn step(&mut self, dt: f64) -> Result<(), SimError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SimError::InvalidTimeStep(dt));
        }

        let accel = self.acceleration();
        self.velocity += accel * dt;
        let mut hypo = self.position + self.velocity * dt;

        let mut passes = 0;
        while !self.is_inside(hypo) {
            if passes >= self.params.max_reflection_passes {
                return Err(SimError::CollisionDivergence { passes });
            }
            if hypo.x <= 0.0 {
                hypo.x = hypo.x.abs();
                self.velocity.x = -self.velocity.x;
            }
            if hypo.y <= 0.0 {
                hypo.y = hypo.y.abs();
                self.velocity.y = -self.velocity.y;
            }
            if hypo.x >= self.domain_size.x {
                hypo.x = self.domain_size.x - (hypo.x - self.domain_size.x);
                self.velocity.x = -self.velocity.x;
            }
            if hypo.y >= self.domain_size.y {
                hypo.y = self.domain_size.y - (hypo.y - self.domain_size.y);
                self.velocity.y = -self.velocity.y;
            }
            passes += 1;
        }

        self.position = hypo;
        Ok(())
    }

    /// Resets the ball to the domain center and zeroes its velocity.
    ///
    /// Source activity is left untouched; callers that want a cold start
    /// should also pass an all-false vector to
    /// [`set_source_activity`](Self::set_source_activity).
    pub fn reset(&mut self) {
        self.position = self.domain_size / 2.0;
        self.velocity = DVec2::ZERO;
    }

    /// Current parameter values as a JSON object.
    pub fn params(&self) -> Value {
        json!({
            "friction": self.params.friction,
            "max_strength": self.params.max_strength,
            "max_reflection_passes": self.params.max_reflection_passes,
        })
    }

    /// Schema describing the parameters, their types, ranges, and defaults.
    pub fn param_schema(&self) -> Value {
        json!({
            "friction": {
                "type": "number",
                "default": DEFAULT_FRICTION,
                "min": 0.0,
                "max": 1.0,
                "description": "Velocity-proportional damping applied every step"
            },
            "max_strength": {
                "type": "number",
                "default": DEFAULT_MAX_STRENGTH,
                "min": 0.0,
                "max": 1000.0,
                "description": "Per-axis force bound for every source"
            },
            "max_reflection_passes": {
                "type": "integer",
                "default": DEFAULT_MAX_REFLECTION_PASSES,
                "min": 1,
                "max": 10000,
                "description": "Reflection passes allowed per step before the engine reports divergence"
            }
        })
    }

    /// Total acceleration at the current state: sum of source forces minus
    /// the friction term.
    fn acceleration(&self) -> DVec2 {
        let pull = self
            .sources
            .iter()
            .fold(DVec2::ZERO, |acc, source| acc + source.force_at(self.position));
        pull - self.velocity * self.params.friction
    }

    /// Strict inside test: the boundary itself counts as outside.
    fn is_inside(&self, p: DVec2) -> bool {
        p.x > 0.0 && p.x < self.domain_size.x && p.y > 0.0 && p.y < self.domain_size.y
    }
}
