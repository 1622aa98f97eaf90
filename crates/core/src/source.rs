//! Field sources: the point attractors ("magnets") that act on the ball.
//!
//! A [`FieldSource`] is a fixed point that, while active, pulls the ball
//! toward itself with an inverse-square force. Position and strength are
//! immutable after construction; the on/off flag is the only mutable state.
//!
//! All computations are deterministic: same inputs produce the same output.

use glam::DVec2;

/// Scale factor applied to `max_strength` to form the inverse-square
/// coupling constant (`max_strength * 90²`).
const COUPLING_SCALE: f64 = 8100.0;

/// Distance floor added before every division to avoid the singularity when
/// the ball coincides with the source.
const SINGULARITY_EPS: f64 = 1e-6;

/// One point attractor acting on the ball.
#[derive(Debug, Clone)]
pub struct FieldSource {
    position: DVec2,
    max_strength: f64,
    active: bool,
}

impl FieldSource {
    /// Creates an inactive source at `position` with the given strength bound.
    pub fn new(position: DVec2, max_strength: f64) -> Self {
        Self {
            position,
            max_strength,
            active: false,
        }
    }

    /// The source's fixed position.
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// The per-axis bound on the force this source exerts.
    pub fn max_strength(&self) -> f64 {
        self.max_strength
    }

    /// Whether the source currently exerts force.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Switches the source on or off. Unconditional overwrite, no side
    /// effects beyond the flag.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// The force this source exerts on a ball at `ball_pos`.
    ///
    /// Inactive sources return exactly zero. Active sources pull toward
    /// [`position`](Self::position) with magnitude
    /// `max_strength * 8100 / (r² + eps)` along the unit direction, where
    /// `r` is the distance to the ball and `eps` guards the singularity.
    /// Each component of the result is then clamped independently to
    /// `[-max_strength, max_strength]`. The clamp is per axis, not a cap on
    /// the vector length, so a diagonal force may exceed `max_strength` in
    /// magnitude.
    ///
    /// Always finite for finite inputs.
    pub fn force_at(&self, ball_pos: DVec2) -> DVec2 {
        if !self.active {
            return DVec2::ZERO;
        }
        let delta = self.position - ball_pos;
        let dist = delta.length();
        let unit = delta / (dist + SINGULARITY_EPS);
        let coupling = self.max_strength * COUPLING_SCALE;
        let raw = coupling * unit / (dist * dist + SINGULARITY_EPS);
        raw.clamp(
            DVec2::splat(-self.max_strength),
            DVec2::splat(self.max_strength),
        )
    }
}

/// The four quarter-point source positions of the standard magnet
/// arrangement, one per corner region of the domain:
/// `(w/4, h/4), (w/4, 3h/4), (3w/4, h/4), (3w/4, 3h/4)`.
pub fn corner_positions(domain_size: DVec2) -> [DVec2; 4] {
    let q = domain_size / 4.0;
    [
        DVec2::new(q.x, q.y),
        DVec2::new(q.x, 3.0 * q.y),
        DVec2::new(3.0 * q.x, q.y),
        DVec2::new(3.0 * q.x, 3.0 * q.y),
    ]
}
