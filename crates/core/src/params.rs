//! Simulation parameters and tolerant JSON extraction helpers.
//!
//! The helpers take a JSON value, a key name, and a default. If the key is
//! missing or the value has the wrong type, the default is returned; they
//! never fail.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default velocity-proportional friction coefficient.
pub const DEFAULT_FRICTION: f64 = 0.1;
/// Default per-axis force bound for every source.
pub const DEFAULT_MAX_STRENGTH: f64 = 150.0;
/// Default cap on boundary-reflection passes within a single step.
pub const DEFAULT_MAX_REFLECTION_PASSES: usize = 100;

/// Tunable constants of the physics engine.
///
/// Use [`Default`] for the standard setup (friction 0.1, strength 150,
/// reflection cap 100).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PhysicsParams {
    /// Velocity-proportional damping applied every step. Not
    /// mass-normalized: the coefficient multiplies velocity directly.
    pub friction: f64,
    /// Per-axis force bound shared by all sources; also scaled by 90² to
    /// form the inverse-square coupling constant.
    pub max_strength: f64,
    /// Reflection passes allowed per step before the engine reports
    /// divergence instead of looping.
    pub max_reflection_passes: usize,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            friction: DEFAULT_FRICTION,
            max_strength: DEFAULT_MAX_STRENGTH,
            max_reflection_passes: DEFAULT_MAX_REFLECTION_PASSES,
        }
    }
}

impl PhysicsParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            friction: param_f64(params, "friction", DEFAULT_FRICTION),
            max_strength: param_f64(params, "max_strength", DEFAULT_MAX_STRENGTH),
            max_reflection_passes: param_usize(
                params,
                "max_reflection_passes",
                DEFAULT_MAX_REFLECTION_PASSES,
            ),
        }
    }
}

/// Extracts an `f64` from `params[name]`, returning `default` if missing or
/// wrong type. Accepts both JSON floats and integers.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, returning `default` if missing or
/// wrong type. Only succeeds for non-negative integers.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .unwrap_or(default)
}
