use super::inputs::Adjustment;
use crate::constants::{
    AIR_DENSITY_SEA_LEVEL, AIR_DENSITY_STEP, GRAVITY, MAX_AIR_DENSITY, MIN_AIR_DENSITY,
};

/// Per-tick atmospheric inputs to the integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub air_density: f64,
    pub gravity: f64,
}

impl Environment {
    pub fn new(air_density: f64, gravity: f64) -> Self {
        Environment {
            air_density,
            gravity,
        }
    }

    pub fn vacuum(gravity: f64) -> Self {
        Environment::new(0.0, gravity)
    }

    /// Steps the density up or down, keeping it inside the adjustable range.
    pub fn adjust_air_density(&mut self, adjustment: Adjustment) {
        self.air_density = (self.air_density + adjustment.sign() * AIR_DENSITY_STEP)
            .clamp(MIN_AIR_DENSITY, MAX_AIR_DENSITY);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(AIR_DENSITY_SEA_LEVEL, GRAVITY)
    }
}
