use super::flight_state::FlightState;
use crate::constants::{
    DRAG_COEFFICIENT_STEP, DRY_MASS_STEP, MAX_DRAG_COEFFICIENT, MAX_DRY_MASS,
    MIN_DRAG_COEFFICIENT, MIN_DRY_MASS, ROTATION_GAIN, ROTATION_SPEED, THRUST_STEP,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    Increase,
    Decrease,
}

impl Adjustment {
    pub fn sign(self) -> f64 {
        match self {
            Adjustment::Increase => 1.0,
            Adjustment::Decrease => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Pitch,
    Yaw,
    Roll,
}

/// Clamped control writes applied to a [`FlightState`] between steps.
///
/// The integrator itself never validates these fields; keeping them in range
/// is this layer's job.
pub struct ControlInput;

impl ControlInput {
    /// Throttle in fixed steps. A flamed-out engine cannot be relit.
    pub fn adjust_thrust(state: &mut FlightState, adjustment: Adjustment) {
        let ceiling = if state.fuel_mass > 0.0 {
            state.max_thrust
        } else {
            0.0
        };
        state.thrust = (state.thrust + adjustment.sign() * THRUST_STEP).clamp(0.0, ceiling);
    }

    pub fn adjust_dry_mass(state: &mut FlightState, adjustment: Adjustment) {
        state.dry_mass =
            (state.dry_mass + adjustment.sign() * DRY_MASS_STEP).clamp(MIN_DRY_MASS, MAX_DRY_MASS);
        state.recompute_mass();
    }

    pub fn adjust_drag_coefficient(state: &mut FlightState, adjustment: Adjustment) {
        state.drag_coefficient = (state.drag_coefficient
            + adjustment.sign() * DRAG_COEFFICIENT_STEP)
            .clamp(MIN_DRAG_COEFFICIENT, MAX_DRAG_COEFFICIENT);
    }

    /// Adds a rate impulse proportional to how long the input was held this frame.
    pub fn apply_rotation(
        state: &mut FlightState,
        axis: Axis,
        adjustment: Adjustment,
        frame_seconds: f64,
    ) {
        let impulse = adjustment.sign() * ROTATION_SPEED * frame_seconds * ROTATION_GAIN;
        match axis {
            Axis::Pitch => state.angular_velocity.x += impulse,
            Axis::Yaw => state.angular_velocity.y += impulse,
            Axis::Roll => state.angular_velocity.z += impulse,
        }
    }
}
