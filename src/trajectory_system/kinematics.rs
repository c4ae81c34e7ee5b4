use nalgebra::Vector3;

use super::aerodynamics;
use crate::constants::{
    ANGULAR_VELOCITY_DECAY, EXHAUST_OFFSET, EXHAUST_SPEED, GRAVITY, GROUND_FRICTION,
    GROUND_RESTITUTION,
};
use crate::control::environment::Environment;
use crate::control::flight_state::FlightState;
use crate::control::propulsion;
use crate::effects::{ExhaustHint, FlightObserver};
use crate::telemetry_system::telemetry::TelemetrySnapshot;
use crate::utils::rotation::{thrust_direction, wrap_degrees};

/// Advances `state` by one tick of `delta_time` seconds and reports the result.
///
/// Non-positive (or NaN) `delta_time` leaves the state untouched. The
/// returned snapshot describes the state after the update, but its
/// aerodynamic fields are always evaluated at sea-level density; see
/// [`TelemetrySnapshot`].
pub fn step<O: FlightObserver + ?Sized>(
    state: &mut FlightState,
    delta_time: f64,
    environment: &Environment,
    observer: &mut O,
) -> TelemetrySnapshot {
    if delta_time.is_nan() || delta_time <= 0.0 {
        return TelemetrySnapshot::from_state(state);
    }

    observer.on_position(&state.position);

    apply_rotation(state, delta_time);
    let flamed_out = propulsion::update(state, delta_time);

    let direction = thrust_direction(state.pitch, state.yaw, state.roll);
    let total_force = calculate_total_force(state, &direction, environment);

    let acceleration = if state.mass > 0.0 {
        total_force / state.mass
    } else {
        Vector3::zeros()
    };

    let dynamic_pressure = aerodynamics::dynamic_pressure(&state.velocity, environment.air_density);
    state.max_q = state.max_q.max(dynamic_pressure);

    state.structural_stress = if state.mass > 0.0 {
        total_force.norm() / state.mass / GRAVITY
    } else {
        0.0
    };

    state.engine_temperature = propulsion::engine_temperature(state.thrust, state.max_thrust);

    // semi-implicit Euler: position advances with the updated velocity
    state.velocity += acceleration * delta_time;
    state.position += state.velocity * delta_time;

    resolve_ground_contact(state);

    if flamed_out {
        observer.on_flameout();
    }
    if state.thrust > 0.0 {
        observer.on_exhaust(&ExhaustHint {
            position: state.position - direction * EXHAUST_OFFSET,
            velocity: -direction * EXHAUST_SPEED + state.velocity,
        });
    }

    TelemetrySnapshot::from_state(state)
}

/// Integrates the attitude rates and damps them. The damping is a fixed
/// per-call factor and does not scale with `delta_time`.
fn apply_rotation(state: &mut FlightState, delta_time: f64) {
    state.pitch = wrap_degrees(state.pitch + state.angular_velocity.x * delta_time);
    state.yaw = wrap_degrees(state.yaw + state.angular_velocity.y * delta_time);
    state.roll = wrap_degrees(state.roll + state.angular_velocity.z * delta_time);

    state.angular_velocity *= ANGULAR_VELOCITY_DECAY;
}

fn calculate_total_force(
    state: &FlightState,
    direction: &Vector3<f64>,
    environment: &Environment,
) -> Vector3<f64> {
    let drag = aerodynamics::drag_force(
        &state.velocity,
        environment.air_density,
        state.drag_coefficient,
        state.reference_area,
    );
    let lift = aerodynamics::lift_force(
        &state.velocity,
        direction,
        environment.air_density,
        state.reference_area,
    );
    let thrust = direction * state.thrust;
    let gravity = Vector3::new(0.0, -environment.gravity * state.mass, 0.0);

    thrust + drag + lift + gravity
}

/// One-sided contact with the ground plane `y = 0`.
fn resolve_ground_contact(state: &mut FlightState) {
    if state.position.y >= 0.0 {
        return;
    }

    state.position.y = 0.0;
    if state.velocity.y < 0.0 {
        state.velocity.y = -state.velocity.y * GROUND_RESTITUTION;
        state.velocity.x *= GROUND_FRICTION;
        state.velocity.z *= GROUND_FRICTION;
    }
}

impl FlightState {
    /// Runs [`step`] without any observers attached.
    pub fn step(&mut self, delta_time: f64, air_density: f64, gravity: f64) -> TelemetrySnapshot {
        step(self, delta_time, &Environment::new(air_density, gravity), &mut ())
    }
}
