use nalgebra::Vector3;

use crate::constants::{
    DRAG_SPEED_THRESHOLD, LIFT_CROSS_THRESHOLD, LIFT_SPEED_THRESHOLD, SPEED_OF_SOUND,
};

/// Quadratic drag opposing the velocity.
///
/// Returns the zero vector at or below 0.1 m/s, where the velocity direction
/// is not well defined.
pub fn drag_force(
    velocity: &Vector3<f64>,
    air_density: f64,
    drag_coefficient: f64,
    reference_area: f64,
) -> Vector3<f64> {
    let speed = velocity.norm();
    if speed <= DRAG_SPEED_THRESHOLD {
        return Vector3::zeros();
    }

    let drag_magnitude = dynamic_pressure(velocity, air_density) * drag_coefficient * reference_area;
    -(velocity / speed) * drag_magnitude
}

/// Thin-airfoil lift from the angle between velocity and the engine axis.
///
/// The force is perpendicular to the velocity and lies in the plane spanned
/// by the velocity and the thrust direction. Below 1 m/s, or when the two
/// are nearly parallel, there is no lift.
pub fn lift_force(
    velocity: &Vector3<f64>,
    thrust_direction: &Vector3<f64>,
    air_density: f64,
    reference_area: f64,
) -> Vector3<f64> {
    let speed = velocity.norm();
    if speed <= LIFT_SPEED_THRESHOLD {
        return Vector3::zeros();
    }

    let cross = (velocity / speed).cross(thrust_direction);
    let cross_magnitude = cross.norm();
    if cross_magnitude <= LIFT_CROSS_THRESHOLD {
        return Vector3::zeros();
    }

    let angle_of_attack = cross_magnitude.clamp(0.0, 1.0).asin();
    let lift_coefficient = 2.0 * std::f64::consts::PI * angle_of_attack.sin();
    let lift_magnitude =
        dynamic_pressure(velocity, air_density) * lift_coefficient.abs() * reference_area;

    velocity
        .cross(&cross)
        .try_normalize(0.0)
        .map_or_else(Vector3::zeros, |direction| direction * lift_magnitude)
}

pub fn dynamic_pressure(velocity: &Vector3<f64>, air_density: f64) -> f64 {
    0.5 * air_density * velocity.norm_squared()
}

/// Angle between the engine axis and the velocity, in degrees.
pub fn angle_of_attack(velocity: &Vector3<f64>, thrust_direction: &Vector3<f64>) -> f64 {
    let speed = velocity.norm();
    if speed <= DRAG_SPEED_THRESHOLD {
        return 0.0;
    }

    thrust_direction
        .dot(&(velocity / speed))
        .clamp(-1.0, 1.0)
        .acos()
        .to_degrees()
}

pub fn mach_number(velocity: &Vector3<f64>) -> f64 {
    velocity.norm() / SPEED_OF_SOUND
}
