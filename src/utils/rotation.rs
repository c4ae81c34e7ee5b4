use nalgebra::{Rotation3, Vector3};

/// Combined body-to-world rotation `Ry(yaw) · Rx(pitch) · Rz(roll)`, angles in degrees.
pub fn rotation_matrix(pitch: f64, yaw: f64, roll: f64) -> Rotation3<f64> {
    let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), pitch.to_radians());
    let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), yaw.to_radians());
    let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), roll.to_radians());

    ry * rx * rz
}

/// World-space direction of the engine axis. The body thrust axis is +Y.
pub fn thrust_direction(pitch: f64, yaw: f64, roll: f64) -> Vector3<f64> {
    rotation_matrix(pitch, yaw, roll) * Vector3::y()
}

/// Maps an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_neutral_orientation_points_up() {
        let dir = thrust_direction(0.0, 0.0, 0.0);
        assert_relative_eq!(dir, Vector3::new(0.0, 1.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_pitch_tilts_towards_z() {
        let dir = thrust_direction(90.0, 0.0, 0.0);
        assert_relative_eq!(dir, Vector3::new(0.0, 0.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn test_roll_tilts_towards_negative_x() {
        let dir = thrust_direction(0.0, 0.0, 90.0);
        assert_relative_eq!(dir, Vector3::new(-1.0, 0.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_yaw_applied_after_pitch() {
        // pitch first swings the axis onto +Z, yaw then carries it onto +X
        let dir = thrust_direction(90.0, 90.0, 0.0);
        assert_relative_eq!(dir, Vector3::new(1.0, 0.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_yaw_alone_does_not_move_vertical_axis() {
        let dir = thrust_direction(0.0, 137.0, 0.0);
        assert_relative_eq!(dir, Vector3::new(0.0, 1.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_direction_is_unit_length() {
        for &(p, y, r) in &[(12.0, 250.0, 33.0), (359.0, 1.0, 180.0), (45.0, 45.0, 45.0)] {
            assert_relative_eq!(thrust_direction(p, y, r).norm(), 1.0, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_relative_eq!(wrap_degrees(370.0), 10.0, epsilon = EPSILON);
        assert_relative_eq!(wrap_degrees(-10.0), 350.0, epsilon = EPSILON);
        assert_relative_eq!(wrap_degrees(-730.0), 350.0, epsilon = EPSILON);
    }

    #[test]
    fn test_wrap_degrees_tiny_negative_stays_in_range() {
        let wrapped = wrap_degrees(-1e-17);
        assert!((0.0..360.0).contains(&wrapped));
    }
}
