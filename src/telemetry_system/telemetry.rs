use std::io;

use nalgebra::Vector3;
use serde::Serialize;

use crate::constants::TELEMETRY_REFERENCE_DENSITY;
use crate::control::flight_state::FlightState;
use crate::control::propulsion::{engine_phase, EnginePhase};
use crate::errors::SimulationError;
use crate::trajectory_system::aerodynamics;
use crate::utils::rotation::thrust_direction;

/// Derived flight quantities for one moment, recomputed from scratch on
/// every step.
///
/// `drag`, `lift` and `dynamic_pressure` are always evaluated at the
/// sea-level reference density (1.225 kg/m³), not at the density the step
/// was run with. In thin or thick air they will disagree with the forces the
/// integrator actually applied; `max_q` on the other hand tracks the
/// simulated environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetrySnapshot {
    pub drag: f64,
    pub lift: f64,
    pub thrust: f64,
    pub speed: f64,
    pub altitude: f64,
    pub angle_of_attack: f64,
    pub dynamic_pressure: f64,
    pub max_q: f64,
    pub g_force: f64,
    pub engine_temperature: f64,
    pub fuel_remaining: f64,
    pub thrust_to_weight: f64,
    pub mach: f64,
    pub thrust_direction: Vector3<f64>,
}

impl TelemetrySnapshot {
    pub fn from_state(state: &FlightState) -> Self {
        let direction = thrust_direction(state.pitch, state.yaw, state.roll);
        let velocity = &state.velocity;

        let drag = aerodynamics::drag_force(
            velocity,
            TELEMETRY_REFERENCE_DENSITY,
            state.drag_coefficient,
            state.reference_area,
        );
        let lift = aerodynamics::lift_force(
            velocity,
            &direction,
            TELEMETRY_REFERENCE_DENSITY,
            state.reference_area,
        );

        TelemetrySnapshot {
            drag: drag.norm(),
            lift: lift.norm(),
            thrust: (direction * state.thrust).norm(),
            speed: state.get_speed(),
            altitude: state.get_altitude(),
            angle_of_attack: aerodynamics::angle_of_attack(velocity, &direction),
            dynamic_pressure: aerodynamics::dynamic_pressure(velocity, TELEMETRY_REFERENCE_DENSITY),
            max_q: state.max_q,
            g_force: state.structural_stress,
            engine_temperature: state.engine_temperature,
            fuel_remaining: state.fuel_mass,
            thrust_to_weight: state.thrust_to_weight(),
            mach: aerodynamics::mach_number(velocity),
            thrust_direction: direction,
        }
    }
}

/// Flat CSV row: one recorded snapshot with its simulation time.
#[derive(Debug, Serialize)]
struct TelemetryRecord {
    time: f64,
    altitude: f64,
    speed: f64,
    mach: f64,
    drag: f64,
    lift: f64,
    thrust: f64,
    angle_of_attack: f64,
    dynamic_pressure: f64,
    max_q: f64,
    g_force: f64,
    engine_temperature: f64,
    fuel_remaining: f64,
    thrust_to_weight: f64,
    thrust_direction_x: f64,
    thrust_direction_y: f64,
    thrust_direction_z: f64,
}

impl TelemetryRecord {
    fn new(time: f64, snapshot: &TelemetrySnapshot) -> Self {
        TelemetryRecord {
            time,
            altitude: snapshot.altitude,
            speed: snapshot.speed,
            mach: snapshot.mach,
            drag: snapshot.drag,
            lift: snapshot.lift,
            thrust: snapshot.thrust,
            angle_of_attack: snapshot.angle_of_attack,
            dynamic_pressure: snapshot.dynamic_pressure,
            max_q: snapshot.max_q,
            g_force: snapshot.g_force,
            engine_temperature: snapshot.engine_temperature,
            fuel_remaining: snapshot.fuel_remaining,
            thrust_to_weight: snapshot.thrust_to_weight,
            thrust_direction_x: snapshot.thrust_direction.x,
            thrust_direction_y: snapshot.thrust_direction.y,
            thrust_direction_z: snapshot.thrust_direction.z,
        }
    }
}

/// Keeps the snapshots a driver hands it, plus running peaks for the
/// end-of-flight summary.
pub struct Telemetry {
    samples: Vec<(f64, TelemetrySnapshot)>,
    max_speed: f64,
    max_altitude: f64,
    max_g_force: f64,
    max_q: f64,
    min_fuel: f64,
    flameout_time: Option<f64>,
    simulation_time: f64,
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry {
            samples: Vec::new(),
            max_speed: 0.0,
            max_altitude: 0.0,
            max_g_force: 0.0,
            max_q: 0.0,
            min_fuel: f64::MAX,
            flameout_time: None,
            simulation_time: 0.0,
        }
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 3600.0 {
            let hours = (elapsed_time / 3600.0).floor();
            let minutes = ((elapsed_time % 3600.0) / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}h {:.0}m {:.2}s", hours, minutes, seconds)
        } else if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn format_altitude(altitude: f64) -> String {
        if altitude >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    pub fn collect_data(
        &mut self,
        snapshot: &TelemetrySnapshot,
        state: &FlightState,
        delta_time: f64,
    ) {
        self.simulation_time += delta_time.max(0.0);

        self.max_speed = self.max_speed.max(snapshot.speed);
        self.max_altitude = self.max_altitude.max(snapshot.altitude);
        self.max_g_force = self.max_g_force.max(snapshot.g_force);
        self.max_q = self.max_q.max(snapshot.max_q);
        self.min_fuel = self.min_fuel.min(snapshot.fuel_remaining);

        if self.flameout_time.is_none() && engine_phase(state) == EnginePhase::Flameout {
            self.flameout_time = Some(self.simulation_time);
        }

        self.samples.push((self.simulation_time, *snapshot));
    }

    pub fn samples(&self) -> &[(f64, TelemetrySnapshot)] {
        &self.samples
    }

    pub fn latest(&self) -> Option<&TelemetrySnapshot> {
        self.samples.last().map(|(_, snapshot)| snapshot)
    }

    pub fn max_altitude(&self) -> f64 {
        self.max_altitude
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn max_q(&self) -> f64 {
        self.max_q
    }

    pub fn flameout_time(&self) -> Option<f64> {
        self.flameout_time
    }

    pub fn simulation_time(&self) -> f64 {
        self.simulation_time
    }

    /// Writes every recorded sample as CSV, header first.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), SimulationError> {
        let mut writer = csv::Writer::from_writer(writer);
        for (time, snapshot) in &self.samples {
            writer.serialize(TelemetryRecord::new(*time, snapshot))?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn summary(&self) -> String {
        let flameout = self
            .flameout_time
            .map_or_else(|| "none".to_string(), Self::format_time);
        let min_fuel = if self.samples.is_empty() {
            0.0
        } else {
            self.min_fuel
        };

        format!(
            "Flight Time: {}\n\
                 Max Altitude: {}\n\
                 Max Speed: {:.2} m/s\n\
                 Max G-Force: {:.2} g\n\
                 Max-Q: {:.2} Pa\n\
                 Min Fuel: {:.2} kg\n\
                 Flameout: {}",
            Self::format_time(self.simulation_time),
            Self::format_altitude(self.max_altitude),
            self.max_speed,
            self.max_g_force,
            self.max_q,
            min_fuel,
            flameout,
        )
    }

    pub fn display_data(&self) {
        println!("--- Flight Summary ---");
        println!("{}", self.summary());
        if let Some(latest) = self.latest() {
            println!(
                "Final: altitude {}, speed {:.2} m/s (Mach {:.2}), AoA {:.2}°, TWR {:.2}",
                Self::format_altitude(latest.altitude),
                latest.speed,
                latest.mach,
                latest.angle_of_attack,
                latest.thrust_to_weight
            );
        }
    }
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_snapshot_of_default_state() {
        let state = FlightState::new();
        let snapshot = TelemetrySnapshot::from_state(&state);

        assert_eq!(snapshot.drag, 0.0);
        assert_eq!(snapshot.lift, 0.0);
        assert_eq!(snapshot.speed, 0.0);
        assert_eq!(snapshot.angle_of_attack, 0.0);
        assert_eq!(snapshot.altitude, 500.0);
        assert_eq!(snapshot.fuel_remaining, 3_000.0);
        assert_relative_eq!(snapshot.thrust, 75_000.0, epsilon = 1e-9);
        assert_relative_eq!(snapshot.thrust_to_weight, 75_000.0 / (5_000.0 * 9.81));
        assert_relative_eq!(
            snapshot.thrust_direction,
            Vector3::new(0.0, 1.0, 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_snapshot_uses_reference_density() {
        let mut state = FlightState::new();
        state.velocity = Vector3::new(343.0, 0.0, 0.0);

        let snapshot = TelemetrySnapshot::from_state(&state);

        let q = 0.5 * 1.225 * 343.0 * 343.0;
        assert_relative_eq!(snapshot.dynamic_pressure, q, epsilon = 1e-9);
        assert_relative_eq!(snapshot.drag, q * 0.45 * 10.0, epsilon = 1e-6);
        assert_relative_eq!(snapshot.mach, 1.0, epsilon = 1e-12);
        assert_relative_eq!(snapshot.angle_of_attack, 90.0, epsilon = 1e-9);
        // broadside flow: full thin-airfoil lift
        assert_relative_eq!(
            snapshot.lift,
            q * 2.0 * std::f64::consts::PI * 10.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_collect_tracks_peaks_and_flameout() {
        let mut telemetry = Telemetry::new();
        let mut state = FlightState::new();
        state.velocity = Vector3::new(0.0, 120.0, 0.0);
        state.position.y = 2_500.0;
        telemetry.collect_data(&TelemetrySnapshot::from_state(&state), &state, 1.0);

        state.velocity = Vector3::new(0.0, 40.0, 0.0);
        state.position.y = 2_600.0;
        state.fuel_mass = 0.0;
        state.thrust = 0.0;
        telemetry.collect_data(&TelemetrySnapshot::from_state(&state), &state, 1.0);
        telemetry.collect_data(&TelemetrySnapshot::from_state(&state), &state, 1.0);

        assert_eq!(telemetry.samples().len(), 3);
        assert_relative_eq!(telemetry.max_speed(), 120.0);
        assert_relative_eq!(telemetry.max_altitude(), 2_600.0);
        assert_eq!(telemetry.flameout_time(), Some(2.0));
        assert_relative_eq!(telemetry.simulation_time(), 3.0);
    }

    #[test]
    fn test_summary_formatting() {
        let mut telemetry = Telemetry::new();
        let mut state = FlightState::new();
        state.position.y = 12_340.0;
        telemetry.collect_data(&TelemetrySnapshot::from_state(&state), &state, 75.0);

        let summary = telemetry.summary();
        assert!(summary.contains("Flight Time: 1m 15.00s"));
        assert!(summary.contains("Max Altitude: 12.34 km"));
        assert!(summary.contains("Flameout: none"));
    }

    #[test]
    fn test_write_csv() {
        let mut telemetry = Telemetry::new();
        let state = FlightState::new();
        let snapshot = TelemetrySnapshot::from_state(&state);
        telemetry.collect_data(&snapshot, &state, 0.5);
        telemetry.collect_data(&snapshot, &state, 0.5);

        let mut buffer = Vec::new();
        telemetry.write_csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("time,altitude,speed,mach,"));
        assert!(lines[0].ends_with("thrust_direction_x,thrust_direction_y,thrust_direction_z"));
        assert!(lines[1].starts_with("0.5,500.0,"));
        assert!(lines[2].starts_with("1.0,500.0,"));
    }
}
