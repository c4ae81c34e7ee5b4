use super::environment::Environment;
use super::flight_state::FlightState;
use crate::constants::{MAX_TIME_SCALE, MIN_TIME_SCALE, TIME_SCALE_FACTOR};
use crate::effects::{Effects, ExhaustHint, FlightObserver};
use crate::telemetry_system::telemetry::TelemetrySnapshot;
use crate::trajectory_system::kinematics;
use nalgebra::Vector3;

/// Owns one flight and everything that watches it.
///
/// Each call to [`Simulation::tick`] turns a wall-clock frame into a physics
/// step, scaled by the time scale and suppressed while paused.
pub struct Simulation {
    pub state: FlightState,
    pub environment: Environment,
    pub effects: Effects,
    time_scale: f64,
    paused: bool,
    elapsed_time: f64,
}

impl Simulation {
    pub fn new(state: FlightState, environment: Environment, seed: u64) -> Self {
        Simulation {
            state,
            environment,
            effects: Effects::new(seed),
            time_scale: 1.0,
            paused: false,
            elapsed_time: 0.0,
        }
    }

    pub fn tick(&mut self, frame_seconds: f64) -> TelemetrySnapshot {
        let delta_time = self.delta_time(frame_seconds);
        let telemetry = kinematics::step(
            &mut self.state,
            delta_time,
            &self.environment,
            &mut ConsoleReporter(&mut self.effects),
        );

        if delta_time > 0.0 {
            self.effects.particles.update(delta_time);
            self.elapsed_time += delta_time;
        }

        telemetry
    }

    /// The physics step a frame of `frame_seconds` turns into.
    pub fn delta_time(&self, frame_seconds: f64) -> f64 {
        if self.paused {
            0.0
        } else {
            frame_seconds * self.time_scale
        }
    }

    /// Starts a fresh flight. Environment and time scale carry over.
    pub fn reset(&mut self) {
        self.state = FlightState::new();
        self.effects.clear();
        self.elapsed_time = 0.0;
        println!("Simulation reset.");
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn speed_up(&mut self) {
        self.time_scale = (self.time_scale * TIME_SCALE_FACTOR).min(MAX_TIME_SCALE);
    }

    pub fn slow_down(&mut self) {
        self.time_scale = (self.time_scale / TIME_SCALE_FACTOR).max(MIN_TIME_SCALE);
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }
}

/// Forwards to the effects and reports engine events on the console.
struct ConsoleReporter<'a>(&'a mut Effects);

impl FlightObserver for ConsoleReporter<'_> {
    fn on_position(&mut self, position: &Vector3<f64>) {
        self.0.on_position(position);
    }

    fn on_exhaust(&mut self, hint: &ExhaustHint) {
        self.0.on_exhaust(hint);
    }

    fn on_flameout(&mut self) {
        println!("Engine flameout: fuel depleted.");
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Simulation::new(FlightState::new(), Environment::default(), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::inputs::{Adjustment, ControlInput};
    use approx::assert_relative_eq;

    #[test]
    fn test_paused_tick_changes_nothing() {
        let mut simulation = Simulation::default();
        simulation.toggle_pause();
        let before = simulation.state.clone();

        simulation.tick(1.0 / 60.0);

        assert_eq!(simulation.state, before);
        assert!(simulation.effects.trail.is_empty());
        assert_eq!(simulation.elapsed_time(), 0.0);
    }

    #[test]
    fn test_time_scale_bounds() {
        let mut simulation = Simulation::default();
        for _ in 0..10 {
            simulation.speed_up();
        }
        assert_eq!(simulation.time_scale(), 5.0);

        for _ in 0..20 {
            simulation.slow_down();
        }
        assert_eq!(simulation.time_scale(), 0.1);
    }

    #[test]
    fn test_time_scale_stretches_step() {
        let mut simulation = Simulation::default();
        simulation.speed_up();
        assert_relative_eq!(simulation.delta_time(0.1), 0.15, epsilon = 1e-12);

        simulation.tick(0.1);
        assert_relative_eq!(simulation.elapsed_time(), 0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_tick_feeds_effects() {
        let mut simulation = Simulation::default();
        simulation.tick(1.0 / 60.0);
        simulation.tick(1.0 / 60.0);

        assert_eq!(simulation.effects.trail.len(), 2);
        assert!(!simulation.effects.particles.is_empty());
    }

    #[test]
    fn test_reset_replaces_state_but_keeps_environment() {
        let mut simulation = Simulation::default();
        simulation.environment.adjust_air_density(Adjustment::Increase);
        simulation.speed_up();
        ControlInput::adjust_dry_mass(&mut simulation.state, Adjustment::Increase);
        for _ in 0..30 {
            simulation.tick(1.0 / 60.0);
        }

        simulation.reset();

        assert_eq!(simulation.state, FlightState::new());
        assert!(simulation.effects.particles.is_empty());
        assert!(simulation.effects.trail.is_empty());
        assert_relative_eq!(simulation.environment.air_density, 1.245, epsilon = 1e-12);
        assert_relative_eq!(simulation.time_scale(), 1.5, epsilon = 1e-12);
    }
}
