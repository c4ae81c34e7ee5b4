//! Observers of the integration step.
//!
//! Nothing here feeds back into [`FlightState`](crate::control::flight_state::FlightState);
//! observers only see positions, exhaust and flameout events after the physics has run.

pub mod particles;
pub mod trail;

use nalgebra::Vector3;

use particles::ParticleSystem;
use trail::SmokeTrail;

/// Where and how fast exhaust leaves the nozzle during a powered step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExhaustHint {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
}

pub trait FlightObserver {
    /// Called once per non-empty step with the position before integration.
    fn on_position(&mut self, _position: &Vector3<f64>) {}

    /// Called after integration whenever the engine is producing thrust.
    fn on_exhaust(&mut self, _hint: &ExhaustHint) {}

    /// Called once, on the step where the tank runs dry.
    fn on_flameout(&mut self) {}
}

impl FlightObserver for () {}

/// The visual collaborators a driver usually keeps alongside the physics.
pub struct Effects {
    pub particles: ParticleSystem,
    pub trail: SmokeTrail,
}

impl Effects {
    pub fn new(seed: u64) -> Self {
        Effects {
            particles: ParticleSystem::new(seed),
            trail: SmokeTrail::default(),
        }
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.trail.clear();
    }
}

impl FlightObserver for Effects {
    fn on_position(&mut self, position: &Vector3<f64>) {
        self.trail.on_position(position);
    }

    fn on_exhaust(&mut self, hint: &ExhaustHint) {
        self.particles.on_exhaust(hint);
    }
}
