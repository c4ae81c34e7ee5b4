use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{ExhaustHint, FlightObserver};
use crate::constants::{
    PARTICLES_PER_EMISSION, PARTICLE_FADE_RATE, PARTICLE_MAX_SIZE, PARTICLE_MIN_SIZE,
    PARTICLE_POSITION_JITTER, PARTICLE_VELOCITY_DECAY, PARTICLE_VELOCITY_JITTER,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub life: f64,
    pub size: f64,
}

/// Headless exhaust plume: particles spawn around each exhaust hint, drift,
/// slow down and fade out over half a second.
pub struct ParticleSystem {
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleSystem {
    pub fn new(seed: u64) -> Self {
        ParticleSystem {
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn emit(&mut self, position: &Vector3<f64>, velocity: &Vector3<f64>, count: usize) {
        for _ in 0..count {
            let position = position + self.jitter(PARTICLE_POSITION_JITTER);
            let velocity = velocity + self.jitter(PARTICLE_VELOCITY_JITTER);
            let size = self.rng.gen_range(PARTICLE_MIN_SIZE..PARTICLE_MAX_SIZE);

            self.particles.push(Particle {
                position,
                velocity,
                life: 1.0,
                size,
            });
        }
    }

    /// Advances every particle by `delta_time`; the velocity decay is applied
    /// once per call regardless of the step size.
    pub fn update(&mut self, delta_time: f64) {
        for particle in &mut self.particles {
            particle.position += particle.velocity * delta_time;
            particle.velocity *= PARTICLE_VELOCITY_DECAY;
            particle.life -= delta_time * PARTICLE_FADE_RATE;
        }
        self.particles.retain(|particle| particle.life > 0.0);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    fn jitter(&mut self, spread: f64) -> Vector3<f64> {
        Vector3::new(
            self.rng.gen_range(-1.0..1.0),
            self.rng.gen_range(-1.0..1.0),
            self.rng.gen_range(-1.0..1.0),
        ) * spread
    }
}

impl FlightObserver for ParticleSystem {
    fn on_exhaust(&mut self, hint: &ExhaustHint) {
        self.emit(&hint.position, &hint.velocity, PARTICLES_PER_EMISSION);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_emit_spawns_particles_near_source() {
        let mut system = ParticleSystem::new(7);
        let origin = Vector3::new(10.0, 20.0, 30.0);
        system.emit(&origin, &Vector3::zeros(), 16);

        assert_eq!(system.len(), 16);
        for particle in system.particles() {
            assert!((particle.position - origin).amax() <= PARTICLE_POSITION_JITTER);
            assert!(particle.velocity.amax() <= PARTICLE_VELOCITY_JITTER);
            assert!(particle.size >= PARTICLE_MIN_SIZE && particle.size < PARTICLE_MAX_SIZE);
            assert_eq!(particle.life, 1.0);
        }
    }

    #[test]
    fn test_same_seed_same_plume() {
        let mut a = ParticleSystem::new(42);
        let mut b = ParticleSystem::new(42);
        a.emit(&Vector3::zeros(), &Vector3::zeros(), 5);
        b.emit(&Vector3::zeros(), &Vector3::zeros(), 5);
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn test_update_decays_velocity_and_life() {
        let mut system = ParticleSystem::new(1);
        system.particles.push(Particle {
            position: Vector3::zeros(),
            velocity: Vector3::new(0.0, 10.0, 0.0),
            life: 1.0,
            size: 0.5,
        });

        system.update(0.1);

        let particle = &system.particles()[0];
        assert_relative_eq!(particle.position.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(particle.velocity.y, 9.5, epsilon = 1e-12);
        assert_relative_eq!(particle.life, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_particles_expire_after_half_a_second() {
        let mut system = ParticleSystem::new(3);
        system.emit(&Vector3::zeros(), &Vector3::zeros(), 4);

        for _ in 0..4 {
            system.update(0.1);
        }
        assert_eq!(system.len(), 4);

        system.update(0.1);
        system.update(0.01);
        assert!(system.is_empty());
    }

    #[test]
    fn test_exhaust_hint_emits_fixed_batch() {
        let mut system = ParticleSystem::new(9);
        let hint = ExhaustHint {
            position: Vector3::new(0.0, -400.0, 0.0),
            velocity: Vector3::new(0.0, -100.0, 0.0),
        };
        system.on_exhaust(&hint);
        system.on_exhaust(&hint);
        assert_eq!(system.len(), 2 * PARTICLES_PER_EMISSION);
    }
}
