use nalgebra::Vector3;

use crate::constants::*;
use crate::errors::SimulationError;

/// Initial vehicle parameters used to build a fresh [`FlightState`].
#[derive(Debug, Clone, PartialEq)]
pub struct RocketConfig {
    pub dry_mass: f64,
    pub fuel_mass: f64,
    pub position: Vector3<f64>,
    pub thrust: f64,
    pub max_thrust: f64,
    pub drag_coefficient: f64,
    pub reference_area: f64,
    pub fuel_consumption_rate: f64,
}

impl Default for RocketConfig {
    fn default() -> Self {
        RocketConfig {
            dry_mass: DEFAULT_DRY_MASS,
            fuel_mass: DEFAULT_FUEL_MASS,
            position: Vector3::new(0.0, DEFAULT_LAUNCH_ALTITUDE, 0.0),
            thrust: DEFAULT_THRUST,
            max_thrust: DEFAULT_MAX_THRUST,
            drag_coefficient: DEFAULT_DRAG_COEFFICIENT,
            reference_area: DEFAULT_REFERENCE_AREA,
            fuel_consumption_rate: DEFAULT_FUEL_CONSUMPTION_RATE,
        }
    }
}

/// The complete mutable state of the vehicle.
///
/// A single instance is owned by whoever drives the simulation. Resetting
/// means replacing it wholesale; `max_q` in particular only ever grows for
/// the lifetime of one instance.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightState {
    pub mass: f64,
    pub dry_mass: f64,
    pub fuel_mass: f64,

    pub velocity: Vector3<f64>,
    pub position: Vector3<f64>,

    // deg/s, components are pitch, yaw and roll rates
    pub angular_velocity: Vector3<f64>,
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,

    pub thrust: f64,
    pub max_thrust: f64,
    pub drag_coefficient: f64,
    pub reference_area: f64,
    pub fuel_consumption_rate: f64,

    pub engine_temperature: f64,
    pub structural_stress: f64,
    pub max_q: f64,
}

impl FlightState {
    pub fn new() -> Self {
        Self::build(&RocketConfig::default())
    }

    pub fn from_config(config: &RocketConfig) -> Result<Self, SimulationError> {
        if config.dry_mass < 0.0 || config.fuel_mass < 0.0 {
            return Err(SimulationError::InitializationError(format!(
                "masses must be non-negative (dry: {}, fuel: {})",
                config.dry_mass, config.fuel_mass
            )));
        }
        if config.max_thrust <= 0.0 {
            return Err(SimulationError::InitializationError(format!(
                "max thrust must be positive, got {}",
                config.max_thrust
            )));
        }
        if config.thrust < 0.0 || config.thrust > config.max_thrust {
            return Err(SimulationError::InitializationError(format!(
                "thrust {} outside [0, {}]",
                config.thrust, config.max_thrust
            )));
        }

        if config.fuel_consumption_rate < 0.0 {
            return Err(SimulationError::InitializationError(format!(
                "fuel consumption rate must be non-negative, got {}",
                config.fuel_consumption_rate
            )));
        }

        Ok(Self::build(config))
    }

    fn build(config: &RocketConfig) -> Self {
        FlightState {
            mass: config.dry_mass + config.fuel_mass,
            dry_mass: config.dry_mass,
            fuel_mass: config.fuel_mass,
            velocity: Vector3::zeros(),
            position: config.position,
            angular_velocity: Vector3::zeros(),
            pitch: 0.0,
            yaw: 0.0,
            roll: 0.0,
            thrust: config.thrust,
            max_thrust: config.max_thrust,
            drag_coefficient: config.drag_coefficient,
            reference_area: config.reference_area,
            fuel_consumption_rate: config.fuel_consumption_rate,
            engine_temperature: AMBIENT_ENGINE_TEMPERATURE,
            structural_stress: 0.0,
            max_q: 0.0,
        }
    }

    pub fn recompute_mass(&mut self) {
        self.mass = self.dry_mass + self.fuel_mass;
    }

    pub fn get_altitude(&self) -> f64 {
        self.position.y
    }

    pub fn get_speed(&self) -> f64 {
        self.velocity.norm()
    }

    pub fn thrust_to_weight(&self) -> f64 {
        if self.mass > 0.0 {
            self.thrust / (self.mass * GRAVITY)
        } else {
            0.0
        }
    }
}

impl Default for FlightState {
    fn default() -> Self {
        Self::new()
    }
}
