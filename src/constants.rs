// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²
pub const SPEED_OF_SOUND: f64 = 343.0; // m/s
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³

// Telemetry always evaluates aerodynamic loads at sea-level density
pub const TELEMETRY_REFERENCE_DENSITY: f64 = AIR_DENSITY_SEA_LEVEL;

// Rocket Defaults
pub const DEFAULT_DRY_MASS: f64 = 2_000.0; // kg
pub const DEFAULT_FUEL_MASS: f64 = 3_000.0; // kg
pub const DEFAULT_LAUNCH_ALTITUDE: f64 = 500.0; // m
pub const DEFAULT_THRUST: f64 = 75_000.0; // N
pub const DEFAULT_MAX_THRUST: f64 = 200_000.0; // N
pub const DEFAULT_DRAG_COEFFICIENT: f64 = 0.45;
pub const DEFAULT_REFERENCE_AREA: f64 = 10.0; // m²
pub const DEFAULT_FUEL_CONSUMPTION_RATE: f64 = 5.0; // kg/s

// Engine
pub const AMBIENT_ENGINE_TEMPERATURE: f64 = 300.0; // K
pub const ENGINE_HEAT_RANGE: f64 = 2_000.0; // K at full thrust

// Aerodynamic thresholds
pub const DRAG_SPEED_THRESHOLD: f64 = 0.1; // m/s
pub const LIFT_SPEED_THRESHOLD: f64 = 1.0; // m/s
pub const LIFT_CROSS_THRESHOLD: f64 = 0.01;

// Orientation
pub const ANGULAR_VELOCITY_DECAY: f64 = 0.92; // per step

// Ground contact
pub const GROUND_RESTITUTION: f64 = 0.3;
pub const GROUND_FRICTION: f64 = 0.7;

// Exhaust plume
pub const EXHAUST_OFFSET: f64 = 400.0;
pub const EXHAUST_SPEED: f64 = 100.0; // m/s

// Control boundary
pub const THRUST_STEP: f64 = 1_000.0; // N
pub const DRY_MASS_STEP: f64 = 20.0; // kg
pub const MIN_DRY_MASS: f64 = 500.0; // kg
pub const MAX_DRY_MASS: f64 = 10_000.0; // kg
pub const DRAG_COEFFICIENT_STEP: f64 = 0.02;
pub const MIN_DRAG_COEFFICIENT: f64 = 0.1;
pub const MAX_DRAG_COEFFICIENT: f64 = 2.0;
pub const AIR_DENSITY_STEP: f64 = 0.02; // kg/m³
pub const MIN_AIR_DENSITY: f64 = 0.01; // kg/m³
pub const MAX_AIR_DENSITY: f64 = 5.0; // kg/m³
pub const ROTATION_SPEED: f64 = 30.0; // deg/s
pub const ROTATION_GAIN: f64 = 10.0;
pub const TIME_SCALE_FACTOR: f64 = 1.5;
pub const MIN_TIME_SCALE: f64 = 0.1;
pub const MAX_TIME_SCALE: f64 = 5.0;

// Simulation Parameters
pub const TIME_STEP: f64 = 1.0 / 60.0; // s
pub const SIMULATION_DURATION: f64 = 120.0; // s

// Exhaust particles and smoke trail
pub const PARTICLES_PER_EMISSION: usize = 4;
pub const PARTICLE_VELOCITY_DECAY: f64 = 0.95; // per update
pub const PARTICLE_FADE_RATE: f64 = 2.0; // life per second
pub const PARTICLE_POSITION_JITTER: f64 = 2.0;
pub const PARTICLE_VELOCITY_JITTER: f64 = 5.0;
pub const PARTICLE_MIN_SIZE: f64 = 0.3;
pub const PARTICLE_MAX_SIZE: f64 = 0.6;
pub const SMOKE_TRAIL_LENGTH: usize = 60;
