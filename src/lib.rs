pub mod constants;
pub mod control;
pub mod effects;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::environment::Environment;
pub use control::flight_state::{FlightState, RocketConfig};
pub use control::inputs::{Adjustment, Axis, ControlInput};
pub use control::propulsion::EnginePhase;
pub use control::simulation::Simulation;
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::kinematics::step;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::{Telemetry, TelemetrySnapshot};

// Re-export observer types
pub use effects::{Effects, ExhaustHint, FlightObserver};
