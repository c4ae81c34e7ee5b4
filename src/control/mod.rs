pub mod environment;
pub mod flight_state;
pub mod inputs;
pub mod propulsion;
pub mod simulation;
