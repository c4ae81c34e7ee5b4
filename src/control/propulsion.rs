use super::flight_state::FlightState;
use crate::constants::{AMBIENT_ENGINE_TEMPERATURE, ENGINE_HEAT_RANGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePhase {
    Powered,
    Flameout,
}

/// Burns fuel for one tick and keeps `mass` consistent with it.
///
/// Running dry latches the engine off: thrust is zeroed and stays zeroed for
/// every later tick. Returns `true` only on the tick the tank runs dry.
pub fn update(state: &mut FlightState, delta_time: f64) -> bool {
    let mut flamed_out = false;
    if state.thrust > 0.0 && state.fuel_mass > 0.0 {
        let fuel_used = state.fuel_consumption_rate * delta_time;
        state.fuel_mass = (state.fuel_mass - fuel_used).max(0.0);
        state.recompute_mass();

        if state.fuel_mass <= 0.0 {
            state.thrust = 0.0;
            flamed_out = true;
        }
    } else {
        state.recompute_mass();
        if state.fuel_mass <= 0.0 {
            state.thrust = 0.0;
        }
    }

    state.engine_temperature = engine_temperature(state.thrust, state.max_thrust);
    flamed_out
}

/// Linear heat proxy in Kelvin: ambient at idle, +2000 K at full thrust.
pub fn engine_temperature(thrust: f64, max_thrust: f64) -> f64 {
    if max_thrust > 0.0 {
        AMBIENT_ENGINE_TEMPERATURE + (thrust / max_thrust) * ENGINE_HEAT_RANGE
    } else {
        AMBIENT_ENGINE_TEMPERATURE
    }
}

pub fn engine_phase(state: &FlightState) -> EnginePhase {
    if state.fuel_mass > 0.0 {
        EnginePhase::Powered
    } else {
        EnginePhase::Flameout
    }
}
