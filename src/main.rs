use std::fs::File;

use rocket_aero::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let csv_path = std::env::args().nth(1);

    let state = FlightState::from_config(&RocketConfig::default())?;
    let mut simulation = Simulation::new(state, Environment::default(), 42);
    let mut telemetry = Telemetry::new();

    // a short pitch-over a few seconds after ignition
    let pitch_over_start = 5.0;
    let pitch_over_end = 6.0;

    while simulation.elapsed_time() < SIMULATION_DURATION {
        if (pitch_over_start..pitch_over_end).contains(&simulation.elapsed_time()) {
            ControlInput::apply_rotation(
                &mut simulation.state,
                Axis::Pitch,
                Adjustment::Increase,
                TIME_STEP,
            );
        }

        let snapshot = simulation.tick(TIME_STEP);
        telemetry.collect_data(&snapshot, &simulation.state, simulation.delta_time(TIME_STEP));

        if simulation.state.thrust == 0.0 && snapshot.altitude <= 0.0 && snapshot.speed < 0.5 {
            println!("Rocket has come to rest on the ground. Ending simulation.");
            break;
        }
    }

    telemetry.display_data();

    if let Some(path) = csv_path {
        telemetry.write_csv(File::create(&path)?)?;
        println!("Telemetry written to {}", path);
    }

    Ok(())
}
