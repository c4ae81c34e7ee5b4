use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Initialization error: {0}")]
    InitializationError(String),

    #[error("Telemetry export error: {0}")]
    TelemetryExport(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
