// Module declarations for the impact visualizer

// Core simulation modules
pub mod core {
    pub mod simulation;
    pub mod sweep;
}

// Configuration modules
pub mod config {
    pub mod constants;
    pub mod parameter;
    pub mod simulation_config;
}

// Analysis and metrics
pub mod analysis {
    pub mod metrics;
    pub mod reporting;
}

// Chart rendering
pub mod charts {
    pub mod bar_chart;
}

// Data loaders
pub mod data {
    pub mod scenarios_loader;
}

// Utility functions
pub mod utils {
    pub mod assets;
    pub mod csv_export;
    pub mod logging;
}

// CLI interface
pub mod cli {
    pub mod cli;
}

// Re-export commonly used modules
pub use crate::core::simulation;
pub use crate::core::simulation::{compute, SimulationInputs, SimulationResults};
pub use crate::config::simulation_config::SimulationConfig;
