use clap::Parser;

use crate::config::parameter::Parameter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(long, help = "Volumen total disponible (ton/año)")]
    total_volume: Option<f64>,

    #[arg(long, help = "Tasa de recuperación (fracción, 0.10-0.50)")]
    recovery_rate: Option<f64>,

    #[arg(long, help = "Factor de emisión (tCO2e/ton)")]
    emission_factor: Option<f64>,

    #[arg(long, help = "Factor de sustitución (fracción, 0.10-0.50)")]
    substitution_factor: Option<f64>,

    #[arg(long, help = "Precio de mercado (USD/ton)")]
    market_price: Option<f64>,

    #[arg(short, long, help = "Named scenario preset to start from")]
    scenario: Option<String>,

    #[arg(long, default_value = "assets/scenarios.json")]
    scenarios_file: String,

    #[arg(long, default_value_t = false, help = "List available scenario presets and exit")]
    list_scenarios: bool,

    #[arg(short, long, default_value = "output")]
    output_dir: String,

    #[arg(long, default_value_t = false, help = "Skip PNG chart rendering")]
    no_charts: bool,

    #[arg(long, default_value_t = false, help = "Export run data as CSV")]
    export_csv: bool,

    #[arg(long, default_value_t = false, help = "Fetch partner logos (failures are non-fatal)")]
    fetch_logos: bool,

    #[arg(long, help = "Sweep one parameter across its range instead of a single run")]
    sweep: Option<Parameter>,

    #[arg(long, default_value_t = 11, help = "Number of sweep steps, endpoints included")]
    sweep_steps: usize,

    #[arg(long, default_value_t = false)]
    enable_timing: bool,

    #[arg(long, default_value_t = false)]
    debug_logging: bool,
}

// Getter methods for all fields
impl Args {
    pub fn total_volume(&self) -> Option<f64> {
        self.total_volume
    }

    pub fn recovery_rate(&self) -> Option<f64> {
        self.recovery_rate
    }

    pub fn emission_factor(&self) -> Option<f64> {
        self.emission_factor
    }

    pub fn substitution_factor(&self) -> Option<f64> {
        self.substitution_factor
    }

    pub fn market_price(&self) -> Option<f64> {
        self.market_price
    }

    pub fn scenario(&self) -> Option<&str> {
        self.scenario.as_deref()
    }

    pub fn scenarios_file(&self) -> &str {
        &self.scenarios_file
    }

    pub fn list_scenarios(&self) -> bool {
        self.list_scenarios
    }

    pub fn output_dir(&self) -> &str {
        &self.output_dir
    }

    pub fn no_charts(&self) -> bool {
        self.no_charts
    }

    pub fn export_csv(&self) -> bool {
        self.export_csv
    }

    pub fn fetch_logos(&self) -> bool {
        self.fetch_logos
    }

    pub fn sweep(&self) -> Option<Parameter> {
        self.sweep
    }

    pub fn sweep_steps(&self) -> usize {
        self.sweep_steps
    }

    pub fn enable_timing(&self) -> bool {
        self.enable_timing
    }

    pub fn debug_logging(&self) -> bool {
        self.debug_logging
    }
}
