use indicatif::{ProgressBar, ProgressStyle};

use crate::config::parameter::Parameter;
use crate::config::simulation_config::SimulationConfig;
use crate::core::simulation::{compute, SimulationInputs, SimulationResults};
use crate::utils::logging::{self, OperationCategory};

/// One evaluated point of a parameter sweep.
#[derive(Debug, Clone, Copy)]
pub struct SweepRow {
    pub parameter_value: f64,
    pub inputs: SimulationInputs,
    pub results: SimulationResults,
}

/// Evenly spaced values across a parameter's valid range, endpoints included.
pub fn sweep_values(config: &SimulationConfig, parameter: Parameter, steps: usize) -> Vec<f64> {
    let bounds = config.bounds(parameter);
    if steps <= 1 {
        return vec![bounds.min];
    }
    let span = bounds.max - bounds.min;
    (0..steps)
        .map(|i| bounds.min + span * (i as f64) / ((steps - 1) as f64))
        .collect()
}

/// Varies one parameter across its range while holding the rest of the
/// scenario fixed, computing the projection at each step.
pub fn run_sweep(
    config: &SimulationConfig,
    base_inputs: SimulationInputs,
    parameter: Parameter,
    steps: usize,
) -> Vec<SweepRow> {
    let _timing = logging::start_timing("run_sweep", OperationCategory::Simulation);

    let values = sweep_values(config, parameter, steps);
    let progress = ProgressBar::new(values.len() as u64);
    if let Ok(style) =
        ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        progress.set_style(style.progress_chars("#>-"));
    }
    progress.set_message(format!("sweep {}", parameter));

    let mut rows = Vec::with_capacity(values.len());
    for value in values {
        let mut inputs = base_inputs;
        config.apply(&mut inputs, parameter, value);
        rows.push(SweepRow {
            parameter_value: value,
            inputs,
            results: compute(inputs),
        });
        progress.inc(1);
    }
    progress.finish_and_clear();

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_values_span_the_range() {
        let config = SimulationConfig::default();
        let values = sweep_values(&config, Parameter::TotalVolume, 11);
        assert_eq!(values.len(), 11);
        assert!((values[0] - 50.0).abs() < 1e-9);
        assert!((values[10] - 200.0).abs() < 1e-9);
        assert!((values[5] - 125.0).abs() < 1e-9);
    }

    #[test]
    fn single_step_sweep_uses_the_minimum() {
        let config = SimulationConfig::default();
        assert_eq!(sweep_values(&config, Parameter::MarketPrice, 1), vec![1000.0]);
    }

    #[test]
    fn sweep_holds_other_parameters_fixed() {
        let config = SimulationConfig::default();
        let base = config.default_inputs();
        let rows = run_sweep(&config, base, Parameter::RecoveryRate, 5);
        assert_eq!(rows.len(), 5);
        for row in &rows {
            assert_eq!(row.inputs.total_volume, base.total_volume);
            assert_eq!(row.inputs.market_price, base.market_price);
            assert_eq!(row.inputs.recovery_rate, row.parameter_value);
        }
    }

    #[test]
    fn swept_outputs_are_monotonic() {
        let config = SimulationConfig::default();
        let base = config.default_inputs();
        for parameter in Parameter::ALL {
            let rows = run_sweep(&config, base, parameter, 9);
            // Every output is a non-negative linear product, so increasing any
            // one parameter never decreases any output.
            for window in rows.windows(2) {
                let (a, b) = (&window[0].results, &window[1].results);
                assert!(b.valorized_material >= a.valorized_material);
                assert!(b.avoided_emissions >= a.avoided_emissions);
                assert!(b.substituted_antioxidants >= a.substituted_antioxidants);
                assert!(b.estimated_revenue >= a.estimated_revenue);
            }
        }
    }
}
