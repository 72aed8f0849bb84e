use std::path::Path;

use anyhow::Result;
use clap::Parser;

use impactviz::analysis::metrics::ImpactAssessment;
use impactviz::analysis::reporting;
use impactviz::charts::bar_chart;
use impactviz::cli::cli::Args;
use impactviz::config::parameter::Parameter;
use impactviz::core::simulation::{compute, SimulationInputs};
use impactviz::core::sweep::run_sweep;
use impactviz::data::scenarios_loader::{self, Scenario};
use impactviz::utils::assets;
use impactviz::utils::csv_export::CsvExporter;
use impactviz::utils::logging;
use impactviz::SimulationConfig;

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_logging(args.enable_timing(), args.debug_logging());

    println!("Visualizador de Impactos - Proyecto P2.1");
    println!("Recuperación de Descartes Hortofrutícolas con propiedades herbicidas");

    let config = SimulationConfig::default();
    let scenarios = load_scenarios_with_fallback(args.scenarios_file());

    if args.list_scenarios() {
        print_scenario_list(&scenarios);
        return Ok(());
    }

    let inputs = resolve_inputs(&args, &config, &scenarios)?;
    let output_dir = Path::new(args.output_dir());

    if let Some(parameter) = args.sweep() {
        run_sweep_mode(&args, &config, inputs, parameter, output_dir)?;
    } else {
        run_single_mode(&args, inputs, output_dir)?;
    }

    if args.fetch_logos() {
        let logo_dir = output_dir.join("logos");
        let fetched = assets::fetch_logos(&logo_dir);
        println!(
            "\nLogos descargados: {}/{} en {}",
            fetched,
            impactviz::config::constants::LOGO_SOURCES.len(),
            logo_dir.display()
        );
    }

    logging::print_timing_report();
    Ok(())
}

/// Loads presets from the scenarios file, falling back to the built-in
/// presets when the file is missing or malformed.
fn load_scenarios_with_fallback(path: &str) -> Vec<Scenario> {
    match scenarios_loader::load_scenarios(path) {
        Ok(scenarios) => scenarios,
        Err(e) => {
            eprintln!(
                "Failed to load scenarios from {}: {:#}. Using built-in presets.",
                path, e
            );
            scenarios_loader::builtin_scenarios()
        }
    }
}

fn print_scenario_list(scenarios: &[Scenario]) {
    println!("\nEscenarios disponibles");
    println!("----------------------------------------");
    for scenario in scenarios {
        match &scenario.description {
            Some(description) => println!("  {} - {}", scenario.name, description),
            None => println!("  {}", scenario.name),
        }
    }
}

/// Builds the scenario for this run: preset (or slider defaults), then
/// per-parameter CLI overrides, all clamped to the slider ranges.
fn resolve_inputs(
    args: &Args,
    config: &SimulationConfig,
    scenarios: &[Scenario],
) -> Result<SimulationInputs> {
    let mut inputs = match args.scenario() {
        Some(name) => {
            let scenario = scenarios_loader::find_scenario(scenarios, name)
                .ok_or_else(|| anyhow::anyhow!("Unknown scenario '{}'", name))?;
            println!("Escenario base: {}", scenario.name);
            scenario.inputs
        }
        None => config.default_inputs(),
    };

    let overrides = [
        (Parameter::TotalVolume, args.total_volume()),
        (Parameter::RecoveryRate, args.recovery_rate()),
        (Parameter::EmissionFactor, args.emission_factor()),
        (Parameter::SubstitutionFactor, args.substitution_factor()),
        (Parameter::MarketPrice, args.market_price()),
    ];
    for (parameter, value) in overrides {
        if let Some(value) = value {
            config.apply(&mut inputs, parameter, value);
        }
    }

    Ok(config.clamp_inputs(inputs))
}

fn run_single_mode(args: &Args, inputs: SimulationInputs, output_dir: &Path) -> Result<()> {
    let results = compute(inputs);
    let assessment = ImpactAssessment::new(&results);

    reporting::print_scenario_parameters(&inputs);
    reporting::print_impact_report(&assessment);

    if !args.no_charts() {
        let chart_dir = output_dir.join("charts");
        let written = bar_chart::render_all(&results, &chart_dir)?;
        println!("\nGráficos exportados:");
        for path in written {
            println!("  {}", path.display());
        }
    }

    if args.export_csv() {
        let exporter = CsvExporter::new(output_dir)?;
        let path = exporter.export_run_summary(&inputs, &assessment)?;
        println!("\nResumen CSV: {}", path.display());
    }

    Ok(())
}

fn run_sweep_mode(
    args: &Args,
    config: &SimulationConfig,
    inputs: SimulationInputs,
    parameter: Parameter,
    output_dir: &Path,
) -> Result<()> {
    println!(
        "\nBarrido de {} ({} pasos, resto de parámetros fijos)",
        parameter,
        args.sweep_steps()
    );

    let rows = run_sweep(config, inputs, parameter, args.sweep_steps());

    println!("----------------------------------------");
    for row in &rows {
        println!(
            "  {} = {:.3} ({}) -> ingresos USD {:.2}, GEI evitado {:.2} tCO2e",
            parameter,
            row.parameter_value,
            parameter.unit(),
            row.results.estimated_revenue,
            row.results.avoided_emissions,
        );
    }

    // Sweeps are always exported; the table alone is hard to reuse
    let exporter = CsvExporter::new(output_dir)?;
    let path = exporter.export_sweep(parameter, &rows)?;
    println!("\nBarrido CSV: {}", path.display());

    Ok(())
}
