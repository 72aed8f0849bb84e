use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;

use crate::analysis::metrics::ImpactAssessment;
use crate::config::parameter::Parameter;
use crate::core::simulation::SimulationInputs;
use crate::core::sweep::SweepRow;
use crate::utils::logging::{self, FileIOType, OperationCategory};

/// Writes run data into a timestamped subdirectory of the output directory.
pub struct CsvExporter {
    output_dir: PathBuf,
}

impl CsvExporter {
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let full_path = output_dir.as_ref().join(timestamp);
        std::fs::create_dir_all(&full_path)
            .with_context(|| format!("Failed to create output directory {}", full_path.display()))?;
        Ok(Self { output_dir: full_path })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Exports the scenario parameters and the baseline comparison of a
    /// single run as `resumen.csv`.
    pub fn export_run_summary(
        &self,
        inputs: &SimulationInputs,
        assessment: &ImpactAssessment,
    ) -> Result<PathBuf> {
        let _timing = logging::start_timing(
            "export_run_summary",
            OperationCategory::FileIO { subcategory: FileIOType::CsvExport },
        );

        let path = self.output_dir.join("resumen.csv");
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;

        writer.write_record(["seccion", "campo", "valor", "linea_base", "delta", "unidad"])?;

        let parameters = [
            ("volumen_total", inputs.total_volume, "ton/año"),
            ("tasa_recuperacion", inputs.recovery_rate, "fracción"),
            ("factor_emision", inputs.emission_factor, "tCO2e/ton"),
            ("factor_sustitucion", inputs.substitution_factor, "fracción"),
            ("precio_mercado", inputs.market_price, "USD/ton"),
        ];
        for (field, value, unit) in parameters {
            let value = value.to_string();
            writer.write_record(["parametros", field, value.as_str(), "", "", unit])?;
        }

        let metrics = [
            ("material_valorizado", assessment.valorized_material, "ton/año"),
            ("gei_evitado", assessment.avoided_emissions, "tCO2e/año"),
            ("antioxidantes_sustituidos", assessment.substituted_antioxidants, "ton/año"),
            ("ingresos_estimados", assessment.estimated_revenue, "USD/año"),
        ];
        for (field, metric, unit) in metrics {
            let current = metric.current.to_string();
            let baseline = metric.baseline.to_string();
            let delta = metric.delta().to_string();
            writer.write_record([
                "resultados",
                field,
                current.as_str(),
                baseline.as_str(),
                delta.as_str(),
                unit,
            ])?;
        }

        let trained = assessment.trained_people.to_string();
        writer.write_record([
            "indicadores",
            "personas_capacitadas",
            trained.as_str(),
            "",
            "",
            "personas",
        ])?;
        let symbiosis = assessment.industrial_symbiosis.to_string();
        writer.write_record([
            "indicadores",
            "simbiosis_industrial",
            symbiosis.as_str(),
            "",
            "",
            "interacciones",
        ])?;

        writer.flush()?;
        info!("Wrote run summary {}", path.display());
        Ok(path)
    }

    /// Exports sweep rows as `barrido_<parametro>.csv`, one row per step.
    pub fn export_sweep(&self, parameter: Parameter, rows: &[SweepRow]) -> Result<PathBuf> {
        let _timing = logging::start_timing(
            "export_sweep",
            OperationCategory::FileIO { subcategory: FileIOType::CsvExport },
        );

        let file_name = format!("barrido_{}.csv", parameter.to_string().replace('-', "_"));
        let path = self.output_dir.join(file_name);
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;

        writer.write_record([
            "parametro",
            "valor_parametro",
            "material_valorizado",
            "gei_evitado",
            "antioxidantes_sustituidos",
            "ingresos_estimados",
        ])?;

        for row in rows {
            writer.write_record([
                parameter.to_string(),
                row.parameter_value.to_string(),
                row.results.valorized_material.to_string(),
                row.results.avoided_emissions.to_string(),
                row.results.substituted_antioxidants.to_string(),
                row.results.estimated_revenue.to_string(),
            ])?;
        }

        writer.flush()?;
        info!("Wrote sweep export {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::simulation::compute;
    use crate::core::sweep::run_sweep;
    use crate::SimulationConfig;

    fn temp_exporter() -> CsvExporter {
        let dir = std::env::temp_dir().join(format!(
            "impactviz_csv_test_{}",
            std::process::id()
        ));
        CsvExporter::new(dir).expect("exporter")
    }

    #[test]
    fn run_summary_contains_all_sections() {
        let config = SimulationConfig::default();
        let inputs = config.default_inputs();
        let assessment = ImpactAssessment::new(&compute(inputs));

        let exporter = temp_exporter();
        let path = exporter
            .export_run_summary(&inputs, &assessment)
            .expect("export");

        let contents = std::fs::read_to_string(path).expect("read back");
        assert!(contents.contains("material_valorizado"));
        assert!(contents.contains("personas_capacitadas"));
        assert!(contents.contains("ingresos_estimados"));
        // 1 header + 5 parameters + 4 metrics + 2 indicators
        assert_eq!(contents.lines().count(), 12);
    }

    #[test]
    fn sweep_export_has_one_row_per_step() {
        let config = SimulationConfig::default();
        let rows = run_sweep(&config, config.default_inputs(), Parameter::MarketPrice, 7);

        let exporter = temp_exporter();
        let path = exporter
            .export_sweep(Parameter::MarketPrice, &rows)
            .expect("export");

        let contents = std::fs::read_to_string(path).expect("read back");
        assert_eq!(contents.lines().count(), 8);
        assert!(contents.starts_with("parametro,"));
    }
}
