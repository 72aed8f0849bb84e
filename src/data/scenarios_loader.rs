use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::simulation::SimulationInputs;
use crate::utils::logging::{self, FileIOType, OperationCategory};

/// A named parameter preset loadable from the scenarios JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub inputs: SimulationInputs,
}

/// Loads scenario presets from a JSON file.
pub fn load_scenarios(path: impl AsRef<Path>) -> Result<Vec<Scenario>> {
    let _timing = logging::start_timing(
        "load_scenarios",
        OperationCategory::FileIO { subcategory: FileIOType::ScenarioLoad },
    );

    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open scenarios file {}", path.display()))?;
    let scenarios: Vec<Scenario> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse scenarios file {}", path.display()))?;

    if scenarios.is_empty() {
        bail!("Scenarios file {} contains no scenarios", path.display());
    }
    Ok(scenarios)
}

/// Built-in presets used when no scenarios file is available: the datasheet
/// default plus the two extremes of the slider ranges.
pub fn builtin_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "base".to_string(),
            description: Some("Escenario de la ficha del proyecto P2.1".to_string()),
            inputs: SimulationInputs {
                total_volume: 90.0,
                recovery_rate: 0.276,
                emission_factor: 0.8,
                substitution_factor: 0.20,
                market_price: 4000.0,
            },
        },
        Scenario {
            name: "conservador".to_string(),
            description: Some("Todos los parámetros en su mínimo".to_string()),
            inputs: SimulationInputs {
                total_volume: 50.0,
                recovery_rate: 0.10,
                emission_factor: 0.5,
                substitution_factor: 0.10,
                market_price: 1000.0,
            },
        },
        Scenario {
            name: "optimista".to_string(),
            description: Some("Todos los parámetros en su máximo".to_string()),
            inputs: SimulationInputs {
                total_volume: 200.0,
                recovery_rate: 0.50,
                emission_factor: 2.0,
                substitution_factor: 0.50,
                market_price: 10_000.0,
            },
        },
    ]
}

/// Finds a scenario by name (case-insensitive).
pub fn find_scenario<'a>(scenarios: &'a [Scenario], name: &str) -> Option<&'a Scenario> {
    scenarios
        .iter()
        .find(|scenario| scenario.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_scenarios_cover_datasheet_and_extremes() {
        let scenarios = builtin_scenarios();
        assert_eq!(scenarios.len(), 3);
        let base = find_scenario(&scenarios, "BASE").expect("base preset");
        assert_eq!(base.inputs.total_volume, 90.0);
        let optimistic = find_scenario(&scenarios, "optimista").expect("optimista preset");
        assert_eq!(optimistic.inputs.market_price, 10_000.0);
        assert!(find_scenario(&scenarios, "missing").is_none());
    }

    #[test]
    fn loads_scenarios_from_json_file() {
        let dir = std::env::temp_dir().join("impactviz_scenarios_test");
        std::fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("scenarios.json");
        let mut file = File::create(&path).expect("create file");
        write!(
            file,
            r#"[{{"name": "piloto", "inputs": {{"total_volume": 120.0,
                "recovery_rate": 0.3, "emission_factor": 1.0,
                "substitution_factor": 0.25, "market_price": 5000.0}}}}]"#
        )
        .expect("write file");

        let scenarios = load_scenarios(&path).expect("load");
        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].name, "piloto");
        assert_eq!(scenarios[0].inputs.recovery_rate, 0.3);
        assert!(scenarios[0].description.is_none());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_scenarios("does/not/exist.json").is_err());
    }
}
