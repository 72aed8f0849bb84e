use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::info;

use crate::analysis::metrics::fmt_thousands;
use crate::config::constants::{
    CHART_HEADROOM_FACTOR, CHART_HEIGHT, CHART_WIDTH, COLOR_DARK_BLUE, COLOR_DARK_TEAL,
    COLOR_LIGHT_BLUE, COLOR_VIBRANT_GREEN, EMISSIONS_AXIS_FLOOR, MATERIAL_AXIS_FLOOR,
    REVENUE_AXIS_FLOOR,
};
use crate::core::simulation::SimulationResults;
use crate::utils::logging::{self, OperationCategory};

const BASELINE_LABEL: &str = "Línea Base";
const PROJECTION_LABEL: &str = "Proyección Actual";

/// One baseline-vs-projection comparison chart.
pub struct ChartSpec {
    pub title: &'static str,
    pub y_desc: &'static str,
    pub file_stem: &'static str,
    pub baseline: f64,
    pub current: f64,
    pub axis_floor: f64,
    pub baseline_color: (u8, u8, u8),
    pub projection_color: (u8, u8, u8),
    pub currency: bool,
}

impl ChartSpec {
    fn bar_label(&self, value: f64) -> String {
        if self.currency {
            format!("${}", fmt_thousands(value, 0))
        } else {
            fmt_thousands(value, 2)
        }
    }
}

/// Y-axis top: headroom above the tallest bar, but never below the per-chart
/// floor so near-zero projections stay readable.
pub fn axis_top(baseline: f64, current: f64, floor: f64) -> f64 {
    (baseline.max(current) * CHART_HEADROOM_FACTOR).max(floor)
}

/// The three comparison charts of the datasheet, in display order.
pub fn chart_specs(results: &SimulationResults) -> [ChartSpec; 3] {
    let baseline = SimulationResults::baseline();
    [
        ChartSpec {
            title: "Emisiones de GEI Evitadas",
            y_desc: "tCO2e/año",
            file_stem: "GEI_Evitadas",
            baseline: baseline.avoided_emissions,
            current: results.avoided_emissions,
            axis_floor: EMISSIONS_AXIS_FLOOR,
            baseline_color: COLOR_DARK_TEAL,
            projection_color: COLOR_VIBRANT_GREEN,
            currency: false,
        },
        ChartSpec {
            title: "Material Valorizado",
            y_desc: "Toneladas/año",
            file_stem: "Material_Valorizado",
            baseline: baseline.valorized_material,
            current: results.valorized_material,
            axis_floor: MATERIAL_AXIS_FLOOR,
            baseline_color: COLOR_LIGHT_BLUE,
            projection_color: COLOR_DARK_BLUE,
            currency: false,
        },
        ChartSpec {
            title: "Ingresos Estimados",
            y_desc: "USD/año",
            file_stem: "Ingresos_Estimados",
            baseline: baseline.estimated_revenue,
            current: results.estimated_revenue,
            axis_floor: REVENUE_AXIS_FLOOR,
            baseline_color: COLOR_VIBRANT_GREEN,
            projection_color: COLOR_DARK_TEAL,
            currency: true,
        },
    ]
}

fn rgb((r, g, b): (u8, u8, u8)) -> RGBColor {
    RGBColor(r, g, b)
}

/// Renders one comparison chart as a PNG file.
pub fn render_comparison_chart(spec: &ChartSpec, path: &Path) -> Result<()> {
    let _timing = logging::start_timing("render_comparison_chart", OperationCategory::ChartRender);

    let text_color = rgb(COLOR_DARK_TEAL);
    let y_top = axis_top(spec.baseline, spec.current, spec.axis_floor);

    {
        let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(spec.title, ("sans-serif", 28).into_font().color(&text_color))
            .margin(20)
            .x_label_area_size(30)
            .y_label_area_size(80)
            .build_cartesian_2d(0.0f64..2.0, 0.0f64..y_top)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(0)
            .y_desc(spec.y_desc)
            .axis_desc_style(("sans-serif", 16).into_font().color(&text_color))
            .label_style(("sans-serif", 14).into_font().color(&text_color))
            .draw()?;

        let bars = [
            (0.2, 0.8, spec.baseline, rgb(spec.baseline_color), BASELINE_LABEL),
            (1.2, 1.8, spec.current, rgb(spec.projection_color), PROJECTION_LABEL),
        ];

        for (x0, x1, value, color, label) in bars {
            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [(x0, 0.0), (x1, value)],
                    color.filled(),
                )))?
                .label(label)
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.filled())
                });

            // Value label just above the bar, matching the source figures
            let label_style = ("sans-serif", 16)
                .into_font()
                .color(&text_color)
                .pos(Pos::new(HPos::Center, VPos::Bottom));
            chart.draw_series(std::iter::once(Text::new(
                spec.bar_label(value),
                ((x0 + x1) / 2.0, value + y_top * 0.01),
                label_style,
            )))?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .border_style(&text_color)
            .background_style(&WHITE.mix(0.8))
            .label_font(("sans-serif", 14).into_font().color(&text_color))
            .draw()?;

        root.present()?;
    }

    info!("Wrote chart {}", path.display());
    Ok(())
}

/// Renders the three comparison charts into `output_dir`. Returns the written
/// paths in display order.
pub fn render_all(results: &SimulationResults, output_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create chart directory {}", output_dir.display()))?;

    let mut written = Vec::new();
    for spec in chart_specs(results) {
        let path = output_dir.join(format!("{}.png", spec.file_stem));
        render_comparison_chart(&spec, &path)
            .with_context(|| format!("Failed to render chart '{}'", spec.title))?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::simulation::{compute, SimulationInputs};

    #[test]
    fn axis_top_applies_headroom() {
        assert!((axis_top(72.0, 100.0, 10.0) - 115.0).abs() < 1e-9);
        assert!((axis_top(100.0, 72.0, 10.0) - 115.0).abs() < 1e-9);
    }

    #[test]
    fn axis_top_respects_floor() {
        // Tiny values must not collapse the axis
        assert_eq!(axis_top(1.0, 2.0, 10.0), 10.0);
        assert_eq!(axis_top(0.0, 0.0, 5000.0), 5000.0);
    }

    #[test]
    fn specs_cover_the_three_datasheet_charts() {
        let results = compute(SimulationInputs {
            total_volume: 90.0,
            recovery_rate: 0.276,
            emission_factor: 0.8,
            substitution_factor: 0.20,
            market_price: 4000.0,
        });
        let specs = chart_specs(&results);
        assert_eq!(specs[0].file_stem, "GEI_Evitadas");
        assert_eq!(specs[1].file_stem, "Material_Valorizado");
        assert_eq!(specs[2].file_stem, "Ingresos_Estimados");
        assert!((specs[0].current - 72.0).abs() < 1e-9);
        assert!((specs[1].baseline - 24.8).abs() < 1e-9);
        assert!(specs[2].currency);
    }

    #[test]
    fn currency_and_decimal_bar_labels() {
        let results = compute(SimulationInputs {
            total_volume: 90.0,
            recovery_rate: 0.276,
            emission_factor: 0.8,
            substitution_factor: 0.20,
            market_price: 4000.0,
        });
        let specs = chart_specs(&results);
        assert_eq!(specs[0].bar_label(72.0), "72.00");
        assert_eq!(specs[2].bar_label(19_872.0), "$19,872");
    }
}
