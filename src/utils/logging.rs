use lazy_static::lazy_static;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::Level;
use tracing_subscriber::{prelude::*, EnvFilter};

// Categories for the timing report
#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum OperationCategory {
    Simulation,
    ChartRender,
    FileIO { subcategory: FileIOType },
    AssetFetch,
    Other,
}

#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum FileIOType {
    ScenarioLoad,
    CsvExport,
    Other,
}

impl OperationCategory {
    pub fn as_str(&self) -> String {
        match self {
            OperationCategory::Simulation => "Simulation".to_string(),
            OperationCategory::ChartRender => "Chart Render".to_string(),
            OperationCategory::FileIO { subcategory } => {
                format!(
                    "File I/O - {}",
                    match subcategory {
                        FileIOType::ScenarioLoad => "Scenario Load",
                        FileIOType::CsvExport => "CSV Export",
                        FileIOType::Other => "Other",
                    }
                )
            }
            OperationCategory::AssetFetch => "Asset Fetch".to_string(),
            OperationCategory::Other => "Other Operations".to_string(),
        }
    }
}

lazy_static! {
    static ref TIMING_ENABLED: AtomicBool = AtomicBool::new(false);
    static ref FUNCTION_TIMINGS: Arc<RwLock<HashMap<String, (Duration, usize)>>> =
        Arc::new(RwLock::new(HashMap::new()));
    static ref CATEGORY_TIMINGS: Arc<RwLock<HashMap<OperationCategory, (Duration, usize)>>> =
        Arc::new(RwLock::new(HashMap::new()));
}

pub struct TimingGuard {
    function_name: String,
    category: OperationCategory,
    start: Instant,
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        record_timing_end(&self.function_name, self.start.elapsed(), &self.category);
    }
}

pub fn start_timing(function_name: &str, category: OperationCategory) -> TimingGuard {
    TimingGuard {
        function_name: function_name.to_string(),
        category,
        start: Instant::now(),
    }
}

fn record_timing_end(function_name: &str, duration: Duration, category: &OperationCategory) {
    if !is_timing_enabled() {
        return;
    }

    {
        let mut timings = FUNCTION_TIMINGS.write();
        let entry = timings
            .entry(function_name.to_string())
            .or_insert((Duration::ZERO, 0));
        entry.0 += duration;
        entry.1 += 1;
    }

    {
        let mut timings = CATEGORY_TIMINGS.write();
        let entry = timings
            .entry(category.clone())
            .or_insert((Duration::ZERO, 0));
        entry.0 += duration;
        entry.1 += 1;
    }
}

pub fn init_logging(enable_timing: bool, debug_logging: bool) {
    TIMING_ENABLED.store(enable_timing, Ordering::SeqCst);

    let default_level = if debug_logging { Level::DEBUG } else { Level::INFO };
    let mut env_filter = EnvFilter::from_default_env().add_directive(default_level.into());
    if let Ok(directive) = "impactviz=debug".parse() {
        if debug_logging {
            env_filter = env_filter.add_directive(directive);
        }
    }

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty());

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set up tracing subscriber");
}

pub fn is_timing_enabled() -> bool {
    TIMING_ENABLED.load(Ordering::SeqCst)
}

pub fn print_timing_report() {
    if !is_timing_enabled() {
        return;
    }

    println!("\nDetailed Performance Report");
    println!("==========================");

    println!("\nTiming by Function:");
    println!("-------------------");
    let function_timings = FUNCTION_TIMINGS.read();
    let mut entries: Vec<_> = function_timings.iter().collect();
    entries.sort_by(|a, b| b.1 .0.cmp(&a.1 .0));

    for (function_name, (total_duration, count)) in entries {
        let avg = total_duration.div_f64(*count as f64);
        println!(
            "{}: total={:.2}ms, count={}, avg={:.2}ms",
            function_name,
            total_duration.as_secs_f64() * 1000.0,
            count,
            avg.as_secs_f64() * 1000.0,
        );
    }

    println!("\nTiming by Category:");
    println!("-------------------");
    let category_timings = CATEGORY_TIMINGS.read();
    let mut entries: Vec<_> = category_timings.iter().collect();
    entries.sort_by(|a, b| b.1 .0.cmp(&a.1 .0));

    let total: Duration = entries.iter().map(|(_, (d, _))| *d).sum();
    for (category, (duration, count)) in entries {
        let percentage = if total.is_zero() {
            0.0
        } else {
            duration.as_secs_f64() / total.as_secs_f64() * 100.0
        };
        println!(
            "{}: {:.1}% of total time, total={:.2}ms, count={}",
            category.as_str(),
            percentage,
            duration.as_secs_f64() * 1000.0,
            count,
        );
    }

    println!("==========================\n");
}
