use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use crate::config::constants::{LOGO_FETCH_TIMEOUT_SECS, LOGO_SOURCES};
use crate::utils::logging::{self, OperationCategory};

/// Fetches the partner logos into `output_dir`. Each failure is reported and
/// skipped; logo availability never affects the simulation or the exit
/// status. Returns the number of logos written.
pub fn fetch_logos(output_dir: &Path) -> usize {
    let _timing = logging::start_timing("fetch_logos", OperationCategory::AssetFetch);

    let client = match reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(LOGO_FETCH_TIMEOUT_SECS))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            warn!("Could not build HTTP client for logo fetch: {}", e);
            return 0;
        }
    };

    if let Err(e) = std::fs::create_dir_all(output_dir) {
        warn!(
            "Could not create logo directory {}: {}",
            output_dir.display(),
            e
        );
        return 0;
    }

    let mut fetched = 0;
    for (name, url) in LOGO_SOURCES {
        match fetch_one(&client, name, url, output_dir) {
            Ok(path) => {
                info!("Fetched logo '{}' to {}", name, path.display());
                fetched += 1;
            }
            Err(e) => {
                // Non-fatal: the report and charts stand on their own
                warn!("Error al cargar el logo '{}' desde {}: {:#}", name, url, e);
            }
        }
    }
    fetched
}

fn fetch_one(
    client: &reqwest::blocking::Client,
    name: &str,
    url: &str,
    output_dir: &Path,
) -> Result<PathBuf> {
    let response = client
        .get(url)
        .send()
        .with_context(|| format!("Request to {} failed", url))?;

    let status = response.status();
    if !status.is_success() {
        bail!("Server returned {}", status);
    }

    let bytes = response.bytes().context("Failed to read response body")?;
    if bytes.is_empty() {
        bail!("Server returned an empty body");
    }

    let path = output_dir.join(format!("{}.png", name));
    let mut file = std::fs::File::create(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all(&bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}
