//! Build command implementation.
//!
//! The build command:
//! 1. Loads the fixed dataset
//! 2. Loads the flex dataset
//! 3. Concatenates both into one dataset
//! 4. Aggregates the dashboard views
//! 5. Extracts lean records and renders both documents
//! 6. Writes output files

use super::models::BuildArgs;
use crate::aggregator::build_dashboard;
use crate::output::{extract_lite_records, render_dashboard, render_records, write_atomic};
use crate::parser::{load_dataset, Dataset, WorkMode};
use crate::utils::config::{MAX_HISTOGRAM_BINS, RECORDS_FILE};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the build command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Number of lean records written
///
/// # Errors
/// * Missing input files or columns
/// * Malformed CSV records
/// * Empty input
/// * File write errors
pub fn execute_build(args: &BuildArgs) -> Result<usize> {
    let start_time = Instant::now();

    info!("Building dashboard data from: {}", args.data_dir.display());

    // Step 1: Load fixed dataset
    info!("Step 1/6: Loading fixed-salary listings...");
    let fixed_path = args.fixed_path();
    let fixed = load_dataset(&fixed_path, WorkMode::Fixed)
        .with_context(|| format!("Failed to load {}", fixed_path.display()))?;

    // Step 2: Load flex dataset
    info!("Step 2/6: Loading flexible-work listings...");
    let flex_path = args.flex_path();
    let flex = load_dataset(&flex_path, WorkMode::Flex)
        .with_context(|| format!("Failed to load {}", flex_path.display()))?;

    // Step 3: Concatenate
    info!("Step 3/6: Concatenating datasets...");
    let dataset = Dataset::concat(fixed, flex);

    if dataset.is_empty() {
        anyhow::bail!("No job listings found in either dataset");
    }

    debug!(
        "Dataset: {} rows ({} fixed, {} flex)",
        dataset.len(),
        dataset.count_mode(WorkMode::Fixed),
        dataset.count_mode(WorkMode::Flex)
    );

    // Step 4: Aggregate
    info!("Step 4/6: Aggregating dashboard views...");
    let dashboard = build_dashboard(&dataset, &args.options);
    info!("Summary: {}", dashboard.summary.describe());

    // Step 5: Render both documents before touching the filesystem
    info!("Step 5/6: Rendering JSON documents...");
    let records = extract_lite_records(&dataset);
    let dashboard_json = render_dashboard(&dashboard).context("Failed to render dashboard JSON")?;
    let records_json = render_records(&records).context("Failed to render records JSON")?;

    // Step 6: Write outputs
    info!("Step 6/6: Writing output files...");

    let dashboard_path = args.dashboard_path();
    write_atomic(&dashboard_json, &dashboard_path)
        .context("Failed to write dashboard JSON")?;
    info!("✓ Dashboard written to: {}", dashboard_path.display());

    let records_path = args.records_path();
    write_atomic(&records_json, &records_path).context("Failed to write records JSON")?;
    info!("✓ Records written to: {}", records_path.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("DASHBOARD SUMMARY");
        println!("{}", "=".repeat(80));
        println!("{}", dashboard.summary.describe());
        println!("\nTop provinces:");
        for (i, p) in dashboard.province.iter().take(10).enumerate() {
            println!(
                "  {:>2}. {:<16} {:>8} jobs  mean {:>10.0}  p90 {:>10.0}",
                i + 1,
                p.province,
                p.job_count,
                p.salary_mean,
                p.salary_p90
            );
        }
        println!("{}", "=".repeat(80));
    }

    println!("Saved {} rows to {}", records.len(), RECORDS_FILE);

    let elapsed = start_time.elapsed();
    info!("Build completed in {:.2}s", elapsed.as_secs_f64());

    Ok(records.len())
}

/// Validate build arguments
///
/// **Public** - can be called before execute_build for early validation
pub fn validate_args(args: &BuildArgs) -> Result<()> {
    if args.data_dir.as_os_str().is_empty() {
        anyhow::bail!("Data directory cannot be empty");
    }

    if args.output_dir.as_os_str().is_empty() {
        anyhow::bail!("Output directory cannot be empty");
    }

    if args.fixed_file.is_empty() || args.flex_file.is_empty() {
        anyhow::bail!("Dataset file names cannot be empty");
    }

    if args.options.histogram_bins == 0 {
        anyhow::bail!("bins must be greater than 0");
    }

    if args.options.histogram_bins > MAX_HISTOGRAM_BINS {
        anyhow::bail!("bins is too large (max {})", MAX_HISTOGRAM_BINS);
    }

    if args.options.company_type_limit == 0 {
        anyhow::bail!("company_type_limit must be greater than 0");
    }

    Ok(())
}
