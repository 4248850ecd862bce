//! Dashboard Data Builder CLI
//!
//! Precomputes job-listing aggregates and lean records for the
//! salary dashboard.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use dashboard_data_builder::aggregator::AggregateOptions;
use dashboard_data_builder::commands::{
    display_schema, display_version, execute_build, validate_args, validate_dashboard_file,
    BuildArgs,
};
use dashboard_data_builder::utils::config::{
    COMPANY_TYPE_LIMIT, DEFAULT_DATA_DIR, DEFAULT_OUTPUT_DIR, FIXED_DATASET_FILE,
    FLEX_DATASET_FILE, HISTOGRAM_BINS,
};

/// Dashboard Data Builder - job-listing aggregates for the dashboard
#[derive(Parser, Debug)]
#[command(name = "build-dashboard-data")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build dashboard-data.json and records-lite.json
    Build {
        /// Directory holding the input CSVs
        #[arg(short, long, env = "DASHBOARD_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
        data_dir: PathBuf,

        /// Directory receiving the JSON output
        #[arg(short, long, env = "DASHBOARD_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,

        /// Fixed-salary dataset file name
        #[arg(long, default_value = FIXED_DATASET_FILE)]
        fixed_file: String,

        /// Flexible-work dataset file name
        #[arg(long, default_value = FLEX_DATASET_FILE)]
        flex_file: String,

        /// Number of salary histogram bins
        #[arg(long, default_value_t = HISTOGRAM_BINS)]
        bins: usize,

        /// Number of company types to keep
        #[arg(long, default_value_t = COMPANY_TYPE_LIMIT)]
        company_type_limit: usize,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a dashboard-data.json file
    Validate {
        /// Path to dashboard JSON file
        #[arg(short, long)]
        file: PathBuf,

        /// Company type limit the file was built with
        #[arg(long, default_value_t = COMPANY_TYPE_LIMIT)]
        company_type_limit: usize,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Build {
            data_dir,
            output_dir,
            fixed_file,
            flex_file,
            bins,
            company_type_limit,
            summary,
        } => {
            let args = BuildArgs {
                data_dir,
                output_dir,
                fixed_file,
                flex_file,
                options: AggregateOptions {
                    histogram_bins: bins,
                    company_type_limit,
                },
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_build(&args)?;
        }

        Commands::Validate {
            file,
            company_type_limit,
        } => {
            validate_dashboard_file(&file, company_type_limit)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
