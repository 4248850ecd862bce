//! Dashboard Data Builder
//!
//! Turns the fixed-salary and flexible-work job-listing CSVs into the
//! precomputed JSON consumed by the salary dashboard.
//!
//! This crate provides the core implementation for the
//! `build-dashboard-data` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! build-dashboard-data build --data-dir data/final --output-dir assets/data
//! build-dashboard-data validate --file assets/data/dashboard-data.json
//! ```
//!
//! ## Library use
//!
//! ```ignore
//! use dashboard_data_builder::aggregator::{build_dashboard, AggregateOptions};
//! use dashboard_data_builder::parser::{load_dataset, Dataset, WorkMode};
//!
//! let fixed = load_dataset("FixedSalaryFinal.csv", WorkMode::Fixed)?;
//! let flex = load_dataset("FlexSalaryFinal.csv", WorkMode::Flex)?;
//! let dashboard = build_dashboard(&Dataset::concat(fixed, flex), &AggregateOptions::default());
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
