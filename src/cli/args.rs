use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::constants::EMISSIONS_FILE;

#[derive(Parser)]
#[command(name = "carbon-processor")]
#[command(about = "Carbon emission survey data processor")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate survey rows into per-area emission summaries
    Aggregate {
        #[arg(
            short,
            long,
            default_value = EMISSIONS_FILE,
            help = "Input survey CSV file"
        )]
        input_file: PathBuf,

        #[arg(
            short,
            long,
            help = "Output file path [default: area-summaries.{csv|json}]"
        )]
        output_file: Option<PathBuf>,

        #[arg(short, long, default_value = "csv", help = "Output format (csv or json)")]
        format: String,

        #[arg(short, long, help = "Only emit the summary for this area")]
        area: Option<String>,

        #[arg(long, default_value = "false", help = "Aggregate without writing output")]
        validate_only: bool,

        #[arg(long, default_value = "false", help = "Memory-map the input file")]
        mmap: bool,
    },

    /// Validate survey data and report quality issues without writing output
    Validate {
        #[arg(
            short,
            long,
            default_value = EMISSIONS_FILE,
            help = "Input survey CSV file"
        )]
        input_file: PathBuf,
    },

    /// Aggregate and display dataset-level statistics
    Info {
        #[arg(
            short,
            long,
            default_value = EMISSIONS_FILE,
            help = "Input survey CSV file"
        )]
        input_file: PathBuf,

        #[arg(short, long, default_value = "10", help = "Number of summaries to print")]
        sample: usize,
    },
}
