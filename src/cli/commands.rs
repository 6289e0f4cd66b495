use std::path::PathBuf;

use validator::Validate;

use crate::analyzers::EmissionAnalyzer;
use crate::cli::args::{Cli, Commands};
use crate::error::{ProcessingError, Result};
use crate::processors::EmissionIngestor;
use crate::utils::constants::DEFAULT_OUTPUT_STEM;
use crate::utils::progress::ProgressReporter;
use crate::writers::{OutputFormat, SummaryWriter};

pub async fn run(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    match cli.command {
        Commands::Aggregate {
            input_file,
            output_file,
            format,
            area,
            validate_only,
            mmap,
        } => {
            let format = OutputFormat::parse(&format)?;
            let output_file = output_file.unwrap_or_else(|| {
                PathBuf::from(format!("{}.{}", DEFAULT_OUTPUT_STEM, format.extension()))
            });

            println!("Aggregating emission survey data...");
            println!("Input file: {}", input_file.display());

            let progress = ProgressReporter::new_spinner("Ingesting data...", false);

            let ingestor = EmissionIngestor::with_mmap(mmap);
            let (summaries, report) = ingestor.ingest_file(&input_file)?;

            progress.finish_with_message(&format!(
                "Aggregated {} rows into {} areas",
                report.rows_grouped,
                summaries.len()
            ));

            println!("\n{}", report.generate_summary());

            if validate_only {
                println!("Validation complete - no output file written");
                return Ok(());
            }

            // Filter to a single area if requested
            let filtered_summaries = if let Some(ref key) = area {
                let filtered: Vec<_> = summaries
                    .into_iter()
                    .filter(|s| s.area.eq_ignore_ascii_case(key))
                    .collect();

                if filtered.is_empty() {
                    return Err(ProcessingError::EmptyResult(format!(
                        "no summary for area '{}'",
                        key
                    )));
                }
                filtered
            } else {
                summaries
            };

            println!(
                "\nWriting {} summaries to {}...",
                filtered_summaries.len(),
                output_file.display()
            );

            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }

            SummaryWriter::new().write(&filtered_summaries, &output_file, format)?;

            println!("Aggregation complete!");
        }

        Commands::Validate { input_file } => {
            println!("Validating emission survey data...");
            println!("Input file: {}", input_file.display());

            let progress = ProgressReporter::new_spinner("Validating data...", false);

            let ingestor = EmissionIngestor::new();
            let (summaries, report) = ingestor.ingest_file(&input_file)?;

            progress.finish_with_message("Validation complete");

            println!("\n{}", report.generate_summary());

            let mut violations = 0;
            for summary in &summaries {
                if let Err(errors) = summary.validate() {
                    violations += 1;
                    println!("Area '{}': {}", summary.area, errors);
                }
            }

            if violations == 0 && !report.has_data_quality_issues() {
                println!("All data passed validation checks");
            } else {
                println!(
                    "Found {} summary violations, {} dropped rows, {} coerced fields",
                    violations, report.rows_skipped_no_area, report.coerced_numeric_fields
                );
            }
        }

        Commands::Info { input_file, sample } => {
            println!("Analyzing emission survey data: {}", input_file.display());

            let ingestor = EmissionIngestor::new();
            let (summaries, _report) = ingestor.ingest_file(&input_file)?;

            let analyzer = EmissionAnalyzer::new();
            let stats = analyzer.analyze(&summaries)?;
            println!("\n{}", stats.summary());

            if sample > 0 {
                println!("\nSample summaries:");
                for summary in summaries.iter().take(sample) {
                    println!(
                        "  {} ({}): avg {:.1} kg/month, total {:.1} kg, {} rows",
                        summary.area, summary.city, summary.avg_co2, summary.total_co2,
                        summary.count
                    );
                }
            }
        }
    }

    Ok(())
}
