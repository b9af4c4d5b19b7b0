use anyhow::Context;
use clap::Parser;
use growth_check::adapters::batch::run_batch_files;
use growth_check::utils::logger::{self, LogFormat};
use growth_check::GrowthEngine;

#[derive(Parser)]
#[command(name = "batch-check")]
#[command(about = "Evaluate every row of a CSV file of measurements")]
struct BatchArgs {
    /// CSV with header age,sex,current_height,father_height,mother_height
    #[arg(short, long)]
    input: String,

    /// Where to write the evaluated CSV
    #[arg(short, long, default_value = "growth-results.csv")]
    output: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = BatchArgs::parse();

    logger::init_logger(LogFormat::Compact, args.verbose);
    tracing::info!("🚀 Starting batch evaluation of {}", args.input);

    let summary = run_batch_files(&GrowthEngine::new(), &args.input, &args.output)
        .with_context(|| format!("batch evaluation of '{}' failed", args.input))?;

    println!(
        "✅ {} rows processed ({} evaluated, {} rejected)",
        summary.total, summary.evaluated, summary.rejected
    );
    println!("📁 Output saved to: {}", args.output);

    Ok(())
}
