use anyhow::Context;
use clap::Parser;
use numform::config::{CliConfig, Strategy};
use numform::core::{render, ClassifyEngine, ClassifyReport, OutputFormat};
use numform::utils::{logger, validation::Validate};
use numform::{ParseAttemptClassifier, PatternMatchClassifier};
use std::fs;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting numform CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let inputs = gather_inputs(&config)?;
    tracing::info!(
        "Classifying {} inputs with {:?} strategy",
        inputs.len(),
        config.strategy
    );

    let report = match config.strategy {
        Strategy::ParseAttempt => ClassifyEngine::new(ParseAttemptClassifier::new()).run(inputs),
        Strategy::PatternMatch => ClassifyEngine::new(PatternMatchClassifier::new()).run(inputs),
    };

    write_output(&config, &report)?;

    tracing::info!(
        "✅ Classification completed: {} roman, {} arabic",
        report.roman_count,
        report.arabic_count
    );
    if let Some(path) = &config.output_path {
        println!("✅ Classification completed successfully!");
        println!("📁 Output saved to: {}", path);
    }

    Ok(())
}

fn gather_inputs(config: &CliConfig) -> anyhow::Result<Vec<String>> {
    if !config.inputs.is_empty() {
        return Ok(config.inputs.clone());
    }

    match &config.input_file {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path))?;
            Ok(content.lines().map(str::to_string).collect())
        }
        // validate() already rejected this combination
        None => Ok(Vec::new()),
    }
}

fn write_output(config: &CliConfig, report: &ClassifyReport) -> anyhow::Result<()> {
    let format: OutputFormat = config.format.into();

    match &config.output_path {
        Some(path) => {
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            render::write_report(&mut file, report, format)?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            render::write_report(&mut handle, report, format)?;
            handle.flush()?;
        }
    }

    Ok(())
}
