use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, Table};

use fpmeter::cli::{parse_args, Commands, OutputFormat};
use fpmeter::config::EstimationConfig;
use fpmeter::io::input::load_snapshot;
use fpmeter::io::output::create_writer;
use fpmeter::pipeline::{calculate, calculate_batch};
use fpmeter::reuse::ReuseLevel;
use fpmeter::vaf::GscFactor;

fn main() -> Result<()> {
    env_logger::init();
    let cli = parse_args();

    match cli.command {
        Commands::Calc {
            input,
            format,
            output,
            reuse,
            default_vaf,
            config,
        } => handle_calc(&input, format, output, reuse, default_vaf, config),
        Commands::Batch {
            inputs,
            format,
            output,
            config,
        } => handle_batch(&inputs, format, output, config),
        Commands::Factors => handle_factors(),
    }
}

fn handle_calc(
    input: &Path,
    format: OutputFormat,
    output: Option<PathBuf>,
    reuse: Option<String>,
    default_vaf: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    if default_vaf {
        config.default_vaf_on_invalid = true;
    }

    let mut snapshot = load_snapshot(input)
        .with_context(|| format!("failed to load snapshot {}", input.display()))?;
    if let Some(reuse) = reuse {
        snapshot.reuse_level = Some(reuse.parse::<ReuseLevel>()?);
    }

    let result = calculate(&snapshot, &config)?;
    let mut writer = create_writer(format.into(), output_sink(output.as_deref())?);
    writer.write_result(&result)?;
    Ok(())
}

fn handle_batch(
    inputs: &[PathBuf],
    format: OutputFormat,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(config_path)?;

    let snapshots = inputs
        .iter()
        .map(|path| {
            load_snapshot(path).with_context(|| format!("failed to load snapshot {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    let outcomes = calculate_batch(&snapshots, &config);
    let mut writer = create_writer(format.into(), output_sink(output.as_deref())?);
    for (path, outcome) in inputs.iter().zip(outcomes) {
        match outcome {
            Ok(result) => writer.write_result(&result)?,
            Err(e) => log::error!("calculation for {} aborted: {e}", path.display()),
        }
    }
    Ok(())
}

fn handle_factors() -> Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Id", "Name", "Description"]);
    for factor in GscFactor::ALL {
        table.add_row(vec![factor.id(), factor.name(), factor.description()]);
    }
    println!("{table}");
    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<EstimationConfig> {
    match path {
        Some(path) => EstimationConfig::load_from(&path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(EstimationConfig::load()),
    }
}

fn output_sink(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}
