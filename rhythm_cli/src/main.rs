use std::{fs, path::PathBuf};

use anyhow::Context;
use chart_schema::NoteType;
use clap::{Parser, Subcommand};
use log::info;
use rhythm_core::{Chart, GameplayConfig};

mod simulate;

#[derive(Debug, Parser)]
#[command(name = "rhythm")]
#[command(about = "Rhythm chart checker and headless player", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a chart and print what it contains.
    Check { chart: PathBuf },
    /// Play a chart without audio or graphics.
    Simulate {
        chart: PathBuf,
        /// Input script (JSON list of press/release events). Autoplay when omitted.
        #[arg(long)]
        script: Option<PathBuf>,
        #[arg(long, default_value_t = 16.0)]
        frame_ms: f64,
        /// Gameplay config JSON; defaults are used for missing fields.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Where to write the play result.
        #[arg(long)]
        result: Option<PathBuf>,
        /// Only print the summary.
        #[arg(short, long)]
        quiet: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Check { chart } => {
            let file = chart_runner::load_chart_json_from_path(&chart)?;
            let loaded = Chart::from_file(&file).with_context(|| format!("invalid chart: {}", chart.display()))?;

            println!("title={}", loaded.title());
            println!("duration={}", loaded.duration());
            println!("notes={}", loaded.len());
            println!("normal={}", file.count_of(NoteType::Normal));
            println!("double={}", file.count_of(NoteType::Double));
            println!("holds={}", file.count_of(NoteType::HoldStart));
            println!("flight_time_changes={}", loaded.flight_time_changes().len());
            println!("chance_times={}", file.chance_times.len());
        }
        Command::Simulate {
            chart,
            script,
            frame_ms,
            config,
            result,
            quiet,
        } => {
            if !(frame_ms > 0.0) {
                anyhow::bail!("--frame-ms must be positive (got {frame_ms})");
            }
            let file = chart_runner::load_chart_json_from_path(&chart)?;
            let loaded = Chart::from_file(&file).with_context(|| format!("invalid chart: {}", chart.display()))?;
            let config = match config {
                Some(path) => {
                    let json = fs::read_to_string(&path)
                        .with_context(|| format!("failed to read config: {}", path.display()))?;
                    GameplayConfig::from_json_str(&json)
                        .with_context(|| format!("invalid config: {}", path.display()))?
                }
                None => GameplayConfig::default(),
            };
            let inputs = match script {
                Some(path) => simulate::load_script(&path)?,
                None => simulate::autoplay(&loaded.clone().with_default_flight_time(config.default_flight_time_s)),
            };

            let play = simulate::run(loaded, config, inputs, frame_ms, quiet);
            if let Some(path) = result {
                chart_runner::save_result_json(&path, &play)?;
                info!("result written to {}", path.display());
            }
        }
    }

    Ok(())
}
