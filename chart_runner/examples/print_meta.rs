use std::path::PathBuf;

use chart_schema::NoteType;
use clap::Parser;

#[derive(Debug, Parser)]
struct Args {
    path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let chart = chart_runner::load_chart_json_from_path(args.path)?;
    println!("title={}", chart.meta.title);
    println!("artist={}", chart.meta.artist);
    println!("duration={}", chart.meta.duration);
    println!("notes={}", chart.notes.len());
    println!("holds={}", chart.count_of(NoteType::HoldStart));
    Ok(())
}
