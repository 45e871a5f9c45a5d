use std::{fs, path::Path};

use anyhow::Context;
use chart_schema::{ChartFile, PlayResult};
use serde::de::DeserializeOwned;

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {what}: {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("failed to parse {what} json: {}", path.display()))
}

pub fn load_chart_json_from_path(path: impl AsRef<Path>) -> anyhow::Result<ChartFile> {
    read_json(path.as_ref(), "chart")
}

pub fn load_chart_json_from_str(json: &str) -> anyhow::Result<ChartFile> {
    serde_json::from_str(json).context("failed to parse chart json")
}

pub fn save_result_json(path: impl AsRef<Path>, result: &PlayResult) -> anyhow::Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(result).context("failed to serialize result")?;
    fs::write(path, json).with_context(|| format!("failed to write result: {}", path.display()))
}

pub fn load_result_json(path: impl AsRef<Path>) -> anyhow::Result<PlayResult> {
    read_json(path.as_ref(), "result")
}
