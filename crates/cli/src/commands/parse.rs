use anyhow::{Context, Result};
use studymate_core::parse_summary;

pub(crate) fn run(file: &str) -> Result<()> {
    let raw = if file == "-" {
        super::read_input(file)?
    } else {
        std::fs::read_to_string(file).with_context(|| format!("failed to read {file}"))?
    };
    println!("{}", serde_json::to_string_pretty(&parse_summary(&raw))?);
    Ok(())
}
