//! Convert an asciicast v1 recording to v2.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use castedit_transformer::{convert_v1, open_input, open_output};

pub fn run(input: Option<PathBuf>, output: Option<PathBuf>) -> anyhow::Result<()> {
    let label = super::describe(input.as_deref());
    let reader = open_input(input.as_deref())?;
    let mut writer = open_output(output.as_deref())?;

    let summary = convert_v1(reader, &mut writer)
        .with_context(|| format!("failed to convert {label}"))?;
    writer.flush().context("failed to flush converted cast")?;

    tracing::info!(
        frames = summary.events_before,
        events = summary.events_after,
        declared_duration = summary.duration_before,
        duration = summary.duration_after,
        "converted"
    );
    Ok(())
}
