pub mod convert;
pub mod cut;
pub mod info;
pub mod quantize;
pub mod speed;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::Context;
use castedit_cast_model::{decode, Recording};
use castedit_transformer::{open_input, Summary, Transformation, Transformer, Validated};

/// Run `transformation` from `input` to `output`, validating first when
/// `strict` is set.
pub fn transform<T: Transformation>(
    transformation: T,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    strict: bool,
) -> anyhow::Result<()> {
    let name = transformation.name().to_string();
    let result = if strict {
        pipeline(Validated::new(transformation), input.as_deref(), output.as_deref())
    } else {
        pipeline(transformation, input.as_deref(), output.as_deref())
    };
    let summary =
        result.with_context(|| format!("{name} failed for {}", describe(input.as_deref())))?;

    tracing::info!(
        transformation = %name,
        strict,
        events_before = summary.events_before,
        events_after = summary.events_after,
        duration_before = summary.duration_before,
        duration_after = summary.duration_after,
        "done"
    );
    Ok(())
}

fn pipeline<T: Transformation>(
    transformation: T,
    input: Option<&Path>,
    output: Option<&Path>,
) -> anyhow::Result<Summary> {
    let transformer = Transformer::new(transformation, input, output)?;
    Ok(transformer.transform()?)
}

/// Decode a whole cast from a file or stdin.
pub fn load(input: Option<&Path>) -> anyhow::Result<Recording> {
    let reader = open_input(input)?;
    decode(reader).with_context(|| format!("failed to decode {}", describe(input)))
}

/// Human label for an optional input path.
pub fn describe(path: Option<&Path>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "<stdin>".to_string(),
    }
}
