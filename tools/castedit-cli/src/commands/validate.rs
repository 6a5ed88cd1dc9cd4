//! Check a cast for structural errors.

use std::path::PathBuf;

use castedit_cast_model::validate;

pub fn run(input: Option<PathBuf>) -> anyhow::Result<()> {
    let label = super::describe(input.as_deref());
    let recording = super::load(input.as_deref())?;

    match validate(&recording) {
        Ok(()) => {
            println!("{label}: valid ({} events)", recording.len());
            Ok(())
        }
        Err(e) => {
            println!("{label}: invalid");
            println!("  - {e}");
            Err(anyhow::Error::new(e).context(format!("{label} is not a valid cast")))
        }
    }
}
